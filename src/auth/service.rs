//! Auth service
//!
//! Registration, credential checks and token issuing/verification.

use super::repository::UserRepository;
use super::types::{
    Claims, LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, User, UserInfo,
};
use crate::error::{Error, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::MySqlPool;

/// Token lifetime
const TOKEN_TTL_HOURS: i64 = 12;

/// Auth service
pub struct AuthService {
    repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    /// Create new service
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        Self {
            repo: UserRepository::new(pool),
            jwt_secret,
        }
    }

    /// Register a new user. The e-mail must be unused.
    pub async fn register(&self, req: RegisterRequest) -> Result<RegisteredUser> {
        let (name, email, password) = match (req.name, req.email, req.password) {
            (Some(n), Some(e), Some(p)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => {
                (n, e, p)
            }
            _ => {
                return Err(Error::Validation(
                    "Nome, e-mail e senha são obrigatórios".to_string(),
                ))
            }
        };

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(Error::Validation("E-mail já cadastrado".to_string()));
        }

        let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
        let user = self.repo.insert(&name, &email, &hash).await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
        })
    }

    /// Check credentials and issue a bearer token
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let (email, password) = match (req.email, req.password) {
            (Some(e), Some(p)) => (e, p),
            _ => return Err(Error::Unauthorized("Credenciais inválidas".to_string())),
        };

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| Error::Unauthorized("Credenciais inválidas".to_string()))?;

        if !bcrypt::verify(&password, &user.password)? {
            return Err(Error::Unauthorized("Credenciais inválidas".to_string()));
        }

        let token = issue_token(&self.jwt_secret, &user)?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            token,
            user: UserInfo {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
            },
        })
    }

    /// Verify a bearer token. Any decode failure (bad signature, expiry,
    /// malformed token) is an authentication failure, not an internal one.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode_token(&self.jwt_secret, token)
    }
}

/// Sign the user's claims with a 12-hour expiry
fn issue_token(secret: &str, user: &User) -> Result<String> {
    let exp = (chrono::Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        id: user.id,
        email: user.email.clone(),
        role: user.role.clone(),
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

fn decode_token(secret: &str, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Token inválido".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 42,
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            password: String::new(),
            role: "user".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let token = issue_token("secret", &sample_user()).unwrap();
        let claims = decode_token("secret", &token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "maria@example.com");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = issue_token("secret", &sample_user()).unwrap();
        assert!(matches!(
            decode_token("other-secret", &token),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            decode_token("secret", "not.a.token"),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims {
            id: 1,
            email: "old@example.com".to_string(),
            role: "user".to_string(),
            exp: (Utc::now() - chrono::Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(
            decode_token("secret", &token),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = bcrypt::hash("colmeia123", 4).unwrap();
        assert!(bcrypt::verify("colmeia123", &hash).unwrap());
        assert!(!bcrypt::verify("errada", &hash).unwrap());
    }
}
