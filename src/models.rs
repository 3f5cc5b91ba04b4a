//! Shared request plumbing
//!
//! Types and deserializers shared across the domain modules to keep the
//! request shapes tolerant of what the existing frontends actually send.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional entity reference that may arrive as a JSON
/// number or as a numeric string (the original clients sent string ids).
///
/// `null`, an absent field and a non-numeric string all map to `None`;
/// validation of required references happens afterwards, with a clearer
/// message than a type error would give.
pub fn flexible_id<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(u64),
        Text(String),
    }

    let value = Option::<IdRepr>::deserialize(deserializer)?;
    Ok(match value {
        Some(IdRepr::Num(n)) => Some(n),
        Some(IdRepr::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "flexible_id")]
        colmeia: Option<u64>,
    }

    #[test]
    fn test_flexible_id_number() {
        let body: Body = serde_json::from_str(r#"{"colmeia": 42}"#).unwrap();
        assert_eq!(body.colmeia, Some(42));
    }

    #[test]
    fn test_flexible_id_numeric_string() {
        let body: Body = serde_json::from_str(r#"{"colmeia": " 42 "}"#).unwrap();
        assert_eq!(body.colmeia, Some(42));
    }

    #[test]
    fn test_flexible_id_garbage_string() {
        let body: Body = serde_json::from_str(r#"{"colmeia": "abc"}"#).unwrap();
        assert_eq!(body.colmeia, None);
    }

    #[test]
    fn test_flexible_id_absent_and_null() {
        let body: Body = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.colmeia, None);

        let body: Body = serde_json::from_str(r#"{"colmeia": null}"#).unwrap();
        assert_eq!(body.colmeia, None);
    }
}
