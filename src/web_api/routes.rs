//! API Routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::alerta::AlertaQuery;
use crate::apiario::{CreateApiarioRequest, UpdateApiarioRequest};
use crate::auth::{AuthUser, LoginRequest, RegisterRequest};
use crate::colmeia::{ColmeiaQuery, CreateColmeiaRequest, UpdateColmeiaRequest};
use crate::error::Error;
use crate::registro::{CreateRegistroRequest, NovoRegistro, RegistroQuery, SimulateRequest};
use crate::state::AppState;

use super::stream;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(super::health_check))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Apiaries
        .route("/api/apiarios", get(list_apiarios))
        .route("/api/apiarios", post(create_apiario))
        .route("/api/apiarios/:id", put(update_apiario))
        .route("/api/apiarios/:id", delete(delete_apiario))
        // Hives
        .route("/api/colmeias", get(list_colmeias))
        .route("/api/colmeias", post(create_colmeia))
        .route("/api/colmeias/:id", put(update_colmeia))
        .route("/api/colmeias/:id", delete(delete_colmeia))
        // Records
        .route("/api/registros", get(list_registros))
        .route("/api/registros", post(create_registro))
        .route("/api/registros/simulate", post(simulate_registro))
        // Alerts
        .route("/api/alertas", get(list_alertas))
        .route("/api/alertas/:id/ack", post(acknowledge_alerta))
        .route("/api/alertas/stream", get(stream::alert_stream))
        .with_state(state)
}

// ========================================
// Auth Handlers
// ========================================

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = state.auth.register(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    let response = state.auth.login(req).await?;
    Ok(Json(response))
}

// ========================================
// Apiary Handlers
// ========================================

async fn list_apiarios(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let apiarios = state.apiarios.list(user.id).await?;
    Ok(Json(apiarios))
}

async fn create_apiario(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateApiarioRequest>,
) -> Result<impl IntoResponse, Error> {
    let apiario = state.apiarios.create(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(apiario)))
}

async fn update_apiario(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<u64>,
    Json(req): Json<UpdateApiarioRequest>,
) -> Result<impl IntoResponse, Error> {
    let apiario = state.apiarios.update(id, user.id, req).await?;
    Ok(Json(apiario))
}

async fn delete_apiario(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    state.apiarios.delete(id, user.id).await?;
    Ok(Json(json!({"ok": true})))
}

// ========================================
// Hive Handlers
// ========================================

async fn list_colmeias(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ColmeiaQuery>,
) -> Result<impl IntoResponse, Error> {
    let colmeias = state.colmeias.list(query.apiario).await?;
    Ok(Json(colmeias))
}

async fn create_colmeia(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(req): Json<CreateColmeiaRequest>,
) -> Result<impl IntoResponse, Error> {
    let colmeia = state.colmeias.create(req).await?;
    Ok((StatusCode::CREATED, Json(colmeia)))
}

async fn update_colmeia(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<u64>,
    Json(req): Json<UpdateColmeiaRequest>,
) -> Result<impl IntoResponse, Error> {
    let colmeia = state.colmeias.update(id, req).await?;
    Ok(Json(colmeia))
}

async fn delete_colmeia(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    state.colmeias.delete(id).await?;
    Ok(Json(json!({"ok": true})))
}

// ========================================
// Record Handlers
// ========================================

async fn list_registros(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<RegistroQuery>,
) -> Result<impl IntoResponse, Error> {
    let registros = state.registros.list(query.colmeia).await?;
    Ok(Json(registros))
}

async fn create_registro(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(req): Json<CreateRegistroRequest>,
) -> Result<impl IntoResponse, Error> {
    let (colmeia, tipo) = match (req.colmeia, req.tipo) {
        (Some(c), Some(t)) if !t.is_empty() => (c, t),
        _ => {
            return Err(Error::Validation(
                "colmeia e tipo são obrigatórios".to_string(),
            ))
        }
    };

    let novo = NovoRegistro {
        colmeia,
        tipo,
        valor: req.valor.unwrap_or(0.0),
        origem: req.origem.unwrap_or_else(|| "manual".to_string()),
        metadata: req.metadata.unwrap_or_else(|| json!({})),
    };

    let registro = state.registros.create(novo).await?;
    Ok((StatusCode::CREATED, Json(registro)))
}

async fn simulate_registro(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(req): Json<SimulateRequest>,
) -> Result<impl IntoResponse, Error> {
    let colmeia = req
        .colmeia
        .ok_or_else(|| Error::Validation("colmeia é obrigatória".to_string()))?;

    let registro = state.registros.simulate(colmeia).await?;
    Ok((StatusCode::CREATED, Json(registro)))
}

// ========================================
// Alert Handlers
// ========================================

async fn list_alertas(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<AlertaQuery>,
) -> Result<impl IntoResponse, Error> {
    let somente_abertos = query.aberto.as_deref() == Some("true");
    let alertas = state.alertas.list(query.colmeia, somente_abertos).await?;
    Ok(Json(alertas))
}

async fn acknowledge_alerta(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, Error> {
    let alerta = state.alertas.acknowledge(id).await?;
    Ok(Json(alerta))
}
