//! HTTP request handlers

use super::types::{
    ContactRequest, ContactResponse, ErrorResponse, HealthResponse, MessageRequest,
    MessageResponse, OptionLabel, OptionsResponse, SessionResponse, StatsResponse,
};
use super::AppState;
use crate::contact::{ContactError, ContactForm};
use crate::dialogue::labels;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};

const MISSING_MESSAGE_FIELDS: &str = "Mensagem e ID do usuário são obrigatórios";
const MESSAGE_FAILED: &str = "Erro interno do servidor. Tente novamente.";
const STATS_FAILED: &str = "Erro ao carregar estatísticas. Tente novamente.";
const SESSION_FAILED: &str = "Erro ao carregar conversa. Tente novamente.";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/chatbot/message",
            post(send_message).fallback(method_not_allowed),
        )
        .route(
            "/api/chatbot/contact",
            post(submit_contact).fallback(method_not_allowed),
        )
        .route(
            "/api/chatbot/health",
            get(health).fallback(method_not_allowed),
        )
        .route(
            "/api/chatbot/stats",
            get(get_stats).fallback(method_not_allowed),
        )
        .route(
            "/api/chatbot/session/:user_id",
            get(get_session).fallback(method_not_allowed),
        )
        .route(
            "/api/chatbot/options",
            get(list_options).fallback(method_not_allowed),
        )
        .route("/version", get(get_version))
        .with_state(state)
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================
// Chat
// ============================================================

async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected chat message body");
        AppError::BadRequest(MISSING_MESSAGE_FIELDS.to_string())
    })?;

    let (Some(message), Some(user_id)) = (
        req.message.filter(|m| !m.is_empty()),
        req.user_id.filter(|u| !u.is_empty()),
    ) else {
        return Err(AppError::BadRequest(MISSING_MESSAGE_FIELDS.to_string()));
    };

    let reply = match req.option.as_deref().filter(|o| !o.is_empty()) {
        Some(option) => state.engine.select(option, &user_id).await,
        None => state.engine.respond(&message, &user_id).await,
    }
    .map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Chatbot API error");
        AppError::Internal(MESSAGE_FAILED)
    })?;

    tracing::debug!(user_id = %user_id, topic = %reply.topic, "Reply sent");

    Ok(Json(MessageResponse {
        success: true,
        response: reply,
        timestamp: timestamp(),
    }))
}

// ============================================================
// Contact
// ============================================================

async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected contact body");
        AppError::BadRequest(ContactError::MissingFields.to_string())
    })?;

    let form = ContactForm::new(req.name, req.email, req.message)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    state.contacts.record(&form).await;

    Ok(Json(ContactResponse {
        success: true,
        message: form.acknowledgement(),
    }))
}

// ============================================================
// Service Info
// ============================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Manna Bridge Chatbot API",
        timestamp: timestamp(),
    })
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let sessions = state.engine.stats().await.map_err(|e| {
        tracing::error!(error = %e, "Stats API error");
        AppError::Internal(STATS_FAILED)
    })?;

    Ok(Json(StatsResponse {
        sessions,
        total_contacts: state.contacts.len().await,
    }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let conversation = state
        .engine
        .conversation(&user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Session API error");
            AppError::Internal(SESSION_FAILED)
        })?
        .ok_or_else(|| AppError::NotFound("Conversa não encontrada".to_string()))?;

    Ok(Json(SessionResponse { conversation }))
}

async fn list_options() -> Json<OptionsResponse> {
    let options = labels::labels()
        .iter()
        .map(|&(tag, label)| OptionLabel { tag, label })
        .collect();

    Json(OptionsResponse { options })
}

async fn get_version() -> &'static str {
    concat!("manna-bridge ", env!("CARGO_PKG_VERSION"))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed,
    /// Detail is logged where the error happens; only a generic message goes out
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
