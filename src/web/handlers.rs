use actix_web::error::InternalError;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::json;

use crate::chat::presets::{table, Persona, ReplyLength, Style};
use crate::chat::{build_system_prompt, compose_response, expand_history};
use crate::web::models::{ChatRequest, ErrorResponse, ResetResponse};
use crate::AppState;

// Root endpoint
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello, Render!" }))
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
//
// Completion failures are reported as `{error}` with a 200 status; callers
// tell the two shapes apart by the `error` key.
pub async fn chat(data: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let req = req.into_inner();
    info!(
        "Chat request (role: {}, style: {}, length: {}, history: {} turns)",
        req.role,
        req.style,
        req.length,
        req.history.len()
    );

    let system_prompt = build_system_prompt(&req.role, &req.style, &req.length);
    let messages = expand_history(system_prompt, &req.history, &req.message);

    match data.gateway.complete(&messages).await {
        Ok(reply) => HttpResponse::Ok().json(compose_response(&req.history, &req.message, reply)),
        Err(e) => {
            error!("Completion error: {}", e);
            HttpResponse::Ok().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

pub async fn chatbot_roles() -> impl Responder {
    HttpResponse::Ok().json(table::<Persona>())
}

pub async fn chat_styles() -> impl Responder {
    HttpResponse::Ok().json(table::<Style>())
}

pub async fn reply_length() -> impl Responder {
    HttpResponse::Ok().json(table::<ReplyLength>())
}

// History lives with the client, so there is nothing to clear here.
pub async fn reset() -> impl Responder {
    HttpResponse::Ok().json(ResetResponse {
        history: Vec::new(),
    })
}

// The whole conversation is resent on every turn, so the body cap sits far
// above anything a real chat reaches.
pub const MAX_BODY_BYTES: usize = 1024 * 1024 * 1024;

/// Rejects unparseable chat bodies with 422 and a `{detail}` payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req: &HttpRequest| {
            let detail = err.to_string();
            warn!("Rejected request body: {}", detail);
            let response = HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }));
            InternalError::from_response(err, response).into()
        })
}
