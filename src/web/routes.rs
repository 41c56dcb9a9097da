use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/chat", web::post().to(handlers::chat))
        .route("/chatbot_roles", web::get().to(handlers::chatbot_roles))
        .route("/chat_styles", web::get().to(handlers::chat_styles))
        .route("/reply_length", web::get().to(handlers::reply_length))
        .route("/reset", web::get().to(handlers::reset));
}
