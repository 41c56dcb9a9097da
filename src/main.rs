mod chat;
mod config;
mod model;
mod web;

use actix_web::{web::Data, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use config::AppConfig;
use model::CompletionGateway;

// Shared, read-only for the life of the process
pub struct AppState {
    pub gateway: CompletionGateway,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Starting chatbot API on {}:{}", config.host, config.port);

    let app_state = Data::new(AppState {
        gateway: CompletionGateway::new(config.base_url.clone(), config.api_key.clone()),
    });
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || web::build_app(app_state.clone(), &static_dir))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
