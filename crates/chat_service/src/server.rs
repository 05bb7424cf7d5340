use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use crate::controllers::chat_controller;

pub struct AppState {
    pub knowledge_base_path: PathBuf,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(chat_controller::config);
}

pub async fn run(knowledge_base_path: PathBuf, port: u16) -> Result<(), String> {
    info!("Starting chat service...");

    let app_state = web::Data::new(AppState {
        knowledge_base_path,
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Chat service listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Chat service error: {}", e);
        return Err(format!("Chat service error: {e}"));
    }

    Ok(())
}
