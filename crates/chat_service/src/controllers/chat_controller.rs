use actix_web::{get, post, web, HttpResponse};
use chat_core::{ChatReply, ChatRequest};

use crate::error::Result;
use crate::knowledge::{KnowledgeBase, EMPTY_PROMPT_REPLY};
use crate::server::AppState;

#[post("/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    payload: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let message = payload.into_inner().message;

    if message.trim().is_empty() {
        return Ok(HttpResponse::Ok().json(ChatReply::new(EMPTY_PROMPT_REPLY)));
    }

    // Reloaded on every request; edits to the file take effect immediately.
    let knowledge_base = KnowledgeBase::load(&state.knowledge_base_path)?;
    let response = knowledge_base.respond(&message);

    Ok(HttpResponse::Ok().json(ChatReply::new(response)))
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(chat).service(health);
}
