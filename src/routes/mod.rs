// src/routes/mod.rs
pub mod chat;

use std::any::Any;

use crate::{error::internal_error_response, state::SharedState};
use axum::{Router, response::Response, routing::get};
use chat::chat_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", get(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Error generating response from Gemini: {}", detail);
    internal_error_response()
}
