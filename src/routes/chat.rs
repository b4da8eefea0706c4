use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResult},
    services::assistant::process_message,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    query: Result<Query<ChatRequest>, QueryRejection>,
) -> Result<Json<ChatResult>, AppError> {
    let Query(payload) = query.map_err(|e| AppError::Internal(e.body_text()))?;

    let user_msg = payload.message();
    let result = process_message(state.generator.as_ref(), user_msg).await;

    Ok(Json(result))
}
