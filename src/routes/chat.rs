use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, GreetingResponse, ValidJson},
    services::runner,
    state::SharedState,
};

pub const GREETING: &str = "Hello from Subhan Kaladi";

pub async fn root_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING.to_string(),
    })
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = runner::run(&state.agent, &payload.message).await?;
    Ok(Json(ChatResponse { response }))
}
