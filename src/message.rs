// src/message.rs
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// JSON body extractor that only accepts objects. Derived struct
/// deserializers also take sequences, so `["hi"]` would otherwise pass.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;
        if !value.is_object() {
            return Err(AppError::BodyShape("request body must be a JSON object"));
        }

        // round-trip through axum's Json so errors keep the field path
        let bytes = serde_json::to_vec(&value)
            .map_err(|_| AppError::BodyShape("request body could not be re-encoded"))?;
        let Json(inner) = Json::<T>::from_bytes(&bytes)?;
        Ok(ValidJson(inner))
    }
}
