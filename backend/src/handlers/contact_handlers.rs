use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::contact_dtos::ContactRequest;
use crate::AppState;

pub const SUCCESS_MESSAGE: &str = "送信が完了しました";

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let application = request.validate()?;
    let received_at = Utc::now();

    if !state.recent_applications.claim(&application.phone, received_at) {
        return Err(ApiError::Duplicate);
    }

    if let Err(err) = state.mailer.send(&application, received_at).await {
        // Undelivered applications may be resubmitted.
        state.recent_applications.release(&application.phone);
        return Err(err.into());
    }

    tracing::info!("accepted application ({} recent)", state.recent_applications.len());
    Ok(Json(json!({ "message": SUCCESS_MESSAGE })))
}
