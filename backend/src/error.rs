use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::MailError;

pub const DUPLICATE_MESSAGE: &str = "重複申請";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{}", DUPLICATE_MESSAGE)]
    Duplicate,
    #[error("メールの送信に失敗しました")]
    Delivery(#[source] MailError),
    #[error("エラーが発生しました")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Duplicate => StatusCode::CONFLICT,
            ApiError::Delivery(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MailError> for ApiError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::Relay(_) => ApiError::Delivery(err),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(reason) => tracing::info!("rejected application: {}", reason),
            ApiError::Duplicate => tracing::info!("rejected duplicate application"),
            ApiError::Delivery(err) => tracing::error!("mail relay failed: {}", err),
            ApiError::Internal(detail) => tracing::error!("internal error: {}", detail),
        }
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_failures_are_bad_gateway() {
        let err = ApiError::from(MailError::Relay("connection refused".into()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn duplicate_carries_the_fixed_message() {
        assert_eq!(ApiError::Duplicate.to_string(), "重複申請");
        assert_eq!(ApiError::Duplicate.status(), StatusCode::CONFLICT);
    }
}
