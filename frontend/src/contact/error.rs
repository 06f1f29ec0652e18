use thiserror::Error;

use super::models::Field;

pub const GENERIC_FAILURE: &str = "エラーが発生しました";
pub const TIMEOUT_REASON: &str = "timeout";

/// The submit guard refused to leave the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required fields are empty: {0:?}")]
    Missing(Vec<Field>),
    #[error("applicants must be at least {minimum} (got {age})")]
    Underage { age: u32, minimum: u32 },
    #[error("a submission is already in flight")]
    InFlight,
}

/// Why a network delivery failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the application ({status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("no response within the submit timeout")]
    Timeout,
    #[error("could not prepare the request: {0}")]
    Client(String),
}

impl SubmitError {
    /// Text shown after "送信に失敗しました: ".
    pub fn reason(&self) -> String {
        match self {
            SubmitError::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            SubmitError::Timeout => TIMEOUT_REASON.to_string(),
            SubmitError::Client(detail) => detail.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
