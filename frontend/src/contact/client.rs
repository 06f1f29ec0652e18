use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;

use super::error::SubmitError;
use super::models::{ContactPayload, ErrorBody};
use crate::config;

/// POSTs the application and waits at most [`config::SUBMIT_TIMEOUT_MS`].
pub async fn submit_application(payload: ContactPayload) -> Result<(), SubmitError> {
    let url = format!("{}{}", config::get_backend_url(), config::CONTACT_ENDPOINT);
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&payload)
        .map_err(|e| SubmitError::Client(e.to_string()))?;

    let send = Box::pin(request.send());
    let deadline = Box::pin(TimeoutFuture::new(config::SUBMIT_TIMEOUT_MS));

    let response = match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| SubmitError::Network(e.to_string()))?,
        Either::Right(_) => return Err(SubmitError::Timeout),
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!("contact endpoint answered {}", status);
    interpret_response(status, &body)
}

/// Any 2xx is a delivery; otherwise the server's `{"message"}` is kept when
/// the body carries one.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message);
    Err(SubmitError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_ignores_the_body() {
        assert_eq!(interpret_response(200, r#"{"message":"送信が完了しました"}"#), Ok(()));
        assert_eq!(interpret_response(204, ""), Ok(()));
    }

    #[test]
    fn server_message_is_kept_on_rejection() {
        let err = interpret_response(500, r#"{"message":"重複申請"}"#).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 500,
                message: Some("重複申請".into())
            }
        );
        assert_eq!(err.reason(), "重複申請");
    }

    #[test]
    fn non_json_body_falls_back_to_generic_reason() {
        let err = interpret_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, SubmitError::Rejected { status: 502, message: None });
        assert_eq!(err.reason(), crate::contact::error::GENERIC_FAILURE);
    }

    #[test]
    fn json_without_message_has_none() {
        let err = interpret_response(400, r#"{"error":"bad"}"#).unwrap_err();
        assert_eq!(err, SubmitError::Rejected { status: 400, message: None });
    }
}
