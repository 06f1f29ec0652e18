use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use mallow_backend::handlers::contact_dtos::Application;
use mallow_backend::mailer::{ApplicationMailer, MailError};
use mallow_backend::{build_router, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<Application>>,
    fail: bool,
}

impl ApplicationMailer for RecordingMailer {
    fn send<'a>(
        &'a self,
        application: &'a Application,
        _received_at: DateTime<Utc>,
    ) -> BoxFuture<'a, Result<(), MailError>> {
        Box::pin(async move {
            if self.fail {
                return Err(MailError::Relay("relay unreachable".to_string()));
            }
            self.sent.lock().expect("mailer lock").push(application.clone());
            Ok(())
        })
    }
}

async fn start_server(mailer: Arc<RecordingMailer>) -> String {
    let state = Arc::new(AppState::new(mailer, Duration::from_secs(86_400)));
    let app = build_router(state, None);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn application() -> Value {
    json!({
        "lastName": "山田",
        "firstName": "花子",
        "phone": "090-1234-5678",
        "email": "hanako@example.com",
        "experience": "3~5年",
        "licenses": ["美容師免許"],
        "position": "スタイリスト",
        "age": 29,
        "message": "保育園のお迎えがあります",
    })
}

async fn post(base: &str, body: &Value) -> (StatusCode, Value) {
    let res = reqwest::Client::new()
        .post(format!("{base}/api/contact"))
        .json(body)
        .send()
        .await
        .expect("request");
    let status = res.status();
    let body = res.json::<Value>().await.expect("json body");
    (status, body)
}

#[tokio::test]
async fn valid_application_is_forwarded_once() {
    let mailer = Arc::new(RecordingMailer::default());
    let base = start_server(mailer.clone()).await;

    let (status, body) = post(&base, &application()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "送信が完了しました");

    let sent = mailer.sent.lock().expect("mailer lock");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].full_name(), "山田 花子");
    assert_eq!(sent[0].email.as_deref(), Some("hanako@example.com"));
}

#[tokio::test]
async fn missing_phone_is_a_bad_request() {
    let mailer = Arc::new(RecordingMailer::default());
    let base = start_server(mailer.clone()).await;

    let mut body = application();
    body["phone"] = json!("");
    let (status, body) = post(&base, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("phone"));
    assert!(mailer.sent.lock().expect("mailer lock").is_empty());
}

#[tokio::test]
async fn same_phone_twice_is_a_conflict() {
    let mailer = Arc::new(RecordingMailer::default());
    let base = start_server(mailer.clone()).await;

    let (first, _) = post(&base, &application()).await;
    assert_eq!(first, StatusCode::OK);

    let mut again = application();
    again["phone"] = json!("09012345678");
    let (status, body) = post(&base, &again).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "重複申請");
    assert_eq!(mailer.sent.lock().expect("mailer lock").len(), 1);
}

#[tokio::test]
async fn distinct_full_width_phones_are_both_forwarded() {
    let mailer = Arc::new(RecordingMailer::default());
    let base = start_server(mailer.clone()).await;

    let mut first = application();
    first["phone"] = json!("０９０-１１１１-２２２２");
    let (status, _) = post(&base, &first).await;
    assert_eq!(status, StatusCode::OK);

    let mut second = application();
    second["lastName"] = json!("佐藤");
    second["phone"] = json!("０８０-３３３３-４４４４");
    let (status, _) = post(&base, &second).await;
    assert_eq!(status, StatusCode::OK);

    let mut repeat = application();
    repeat["phone"] = json!("09011112222");
    let (status, body) = post(&base, &repeat).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "重複申請");
    assert_eq!(mailer.sent.lock().expect("mailer lock").len(), 2);
}

#[tokio::test]
async fn phone_without_digits_is_a_bad_request() {
    let mailer = Arc::new(RecordingMailer::default());
    let base = start_server(mailer.clone()).await;

    let mut body = application();
    body["phone"] = json!("わかりません");
    let (status, _) = post(&base, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(mailer.sent.lock().expect("mailer lock").is_empty());
}

#[tokio::test]
async fn relay_failure_is_bad_gateway_and_can_be_retried() {
    let failing = Arc::new(RecordingMailer {
        fail: true,
        ..Default::default()
    });
    let base = start_server(failing).await;

    let (status, body) = post(&base, &application()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].is_string());

    // The failed attempt must not count as a duplicate.
    let (status, _) = post(&base, &application()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn string_age_is_accepted() {
    let mailer = Arc::new(RecordingMailer::default());
    let base = start_server(mailer.clone()).await;

    let mut body = application();
    body["age"] = json!("24");
    let (status, _) = post(&base, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mailer.sent.lock().expect("mailer lock")[0].age, 24);
}

#[tokio::test]
async fn malformed_json_still_answers_with_a_message() {
    let base = start_server(Arc::new(RecordingMailer::default())).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/api/contact"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await.expect("json body");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn health_reports_ok() {
    let base = start_server(Arc::new(RecordingMailer::default())).await;
    let body = reqwest::get(format!("{base}/api/health"))
        .await
        .expect("request")
        .text()
        .await
        .expect("text");
    assert_eq!(body, "OK");
}
