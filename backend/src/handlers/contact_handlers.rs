use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::{json, Value};

use crate::AppState;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<Value>)> {
    let Some(message) = req.into_contact_message() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required fields"}))
        ));
    };

    if !state.limiter.check(&message.email) {
        tracing::warn!("Rate limit hit for a contact sender");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many messages, try again later"}))
        ));
    }

    tracing::info!("Contact form submission received");
    tracing::debug!("Contact form submission from {} <{}>", message.name, message.email);

    let mailer = state.mailer.clone();
    let delivery = tokio::task::spawn_blocking(move || mailer.deliver(&message)).await;

    match delivery {
        Ok(Ok(())) => Ok(Json(ContactResponse {
            success: true,
            message: "Message received".to_string(),
        })),
        Ok(Err(e)) => {
            tracing::error!("Contact form error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to process message"}))
            ))
        }
        Err(e) => {
            tracing::error!("Contact delivery task failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to process message"}))
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use governor::Quota;
    use http_body_util::BodyExt;
    use nonzero_ext::nonzero;
    use tower::ServiceExt;

    use crate::utils::mailer::{MailError, MockMailTransport};
    use crate::utils::rate_limit::ContactRateLimiter;

    fn router(mailer: MockMailTransport, limiter: ContactRateLimiter) -> Router {
        crate::app(Arc::new(AppState {
            mailer: Arc::new(mailer),
            limiter,
        }))
    }

    fn contact_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn valid_body() -> Value {
        json!({"name": "Ada", "email": "ada@example.com", "message": "Hello there"})
    }

    #[tokio::test]
    async fn delivers_valid_message() {
        let mut mailer = MockMailTransport::new();
        mailer
            .expect_deliver()
            .withf(|m| m.name == "Ada" && m.email == "ada@example.com" && m.message == "Hello there")
            .times(1)
            .returning(|_| Ok(()));

        let (status, body) = send(router(mailer, ContactRateLimiter::default()), contact_request(valid_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "Message received"}));
    }

    #[tokio::test]
    async fn blank_field_is_rejected_without_sending() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_deliver().never();

        let body = json!({"name": "Ada", "email": "ada@example.com", "message": "   "});
        let (status, body) = send(router(mailer, ContactRateLimiter::default()), contact_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn absent_field_is_rejected() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_deliver().never();

        let body = json!({"name": "Ada", "email": "ada@example.com"});
        let (status, body) = send(router(mailer, ContactRateLimiter::default()), contact_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn null_field_is_rejected_as_missing() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_deliver().never();

        let body = json!({"name": null, "email": "a@b.com", "message": "hi"});
        let (status, body) = send(router(mailer, ContactRateLimiter::default()), contact_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn delivery_failure_is_hidden_behind_generic_error() {
        let mut mailer = MockMailTransport::new();
        mailer
            .expect_deliver()
            .times(1)
            .returning(|_| Err(MailError::MissingCredentials));

        let (status, body) = send(router(mailer, ContactRateLimiter::default()), contact_request(valid_body())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to process message"}));
    }

    #[tokio::test]
    async fn repeated_sender_is_throttled() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_deliver().times(1).returning(|_| Ok(()));
        let app = router(mailer, ContactRateLimiter::new(Quota::per_minute(nonzero!(1u32))));

        let (status, _) = send(app.clone(), contact_request(valid_body())).await;
        assert_eq!(status, StatusCode::OK);

        let shouting = json!({"name": "Ada", "email": "ADA@example.com", "message": "Again"});
        let (status, body) = send(app, contact_request(shouting)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({"error": "Too many messages, try again later"}));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn info_logs_leave_out_submitter_details() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut mailer = MockMailTransport::new();
        mailer.expect_deliver().times(1).returning(|_| Ok(()));
        let app = router(mailer, ContactRateLimiter::new(Quota::per_minute(nonzero!(1u32))));

        let (status, _) = send(app.clone(), contact_request(valid_body())).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(app, contact_request(valid_body())).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Contact form submission received"));
        assert!(output.contains("Rate limit hit"));
        assert!(!output.contains("ada@example.com"));
        assert!(!output.contains("Ada"));
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let app = router(MockMailTransport::new(), ContactRateLimiter::default());
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
