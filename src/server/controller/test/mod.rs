use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::{auth::token::TokenService, notification::ShipmentNotifier},
    state::AppState,
};

mod school;

/// Router backed by a fresh in-memory database.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
    _test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_notifier(ShipmentNotifier::new(reqwest::Client::new(), None)).await
    }

    async fn with_notifier(notifier: ShipmentNotifier) -> Self {
        let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let state = AppState::new(
            db.clone(),
            TokenService::new(b"controller-test-secret", Duration::hours(1)),
            notifier,
        );

        Self {
            app: router(state),
            db,
            _test: test,
        }
    }

    /// Sends a request and returns the status with the parsed JSON body.
    ///
    /// Empty bodies are returned as `Value::Null`.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    /// Signs up a user through the API and returns their id and token.
    async fn signup(&self, email: &str) -> (i32, String) {
        let (status, body) = self
            .send(
                Method::POST,
                "/users",
                None,
                Some(json!({ "email": email, "password": "secret" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        let id = body["user"]["id"].as_i64().unwrap() as i32;
        let token = body["token"].as_str().unwrap().to_string();

        (id, token)
    }
}
