//! In-process test harness: the full app driven through `tower::ServiceExt::oneshot`

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use loyalty_server::api::{SESSION_HEADER, build_app};
use loyalty_server::{Config, ServerState, SessionAction};
use serde_json::Value;
use shared::models::Role;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub state: ServerState,
    app: Router,
}

impl TestApp {
    /// App with simulated latency switched off
    pub fn new() -> Self {
        Self::with_latency_scale(0.0)
    }

    pub fn with_latency_scale(scale: f64) -> Self {
        let config = Config::with_overrides(0, scale);
        let state = ServerState::initialize(&config).expect("state");
        let app = build_app(&state).with_state(state.clone());
        Self { state, app }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        session: Option<Uuid>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = session {
            builder = builder.header(SESSION_HEADER, id.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, session: Option<Uuid>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, session, None).await
    }

    pub async fn post(&self, uri: &str, session: Option<Uuid>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, session, Some(body)).await
    }

    pub async fn put(&self, uri: &str, session: Option<Uuid>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, session, Some(body)).await
    }

    /// New anonymous session id
    pub async fn new_session(&self) -> Uuid {
        let (status, body) = self.request(Method::POST, "/api/session", None, None).await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["sessionId"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("session id")
    }

    /// Session logged in through the password form
    pub async fn login(&self, role: Role) -> Uuid {
        let id = self.new_session().await;
        let login_id = match role {
            Role::SuperAdmin => "super",
            Role::BrandAdmin => "admin",
            Role::Customer => "customer",
        };
        let (status, body) = self
            .post(
                "/api/session/login/password",
                Some(id),
                serde_json::json!({ "role": role, "loginId": login_id, "password": "123" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        id
    }

    /// Logged-in session created without going through the (delayed) login endpoint
    pub fn login_direct(&self, role: Role) -> Uuid {
        let id = self.state.sessions.create(self.state.new_session());
        let user = self
            .state
            .fixtures
            .user_for_role(role)
            .cloned()
            .expect("seeded user");
        let wallet = (role == Role::Customer).then_some(self.state.fixtures.records.wallet);
        self.state
            .sessions
            .apply(id, SessionAction::Login { user, wallet })
            .expect("login");
        id
    }
}

pub fn error_code(body: &Value) -> u64 {
    body["code"].as_u64().expect("error code")
}
