//! In-process harness: a fresh database per test and the router driven
//! through `tower::ServiceExt::oneshot`, no sockets involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use rollcall::auth::{TokenGenerator, issue_token};
use rollcall::server::{AppState, create_router};
use rollcall::store::{SqliteStore, Store};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    _temp_dir: TempDir,
    pub store: Arc<SqliteStore>,
    pub router: Router,
    pub admin_token: String,
}

pub struct TestUser {
    pub id: String,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = Arc::new(SqliteStore::new(temp_dir.path().join("rollcall.db")).expect("open store"));
        store.initialize().expect("initialize store");

        let (token, admin_token) =
            issue_token(&TokenGenerator::new(), true, None).expect("issue admin token");
        store.create_token(&token).expect("store admin token");

        let router = create_router(Arc::new(AppState::new(store.clone())));

        Self {
            _temp_dir: temp_dir,
            store,
            router,
            admin_token,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }

    pub async fn get(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, Some(token), None).await
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn patch(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, path, Some(token), Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> StatusCode {
        self.request(Method::DELETE, path, Some(token), None).await.0
    }

    /// Creates a user through the admin API and issues it a token.
    pub async fn create_user(&self, username: &str) -> TestUser {
        let (status, body) = self
            .post(
                "/api/v1/admin/users",
                &self.admin_token,
                serde_json::json!({ "username": username }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create user: {body}");
        let id = body["data"]["id"].as_str().expect("user id").to_string();

        let (status, body) = self
            .post(
                &format!("/api/v1/admin/users/{id}/tokens"),
                &self.admin_token,
                serde_json::json!({}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create token: {body}");
        let token = body["data"]["token"].as_str().expect("token").to_string();

        TestUser { id, token }
    }
}
