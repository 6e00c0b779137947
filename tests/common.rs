use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use fieldbook_backend::{
    api::router::create_router, config::Config, infra::factory::bootstrap_state, state::AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub data_file: String,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::with_data_file(&format!("test_store_{}.json", Uuid::new_v4()))
    }

    /// Boots against an existing local-store file, simulating a process
    /// restart: venues and theme survive, bookings and blocks reset.
    pub fn with_data_file(data_file: &str) -> Self {
        let config = Config {
            port: 0,
            data_file: data_file.to_string(),
            seed_demo_data: true,
        };

        let state = Arc::new(bootstrap_state(&config));
        let router = create_router(state.clone());

        Self {
            router,
            state,
            data_file: data_file.to_string(),
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response<Body> {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Response<Body> {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.request("DELETE", uri, None).await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.data_file);
    }
}
