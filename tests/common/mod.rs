#![allow(dead_code)]

use axum::{
    Router,
    extract::ConnectInfo,
    routing::{get, post},
};
use chrono::{DateTime, TimeZone, Utc};
use shorturls::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use shorturls::application::services::LinkSettings;
use shorturls::domain::clock::ManualClock;
use shorturls::infrastructure::memory::InMemoryStore;
use shorturls::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "http://localhost:8000";

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// Fresh store and services driven by a manual clock.
pub fn create_test_state() -> (AppState, Arc<ManualClock>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(ManualClock::new(start_time()));
    let settings = LinkSettings {
        base_url: BASE_URL.to_string(),
        ..LinkSettings::default()
    };

    let state = AppState::new(store.clone(), clock.clone(), settings);
    (state, clock, store)
}

/// All public routes, with a fixed peer address attached to every request.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
