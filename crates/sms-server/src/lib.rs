//! SMS spam filter HTTP API (Axum).
//!
//! Exposes the normalize-then-classify pipeline over HTTP, plus a health
//! endpoint reporting whether the classifier artifacts are loaded.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use sms_model::ClassifierAdapter;
use state::AppState;

/// Build the application router around a classifier.
pub fn app(classifier: ClassifierAdapter) -> Router {
    app_with_state(AppState::new(classifier))
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::predict_routes())
        .with_state(state)
}
