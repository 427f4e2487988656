use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sms_core::{Label, Verdict};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Inbound message, as a form field or JSON body.
#[derive(Debug, Deserialize)]
pub struct MessageInput {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Verdict,
    pub prediction_text: String,
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn predict_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict_form))
        .route("/api/v1/classify", post(classify_json))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ready": state.classifier.is_ready(),
        "uptime_secs": state.uptime_secs(),
    }))
}

fn run(state: &AppState, message: &str, with_canonical: bool) -> Result<PredictResponse, ApiError> {
    let prediction = state.classifier.classify_message(message).map_err(|e| {
        warn!(error = %e, "classification failed");
        ApiError::from(e)
    })?;
    debug!(label = prediction.label.value(), verdict = %prediction.verdict, "prediction");
    Ok(PredictResponse {
        prediction: prediction.verdict,
        prediction_text: format!("Prediction: {}", prediction.verdict),
        label: prediction.label,
        canonical: with_canonical.then_some(prediction.canonical),
    })
}

async fn predict_form(
    State(state): State<AppState>,
    input: Result<Form<MessageInput>, FormRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Form(input) = input.map_err(|e| ApiError::bad_request(e.body_text()))?;
    run(&state, &input.message, false).map(Json)
}

async fn classify_json(
    State(state): State<AppState>,
    input: Result<Json<MessageInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(input) = input.map_err(|e| ApiError::bad_request(e.body_text()))?;
    run(&state, &input.message, true).map(Json)
}
