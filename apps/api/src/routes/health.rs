use axum::Json;
use serde_json::{json, Map, Value};

use crate::models::Criterion;

/// GET /
/// Service identification plus the statutory criteria this API evaluates.
pub async fn root_handler() -> Json<Value> {
    let criteria: Map<String, Value> = Criterion::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), Value::from(c.description())))
        .collect();

    Json(json!({
        "message": "O-1A Visa Qualification Assessment API",
        "version": env!("CARGO_PKG_VERSION"),
        "criteria": criteria,
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "o1a-assessment-api"
    }))
}
