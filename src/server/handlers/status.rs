use axum::extract::Json;
use serde_json::{json, Value};

pub async fn index() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API de réservation de navettes aéroport en ligne",
        "routes": ["/api/prices", "/api/calculate-price", "/api/booking"],
    }))
}
