use axum::{routing::post, Json, Router};
use berth_core::estimator::{self, BookingSignals, BookingTimeCategory};
use chrono::{Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictRequest {
    booking_time: Option<BookingTimeCategory>,
    #[serde(default)]
    seats_left: f64,
    #[serde(default)]
    meal_selected: bool,
    is_weekend: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    confirmation_probability: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/predict", post(predict))
}

/// Stateless estimate; touches no seat or booking data.
///
/// The booking page derives the time bucket and weekend flag itself and
/// sends them along; when a caller leaves them out, they are derived
/// here from the current UTC clock instead.
async fn predict(Json(req): Json<PredictRequest>) -> Json<PredictResponse> {
    let now = Utc::now();

    let signals = BookingSignals {
        booking_time: req
            .booking_time
            .unwrap_or_else(|| BookingTimeCategory::from_hour(now.hour())),
        seats_left_percent: req.seats_left,
        meal_selected: req.meal_selected,
        is_weekend: req
            .is_weekend
            .unwrap_or_else(|| estimator::is_weekend(now.weekday())),
    };

    let score = estimator::estimate_confirmation(&signals);
    Json(PredictResponse {
        confirmation_probability: format!("{}%", score),
    })
}
