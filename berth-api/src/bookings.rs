use axum::{extract::State, routing::post, Json, Router};
use berth_core::Booking;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookSeatRequest {
    seat_no: String,
    passenger_name: String,
    #[serde(default)]
    meal: Option<String>,
}

#[derive(Debug, Serialize)]
struct BookSeatResponse {
    booking: Booking,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelBookingRequest {
    booking_id: String,
}

#[derive(Debug, Serialize)]
struct CancelBookingResponse {
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/book-seat", post(book_seat))
        .route("/api/cancel-booking", post(cancel_booking))
}

async fn book_seat(
    State(state): State<AppState>,
    Json(req): Json<BookSeatRequest>,
) -> Result<Json<BookSeatResponse>, ApiError> {
    let mut manager = state.manager.write().await;
    let booking = manager.reserve(&req.seat_no, &req.passenger_name, req.meal)?;

    info!(seat_no = %booking.seat_no, booking_id = %booking.booking_id, "seat booked");
    Ok(Json(BookSeatResponse { booking }))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Json(req): Json<CancelBookingRequest>,
) -> Result<Json<CancelBookingResponse>, ApiError> {
    // Ids arrive as free text; anything that is not a UUID cannot match
    // a booking, so it reports the same not-found as an unknown id.
    let booking_id = Uuid::parse_str(&req.booking_id).map_err(|_| ApiError::BookingNotFound)?;

    let mut manager = state.manager.write().await;
    manager.release(&booking_id)?;

    info!(%booking_id, "booking cancelled");
    Ok(Json(CancelBookingResponse {
        message: "Booking cancelled".to_string(),
    }))
}
