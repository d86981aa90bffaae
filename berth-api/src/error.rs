use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use berth_core::BookingError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    SeatUnavailable,
    BookingNotFound,
    Anyhow(anyhow::Error),
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::SeatUnavailable => ApiError::SeatUnavailable,
            BookingError::BookingNotFound => ApiError::BookingNotFound,
            // Consistency faults are internal; the client gets a 500.
            other => ApiError::Anyhow(other.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Anyhow(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::SeatUnavailable => {
                (StatusCode::BAD_REQUEST, "Seat not available".to_string())
            }
            ApiError::BookingNotFound => {
                (StatusCode::NOT_FOUND, "Booking not found".to_string())
            }
            ApiError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
