use axum::{extract::State, routing::get, Json, Router};
use berth_core::Seat;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/seats", get(list_seats))
}

async fn list_seats(State(state): State<AppState>) -> Json<Vec<Seat>> {
    let manager = state.manager.read().await;
    Json(manager.seats().to_vec())
}
