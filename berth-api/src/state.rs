use berth_core::BookingManager;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state.
///
/// The booking manager is the single owner of seat and booking data;
/// the write lock makes each reserve/release a critical section, so
/// concurrent attempts on one seat serialize and the second caller
/// observes the seat as unavailable.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<RwLock<BookingManager>>,
}

impl AppState {
    pub fn new(manager: BookingManager) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
        }
    }
}
