pub mod estimator;
pub mod ledger;
pub mod manager;
pub mod seat;

pub use estimator::{estimate_confirmation, is_weekend, BookingSignals, BookingTimeCategory};
pub use ledger::{Booking, BookingLedger};
pub use manager::{BookingError, BookingManager};
pub use seat::{Seat, SeatDeck, SeatRegistry};
