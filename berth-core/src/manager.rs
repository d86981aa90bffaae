use crate::ledger::{Booking, BookingLedger};
use crate::seat::{RegistryError, Seat, SeatRegistry};
use uuid::Uuid;

/// Sentinel stored when the passenger picked no meal.
const NO_MEAL: &str = "None";

/// Owns the seat registry and the booking ledger, and is the only
/// mutation entry point for both.
///
/// Per seat the states are Available and Booked; `reserve` and
/// `release` are the only transitions. Each transition validates fully
/// before touching either collection, so a failed operation leaves no
/// partial state behind.
pub struct BookingManager {
    registry: SeatRegistry,
    ledger: BookingLedger,
}

impl BookingManager {
    pub fn new(registry: SeatRegistry) -> Self {
        Self {
            registry,
            ledger: BookingLedger::new(),
        }
    }

    /// Ordered listing of every seat.
    pub fn seats(&self) -> &[Seat] {
        self.registry.list()
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.ledger.iter()
    }

    pub fn find_booking_for_seat(&self, seat_no: &str) -> Option<&Booking> {
        self.ledger.find_by_seat(seat_no)
    }

    /// Transition: Available → Booked. Creates exactly one booking.
    ///
    /// An unknown seat and an already-booked seat both fail with
    /// `SeatUnavailable`; callers are not told which it was.
    pub fn reserve(
        &mut self,
        seat_no: &str,
        passenger_name: &str,
        meal: Option<String>,
    ) -> Result<Booking, BookingError> {
        match self.registry.find(seat_no) {
            Some(seat) if !seat.booked => {}
            _ => return Err(BookingError::SeatUnavailable),
        }

        let booking = Booking {
            booking_id: Uuid::new_v4(),
            seat_no: seat_no.to_string(),
            passenger_name: passenger_name.to_string(),
            meal: match meal {
                Some(m) if !m.is_empty() => m,
                _ => NO_MEAL.to_string(),
            },
        };

        // Validation done; both mutations land together.
        self.registry.set_booked(seat_no, true)?;
        self.ledger.add(booking.clone());

        tracing::info!(seat_no, booking_id = %booking.booking_id, "seat reserved");
        Ok(booking)
    }

    /// Transition: Booked → Available. Destroys exactly one booking.
    pub fn release(&mut self, booking_id: &Uuid) -> Result<(), BookingError> {
        let seat_no = self
            .ledger
            .get(booking_id)
            .ok_or(BookingError::BookingNotFound)?
            .seat_no
            .clone();

        if self.registry.find(&seat_no).is_none() {
            // The ledger should never reference a seat the registry does
            // not know. Surface the fault instead of absorbing it.
            tracing::error!(%booking_id, %seat_no, "booking references a seat missing from the registry");
            return Err(BookingError::LedgerOutOfSync(seat_no));
        }

        self.ledger.remove_by_id(booking_id);
        self.registry.set_booked(&seat_no, false)?;

        tracing::info!(%booking_id, %seat_no, "booking released");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Seat not available")]
    SeatUnavailable,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("Booking ledger references unknown seat: {0}")]
    LedgerOutOfSync(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
