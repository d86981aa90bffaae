use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A record linking a passenger to a specific seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: Uuid,
    pub seat_no: String,
    pub passenger_name: String,
    pub meal: String,
}

/// The set of active bookings, keyed by booking id.
///
/// The ledger stores what it is given; seat availability is validated
/// by the booking manager before anything lands here.
pub struct BookingLedger {
    bookings: HashMap<Uuid, Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
        }
    }

    pub fn add(&mut self, booking: Booking) {
        self.bookings.insert(booking.booking_id, booking);
    }

    pub fn get(&self, booking_id: &Uuid) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    /// Remove and return the booking, if any.
    pub fn remove_by_id(&mut self, booking_id: &Uuid) -> Option<Booking> {
        self.bookings.remove(booking_id)
    }

    /// Lookup by seat number, for consistency checks.
    pub fn find_by_seat(&self, seat_no: &str) -> Option<&Booking> {
        self.bookings.values().find(|b| b.seat_no == seat_no)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(seat_no: &str) -> Booking {
        Booking {
            booking_id: Uuid::new_v4(),
            seat_no: seat_no.to_string(),
            passenger_name: "Asha".to_string(),
            meal: "None".to_string(),
        }
    }

    #[test]
    fn test_add_get_remove() {
        let mut ledger = BookingLedger::new();
        let entry = booking("U1");
        let id = entry.booking_id;

        ledger.add(entry);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&id).unwrap().seat_no, "U1");

        let removed = ledger.remove_by_id(&id).unwrap();
        assert_eq!(removed.booking_id, id);
        assert!(ledger.is_empty());
        assert!(ledger.remove_by_id(&id).is_none());
    }

    #[test]
    fn test_find_by_seat() {
        let mut ledger = BookingLedger::new();
        ledger.add(booking("U1"));
        ledger.add(booking("L3"));

        assert_eq!(ledger.find_by_seat("L3").unwrap().seat_no, "L3");
        assert!(ledger.find_by_seat("L4").is_none());
    }

    #[test]
    fn test_booking_wire_shape() {
        let entry = booking("U2");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["bookingId"], entry.booking_id.to_string());
        assert_eq!(value["seatNo"], "U2");
        assert_eq!(value["passengerName"], "Asha");
        assert_eq!(value["meal"], "None");
    }
}
