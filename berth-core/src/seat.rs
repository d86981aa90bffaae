use serde::{Deserialize, Serialize};

/// Berth position on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatDeck {
    Upper,
    Lower,
}

/// A fixed physical unit of inventory with an occupancy flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_no: String,
    #[serde(rename = "type")]
    pub deck: SeatDeck,
    pub booked: bool,
}

/// The fixed seat layout for a single trip.
///
/// Seats are created once at startup and never added or removed;
/// listing order is initialization order (upper deck first).
pub struct SeatRegistry {
    seats: Vec<Seat>,
}

impl SeatRegistry {
    /// Build the layout: `U1..Un` on the upper deck, then `L1..Lm` below.
    pub fn with_layout(upper_berths: u32, lower_berths: u32) -> Self {
        let mut seats = Vec::with_capacity((upper_berths + lower_berths) as usize);

        for n in 1..=upper_berths {
            seats.push(Seat {
                seat_no: format!("U{}", n),
                deck: SeatDeck::Upper,
                booked: false,
            });
        }
        for n in 1..=lower_berths {
            seats.push(Seat {
                seat_no: format!("L{}", n),
                deck: SeatDeck::Lower,
                booked: false,
            });
        }

        Self { seats }
    }

    /// Ordered listing of every seat.
    pub fn list(&self) -> &[Seat] {
        &self.seats
    }

    pub fn find(&self, seat_no: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.seat_no == seat_no)
    }

    /// Flip the occupancy flag. Only the booking manager calls this;
    /// cross-entity consistency is enforced there, not here.
    pub(crate) fn set_booked(&mut self, seat_no: &str, value: bool) -> Result<(), RegistryError> {
        let seat = self
            .seats
            .iter_mut()
            .find(|s| s.seat_no == seat_no)
            .ok_or_else(|| RegistryError::UnknownSeat(seat_no.to_string()))?;

        seat.booked = value;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown seat: {0}")]
    UnknownSeat(String),
}
