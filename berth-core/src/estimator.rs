use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// How early in the day the passenger is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingTimeCategory {
    Early,
    Medium,
    Late,
}

impl BookingTimeCategory {
    /// Bucket a wall-clock hour the way the booking page does:
    /// mornings are early, evenings after 18:00 are late.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            BookingTimeCategory::Early
        } else if hour > 18 {
            BookingTimeCategory::Late
        } else {
            BookingTimeCategory::Medium
        }
    }
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Contextual signals for one confirmation estimate. Ephemeral: never
/// stored, never tied to a particular booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSignals {
    pub booking_time: BookingTimeCategory,
    pub seats_left_percent: f64,
    pub meal_selected: bool,
    pub is_weekend: bool,
}

/// Rule-based confirmation score, 0–100.
///
/// Additive with a cap; no smoothing, no randomness. Identical inputs
/// always yield the identical score.
pub fn estimate_confirmation(signals: &BookingSignals) -> u8 {
    let mut score: u32 = 0;

    if signals.booking_time == BookingTimeCategory::Early {
        score += 30;
    }
    if signals.seats_left_percent > 50.0 {
        score += 30;
    }
    if signals.meal_selected {
        score += 20;
    }
    if !signals.is_weekend {
        score += 20;
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(
        booking_time: BookingTimeCategory,
        seats_left_percent: f64,
        meal_selected: bool,
        is_weekend: bool,
    ) -> BookingSignals {
        BookingSignals {
            booking_time,
            seats_left_percent,
            meal_selected,
            is_weekend,
        }
    }

    #[test]
    fn test_score_extremes() {
        let best = signals(BookingTimeCategory::Early, 60.0, true, false);
        assert_eq!(estimate_confirmation(&best), 100);

        let worst = signals(BookingTimeCategory::Late, 10.0, false, true);
        assert_eq!(estimate_confirmation(&worst), 0);
    }

    #[test]
    fn test_score_midrange() {
        // Seats-left just over the threshold plus the weekday bonus.
        let mid = signals(BookingTimeCategory::Medium, 51.0, false, false);
        assert_eq!(estimate_confirmation(&mid), 50);

        // Exactly at the threshold earns nothing.
        let at_threshold = signals(BookingTimeCategory::Medium, 50.0, false, false);
        assert_eq!(estimate_confirmation(&at_threshold), 20);
    }

    #[test]
    fn test_score_is_deterministic() {
        let input = signals(BookingTimeCategory::Early, 72.5, true, true);
        assert_eq!(estimate_confirmation(&input), estimate_confirmation(&input));
    }

    #[test]
    fn test_hour_buckets() {
        assert_eq!(BookingTimeCategory::from_hour(0), BookingTimeCategory::Early);
        assert_eq!(BookingTimeCategory::from_hour(11), BookingTimeCategory::Early);
        assert_eq!(BookingTimeCategory::from_hour(12), BookingTimeCategory::Medium);
        assert_eq!(BookingTimeCategory::from_hour(18), BookingTimeCategory::Medium);
        assert_eq!(BookingTimeCategory::from_hour(19), BookingTimeCategory::Late);
        assert_eq!(BookingTimeCategory::from_hour(23), BookingTimeCategory::Late);
    }

    #[test]
    fn test_weekend_days() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Mon));
        assert!(!is_weekend(Weekday::Fri));
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_value(BookingTimeCategory::Early).unwrap(),
            "early"
        );
        let parsed: BookingTimeCategory = serde_json::from_str("\"late\"").unwrap();
        assert_eq!(parsed, BookingTimeCategory::Late);
    }
}
