use crate::panel::{AdminEntity, DraftError};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rumbo_shared::{Flight, ImageUpload};
use uuid::Uuid;

/// Shortest schedulable flight.
const MIN_DURATION_MINUTES: i64 = 30;
/// Same-day flights must depart at least this far from now.
const MIN_LEAD_MINUTES: i64 = 30;

impl AdminEntity for Flight {
    type Draft = FlightDraft;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// The flights form. Unfilled inputs stay `None` until the operator types
/// something; validation decides what is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightDraft {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
    pub capacity: Option<u32>,
    pub base_price: Option<f64>,
    pub is_featured: bool,
    /// Image already stored for the flight being edited.
    pub existing_image_url: Option<String>,
    /// Image picked in this form session.
    pub image: Option<ImageUpload>,
}

/// Whether the flight's scheduled departure is still ahead. This drives the
/// table's active flag and featured eligibility; always judged against the
/// persisted flight, never against the form's edited date.
pub fn is_active(flight: &Flight, now: NaiveDateTime) -> bool {
    flight.date.and_time(flight.departure_time) > now
}

/// A flight whose scheduled departure has passed cannot be marked featured;
/// the checkbox is disabled once it flies.
pub fn featured_toggle_enabled(flight: &Flight, now: NaiveDateTime) -> bool {
    is_active(flight, now)
}

fn duration_minutes(departure: NaiveTime, arrival: NaiveTime) -> i64 {
    let delta = (arrival - departure).num_minutes();
    if delta < 0 {
        delta + 24 * 60
    } else {
        delta
    }
}

impl FlightDraft {
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            airline: flight.airline.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            date: Some(flight.date),
            departure_time: Some(flight.departure_time),
            arrival_time: Some(flight.arrival_time),
            capacity: Some(flight.capacity),
            base_price: Some(flight.base_price),
            is_featured: flight.is_featured,
            existing_image_url: flight.image_url.clone(),
            image: None,
        }
    }

    /// Client-side checks run before any request. `existing` is the
    /// persisted flight when editing, `None` when creating.
    pub fn validate(&self, existing: Option<&Flight>, now: NaiveDateTime) -> Vec<DraftError> {
        let mut errors = Vec::new();

        if self.airline.trim().is_empty() {
            errors.push(DraftError::new("airline", "required"));
        }
        if self.origin.trim().is_empty() {
            errors.push(DraftError::new("origin", "required"));
        }
        if self.destination.trim().is_empty() {
            errors.push(DraftError::new("destination", "required"));
        }
        if !self.origin.trim().is_empty()
            && self.origin.trim().eq_ignore_ascii_case(self.destination.trim())
        {
            errors.push(DraftError::new("destination", "must differ from origin"));
        }

        match self.capacity {
            Some(capacity) if capacity > 0 => {}
            _ => errors.push(DraftError::new("capacity", "must be a positive number")),
        }
        match self.base_price {
            Some(price) if price > 0.0 => {}
            _ => errors.push(DraftError::new("basePrice", "must be a positive number")),
        }

        match (self.departure_time, self.arrival_time) {
            (Some(departure), Some(arrival)) => {
                if duration_minutes(departure, arrival) < MIN_DURATION_MINUTES {
                    errors.push(DraftError::new(
                        "arrivalTime",
                        "flight must last at least 30 minutes",
                    ));
                }
            }
            (None, _) => errors.push(DraftError::new("departureTime", "required")),
            (_, None) => errors.push(DraftError::new("arrivalTime", "required")),
        }

        match self.date {
            None => errors.push(DraftError::new("date", "required")),
            Some(date) => {
                if date < now.date() {
                    errors.push(DraftError::new("date", "cannot be in the past"));
                } else if date == now.date() {
                    if let Some(departure) = self.departure_time {
                        if date.and_time(departure) < now + Duration::minutes(MIN_LEAD_MINUTES) {
                            errors.push(DraftError::new(
                                "departureTime",
                                "must be at least 30 minutes from now",
                            ));
                        }
                    }
                }
            }
        }

        if self.is_featured {
            if self.image.is_none() && self.existing_image_url.is_none() {
                errors.push(DraftError::new("image", "featured flights need an image"));
            }
            if let Some(existing) = existing {
                if !featured_toggle_enabled(existing, now) {
                    errors.push(DraftError::new(
                        "isFeatured",
                        "inactive flights cannot be featured",
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn valid_draft() -> FlightDraft {
        FlightDraft {
            airline: "Sur".to_string(),
            origin: "Buenos Aires".to_string(),
            destination: "Mendoza".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 1),
            departure_time: Some(time(8, 0)),
            arrival_time: Some(time(10, 0)),
            capacity: Some(150),
            base_price: Some(50000.0),
            is_featured: false,
            existing_image_url: None,
            image: None,
        }
    }

    fn field_errors(errors: &[DraftError], field: &str) -> usize {
        errors.iter().filter(|e| e.field == field).count()
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate(None, now()).is_empty());
    }

    #[test]
    fn test_origin_must_differ_from_destination() {
        let mut draft = valid_draft();
        draft.destination = "buenos aires".to_string();
        let errors = draft.validate(None, now());
        assert_eq!(field_errors(&errors, "destination"), 1);
    }

    #[test]
    fn test_duration_minimum() {
        let mut draft = valid_draft();
        draft.arrival_time = Some(time(8, 20));
        let errors = draft.validate(None, now());
        assert_eq!(field_errors(&errors, "arrivalTime"), 1);

        // Overnight legs wrap instead of going negative.
        draft.departure_time = Some(time(23, 30));
        draft.arrival_time = Some(time(0, 30));
        assert!(draft.validate(None, now()).is_empty());
    }

    #[test]
    fn test_date_cannot_be_past() {
        let mut draft = valid_draft();
        draft.date = NaiveDate::from_ymd_opt(2025, 11, 19);
        let errors = draft.validate(None, now());
        assert_eq!(field_errors(&errors, "date"), 1);
    }

    #[test]
    fn test_same_day_needs_thirty_minutes_lead() {
        let mut draft = valid_draft();
        draft.date = Some(now().date());

        draft.departure_time = Some(time(12, 15));
        draft.arrival_time = Some(time(14, 0));
        let errors = draft.validate(None, now());
        assert_eq!(field_errors(&errors, "departureTime"), 1);

        draft.departure_time = Some(time(12, 45));
        assert!(draft.validate(None, now()).is_empty());
    }

    #[test]
    fn test_featured_requires_image() {
        let mut draft = valid_draft();
        draft.is_featured = true;
        let errors = draft.validate(None, now());
        assert_eq!(field_errors(&errors, "image"), 1);

        draft.existing_image_url = Some("https://cdn.example.com/a.jpg".to_string());
        assert!(draft.validate(None, now()).is_empty());
    }

    #[test]
    fn test_positive_numbers_required() {
        let mut draft = valid_draft();
        draft.capacity = Some(0);
        draft.base_price = Some(-1.0);
        let errors = draft.validate(None, now());
        assert_eq!(field_errors(&errors, "capacity"), 1);
        assert_eq!(field_errors(&errors, "basePrice"), 1);
    }

    #[test]
    fn test_past_flight_cannot_be_featured() {
        let past_flight = Flight {
            id: Uuid::new_v4(),
            airline: "Sur".to_string(),
            origin: "AEP".to_string(),
            destination: "MDZ".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            departure_time: time(8, 0),
            arrival_time: time(10, 0),
            capacity: 150,
            base_price: 50000.0,
            is_featured: false,
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
        };
        assert!(!featured_toggle_enabled(&past_flight, now()));

        let mut draft = FlightDraft::from_flight(&past_flight);
        draft.is_featured = true;
        // The form keeps a future date, but eligibility follows the
        // persisted schedule.
        draft.date = NaiveDate::from_ymd_opt(2025, 12, 24);
        let errors = draft.validate(Some(&past_flight), now());
        assert_eq!(field_errors(&errors, "isFeatured"), 1);
    }

    #[test]
    fn test_active_flight_may_be_featured() {
        let upcoming = Flight {
            id: Uuid::new_v4(),
            airline: "Sur".to_string(),
            origin: "AEP".to_string(),
            destination: "MDZ".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            departure_time: time(8, 0),
            arrival_time: time(10, 0),
            capacity: 150,
            base_price: 50000.0,
            is_featured: false,
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
        };
        assert!(featured_toggle_enabled(&upcoming, now()));

        let mut draft = FlightDraft::from_flight(&upcoming);
        draft.is_featured = true;
        assert!(draft.validate(Some(&upcoming), now()).is_empty());
    }
}
