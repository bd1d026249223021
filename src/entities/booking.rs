use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::TripType;
use crate::error::{invalid_format_error, missing_field_error, Error};

/// A submitted booking. Lives only for the duration of one request; nothing
/// is persisted. Field names on the wire are camelCase, matching the booking
/// form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,

    pub airport: Option<String>,
    pub trip_type: Option<TripType>,
    pub passengers: Option<u32>,
    #[serde(default)]
    pub luggage: u32,
    #[serde(default)]
    pub child_seats: u32,
    #[serde(default)]
    pub boosters: u32,
    pub remarks: Option<String>,

    pub departure_date: Option<String>,
    pub departure_time: Option<String>,

    pub arrival_date: Option<String>,
    pub arrival_time: Option<String>,
    pub flight_number: Option<String>,
    pub flight_origin: Option<String>,

    pub calculated_price: Option<f64>,
}

impl BookingRequest {
    /// Checks every required field for the request's trip type, plus the
    /// email and phone shapes. First failure wins, named by its wire field.
    pub fn validate(&self) -> Result<(), Error> {
        require(&self.first_name, "firstName")?;
        require(&self.last_name, "lastName")?;
        let phone = require(&self.phone, "phone")?;
        let email = require(&self.email, "email")?;
        require(&self.street, "street")?;
        require(&self.house_number, "houseNumber")?;
        require(&self.postal_code, "postalCode")?;
        require(&self.city, "city")?;
        require(&self.airport, "airport")?;

        let trip_type = self
            .trip_type
            .ok_or_else(|| missing_field_error("tripType"))?;

        match self.passengers {
            None => return Err(missing_field_error("passengers")),
            Some(n) if !(1..=8).contains(&n) => {
                return Err(invalid_format_error("passengers"))
            }
            Some(_) => {}
        }

        if !is_valid_email(email) {
            return Err(invalid_format_error("email"));
        }

        if !is_valid_phone(phone) {
            return Err(invalid_format_error("phone"));
        }

        if trip_type.has_outbound_leg() {
            require(&self.departure_date, "departureDate")?;
            require(&self.departure_time, "departureTime")?;
        }

        if trip_type.has_inbound_leg() {
            require(&self.arrival_date, "arrivalDate")?;
            require(&self.arrival_time, "arrivalTime")?;
            require(&self.flight_number, "flightNumber")?;
        }

        Ok(())
    }
}

fn require<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, Error> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing_field_error(field)),
    }
}

// local@domain.tld: "foo@bar" is out, "foo@bar.com" is in.
fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
    re.is_match(email)
}

// Loose international number: an optional leading +, then 6 to 15 digits
// once whitespace and common separators are stripped.
fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')' | '/'))
        .collect();

    let re = Regex::new(r"^\+?[0-9]{6,15}$").unwrap();
    re.is_match(&stripped)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
    pub reference: Uuid,
}

impl BookingConfirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            reference: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_round_trip() -> BookingRequest {
        BookingRequest {
            first_name: Some("Test".into()),
            last_name: Some("Utilisateur".into()),
            email: Some("test@example.com".into()),
            phone: Some("0123456789".into()),
            street: Some("Rue de Test".into()),
            house_number: Some("123".into()),
            postal_code: Some("1000".into()),
            city: Some("Bruxelles".into()),
            airport: Some("Aéroport de Bruxelles".into()),
            trip_type: Some(TripType::RoundTrip),
            passengers: Some(2),
            luggage: 2,
            child_seats: 1,
            boosters: 0,
            remarks: None,
            departure_date: Some("2026-09-01".into()),
            departure_time: Some("08:00".into()),
            arrival_date: Some("2026-09-08".into()),
            arrival_time: Some("18:00".into()),
            flight_number: Some("SN123".into()),
            flight_origin: Some("Paris".into()),
            calculated_price: Some(120.0),
        }
    }

    #[test]
    fn accepts_a_complete_round_trip() {
        assert!(valid_round_trip().validate().is_ok());
    }

    #[test]
    fn missing_email_names_the_field() {
        let mut booking = valid_round_trip();
        booking.email = None;

        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "missing field: email");
    }

    #[test]
    fn blank_email_counts_as_missing() {
        let mut booking = valid_round_trip();
        booking.email = Some("   ".into());

        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "missing field: email");
    }

    #[test]
    fn missing_phone_is_reported_before_address_fields() {
        let mut booking = valid_round_trip();
        booking.phone = None;
        booking.street = None;

        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "missing field: phone");
    }

    #[test]
    fn email_without_tld_is_rejected() {
        let mut booking = valid_round_trip();
        booking.email = Some("foo@bar".into());

        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "invalid format: email");

        booking.email = Some("foo@bar.com".into());
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn phone_separators_are_tolerated() {
        let mut booking = valid_round_trip();

        booking.phone = Some("+32 470 12 34 56".into());
        assert!(booking.validate().is_ok());

        booking.phone = Some("(02) 123-45.67".into());
        assert!(booking.validate().is_ok());

        booking.phone = Some("call me".into());
        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "invalid format: phone");

        booking.phone = Some("123".into());
        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "invalid format: phone");
    }

    #[test]
    fn passengers_out_of_range_are_rejected() {
        let mut booking = valid_round_trip();

        booking.passengers = Some(9);
        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "invalid format: passengers");

        booking.passengers = None;
        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "missing field: passengers");
    }

    #[test]
    fn outbound_trip_does_not_need_flight_details() {
        let mut booking = valid_round_trip();
        booking.trip_type = Some(TripType::Outbound);
        booking.arrival_date = None;
        booking.arrival_time = None;
        booking.flight_number = None;

        assert!(booking.validate().is_ok());
    }

    #[test]
    fn inbound_trip_requires_flight_details() {
        let mut booking = valid_round_trip();
        booking.trip_type = Some(TripType::Inbound);
        booking.flight_number = None;

        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "missing field: flightNumber");
    }

    #[test]
    fn round_trip_requires_both_legs() {
        let mut booking = valid_round_trip();
        booking.departure_time = None;

        let err = booking.validate().unwrap_err();
        assert_eq!(err.message, "missing field: departureTime");
    }
}
