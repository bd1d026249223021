use super::{notice, quote_api, Engine};

use async_trait::async_trait;

use crate::api::BookingAPI;
use crate::entities::{BookingConfirmation, BookingRequest, TripType};
use crate::error::{missing_field_error, Error};
use crate::external::mail_relay;
use crate::fares::FareTable;

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self, booking), fields(airport = ?booking.airport))]
    async fn submit_booking(
        &self,
        booking: BookingRequest,
    ) -> Result<BookingConfirmation, Error> {
        booking.validate()?;

        let price = reconcile_price(&self.fares, &booking)?;

        let subject = notice::subject(&booking);
        let html = notice::render(&booking, price);

        mail_relay::verify().await?;
        mail_relay::send(subject, html).await?;

        Ok(BookingConfirmation::new(
            "Réservation enregistrée avec succès",
        ))
    }
}

/// Settles the price to put on the notice. The server's own quote wins
/// whenever the fare table covers the booking's pickup and destination; a
/// pickup outside the table falls back to the client-submitted price, which
/// the operator re-quotes by hand.
fn reconcile_price(fares: &FareTable, booking: &BookingRequest) -> Result<f64, Error> {
    let postal_code = booking.postal_code.as_deref().unwrap_or_default();
    let airport = booking.airport.as_deref().unwrap_or_default();
    let passengers = booking.passengers.unwrap_or_default();
    let trip_type = booking.trip_type.unwrap_or(TripType::Outbound);

    match quote_api::price_for(fares, postal_code, airport, passengers, trip_type) {
        Some(price) => {
            if let Some(client_price) = booking.calculated_price {
                if (client_price - price).abs() > f64::EPSILON {
                    tracing::warn!(client_price, price, "overriding client-submitted price");
                }
            }

            Ok(price)
        }
        None => {
            tracing::warn!(
                postal_code,
                airport,
                "no fare entry for booking; keeping client-submitted price"
            );

            booking
                .calculated_price
                .ok_or_else(|| missing_field_error("calculatedPrice"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::entities::FareEntry;

    fn table() -> FareTable {
        FareTable::from_entries(vec![FareEntry {
            postal_code: "1000".into(),
            airport: "Aéroport de Bruxelles".into(),
            price: 100.0,
        }])
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            postal_code: Some("1000".into()),
            airport: Some("Aéroport de Bruxelles".into()),
            passengers: Some(4),
            trip_type: Some(TripType::RoundTrip),
            calculated_price: Some(180.0),
            ..BookingRequest::default()
        }
    }

    #[test]
    fn server_quote_overrides_the_client_price() {
        let price = reconcile_price(&table(), &booking()).unwrap();

        assert_eq!(price, 220.0);
    }

    #[test]
    fn unknown_pickup_keeps_the_client_price() {
        let mut booking = booking();
        booking.postal_code = Some("9999".into());

        let price = reconcile_price(&table(), &booking).unwrap();

        assert_eq!(price, 180.0);
    }

    #[test]
    fn unknown_pickup_without_a_client_price_is_rejected() {
        let mut booking = booking();
        booking.postal_code = Some("9999".into());
        booking.calculated_price = None;

        let err = reconcile_price(&table(), &booking).unwrap_err();

        assert_eq!(err.message, "missing field: calculatedPrice");
    }

    fn valid_booking() -> BookingRequest {
        BookingRequest {
            first_name: Some("Test".into()),
            last_name: Some("Utilisateur".into()),
            email: Some("test@example.com".into()),
            phone: Some("0123456789".into()),
            street: Some("Rue de Test".into()),
            house_number: Some("123".into()),
            city: Some("Bruxelles".into()),
            departure_date: Some("2026-09-01".into()),
            departure_time: Some("08:00".into()),
            arrival_date: Some("2026-09-08".into()),
            arrival_time: Some("18:00".into()),
            flight_number: Some("SN123".into()),
            ..booking()
        }
    }

    #[tokio::test]
    async fn invalid_booking_is_rejected_before_the_relay_is_touched() {
        let engine = Engine::new(table());

        let mut booking = valid_booking();
        booking.email = None;

        // A relay error would carry code 10; a validation error must win.
        let err = engine.submit_booking(booking).await.unwrap_err();

        assert_eq!(err.code, 101);
        assert_eq!(err.message, "missing field: email");
    }

    #[tokio::test]
    async fn missing_relay_configuration_fails_the_booking() {
        // A developer shell or .env may carry relay credentials; clear them
        // so the valid booking deterministically stops at verification.
        for var in [
            "MAIL_RELAY_API_BASE",
            "MAIL_RELAY_API_KEY",
            "MAIL_FROM",
            "MAIL_TO",
        ] {
            std::env::remove_var(var);
        }

        let engine = Engine::new(table());

        let err = engine.submit_booking(valid_booking()).await.unwrap_err();

        assert_eq!(err.code, 10);
    }
}
