use super::Engine;

use async_trait::async_trait;

use crate::api::QuoteAPI;
use crate::entities::{Quote, QuoteParams, TripType};
use crate::error::{fare_not_found_error, missing_field_error, Error};
use crate::fares::FareTable;

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(&self, params: QuoteParams) -> Result<Quote, Error> {
        let postal_code = required_str(&params.postal_code, "postalCode")?;
        let airport = required_str(&params.airport, "airport")?;

        let passengers = match params.passengers {
            Some(n) if n >= 1 => n,
            _ => return Err(missing_field_error("passengers")),
        };

        let trip_type = params.trip_type.unwrap_or(TripType::Outbound);

        let price = price_for(&self.fares, postal_code, airport, passengers, trip_type)
            .ok_or_else(fare_not_found_error)?;

        Ok(Quote { price })
    }
}

fn required_str<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, Error> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing_field_error(field)),
    }
}

/// The fare rule: base price for `(postal_code, airport)`, plus the
/// passenger surcharge, doubled exactly for a round trip, rounded to two
/// decimals. `None` when the table has no entry for the pair; never a
/// default price.
pub fn price_for(
    fares: &FareTable,
    postal_code: &str,
    airport: &str,
    passengers: u32,
    trip_type: TripType,
) -> Option<f64> {
    let base = fares.lookup(postal_code, airport)?;

    let one_way = base + passenger_surcharge(passengers);

    let total = if trip_type.is_round_trip() {
        one_way * 2.0
    } else {
        one_way
    };

    Some((total * 100.0).round() / 100.0)
}

// Fixed step function over the 3..=8 tiers; everything else, including
// out-of-range counts the caller failed to validate, falls through to 0.
fn passenger_surcharge(passengers: u32) -> f64 {
    match passengers {
        3 => 5.0,
        4 => 10.0,
        5 => 15.0,
        6 => 20.0,
        7 => 25.0,
        8 => 30.0,
        _ => 0.0,
    }
}
