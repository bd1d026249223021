mod booking_api;
mod fare_api;
mod notice;
mod quote_api;

use crate::api::API;
use crate::fares::FareTable;

/// The service engine: the read-only fare table plus the operations the
/// HTTP layer calls through the `API` traits. Constructed once, before any
/// request is served.
pub struct Engine {
    fares: FareTable,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(fares: FareTable) -> Self {
        if fares.is_empty() {
            tracing::warn!("starting with an empty fare table; all quotes will fail");
        }

        Self { fares }
    }
}

impl API for Engine {}

#[test]
fn new_engine_quotes_from_the_bundled_table() {
    use tokio_test::block_on;

    use crate::api::QuoteAPI;
    use crate::entities::{QuoteParams, TripType};

    let engine = Engine::new(FareTable::load("data/prices.csv"));

    let quote = block_on(engine.create_quote(QuoteParams {
        postal_code: Some("1000".into()),
        airport: Some("Aéroport de Bruxelles".into()),
        passengers: Some(4),
        trip_type: Some(TripType::RoundTrip),
    }))
    .unwrap();

    assert_eq!(quote.price, 220.0);
}
