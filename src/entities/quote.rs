use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripType {
    Outbound,
    Inbound,
    RoundTrip,
}

impl TripType {
    pub fn is_round_trip(&self) -> bool {
        matches!(self, Self::RoundTrip)
    }

    pub fn has_outbound_leg(&self) -> bool {
        matches!(self, Self::Outbound | Self::RoundTrip)
    }

    pub fn has_inbound_leg(&self) -> bool {
        matches!(self, Self::Inbound | Self::RoundTrip)
    }
}

/// Body of `POST /api/calculate-price`. All fields arrive untrusted; the
/// engine rejects missing or empty ones before looking anything up.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub postal_code: Option<String>,
    pub airport: Option<String>,
    pub passengers: Option<u32>,
    pub trip_type: Option<TripType>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
}
