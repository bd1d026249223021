use serde::{Deserialize, Serialize};

/// One row of the fare table: a base price for a pickup postal code and a
/// destination airport. Rows come straight out of the CSV header
/// `postalCode,airport,price` and go straight out on `GET /api/prices`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FareEntry {
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    pub airport: String,
    pub price: f64,
}
