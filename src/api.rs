use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{BookingConfirmation, BookingRequest, FareEntry, Quote, QuoteParams};
use crate::error::Error;

#[async_trait]
pub trait FareAPI {
    async fn list_fares(&self) -> Result<Vec<FareEntry>, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, params: QuoteParams) -> Result<Quote, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn submit_booking(&self, booking: BookingRequest)
        -> Result<BookingConfirmation, Error>;
}

pub trait API: FareAPI + QuoteAPI + BookingAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
