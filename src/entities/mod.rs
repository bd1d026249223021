mod booking;
mod fare;
mod quote;

pub use booking::{BookingConfirmation, BookingRequest};
pub use fare::FareEntry;
pub use quote::{Quote, QuoteParams, TripType};
