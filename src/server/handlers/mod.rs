pub mod bookings;
pub mod fares;
pub mod quotes;
pub mod status;
