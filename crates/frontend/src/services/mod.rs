//! API services used by the shell

pub mod auth;
pub mod hotel;

pub use auth::AuthApiService;
pub use hotel::{HotelService, HotelSummary};
