//! Top-level screens mounted by the router

pub mod create_hotel;
pub mod hotel_screen;
pub mod sign_in;

pub use create_hotel::CreateHotel;
pub use hotel_screen::HotelScreen;
pub use sign_in::SignIn;
