//! Hotel console core types and flows
//!
//! Everything in this crate is independent of the rendering framework so the
//! login gating, routing decisions and configuration loading can be exercised
//! without a browser.

pub mod auth;
pub mod config;
pub mod error;
pub mod hotel;
pub mod routes;
pub mod session;
pub mod storage;

pub use auth::{AuthAction, AuthDispatch, AuthState, AuthStore, Phase, User};
pub use config::{ConfigWarning, EnvironmentConfig};
pub use error::{Error, Result};
pub use hotel::{CredentialStore, HotelCheck, HotelLookup, HotelRef};
pub use routes::{HotelPage, Navigate, Resolution, Route, Screen};
pub use session::{Session, SessionBuilder, Timer};
pub use storage::{ClearOutcome, KeyValueStore, MemoryStore};
