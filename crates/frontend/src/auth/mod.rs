//! Authentication module

pub mod context;
pub mod guard;

// Re-export commonly used items
pub use context::{use_auth, use_is_authenticated, AuthContext, AuthModel, AuthProvider};
pub use guard::ProtectedRoute;
