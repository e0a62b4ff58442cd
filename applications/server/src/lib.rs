//! Roster Server Library
//!
//! HTTP front end for the in-memory user roster: list, look up, create,
//! update and delete users through path-parameter routes.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod doc;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use doc::ApiDoc;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::UserService;
pub use state::AppState;
