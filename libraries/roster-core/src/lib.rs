//! Roster Core
//!
//! Domain types, validation and the in-memory user store behind the roster
//! service.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{validation, UserStore};
//!
//! let mut store = UserStore::new();
//! let user = store.create(
//!     validation::validate_username("UrbanUser").unwrap(),
//!     validation::validate_age(24).unwrap(),
//! );
//! assert_eq!(user.id.get(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{Age, User, UserId, Username};
pub use validation::ValidationError;
