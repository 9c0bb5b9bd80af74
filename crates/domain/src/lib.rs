//! Lobbydesk Domain - Core wire types
//!
//! This crate defines the domain model for the Lobbydesk admin API client:
//! session and credential types, the client error taxonomy, response
//! envelope parsing, per-resource models, and the pure flow-layout pass.
//! All types here are pure Rust with no I/O dependencies.

pub mod billing;
pub mod envelope;
pub mod error;
pub mod flags;
pub mod flow;
pub mod hotel;
pub mod query;
pub mod session;
pub mod staff;
pub mod stats;
pub mod templates;

pub use envelope::{Envelope, GENERIC_ERROR_MESSAGE, Page, extract_error_message};
pub use error::{ClientError, ClientResult};
pub use query::{QueryPairs, ToQuery};
pub use session::{Session, TokenPair, UserProfile, UserRole};
