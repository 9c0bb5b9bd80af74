//! HTTP infrastructure for the Lobbydesk admin console.
//!
//! The [`ApiClient`] carries bearer authentication, single-flight token
//! refresh with replay, and error normalization; the [`api`] facades map
//! each backend resource family onto the domain models.

pub mod api;
pub mod client;
pub mod config;

pub use api::{BillingApi, FlagsApi, FlowsApi, HotelsApi, StaffApi, StatsApi, TemplatesApi};
pub use client::{ApiClient, LoginResponse, SessionEvent};
pub use config::ApiConfig;
