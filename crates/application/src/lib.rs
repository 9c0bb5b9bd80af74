//! Application services for the Lobbydesk admin console.
//!
//! Hosts the session store, the single-flight token refresh coordinator,
//! navigation guards and input debouncing. Everything here is transport
//! agnostic; HTTP concerns live in `lobbydesk-infrastructure`.

pub mod guard;
pub mod ports;
pub mod refresh;
pub mod search;
pub mod session_store;

pub use guard::{RouteDecision, route_decision};
pub use ports::{RefreshedTokens, TokenRefresher};
pub use refresh::RefreshCoordinator;
pub use search::{DEFAULT_SEARCH_DELAY, Debouncer};
pub use session_store::SessionStore;
