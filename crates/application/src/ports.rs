//! Ports implemented by the infrastructure layer.

use std::future::Future;

use lobbydesk_domain::ClientResult;

/// Tokens returned by the refresh endpoint.
///
/// The backend may or may not rotate the refresh token; when it does not,
/// `refresh` is `None` and the previously stored token stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshedTokens {
    /// The new access token.
    pub access: String,
    /// The rotated refresh token, when the backend supplied one.
    pub refresh: Option<String>,
}

/// Port for exchanging a refresh token for new credentials.
pub trait TokenRefresher: Send + Sync {
    /// Calls the refresh endpoint with the given refresh token.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint rejects the token or cannot be
    /// reached.
    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = ClientResult<RefreshedTokens>> + Send;
}
