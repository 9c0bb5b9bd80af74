//! Single-flight token refresh coordination.
//!
//! Any number of requests can fail with 401 at once; only one of them may
//! actually call the refresh endpoint. The coordinator serializes refresh
//! attempts behind a mutex and uses the session generation to let every
//! queued caller reuse the outcome of the refresh that ran while it waited.

use tokio::sync::Mutex;

use lobbydesk_domain::{ClientError, ClientResult, TokenPair};

use crate::ports::TokenRefresher;
use crate::session_store::SessionStore;

/// Coordinates refresh attempts so at most one reaches the backend.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    gate: Mutex<()>,
}

impl RefreshCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gate: Mutex::const_new(()),
        }
    }

    /// Acquires the refresh slot, or awaits the refresh already in flight.
    ///
    /// The session generation is sampled before queueing on the gate. If it
    /// moved by the time the gate is acquired, another caller completed a
    /// refresh (or cleared the session) in between, and its outcome is
    /// returned without a second backend call.
    ///
    /// On refresh failure the entire session is cleared before the error is
    /// returned, so no stale credentials survive.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] when no refresh token is
    /// held, when the refresh endpoint rejects the token, or when the
    /// session was cleared while waiting.
    pub async fn acquire_or_await_refresh<R: TokenRefresher>(
        &self,
        store: &SessionStore,
        refresher: &R,
    ) -> ClientResult<TokenPair> {
        let observed = store.generation().await;
        let _slot = self.gate.lock().await;

        if store.generation().await != observed {
            // Someone else refreshed while we queued; share their outcome.
            let access = store.access_token().await;
            let refresh = store.refresh_token().await;
            return match (access, refresh) {
                (Some(access), Some(refresh)) => Ok(TokenPair { access, refresh }),
                _ => Err(ClientError::Authentication(
                    "session expired, please log in again".to_owned(),
                )),
            };
        }

        let Some(refresh_token) = store.refresh_token().await else {
            return Err(ClientError::Authentication(
                "no refresh token available".to_owned(),
            ));
        };

        match refresher.refresh(&refresh_token).await {
            Ok(tokens) => {
                store
                    .apply_refresh(tokens.access.clone(), tokens.refresh.clone())
                    .await;
                tracing::debug!("access token refreshed");
                Ok(TokenPair {
                    access: tokens.access,
                    refresh: tokens.refresh.unwrap_or(refresh_token),
                })
            }
            Err(error) => {
                tracing::warn!(%error, "token refresh failed, clearing session");
                store.clear().await;
                Err(ClientError::Authentication(format!(
                    "token refresh failed: {error}"
                )))
            }
        }
    }
}
