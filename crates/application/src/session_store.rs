//! Shared session state.
//!
//! This module provides the thread-safe session context owned by the API
//! client. Tokens are always read from here at send time, never captured,
//! so a request queued behind a refresh picks up the new access token.

use std::sync::Arc;

use tokio::sync::RwLock;

use lobbydesk_domain::{Session, UserProfile};

#[derive(Debug, Default)]
struct Inner {
    session: Session,
    /// Bumped on every login, refresh, and clear. The refresh coordinator
    /// uses it to detect that another caller already renewed the session.
    generation: u64,
}

/// Thread-safe, shared session store.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
}

impl SessionStore {
    /// Creates an unauthenticated store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current access token, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.inner.read().await.session.access_token.clone()
    }

    /// Current refresh token, if any.
    pub async fn refresh_token(&self) -> Option<String> {
        self.inner.read().await.session.refresh_token.clone()
    }

    /// The authenticated user's profile, if any.
    pub async fn user(&self) -> Option<UserProfile> {
        self.inner.read().await.session.user.clone()
    }

    /// True when an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.session.is_authenticated()
    }

    /// The current session generation.
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Installs a freshly logged-in session in one step.
    pub async fn install_login(&self, access: String, refresh: String, user: UserProfile) {
        let mut inner = self.inner.write().await;
        inner.session.access_token = Some(access);
        inner.session.refresh_token = Some(refresh);
        inner.session.user = Some(user);
        inner.generation += 1;
    }

    /// Applies a refresh result: the access token is always replaced, the
    /// refresh token only when the backend rotated it.
    pub async fn apply_refresh(&self, access: String, rotated_refresh: Option<String>) {
        let mut inner = self.inner.write().await;
        inner.session.access_token = Some(access);
        if let Some(refresh) = rotated_refresh {
            inner.session.refresh_token = Some(refresh);
        }
        inner.generation += 1;
    }

    /// Clears all session state.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.session.clear();
        inner.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_refresh_without_rotation_keeps_old_refresh_token() {
        let store = SessionStore::new();
        store
            .install_login(
                "a1".to_owned(),
                "r1".to_owned(),
                sample_user(),
            )
            .await;

        store.apply_refresh("a2".to_owned(), None).await;
        assert_eq!(store.access_token().await.as_deref(), Some("a2"));
        assert_eq!(store.refresh_token().await.as_deref(), Some("r1"));

        store.apply_refresh("a3".to_owned(), Some("r2".to_owned())).await;
        assert_eq!(store.refresh_token().await.as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_generation_advances_on_every_mutation() {
        let store = SessionStore::new();
        let start = store.generation().await;
        store
            .install_login("a".to_owned(), "r".to_owned(), sample_user())
            .await;
        store.apply_refresh("a2".to_owned(), None).await;
        store.clear().await;
        assert_eq!(store.generation().await, start + 3);
        assert!(!store.is_authenticated().await);
    }

    fn sample_user() -> UserProfile {
        UserProfile {
            id: 1,
            username: "root".to_owned(),
            email: "root@example.com".to_owned(),
            user_type: lobbydesk_domain::UserRole::PlatformAdmin,
            phone_number: None,
            first_name: None,
            last_name: None,
            is_active: true,
            is_verified: true,
            hotel_id: None,
        }
    }
}
