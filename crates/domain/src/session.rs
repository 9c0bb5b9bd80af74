//! Session and credential types

use serde::{Deserialize, Serialize};

/// An access/refresh token pair as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer credential sent with each authenticated request.
    pub access: String,
    /// Longer-lived credential exchanged for new access tokens.
    pub refresh: String,
}

/// Role assigned to a platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full platform administrator.
    PlatformAdmin,
    /// Platform operations staff.
    PlatformStaff,
    /// Hotel manager.
    Manager,
    /// Hotel front-desk user.
    Receptionist,
    /// Hotel department staff.
    DepartmentStaff,
    /// Any role this client does not know about.
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Whether this role is allowed to use the admin console.
    ///
    /// The allow-list is intentionally closed: only the two platform roles
    /// pass, every hotel-side or unknown role is rejected at login.
    #[must_use]
    pub const fn is_console_role(&self) -> bool {
        matches!(self, Self::PlatformAdmin | Self::PlatformStaff)
    }
}

/// The authenticated user's profile as returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Role, which gates console access.
    pub user_type: UserRole,
    /// Optional phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Optional given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Optional family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Whether the account is active.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the account has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Hotel this user belongs to, if any.
    #[serde(default)]
    pub hotel_id: Option<String>,
}

/// Client-side session state.
///
/// Created on successful login, the access token is replaced on refresh, and
/// the whole value is cleared on logout, refresh failure, or terminal 401.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Current access token, if authenticated.
    pub access_token: Option<String>,
    /// Current refresh token, if authenticated.
    pub refresh_token: Option<String>,
    /// The authenticated user's profile.
    pub user: Option<UserProfile>,
}

impl Session {
    /// An unauthenticated session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            user: None,
        }
    }

    /// True when an access token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Drops all credentials and the cached profile.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
    }
}
