//! Platform staff user models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{QueryPairs, ToQuery};
use crate::session::UserRole;

/// A platform-side staff account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUser {
    /// User id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Platform role.
    pub user_type: UserRole,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Id of the user who created this account.
    #[serde(default)]
    pub created_by: Option<i64>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filters for the staff list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStaffParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
}

impl ToQuery for ListStaffParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs.push_opt("search", self.search.as_deref());
        pairs
    }
}

/// Body for creating a staff account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStaffUser {
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Platform role to assign.
    pub user_type: UserRole,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Partial update of a staff account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStaffUser {
    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Platform role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserRole>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
