//! Staff user endpoints.

use lobbydesk_domain::staff::{CreateStaffUser, ListStaffParams, StaffUser, UpdateStaffUser};
use lobbydesk_domain::{ClientResult, Page, QueryPairs, ToQuery};

use crate::client::ApiClient;

/// Facade over `/user/users/`.
pub struct StaffApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Staff user endpoints.
    #[must_use]
    pub const fn staff(&self) -> StaffApi<'_> {
        StaffApi { client: self }
    }
}

impl StaffApi<'_> {
    /// Lists staff users with the given filters.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list(&self, params: &ListStaffParams) -> ClientResult<Page<StaffUser>> {
        self.client.get_page("/user/users/", &params.to_query()).await
    }

    /// Fetches a single staff user.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get(&self, id: i64) -> ClientResult<StaffUser> {
        self.client
            .get(&format!("/user/users/{id}/"), &QueryPairs::new())
            .await
    }

    /// Creates a staff account on a hotel.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create(&self, body: &CreateStaffUser) -> ClientResult<StaffUser> {
        self.client.post("/user/hotel/staff/create/", body).await
    }

    /// Partially updates a staff account.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update(&self, id: i64, body: &UpdateStaffUser) -> ClientResult<StaffUser> {
        self.client.patch(&format!("/user/users/{id}/"), body).await
    }

    /// Deletes a staff account.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/user/users/{id}/")).await
    }
}
