//! Guest flag endpoints.

use lobbydesk_domain::flags::{
    CreateFlag, Flag, GuestFlagCheck, GuestSearchResponse, ListFlagsParams, ResetFlag,
};
use lobbydesk_domain::{ClientResult, Page, QueryPairs, ToQuery};

use crate::client::ApiClient;

/// Facade over `/flags/` and the guest lookup endpoints.
pub struct FlagsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Guest flag endpoints.
    #[must_use]
    pub const fn flags(&self) -> FlagsApi<'_> {
        FlagsApi { client: self }
    }
}

impl FlagsApi<'_> {
    /// Lists flags with the given filters.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list(&self, params: &ListFlagsParams) -> ClientResult<Page<Flag>> {
        self.client.get_page("/flags/", &params.to_query()).await
    }

    /// Fetches a single flag.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get(&self, id: i64) -> ClientResult<Flag> {
        self.client
            .get(&format!("/flags/{id}/"), &QueryPairs::new())
            .await
    }

    /// Raises a flag on a guest.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create(&self, body: &CreateFlag) -> ClientResult<Flag> {
        self.client.post("/flags/", body).await
    }

    /// Resets a flag with a mandatory reason.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn reset(&self, id: i64, body: &ResetFlag) -> ClientResult<Flag> {
        self.client.post(&format!("/flags/{id}/reset/"), body).await
    }

    /// Checks whether a guest is flagged anywhere.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn check_guest(&self, guest_id: i64) -> ClientResult<GuestFlagCheck> {
        self.client
            .get(&format!("/admin/flags/check/{guest_id}/"), &QueryPairs::new())
            .await
    }

    /// Searches guests globally by name, phone, email or register number.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn search_guests(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> ClientResult<GuestSearchResponse> {
        let mut pairs = QueryPairs::new();
        pairs.push("q", query.trim());
        pairs.push_opt("limit", limit);
        self.client.get("/search-guests/", &pairs).await
    }
}
