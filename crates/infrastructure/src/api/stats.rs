//! Platform statistics endpoints.

use lobbydesk_domain::stats::{
    ConversationStats, HotelStats, Overview, PaymentStats, StatWindow,
};
use lobbydesk_domain::{ClientResult, ToQuery};

use crate::client::ApiClient;

/// Facade over `/admin_stat/…`.
pub struct StatsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Platform statistics endpoints.
    #[must_use]
    pub const fn stats(&self) -> StatsApi<'_> {
        StatsApi { client: self }
    }
}

impl StatsApi<'_> {
    /// Platform-wide counters for the window.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn overview(&self, window: &StatWindow) -> ClientResult<Overview> {
        self.client
            .get("/admin_stat/overview/", &window.to_query())
            .await
    }

    /// Per-hotel statistics for the window.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn hotels(&self, window: &StatWindow) -> ClientResult<HotelStats> {
        self.client
            .get("/admin_stat/hotels/", &window.to_query())
            .await
    }

    /// Conversation volume statistics for the window.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn conversations(&self, window: &StatWindow) -> ClientResult<ConversationStats> {
        self.client
            .get("/admin_stat/conversations/", &window.to_query())
            .await
    }

    /// Payment and revenue statistics for the window.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn payments(&self, window: &StatWindow) -> ClientResult<PaymentStats> {
        self.client
            .get("/admin_stat/payments/", &window.to_query())
            .await
    }
}
