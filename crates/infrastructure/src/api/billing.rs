//! Subscription plan, transaction and subscription endpoints.

use lobbydesk_domain::billing::{
    CreatePlan, CreateSubscription, CreateTransaction, ExtendSubscription, HotelSubscription,
    ListPlansParams, ListSubscriptionsParams, ListTransactionsParams, SubscriptionPlan,
    Transaction, UpdatePlan, UpdateSubscription, UpdateTransaction,
};
use lobbydesk_domain::{ClientResult, Page, QueryPairs, ToQuery};

use crate::client::ApiClient;

/// Facade over `/plans/`, `/transactions/` and `/subscriptions/`.
pub struct BillingApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Billing endpoints.
    #[must_use]
    pub const fn billing(&self) -> BillingApi<'_> {
        BillingApi { client: self }
    }
}

impl BillingApi<'_> {
    /// Lists subscription plans.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list_plans(&self, params: &ListPlansParams) -> ClientResult<Page<SubscriptionPlan>> {
        self.client.get_page("/plans/", &params.to_query()).await
    }

    /// Fetches a single plan.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get_plan(&self, id: &str) -> ClientResult<SubscriptionPlan> {
        self.client
            .get(&format!("/plans/{id}/"), &QueryPairs::new())
            .await
    }

    /// Creates a plan.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create_plan(&self, body: &CreatePlan) -> ClientResult<SubscriptionPlan> {
        self.client.post("/plans/", body).await
    }

    /// Partially updates a plan.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_plan(&self, id: &str, body: &UpdatePlan) -> ClientResult<SubscriptionPlan> {
        self.client.patch(&format!("/plans/{id}/"), body).await
    }

    /// Deletes a plan.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete_plan(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/plans/{id}/")).await
    }

    /// Lists payment transactions.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list_transactions(
        &self,
        params: &ListTransactionsParams,
    ) -> ClientResult<Page<Transaction>> {
        self.client
            .get_page("/transactions/", &params.to_query())
            .await
    }

    /// Fetches a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get_transaction(&self, id: &str) -> ClientResult<Transaction> {
        self.client
            .get(&format!("/transactions/{id}/"), &QueryPairs::new())
            .await
    }

    /// Records a transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create_transaction(&self, body: &CreateTransaction) -> ClientResult<Transaction> {
        self.client.post("/transactions/", body).await
    }

    /// Partially updates a transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_transaction(
        &self,
        id: &str,
        body: &UpdateTransaction,
    ) -> ClientResult<Transaction> {
        self.client.patch(&format!("/transactions/{id}/"), body).await
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete_transaction(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/transactions/{id}/")).await
    }

    /// Lists hotel subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list_subscriptions(
        &self,
        params: &ListSubscriptionsParams,
    ) -> ClientResult<Page<HotelSubscription>> {
        self.client
            .get_page("/subscriptions/", &params.to_query())
            .await
    }

    /// Fetches a single subscription.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get_subscription(&self, id: &str) -> ClientResult<HotelSubscription> {
        self.client
            .get(&format!("/subscriptions/{id}/"), &QueryPairs::new())
            .await
    }

    /// Subscribes a hotel to a plan.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create_subscription(
        &self,
        body: &CreateSubscription,
    ) -> ClientResult<HotelSubscription> {
        self.client
            .post("/subscriptions/create_subscription/", body)
            .await
    }

    /// Extends a hotel's current subscription.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn extend_subscription(
        &self,
        body: &ExtendSubscription,
    ) -> ClientResult<HotelSubscription> {
        self.client
            .post("/subscriptions/extend_subscription/", body)
            .await
    }

    /// Partially updates a subscription record.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_subscription(
        &self,
        id: &str,
        body: &UpdateSubscription,
    ) -> ClientResult<HotelSubscription> {
        self.client.patch(&format!("/subscriptions/{id}/"), body).await
    }

    /// Deletes a subscription record.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete_subscription(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/subscriptions/{id}/")).await
    }
}
