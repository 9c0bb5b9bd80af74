//! Conversation flow administration endpoints.

use lobbydesk_domain::flow::{
    CreateFlowAction, CreateFlowStep, CreateFlowTemplate, FlowAction, FlowStep, FlowTemplate,
    ListFlowActionsParams, ListFlowStepsParams, UpdateFlowAction, UpdateFlowStep,
    UpdateFlowTemplate, UpdateHotelFlowConfiguration,
};
use lobbydesk_domain::{ClientResult, Page, QueryPairs, ToQuery};

use crate::client::ApiClient;

/// Facade over `/context/admin/…`.
pub struct FlowsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Conversation flow endpoints.
    #[must_use]
    pub const fn flows(&self) -> FlowsApi<'_> {
        FlowsApi { client: self }
    }
}

impl FlowsApi<'_> {
    /// Lists flow templates.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list_templates(&self) -> ClientResult<Page<FlowTemplate>> {
        self.client
            .get_page("/context/admin/flow-templates/", &QueryPairs::new())
            .await
    }

    /// Fetches a single flow template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get_template(&self, id: i64) -> ClientResult<FlowTemplate> {
        self.client
            .get(
                &format!("/context/admin/flow-templates/{id}/"),
                &QueryPairs::new(),
            )
            .await
    }

    /// Creates a flow template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create_template(&self, body: &CreateFlowTemplate) -> ClientResult<FlowTemplate> {
        self.client.post("/context/admin/flow-templates/", body).await
    }

    /// Partially updates a flow template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_template(
        &self,
        id: i64,
        body: &UpdateFlowTemplate,
    ) -> ClientResult<FlowTemplate> {
        self.client
            .patch(&format!("/context/admin/flow-templates/{id}/"), body)
            .await
    }

    /// Deletes a flow template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete_template(&self, id: i64) -> ClientResult<()> {
        self.client
            .delete(&format!("/context/admin/flow-templates/{id}/"))
            .await
    }

    /// Lists step templates, optionally scoped to one flow template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list_steps(&self, params: &ListFlowStepsParams) -> ClientResult<Page<FlowStep>> {
        self.client
            .get_page("/context/admin/flow-step-templates/", &params.to_query())
            .await
    }

    /// Fetches a single step template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get_step(&self, id: i64) -> ClientResult<FlowStep> {
        self.client
            .get(
                &format!("/context/admin/flow-step-templates/{id}/"),
                &QueryPairs::new(),
            )
            .await
    }

    /// Creates a step template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create_step(&self, body: &CreateFlowStep) -> ClientResult<FlowStep> {
        self.client
            .post("/context/admin/flow-step-templates/", body)
            .await
    }

    /// Partially updates a step template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_step(&self, id: i64, body: &UpdateFlowStep) -> ClientResult<FlowStep> {
        self.client
            .patch(&format!("/context/admin/flow-step-templates/{id}/"), body)
            .await
    }

    /// Deletes a step template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete_step(&self, id: i64) -> ClientResult<()> {
        self.client
            .delete(&format!("/context/admin/flow-step-templates/{id}/"))
            .await
    }

    /// Lists flow actions.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list_actions(
        &self,
        params: &ListFlowActionsParams,
    ) -> ClientResult<Page<FlowAction>> {
        self.client
            .get_page("/context/admin/flow-actions/", &params.to_query())
            .await
    }

    /// Creates a flow action.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create_action(&self, body: &CreateFlowAction) -> ClientResult<FlowAction> {
        self.client.post("/context/admin/flow-actions/", body).await
    }

    /// Partially updates a flow action.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_action(&self, id: i64, body: &UpdateFlowAction) -> ClientResult<FlowAction> {
        self.client
            .patch(&format!("/context/admin/flow-actions/{id}/"), body)
            .await
    }

    /// Deletes a flow action.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn delete_action(&self, id: i64) -> ClientResult<()> {
        self.client
            .delete(&format!("/context/admin/flow-actions/{id}/"))
            .await
    }

    /// Updates a hotel's flow configuration.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_hotel_configuration(
        &self,
        id: i64,
        body: &UpdateHotelFlowConfiguration,
    ) -> ClientResult<serde_json::Value> {
        self.client
            .patch(&format!("/context/admin/hotel-configurations/{id}/"), body)
            .await
    }
}
