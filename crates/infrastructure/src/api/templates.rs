//! Message template endpoints.

use reqwest::multipart::Form;

use lobbydesk_domain::templates::{
    ListTemplatesParams, Template, TemplatePreview, TemplateVariables, UpdateTemplate,
};
use lobbydesk_domain::{ClientResult, Page, QueryPairs, ToQuery};

use super::file_part;
use crate::client::ApiClient;

/// Facade over `/chat/templates/`.
pub struct TemplatesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Message template endpoints.
    #[must_use]
    pub const fn templates(&self) -> TemplatesApi<'_> {
        TemplatesApi { client: self }
    }
}

impl TemplatesApi<'_> {
    /// Lists message templates.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn list(&self, params: &ListTemplatesParams) -> ClientResult<Page<Template>> {
        self.client
            .get_page("/chat/templates/", &params.to_query())
            .await
    }

    /// Fetches a single template.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn get(&self, id: i64) -> ClientResult<Template> {
        self.client
            .get(&format!("/chat/templates/{id}/"), &QueryPairs::new())
            .await
    }

    /// Text-only template update.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update(&self, id: i64, body: &UpdateTemplate) -> ClientResult<Template> {
        self.client
            .patch(&format!("/chat/templates/{id}/"), body)
            .await
    }

    /// Template update that also replaces the attached media file.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_with_media(
        &self,
        id: i64,
        body: &UpdateTemplate,
        file_name: &str,
        bytes: &[u8],
    ) -> ClientResult<Template> {
        self.client
            .patch_multipart(&format!("/chat/templates/{id}/"), &|| {
                template_form(body, file_name, bytes)
            })
            .await
    }

    /// All placeholder variables templates may reference.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn variables(&self) -> ClientResult<TemplateVariables> {
        self.client
            .get("/chat/templates/variables/", &QueryPairs::new())
            .await
    }

    /// Renders the template against backend sample data.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn preview(&self, id: i64) -> ClientResult<TemplatePreview> {
        self.client
            .get(&format!("/chat/templates/{id}/preview/"), &QueryPairs::new())
            .await
    }
}

fn template_form(body: &UpdateTemplate, file_name: &str, bytes: &[u8]) -> ClientResult<Form> {
    let mut form = Form::new();
    if let Some(name) = &body.name {
        form = form.text("name", name.clone());
    }
    if let Some(text_content) = &body.text_content {
        form = form.text("text_content", text_content.clone());
    }
    if let Some(is_active) = body.is_active {
        form = form.text("is_active", is_active.to_string());
    }
    if let Some(description) = &body.description {
        form = form.text("description", description.clone());
    }
    if let Some(variables) = &body.variables {
        let encoded = serde_json::to_string(variables).map_err(|err| {
            lobbydesk_domain::ClientError::Api {
                status: 0,
                message: err.to_string(),
                body: None,
            }
        })?;
        form = form.text("variables", encoded);
    }
    Ok(form.part("media_file", file_part(file_name, bytes)?))
}
