//! Hotel administration endpoints.

use reqwest::multipart::Form;
use serde_json::json;

use lobbydesk_domain::hotel::{
    CreateHotel, DocumentUpload, Hotel, HotelDocument, ListHotelsParams, RejectHotel, UpdateHotel,
    VerifyHotel,
};
use lobbydesk_domain::{ClientResult, Page, QueryPairs, ToQuery};

use super::file_part;
use crate::client::ApiClient;

/// Facade over `/admin/hotels/`.
pub struct HotelsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Hotel administration endpoints.
    #[must_use]
    pub const fn hotels(&self) -> HotelsApi<'_> {
        HotelsApi { client: self }
    }
}

impl HotelsApi<'_> {
    /// Lists hotels with the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`](lobbydesk_domain::ClientError::Api)
    /// on backend or transport failure.
    pub async fn list(&self, params: &ListHotelsParams) -> ClientResult<Page<Hotel>> {
        self.client
            .get_page("/admin/hotels/", &params.to_query())
            .await
    }

    /// Fetches a single hotel with its admin and documents.
    ///
    /// # Errors
    ///
    /// Returns an API error, 404 included, as `ClientError::Api`.
    pub async fn get(&self, id: &str) -> ClientResult<Hotel> {
        self.client
            .get(&format!("/admin/hotels/{id}/"), &QueryPairs::new())
            .await
    }

    /// Free-text hotel search, first page of twenty results.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn search(&self, query: &str) -> ClientResult<Page<Hotel>> {
        let params = ListHotelsParams {
            page: Some(1),
            page_size: Some(20),
            search: Some(query.to_owned()),
            ..ListHotelsParams::default()
        };
        self.list(&params).await
    }

    /// Registers a new hotel.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn create(&self, body: &CreateHotel) -> ClientResult<Hotel> {
        self.client.post("/admin/create-hotel/", body).await
    }

    /// Partially updates a hotel record.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update(&self, id: &str, body: &UpdateHotel) -> ClientResult<Hotel> {
        self.client
            .patch(&format!("/admin/hotels/{id}/"), body)
            .await
    }

    /// Approves a pending hotel registration.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn verify(&self, id: &str, body: &VerifyHotel) -> ClientResult<Hotel> {
        self.client
            .post(&format!("/admin/hotels/{id}/verify/"), body)
            .await
    }

    /// Rejects a pending hotel registration.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn reject(&self, id: &str, body: &RejectHotel) -> ClientResult<Hotel> {
        self.client
            .post(&format!("/admin/hotels/{id}/reject/"), body)
            .await
    }

    /// Flips the hotel's active flag.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn toggle_active(&self, id: &str) -> ClientResult<Hotel> {
        self.client
            .post(&format!("/admin/hotels/{id}/toggle-active/"), &json!({}))
            .await
    }

    /// Uploads a new verification document.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn upload_document(
        &self,
        id: &str,
        document: &DocumentUpload,
    ) -> ClientResult<HotelDocument> {
        let path = format!(
            "/admin/hotels/{id}/documents/{}/",
            document.document_type
        );
        self.client
            .post_multipart(&path, &|| document_form(document))
            .await
    }

    /// Replaces the stored document of the upload's type.
    ///
    /// # Errors
    ///
    /// Returns an API error as `ClientError::Api`.
    pub async fn update_document_by_type(
        &self,
        id: &str,
        document: &DocumentUpload,
    ) -> ClientResult<HotelDocument> {
        let path = format!("/admin/hotels/{id}/documents/update-by-type/");
        self.client
            .patch_multipart(&path, &|| document_form(document))
            .await
    }
}

fn document_form(document: &DocumentUpload) -> ClientResult<Form> {
    Ok(Form::new()
        .text("document_type", document.document_type.clone())
        .part("file", file_part(&document.file_name, &document.bytes)?))
}
