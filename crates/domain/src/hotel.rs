//! Hotel resource models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{QueryPairs, ToQuery};

/// Verification lifecycle of a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelStatus {
    /// Registered, awaiting verification.
    Pending,
    /// Verified by platform staff.
    Verified,
    /// Temporarily suspended.
    Suspended,
    /// Verification rejected.
    Rejected,
}

/// A document uploaded during hotel registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelDocument {
    /// Document id.
    pub id: String,
    /// Kind of document (license, registration, other).
    pub document_type: String,
    /// URL of the stored file.
    pub document_file: String,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
    /// Owning hotel id.
    pub hotel: String,
}

/// The hotel's administrator account, embedded in hotel detail responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelAdmin {
    /// User id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Role string as reported by the backend.
    pub user_type: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// A hotel registered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Hotel id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State or region.
    #[serde(default)]
    pub state: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Postal code.
    #[serde(default)]
    pub pincode: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Verification lifecycle state.
    pub status: HotelStatus,
    /// Whether verification has completed.
    pub is_verified: bool,
    /// Whether the hotel is currently active.
    pub is_active: bool,
    /// Whether this is a demo hotel.
    #[serde(default)]
    pub is_demo: bool,
    /// Notes recorded during verification or rejection.
    #[serde(default)]
    pub verification_notes: String,
    /// When the hotel registered.
    pub registration_date: DateTime<Utc>,
    /// When the hotel was verified, if it was.
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// The administrator account, present on detail responses.
    #[serde(default)]
    pub admin: Option<HotelAdmin>,
    /// Registration documents, present on detail responses.
    #[serde(default)]
    pub documents: Vec<HotelDocument>,
}

/// Filters for the hotel list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListHotelsParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Filter by lifecycle status.
    pub status: Option<String>,
    /// Filter by city.
    pub city: Option<String>,
    /// Filter by country.
    pub country: Option<String>,
    /// Filter by verification flag.
    pub is_verified: Option<bool>,
    /// Filter by active flag.
    pub is_active: Option<bool>,
    /// Free-text search.
    pub search: Option<String>,
}

impl ToQuery for ListHotelsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs.push_opt("status", self.status.as_deref());
        pairs.push_opt("city", self.city.as_deref());
        pairs.push_opt("country", self.country.as_deref());
        pairs.push_opt("is_verified", self.is_verified);
        pairs.push_opt("is_active", self.is_active);
        pairs.push_opt("search", self.search.as_deref());
        pairs
    }
}

/// Body for the hotel verify action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyHotel {
    /// Optional verification notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for the hotel reject action. Notes are mandatory on rejection.
#[derive(Debug, Clone, Serialize)]
pub struct RejectHotel {
    /// Reason for rejecting the registration.
    pub notes: String,
}

/// Body for creating a hotel together with its admin account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateHotel {
    /// Hotel display name.
    pub hotel_name: String,
    /// Admin contact email.
    pub email: String,
    /// Admin login name.
    pub username: String,
    /// Admin password.
    pub password: String,
    /// Admin phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Admin given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Admin family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Partial update of hotel profile fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateHotel {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Google review link shown to guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_review_link: Option<String>,
    /// Latitude of the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude of the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Check-in time, `HH:MM` local.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    /// IANA time zone of the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// A file staged for a document upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    /// Kind of document (license, registration, other).
    pub document_type: String,
    /// Original file name, used for MIME guessing.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_params_skip_unset_filters() {
        let params = ListHotelsParams {
            page: Some(3),
            search: Some("sea view".to_owned()),
            is_active: Some(false),
            ..ListHotelsParams::default()
        };
        assert_eq!(
            params.to_query().as_slice(),
            &[
                ("page".to_owned(), "3".to_owned()),
                ("is_active".to_owned(), "false".to_owned()),
                ("search".to_owned(), "sea view".to_owned()),
            ]
        );
    }

    #[test]
    fn test_update_body_omits_unset_fields() {
        let body = serde_json::to_value(UpdateHotel {
            city: Some("Kochi".to_owned()),
            ..UpdateHotel::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"city": "Kochi"}));
    }
}
