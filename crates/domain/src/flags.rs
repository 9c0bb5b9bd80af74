//! Guest flag models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{QueryPairs, ToQuery};

/// A flag raised against a guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    /// Flag id.
    pub id: i64,
    /// Note visible across all hotels.
    #[serde(default)]
    pub global_note: String,
    /// Whether the flag originates from a police report.
    #[serde(default)]
    pub flagged_by_police: bool,
    /// Where the flag came from.
    #[serde(default)]
    pub source: String,
    /// Who raised the flag.
    #[serde(default)]
    pub flagged_by: String,
    /// When the flag was raised.
    pub flagged_date: DateTime<Utc>,
    /// Hotel associated with the flag, if any.
    #[serde(default)]
    pub hotel_name: Option<String>,
    /// Internal guest rating at the flagged stay.
    #[serde(default)]
    pub internal_rating: Option<f64>,
}

/// Filters for the flag list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFlagsParams {
    /// Restrict to one guest.
    pub guest_id: Option<i64>,
    /// Restrict to one hotel.
    pub hotel_id: Option<i64>,
    /// Only flags that have not been reset.
    pub active_only: Option<bool>,
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
}

impl ToQuery for ListFlagsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("guest_id", self.guest_id);
        pairs.push_opt("hotel_id", self.hotel_id);
        pairs.push_opt("active_only", self.active_only);
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs
    }
}

/// Body for creating a flag.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFlag {
    /// Guest being flagged.
    pub guest_id: i64,
    /// Stay the flag relates to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_id: Option<i64>,
    /// Hotel-internal reason, not shared globally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_reason: Option<String>,
    /// Note visible across all hotels.
    pub global_note: String,
    /// Whether the flag originates from a police report.
    pub flagged_by_police: bool,
}

/// Body for the flag reset action.
#[derive(Debug, Clone, Serialize)]
pub struct ResetFlag {
    /// Why the flag is being reset.
    pub reset_reason: String,
}

/// Result of checking a single guest for active flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestFlagCheck {
    /// Whether the guest carries any active flag.
    pub is_flagged: bool,
    /// Whether any active flag is police-sourced.
    pub police_flagged: bool,
    /// The active flags.
    #[serde(default)]
    pub flags: Vec<Flag>,
}

/// A past stay included in guest search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestStay {
    /// Stay id.
    pub id: i64,
    /// Hotel where the guest stayed.
    pub hotel_name: String,
    /// Check-in date.
    pub check_in_date: chrono::NaiveDate,
    /// Check-out date.
    #[serde(default)]
    pub check_out_date: Option<chrono::NaiveDate>,
    /// Stay status.
    #[serde(default)]
    pub status: String,
    /// Rating the hotel gave the guest.
    #[serde(default)]
    pub internal_rating: Option<f64>,
}

/// One guest in the guest search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestSearchResult {
    /// Guest id.
    pub id: i64,
    /// Guest full name.
    pub full_name: String,
    /// WhatsApp contact number.
    #[serde(default)]
    pub whatsapp_number: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Government register number.
    #[serde(default)]
    pub register_number: String,
    /// Nationality.
    #[serde(default)]
    pub nationality: String,
    /// Guest status.
    #[serde(default)]
    pub status: String,
    /// Loyalty point balance.
    #[serde(default)]
    pub loyalty_points: i64,
    /// Recent stays.
    #[serde(default)]
    pub recent_stays: Vec<GuestStay>,
    /// Number of active flags.
    #[serde(default)]
    pub active_flags_count: u32,
}

/// Response of the guest search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestSearchResponse {
    /// The query that produced these results.
    pub query: String,
    /// Number of matched guests.
    pub count: u64,
    /// Matched guests.
    pub results: Vec<GuestSearchResult>,
}
