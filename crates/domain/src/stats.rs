//! Statistics dashboard models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::{QueryPairs, ToQuery};

/// The reporting window a statistics response covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPeriod {
    /// First day of the window.
    pub start_date: NaiveDate,
    /// Last day of the window.
    pub end_date: NaiveDate,
}

/// Optional reporting window for statistics requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatWindow {
    /// First day of the window.
    pub start_date: Option<NaiveDate>,
    /// Last day of the window.
    pub end_date: Option<NaiveDate>,
}

impl ToQuery for StatWindow {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("start_date", self.start_date);
        pairs.push_opt("end_date", self.end_date);
        pairs
    }
}

/// Hotel counts by lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelCounts {
    /// All hotels.
    pub total: u64,
    /// Registered in the window.
    #[serde(default)]
    pub registered: u64,
    /// Verified hotels.
    pub verified: u64,
    /// Hotels awaiting verification.
    pub unverified: u64,
    /// Deactivated hotels.
    pub inactive: u64,
    /// Suspended hotels.
    pub suspended: u64,
    /// Rejected registrations.
    pub rejected: u64,
}

/// Conversation counts by state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationCounts {
    /// All conversations.
    pub total: u64,
    /// Currently active.
    pub active: u64,
    /// Closed.
    pub closed: u64,
    /// Archived.
    pub archived: u64,
    /// Marked fulfilled.
    pub fulfilled: u64,
}

/// Revenue summary figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueCounts {
    /// Total revenue as a decimal string.
    pub total_revenue: String,
    /// Settled transactions.
    pub completed_transactions: u64,
    /// Pending transactions.
    pub pending_transactions: u64,
    /// Failed transactions.
    pub failed_transactions: u64,
    /// Currently active subscriptions.
    pub active_subscriptions: u64,
}

/// Response of the overview statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Window the figures cover.
    pub period: StatPeriod,
    /// Hotel figures.
    pub hotels: HotelCounts,
    /// Conversation figures.
    pub conversations: ConversationCounts,
    /// Revenue figures.
    pub revenue: RevenueCounts,
}

/// One hotel row in the hotel statistics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelStatRow {
    /// Hotel id.
    pub id: String,
    /// Hotel name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Lifecycle status string.
    pub status: String,
    /// Verification flag.
    pub is_verified: bool,
    /// Active flag.
    pub is_active: bool,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Country.
    #[serde(default)]
    pub country: String,
}

/// Response of the hotel statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelStats {
    /// Window the figures cover.
    pub period: StatPeriod,
    /// Aggregate counts.
    pub summary: HotelCounts,
    /// Per-hotel rows.
    #[serde(default)]
    pub data: Vec<HotelStatRow>,
}

/// One conversation row in the conversation statistics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStatRow {
    /// Conversation id.
    pub id: String,
    /// Hotel the conversation belongs to.
    pub hotel_name: String,
    /// Guest name.
    #[serde(default)]
    pub guest_name: String,
    /// Conversation state.
    pub status: String,
    /// Kind of conversation.
    #[serde(default)]
    pub conversation_type: String,
    /// Number of messages exchanged.
    #[serde(default)]
    pub message_count: u64,
    /// Whether the request was fulfilled.
    #[serde(default)]
    pub is_fulfilled: bool,
}

/// Response of the conversation statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStats {
    /// Window the figures cover.
    pub period: StatPeriod,
    /// Aggregate counts.
    pub summary: ConversationCounts,
    /// Per-conversation rows.
    #[serde(default)]
    pub data: Vec<ConversationStatRow>,
}

/// Response of the payment statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStats {
    /// Window the figures cover.
    pub period: StatPeriod,
    /// Aggregate revenue figures.
    pub summary: RevenueCounts,
    /// Per-transaction rows, raw.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}
