//! Subscription plan, transaction, and hotel subscription models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{QueryPairs, ToQuery};

/// Kind of subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Time-limited trial.
    Trial,
    /// Paid standard plan.
    Standard,
}

/// How a transaction was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Generated by a subscription purchase.
    Subscription,
    /// Recorded manually by platform staff.
    Manual,
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Awaiting settlement.
    Pending,
    /// Settled.
    Completed,
    /// Settlement failed.
    Failed,
    /// Cancelled before settlement.
    Cancelled,
}

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    /// Plan id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Trial or standard.
    pub plan_type: PlanType,
    /// Price in the platform currency.
    pub price: f64,
    /// Subscription length in days.
    pub duration_days: u32,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether the plan can currently be purchased.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A payment transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction record id.
    pub id: String,
    /// Hotel the transaction belongs to.
    pub hotel: String,
    /// Plan the transaction paid for.
    pub plan: String,
    /// Amount in the platform currency.
    pub amount: f64,
    /// How the transaction was initiated.
    pub transaction_type: TransactionType,
    /// Settlement state.
    pub status: TransactionStatus,
    /// External payment reference.
    #[serde(default)]
    pub transaction_id: String,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// An active or historical subscription of a hotel to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSubscription {
    /// Subscription id.
    pub id: String,
    /// Subscribing hotel.
    pub hotel: String,
    /// Subscribed plan.
    pub plan: String,
    /// Start of the subscription window.
    pub start_date: NaiveDate,
    /// End of the subscription window.
    pub end_date: NaiveDate,
    /// Whether the subscription is currently active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Filters for the plan list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPlansParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
}

impl ToQuery for ListPlansParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs.push_opt("search", self.search.as_deref());
        pairs
    }
}

/// Filters for the transaction list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransactionsParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Filter by hotel id.
    pub hotel: Option<String>,
    /// Filter by plan id.
    pub plan: Option<String>,
    /// Filter by initiation kind.
    pub transaction_type: Option<String>,
    /// Filter by settlement state.
    pub status: Option<String>,
}

impl ToQuery for ListTransactionsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs.push_opt("search", self.search.as_deref());
        pairs.push_opt("hotel", self.hotel.as_deref());
        pairs.push_opt("plan", self.plan.as_deref());
        pairs.push_opt("transaction_type", self.transaction_type.as_deref());
        pairs.push_opt("status", self.status.as_deref());
        pairs
    }
}

/// Filters for the subscription list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionsParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Filter by hotel id.
    pub hotel: Option<String>,
    /// Filter by plan id.
    pub plan: Option<String>,
}

impl ToQuery for ListSubscriptionsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs.push_opt("search", self.search.as_deref());
        pairs.push_opt("hotel", self.hotel.as_deref());
        pairs.push_opt("plan", self.plan.as_deref());
        pairs
    }
}

/// Body for creating a plan.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlan {
    /// Display name.
    pub name: String,
    /// Trial or standard.
    pub plan_type: PlanType,
    /// Price in the platform currency.
    pub price: f64,
    /// Subscription length in days.
    pub duration_days: u32,
    /// Free-text description.
    pub description: String,
    /// Whether the plan can be purchased.
    pub is_active: bool,
}

/// Partial update of a plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePlan {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Trial or standard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,
    /// Price in the platform currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Subscription length in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the plan can be purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for recording a manual transaction.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTransaction {
    /// Hotel the transaction belongs to.
    pub hotel: String,
    /// Plan the transaction pays for.
    pub plan: String,
    /// Amount in the platform currency.
    pub amount: f64,
    /// Always [`TransactionType::Manual`] for staff-recorded entries.
    pub transaction_type: TransactionType,
    /// Settlement state.
    pub status: TransactionStatus,
    /// External payment reference.
    pub transaction_id: String,
    /// Free-text notes.
    pub notes: String,
}

/// Partial update of a transaction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTransaction {
    /// Hotel the transaction belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<String>,
    /// Plan the transaction pays for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Amount in the platform currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// How the transaction was initiated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Settlement state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// External payment reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for the create-subscription action.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubscription {
    /// Subscribing hotel.
    pub hotel: String,
    /// Plan to subscribe to.
    pub plan: String,
}

/// Body for the extend-subscription action.
#[derive(Debug, Clone, Serialize)]
pub struct ExtendSubscription {
    /// Hotel whose subscription is extended.
    pub hotel: String,
    /// Days to add; the backend default applies when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

/// Partial update of a subscription record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSubscription {
    /// Subscribing hotel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<String>,
    /// Subscribed plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Start of the subscription window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// End of the subscription window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Whether the subscription is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
