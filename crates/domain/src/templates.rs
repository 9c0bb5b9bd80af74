//! Chat message template models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::{QueryPairs, ToQuery};

/// A reusable chat message template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Kind of template (welcome, checkout, …).
    pub template_type: String,
    /// Message text with `{variable}` placeholders.
    #[serde(default)]
    pub text_content: String,
    /// Stored media file path, if any.
    #[serde(default)]
    pub media_file: Option<String>,
    /// Original media file name.
    #[serde(default)]
    pub media_filename: Option<String>,
    /// Public media URL.
    #[serde(default)]
    pub media_url: Option<String>,
    /// Whether hotels may customize this template.
    #[serde(default)]
    pub is_customizable: bool,
    /// Whether the template is active.
    pub is_active: bool,
    /// Placeholder names used in the text.
    #[serde(default)]
    pub variables: Vec<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Filters for the template list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTemplatesParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Filter by template kind.
    pub template_type: Option<String>,
    /// Filter by active flag.
    pub is_active: Option<bool>,
}

impl ToQuery for ListTemplatesParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("page", self.page);
        pairs.push_opt("page_size", self.page_size);
        pairs.push_opt("search", self.search.as_deref());
        pairs.push_opt("template_type", self.template_type.as_deref());
        pairs.push_opt("is_active", self.is_active);
        pairs
    }
}

/// Partial update of a template's text fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTemplate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Placeholder names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A placeholder variable available to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Placeholder name.
    pub name: String,
    /// Backend model the value comes from.
    pub model: String,
    /// Field on that model.
    pub field: String,
    /// Human description.
    #[serde(default)]
    pub description: String,
}

/// Response of the template variables endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariables {
    /// All available variables.
    pub variables: Vec<TemplateVariable>,
    /// Variables grouped by source model.
    #[serde(default)]
    pub grouped_by_model: BTreeMap<String, Vec<TemplateVariable>>,
    /// Total variable count.
    pub total_count: u64,
}

/// Response of the template preview endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePreview {
    /// Template id.
    pub template_id: i64,
    /// Template name.
    pub template_name: String,
    /// Template kind.
    pub template_type: String,
    /// The text with sample data substituted.
    pub rendered_content: String,
    /// Sample data used for rendering.
    #[serde(default)]
    pub sample_data: Value,
    /// Public media URL, if the template carries media.
    #[serde(default)]
    pub media_url: Option<String>,
    /// Original media file name.
    #[serde(default)]
    pub media_filename: Option<String>,
}
