//! Conversational flow template models and diagram layout.

mod layout;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use layout::{
    BRANCH_SPACING, CHILD_SPACING, Position, ROOT_ANCHOR, ROW_SPACING, calculate_positions,
    calculate_positions_from,
};

use crate::query::{QueryPairs, ToQuery};

/// Identifier of a flow step.
pub type StepId = i64;

/// A conversational flow template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTemplate {
    /// Template id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Keyword that starts this flow in a conversation.
    #[serde(default)]
    pub trigger_keyword: String,
}

/// Body for creating a flow template.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFlowTemplate {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Keyword that starts this flow.
    pub trigger_keyword: String,
}

/// Partial update of a flow template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFlowTemplate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keyword that starts this flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_keyword: Option<String>,
}

/// One step of a conversational flow.
///
/// A step sends a message and routes the conversation onward: either through
/// `conditional_next_steps` (reply → next step) or through the single
/// `next_step_template` default link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    /// Step id.
    pub id: StepId,
    /// Owning flow template.
    pub flow_template: i64,
    /// Step name shown in the editor.
    pub step_name: String,
    /// Message kind (text, quick reply, list message).
    #[serde(default)]
    pub message_type: String,
    /// Message text with placeholders.
    #[serde(default)]
    pub message_template: String,
    /// Ordering within the template.
    #[serde(default)]
    pub order: i32,
    /// Reply options presented to the guest, keyed by option id.
    #[serde(default)]
    pub options: Option<BTreeMap<String, String>>,
    /// Branch routing: reply condition → next step id.
    #[serde(default)]
    pub conditional_next_steps: Option<BTreeMap<String, StepId>>,
    /// Default next step when no condition matches.
    #[serde(default)]
    pub next_step_template: Option<StepId>,
    /// Flow categories this step may appear in.
    #[serde(default)]
    pub allowed_flow_categories: Option<Vec<String>>,
}

impl FlowStep {
    /// Iterates over the outgoing conditional edges, in condition order.
    pub fn conditional_edges(&self) -> impl Iterator<Item = (&str, StepId)> {
        self.conditional_next_steps
            .iter()
            .flatten()
            .map(|(condition, id)| (condition.as_str(), *id))
    }
}

/// Body for creating a flow step.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFlowStep {
    /// Owning flow template.
    pub flow_template: i64,
    /// Step name.
    pub step_name: String,
    /// Message kind.
    pub message_type: String,
    /// Message text.
    pub message_template: String,
    /// Ordering within the template.
    pub order: i32,
    /// Reply options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    /// Branch routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_next_steps: Option<BTreeMap<String, StepId>>,
    /// Default next step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step_template: Option<StepId>,
    /// Allowed flow categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_flow_categories: Option<Vec<String>>,
}

/// Partial update of a flow step.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFlowStep {
    /// Owning flow template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_template: Option<i64>,
    /// Step name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_name: Option<String>,
    /// Message kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_template: Option<String>,
    /// Ordering within the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    /// Reply options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    /// Branch routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_next_steps: Option<BTreeMap<String, StepId>>,
    /// Default next step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step_template: Option<StepId>,
    /// Allowed flow categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_flow_categories: Option<Vec<String>>,
}

/// Filter for listing flow steps of one template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFlowStepsParams {
    /// Restrict to one flow template.
    pub flow_template: Option<i64>,
}

impl ToQuery for ListFlowStepsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("flow_template", self.flow_template);
        pairs
    }
}

/// A side effect attached to a flow step (notify staff, create ticket, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAction {
    /// Action id.
    pub id: i64,
    /// Step this action fires on.
    pub flow_step_template: i64,
    /// Display name.
    pub name: String,
    /// Kind of action.
    pub action_type: String,
    /// Action-specific configuration.
    #[serde(default)]
    pub config: Value,
}

/// Body for creating a flow action.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFlowAction {
    /// Step this action fires on.
    pub flow_step_template: i64,
    /// Display name.
    pub name: String,
    /// Kind of action.
    pub action_type: String,
    /// Action-specific configuration.
    pub config: Value,
}

/// Partial update of a flow action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFlowAction {
    /// Step this action fires on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_step_template: Option<i64>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kind of action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// Action-specific configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// Filter for listing actions of one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFlowActionsParams {
    /// Restrict to one flow step.
    pub flow_step_template: Option<i64>,
}

impl ToQuery for ListFlowActionsParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("flow_step_template", self.flow_step_template);
        pairs
    }
}

/// Partial update of a hotel's flow configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateHotelFlowConfiguration {
    /// Whether the flow is enabled for the hotel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Hotel-specific overrides, raw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<Value>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    // Through the module re-exports, as downstream users reach them.
    use crate::flow::{FlowStep, Position, ROOT_ANCHOR, calculate_positions_from};

    fn chain_step(id: super::StepId, next: Option<super::StepId>) -> FlowStep {
        FlowStep {
            id,
            flow_template: 1,
            step_name: format!("step {id}"),
            message_type: "text".to_owned(),
            message_template: String::new(),
            order: 0,
            options: None,
            conditional_next_steps: None,
            next_step_template: next,
            allowed_flow_categories: None,
        }
    }

    #[test]
    fn test_explicit_root_hint_is_reachable_via_reexport() {
        let steps = vec![chain_step(7, None), chain_step(3, Some(7))];
        let positions = calculate_positions_from(&steps, Some(3));

        assert_eq!(positions.get(&3), Some(&ROOT_ANCHOR));
        assert_eq!(positions.get(&7), Some(&Position { x: 500, y: 250 }));
    }
}
