//! Diagram auto-layout for conversational flows.
//!
//! Pure, deterministic pass that assigns every step of a flow template an
//! (x, y) position for rendering. The shape is a top-down tree: the entry
//! step sits at a fixed anchor, branching steps fan their children out
//! horizontally, linear steps continue straight down, and anything the walk
//! never reaches is stacked in a fallback column.

use std::collections::{BTreeMap, BTreeSet};

use super::{FlowStep, StepId};

/// A node position in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// Where the entry step is anchored.
pub const ROOT_ANCHOR: Position = Position { x: 500, y: 50 };
/// Horizontal spacing between top-level branches.
pub const BRANCH_SPACING: i32 = 400;
/// Horizontal spacing between children of an interior branching step.
pub const CHILD_SPACING: i32 = 250;
/// Vertical spacing between consecutive steps in a linear run.
pub const ROW_SPACING: i32 = 150;

/// Vertical anchor of the top-level branch row.
const BRANCH_START_Y: i32 = 250;
/// Extra drop applied when recursing into a fanned-out child.
const RECURSE_DROP: i32 = 100;
/// Column for steps the walk never reached.
const FALLBACK_X: i32 = 250;
/// Vertical stacking of the fallback column.
const FALLBACK_ROW: i32 = 200;

/// Computes positions for every step, rooting the walk at the step with no
/// incoming edges (falling back to the first step).
#[must_use]
pub fn calculate_positions(steps: &[FlowStep]) -> BTreeMap<StepId, Position> {
    calculate_positions_from(steps, None)
}

/// Computes positions for every step, rooting the walk at `root` when it
/// names a known step.
#[must_use]
pub fn calculate_positions_from(
    steps: &[FlowStep],
    root: Option<StepId>,
) -> BTreeMap<StepId, Position> {
    let mut positions = BTreeMap::new();
    let Some(first) = steps.first() else {
        return positions;
    };

    let step_map: BTreeMap<StepId, &FlowStep> = steps.iter().map(|s| (s.id, s)).collect();

    let root = root
        .and_then(|id| step_map.get(&id).copied())
        .or_else(|| {
            let mut has_incoming = BTreeSet::new();
            for step in steps {
                for (_, target) in step.conditional_edges() {
                    has_incoming.insert(target);
                }
                if let Some(target) = step.next_step_template {
                    has_incoming.insert(target);
                }
            }
            steps.iter().find(|s| !has_incoming.contains(&s.id))
        })
        .unwrap_or(first);

    positions.insert(root.id, ROOT_ANCHOR);

    let branch_roots: Vec<StepId> = root
        .conditional_edges()
        .map(|(_, id)| id)
        .filter(|id| step_map.contains_key(id))
        .collect();

    if branch_roots.len() > 1 {
        // Fan the top-level branches out around the anchor column.
        let start_x = ROOT_ANCHOR.x - (branch_roots.len() as i32 - 1) * BRANCH_SPACING / 2;
        for (index, id) in branch_roots.iter().enumerate() {
            position_branch(
                *id,
                start_x + index as i32 * BRANCH_SPACING,
                BRANCH_START_Y,
                &mut positions,
                &step_map,
            );
        }
    } else if let [only] = branch_roots[..] {
        position_branch(only, ROOT_ANCHOR.x, BRANCH_START_Y, &mut positions, &step_map);
    } else if let Some(next) = root.next_step_template
        && step_map.contains_key(&next)
    {
        position_branch(next, ROOT_ANCHOR.x, BRANCH_START_Y, &mut positions, &step_map);
    }

    // Disconnected steps stack up in the fallback column, discovery order.
    for step in steps {
        if !positions.contains_key(&step.id) {
            let y = positions.len() as i32 * FALLBACK_ROW;
            positions.insert(step.id, Position { x: FALLBACK_X, y });
        }
    }

    positions
}

/// Walks one branch downward, fanning out at multi-condition steps.
///
/// A step already positioned within this walk is never revisited, so cyclic
/// links (a "back to main menu" edge) terminate instead of looping.
fn position_branch(
    start: StepId,
    start_x: i32,
    start_y: i32,
    positions: &mut BTreeMap<StepId, Position>,
    step_map: &BTreeMap<StepId, &FlowStep>,
) {
    let mut current = start;
    let mut x = start_x;
    let mut y = start_y;
    let mut walked = BTreeSet::new();

    while walked.insert(current) {
        positions.insert(current, Position { x, y });

        let Some(step) = step_map.get(&current) else {
            break;
        };

        let edges: Vec<StepId> = step.conditional_edges().map(|(_, id)| id).collect();

        if edges.len() > 1 {
            let children_start_x = x - (edges.len() as i32 - 1) * CHILD_SPACING / 2;
            for (index, child) in edges.iter().enumerate() {
                if step_map.contains_key(child) && !positions.contains_key(child) {
                    let child_x = children_start_x + index as i32 * CHILD_SPACING;
                    let child_y = y + ROW_SPACING;
                    positions.insert(*child, Position { x: child_x, y: child_y });
                    position_branch(*child, child_x, child_y + RECURSE_DROP, positions, step_map);
                }
            }
            break;
        }

        if let [next] = edges[..]
            && step_map.contains_key(&next)
            && !positions.contains_key(&next)
        {
            current = next;
            y += ROW_SPACING;
            continue;
        }

        if let Some(next) = step.next_step_template
            && step_map.contains_key(&next)
            && !positions.contains_key(&next)
        {
            current = next;
            y += ROW_SPACING;
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(id: StepId, conditions: &[(&str, StepId)], next: Option<StepId>) -> FlowStep {
        FlowStep {
            id,
            flow_template: 1,
            step_name: format!("step {id}"),
            message_type: "text".to_owned(),
            message_template: String::new(),
            order: 0,
            options: None,
            conditional_next_steps: if conditions.is_empty() {
                None
            } else {
                Some(
                    conditions
                        .iter()
                        .map(|(c, id)| ((*c).to_owned(), *id))
                        .collect(),
                )
            },
            next_step_template: next,
            allowed_flow_categories: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_positions(&[]).is_empty());
    }

    #[test]
    fn test_root_fans_three_branches_horizontally() {
        let steps = vec![
            step(10, &[("1", 11), ("2", 12), ("3", 13)], None),
            step(11, &[], None),
            step(12, &[], None),
            step(13, &[], None),
        ];
        let positions = calculate_positions(&steps);

        assert_eq!(positions[&10], ROOT_ANCHOR);
        // Three children on one row, centered under the root.
        assert_eq!(positions[&11], Position { x: 100, y: BRANCH_START_Y });
        assert_eq!(positions[&12], Position { x: 500, y: BRANCH_START_Y });
        assert_eq!(positions[&13], Position { x: 900, y: BRANCH_START_Y });
    }

    #[test]
    fn test_root_is_node_without_incoming_edges() {
        let steps = vec![
            step(2, &[], Some(3)),
            step(1, &[("*", 2)], None),
            step(3, &[], None),
        ];
        let positions = calculate_positions(&steps);
        assert_eq!(positions[&1], ROOT_ANCHOR);
    }

    #[test]
    fn test_explicit_root_hint_wins() {
        let steps = vec![step(1, &[], Some(2)), step(2, &[], None)];
        let positions = calculate_positions_from(&steps, Some(2));
        assert_eq!(positions[&2], ROOT_ANCHOR);
    }

    #[test]
    fn test_linear_chain_continues_downward() {
        let steps = vec![
            step(1, &[("*", 2)], None),
            step(2, &[], Some(3)),
            step(3, &[], None),
        ];
        let positions = calculate_positions(&steps);
        assert_eq!(positions[&2], Position { x: 500, y: BRANCH_START_Y });
        assert_eq!(
            positions[&3],
            Position { x: 500, y: BRANCH_START_Y + ROW_SPACING }
        );
    }

    #[test]
    fn test_cycle_back_to_root_terminates_without_repositioning() {
        // 1 -> 2 -> 1: the return edge must not move the root or loop.
        let steps = vec![step(1, &[("*", 2)], None), step(2, &[("1", 1)], None)];
        let positions = calculate_positions(&steps);
        assert_eq!(positions[&1], ROOT_ANCHOR);
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn test_cycle_within_branch_terminates() {
        // 2 and 3 reference each other.
        let steps = vec![
            step(1, &[("a", 2), ("b", 4)], None),
            step(2, &[("*", 3)], None),
            step(3, &[("*", 2)], None),
            step(4, &[], None),
        ];
        let positions = calculate_positions(&steps);
        assert_eq!(positions.len(), 4);
        // 3 sits one row below 2 and the back edge leaves both in place.
        assert_eq!(positions[&3].y, positions[&2].y + ROW_SPACING);
    }

    #[test]
    fn test_disconnected_steps_fall_back_to_side_column() {
        let steps = vec![
            step(1, &[("*", 2)], None),
            step(2, &[], None),
            step(99, &[], None),
        ];
        let positions = calculate_positions(&steps);
        assert_eq!(positions[&99], Position { x: FALLBACK_X, y: 2 * FALLBACK_ROW });
    }

    #[test]
    fn test_interior_branch_fans_children() {
        // 1 -> 2 (linear), 2 branches to 3 and 4.
        let steps = vec![
            step(1, &[("*", 2)], None),
            step(2, &[("a", 3), ("b", 4)], None),
            step(3, &[], None),
            step(4, &[], None),
        ];
        let positions = calculate_positions(&steps);
        let parent = positions[&2];
        // Children share a row and are spaced symmetrically around the parent.
        assert_eq!(positions[&3].y, positions[&4].y);
        assert_eq!(positions[&4].x - positions[&3].x, CHILD_SPACING);
        assert_eq!(positions[&3].x + positions[&4].x, 2 * parent.x);
    }
}
