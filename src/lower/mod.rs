//! Identifier and layout assignment: `CanonicalWorkflow` → `ToolPlan`.
//!
//! One pass over the nodes in input order. Tool ids are dense and 1-based
//! (index + 1); positions are a fixed linear spacing along `x`. The plan is
//! immutable once built, so nothing is renumbered mid-compile.

pub mod graph;

use std::collections::HashMap;

use serde::Serialize;

use crate::ir::types::*;

pub use graph::ToolGraph;

pub const LAYOUT_BASE_X: usize = 54;
pub const LAYOUT_SPACING_X: usize = 150;
pub const LAYOUT_Y: usize = 54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Canvas position for the tool at `index` (0-based).
    pub fn for_index(index: usize) -> Self {
        Position {
            x: LAYOUT_BASE_X + index * LAYOUT_SPACING_X,
            y: LAYOUT_Y,
        }
    }
}

/// What the later stages need to know about a node, keyed by `node_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRef {
    pub tool_id: usize,
    pub kind: Option<ToolKind>,
}

impl ToolRef {
    /// Origin anchor for connections leaving this tool. Unmapped tools use
    /// the default single output.
    pub fn output_anchor(&self) -> &'static str {
        self.kind
            .map(ToolKind::output_anchor)
            .unwrap_or(DEFAULT_OUTPUT_ANCHOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTool {
    pub tool_id: usize,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct ToolPlan {
    /// One entry per node, in input order.
    pub tools: Vec<PlacedTool>,
    by_node_id: HashMap<String, ToolRef>,
}

impl ToolPlan {
    pub fn lookup(&self, node_id: &str) -> Option<ToolRef> {
        self.by_node_id.get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Assign tool ids and positions. A repeated `node_id` maps to its last
/// occurrence; `validate::structural` reports the collision.
pub fn assign(workflow: &CanonicalWorkflow) -> ToolPlan {
    let mut tools = Vec::with_capacity(workflow.nodes.len());
    let mut by_node_id = HashMap::with_capacity(workflow.nodes.len());

    for (index, node) in workflow.nodes.iter().enumerate() {
        let tool_id = index + 1;
        tools.push(PlacedTool {
            tool_id,
            position: Position::for_index(index),
        });
        by_node_id.insert(
            node.node_id.clone(),
            ToolRef {
                tool_id,
                kind: node.kind(),
            },
        );
    }

    ToolPlan { tools, by_node_id }
}
