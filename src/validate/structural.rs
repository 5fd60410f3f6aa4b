//! Graph-level structural rules (W003–W004).
//!
//! Both rules are recoverable: they describe input the compiler can still
//! render deterministically.

use std::collections::HashMap;

use crate::diagnostics::{Diagnostics, Warning};
use crate::ir::types::CanonicalWorkflow;
use crate::lower::ToolGraph;

pub fn validate_structural(
    workflow: &CanonicalWorkflow,
    graph: &ToolGraph,
    diagnostics: &mut Diagnostics,
) {
    w003_duplicate_node_ids(workflow, diagnostics);
    w004_no_cycles(graph, diagnostics);
}

fn w003_duplicate_node_ids(workflow: &CanonicalWorkflow, diagnostics: &mut Diagnostics) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (index, node) in workflow.nodes.iter().enumerate() {
        let tool_id = index + 1;
        if let Some(&first_tool_id) = first_seen.get(node.node_id.as_str()) {
            diagnostics.warn(Warning::DuplicateNodeId {
                node_id: node.node_id.clone(),
                first_tool_id,
                tool_id,
            });
        } else {
            first_seen.insert(&node.node_id, tool_id);
        }
    }
}

fn w004_no_cycles(graph: &ToolGraph, diagnostics: &mut Diagnostics) {
    if graph.is_cyclic() {
        diagnostics.warn(Warning::CyclicConnections);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::validate_workflow;
    use crate::lower::assign;
    use serde_json::json;

    fn run(value: serde_json::Value) -> Vec<Warning> {
        let wf = validate_workflow(&value).unwrap();
        let graph = ToolGraph::build(&assign(&wf), &wf.connections);
        let mut diags = Diagnostics::new();
        validate_structural(&wf, &graph, &mut diags);
        diags.into_warnings()
    }

    #[test]
    fn clean_workflow_has_no_warnings() {
        let warnings = run(json!({
            "nodes": [
                { "node_id": "N1", "schema_id": "Input" },
                { "node_id": "N2", "schema_id": "Output" },
            ],
            "connections": [{ "from": "N1", "to": "N2" }],
        }));
        assert!(warnings.is_empty());
    }

    #[test]
    fn each_repeat_is_reported_against_first_occurrence() {
        let warnings = run(json!({
            "nodes": [
                { "node_id": "N1", "schema_id": "Input" },
                { "node_id": "N1", "schema_id": "Filter" },
                { "node_id": "N1", "schema_id": "Output" },
            ],
            "connections": [],
        }));
        assert_eq!(
            warnings,
            vec![
                Warning::DuplicateNodeId {
                    node_id: "N1".into(),
                    first_tool_id: 1,
                    tool_id: 2,
                },
                Warning::DuplicateNodeId {
                    node_id: "N1".into(),
                    first_tool_id: 1,
                    tool_id: 3,
                },
            ]
        );
    }

    #[test]
    fn cycle_is_a_warning() {
        let warnings = run(json!({
            "nodes": [
                { "node_id": "A", "schema_id": "Formula" },
                { "node_id": "B", "schema_id": "Formula" },
            ],
            "connections": [{ "from": "A", "to": "B" }, { "from": "B", "to": "A" }],
        }));
        assert_eq!(warnings, vec![Warning::CyclicConnections]);
    }
}
