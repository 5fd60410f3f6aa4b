//! petgraph view over the resolvable connections of a plan.
//!
//! Graph node `i` is tool `i + 1`. Edge weights are the index of the
//! originating connection in the workflow.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use super::ToolPlan;
use crate::ir::types::Connection;

pub struct ToolGraph {
    graph: DiGraph<usize, usize>,
}

impl ToolGraph {
    /// Build the graph. Connections with an unknown endpoint are left out;
    /// the resolver reports them.
    pub fn build(plan: &ToolPlan, connections: &[Connection]) -> Self {
        let mut graph = DiGraph::with_capacity(plan.len(), connections.len());

        for tool in &plan.tools {
            graph.add_node(tool.tool_id);
        }

        for (index, conn) in connections.iter().enumerate() {
            if let (Some(from), Some(to)) = (plan.lookup(&conn.from), plan.lookup(&conn.to)) {
                graph.add_edge(
                    Self::node_index(from.tool_id),
                    Self::node_index(to.tool_id),
                    index,
                );
            }
        }

        ToolGraph { graph }
    }

    fn node_index(tool_id: usize) -> NodeIndex {
        NodeIndex::new(tool_id - 1)
    }

    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::types::*;
    use crate::ir::validate::decode_tool_config;
    use crate::lower::assign;

    fn workflow(ids: &[&str], edges: &[(&str, &str)]) -> CanonicalWorkflow {
        CanonicalWorkflow {
            metadata: WorkflowMetadata::default(),
            nodes: ids
                .iter()
                .map(|id| Node {
                    node_id: id.to_string(),
                    schema_id: "Formula".into(),
                    acl_source: String::new(),
                    config: decode_tool_config("Formula", None),
                })
                .collect(),
            connections: edges
                .iter()
                .map(|(from, to)| Connection {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
            unmapped_acl: vec![],
        }
    }

    fn graph_for(wf: &CanonicalWorkflow) -> ToolGraph {
        ToolGraph::build(&assign(wf), &wf.connections)
    }

    #[test]
    fn dangling_edges_are_left_out() {
        let wf = workflow(&["a", "b"], &[("a", "b"), ("a", "zz")]);
        let g = graph_for(&wf);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.is_cyclic());
    }

    #[test]
    fn detects_cycles() {
        let acyclic = workflow(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("a", "c")]);
        assert!(!graph_for(&acyclic).is_cyclic());

        let cyclic = workflow(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert!(graph_for(&cyclic).is_cyclic());

        let self_loop = workflow(&["a"], &[("a", "a")]);
        assert!(graph_for(&self_loop).is_cyclic());
    }
}
