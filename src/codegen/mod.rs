//! Codegen pass: validated workflow + tool plan → `.yxmd` document text.
//!
//! Public API: `codegen(workflow, plan, diagnostics) -> String`

mod connections;
mod document;
mod tools;
mod writer;

pub use connections::{ResolvedConnection, resolve_connections};
pub use document::{FORMAT_VERSION, ROOT_ELEMENT, XML_DECLARATION};
pub use tools::ENGINE_DLL;
pub use writer::{XmlWriter, escape};

use crate::diagnostics::Diagnostics;
use crate::ir::types::CanonicalWorkflow;
use crate::lower::ToolPlan;

/// Render the full document. Nodes appear in input order inside `<Nodes>`,
/// resolved connections in input order inside `<Connections>`.
pub fn codegen(
    workflow: &CanonicalWorkflow,
    plan: &ToolPlan,
    diagnostics: &mut Diagnostics,
) -> String {
    let mut w = XmlWriter::new();

    document::open_document(&mut w);

    w.open("Nodes", &[]);
    for (node, tool) in workflow.nodes.iter().zip(&plan.tools) {
        tools::emit_tool(node, tool, &mut w, diagnostics);
    }
    w.close("Nodes");

    let resolved = resolve_connections(&workflow.connections, plan, diagnostics);
    w.open("Connections", &[]);
    for conn in &resolved {
        connections::emit_connection(conn, &mut w);
    }
    w.close("Connections");

    document::close_document(&mut w);

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::validate_workflow;
    use crate::lower::assign;
    use serde_json::json;

    #[test]
    fn nodes_precede_connections() {
        let wf = validate_workflow(&json!({
            "nodes": [
                { "node_id": "N1", "schema_id": "Input", "config": { "table_name": "a.csv" } },
                { "node_id": "N2", "schema_id": "Output", "config": { "table_name": "b.yxdb" } },
            ],
            "connections": [{ "from": "N1", "to": "N2" }],
        }))
        .unwrap();
        let mut diags = Diagnostics::new();
        let xml = codegen(&wf, &assign(&wf), &mut diags);

        let nodes = xml.find("  <Nodes>").unwrap();
        let connections = xml.find("  <Connections>").unwrap();
        let properties = xml.rfind("  <Properties>").unwrap();
        assert!(nodes < connections && connections < properties);
        assert!(diags.is_empty());
    }
}
