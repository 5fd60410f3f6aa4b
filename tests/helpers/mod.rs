#![allow(dead_code)]

use serde_json::{Value, json};
use yxmd_compiler::CompileOutput;

// =============================================================================
// Workflow JSON builders
// =============================================================================

/// A node with the given id, kind and config.
pub fn node(node_id: &str, schema_id: &str, config: Value) -> Value {
    json!({
        "node_id": node_id,
        "schema_id": schema_id,
        "acl_source": format!("{} {}", schema_id.to_uppercase(), node_id),
        "config": config,
    })
}

pub fn conn(from: &str, to: &str) -> Value {
    json!({ "from": from, "to": to })
}

pub fn workflow(nodes: Vec<Value>, connections: Vec<Value>) -> Value {
    json!({
        "workflow": { "version": "1.0", "source": "test" },
        "nodes": nodes,
        "connections": connections,
        "unmapped_acl": [],
    })
}

/// Chain every node in order: n[0] → n[1] → ... → n[k].
pub fn linear(nodes: Vec<Value>) -> Value {
    let ids: Vec<String> = nodes
        .iter()
        .map(|n| n["node_id"].as_str().unwrap_or_default().to_string())
        .collect();
    let connections = ids.windows(2).map(|pair| conn(&pair[0], &pair[1])).collect();
    workflow(nodes, connections)
}

// =============================================================================
// Compile helpers
// =============================================================================

pub fn compile_ok(value: &Value) -> CompileOutput {
    yxmd_compiler::compile(value).expect("workflow should compile")
}

pub fn compile_xml(value: &Value) -> String {
    compile_ok(value).xml
}

pub type Edge = (usize, String, usize, String);

/// Expected edge into `destination`'s `Input` anchor.
pub fn edge(origin: usize, origin_anchor: &str, destination: usize) -> Edge {
    (origin, origin_anchor.to_string(), destination, "Input".to_string())
}

/// `(origin_tool, origin_anchor, destination_tool, destination_anchor)` for
/// every `<Connection>` in document order.
pub fn connections_of(xml: &str) -> Vec<Edge> {
    let mut out = Vec::new();
    let mut rest = xml;
    while let Some(start) = rest.find("<Origin ToolID=\"") {
        rest = &rest[start..];
        let (origin_id, origin_anchor) = endpoint(rest);
        let dest_start = rest.find("<Destination ToolID=\"").expect("destination follows origin");
        rest = &rest[dest_start..];
        let (dest_id, dest_anchor) = endpoint(rest);
        out.push((origin_id, origin_anchor, dest_id, dest_anchor));
        rest = &rest[1..];
    }
    out
}

fn endpoint(fragment: &str) -> (usize, String) {
    let id = attr(fragment, "ToolID").parse().expect("numeric tool id");
    (id, attr(fragment, "Connection"))
}

/// First value of `name="..."` in `fragment`.
pub fn attr(fragment: &str, name: &str) -> String {
    let key = format!("{}=\"", name);
    let start = fragment.find(&key).expect("attribute present") + key.len();
    let end = fragment[start..].find('"').expect("attribute closed") + start;
    fragment[start..end].to_string()
}

/// The `<Node ToolID="id">...</Node>` block for one tool.
pub fn tool_block(xml: &str, tool_id: usize) -> String {
    let open = format!("<Node ToolID=\"{}\">", tool_id);
    let start = xml.find(&open).expect("tool present");
    let end = xml[start..].find("</Node>").expect("tool closed") + start + "</Node>".len();
    xml[start..end].to_string()
}
