//! Integration tests for connection resolution: anchors, dangling edges,
//! duplicates and cycles.

mod helpers;

use helpers::*;
use serde_json::json;
use yxmd_compiler::diagnostics::{MissingEndpoint, Warning};

#[test]
fn origin_anchor_follows_source_kind() {
    let wf = workflow(
        vec![
            node("in", "Input", json!({})),
            node("flt", "Filter", json!({ "filter_expression": "A > 1" })),
            node("jn", "Join", json!({})),
            node("uq", "Unique", json!({})),
            node("out", "Output", json!({})),
        ],
        vec![
            conn("in", "flt"),
            conn("flt", "jn"),
            conn("in", "jn"),
            conn("jn", "uq"),
            conn("uq", "out"),
        ],
    );
    let output = compile_ok(&wf);
    assert!(output.warnings.is_empty());

    let edges = connections_of(&output.xml);
    let expected = vec![
        edge(1, "Output", 2),
        edge(2, "True", 3),
        edge(1, "Output", 3),
        edge(3, "Join", 4),
        edge(4, "Unique", 5),
    ];
    assert_eq!(edges, expected);
}

#[test]
fn connection_element_shape() {
    let wf = linear(vec![node("a", "Input", json!({})), node("b", "Output", json!({}))]);
    let xml = compile_xml(&wf);
    assert!(xml.contains(
        "  <Connections>\n    <Connection>\n      <Origin ToolID=\"1\" Connection=\"Output\" />\n      <Destination ToolID=\"2\" Connection=\"Input\" />\n    </Connection>\n  </Connections>\n"
    ));
}

#[test]
fn dangling_connections_are_dropped_with_warnings() {
    let wf = workflow(
        vec![node("a", "Input", json!({})), node("b", "Output", json!({}))],
        vec![
            conn("a", "ghost"),
            conn("a", "b"),
            conn("nowhere", "b"),
            conn("x", "y"),
        ],
    );
    let output = compile_ok(&wf);

    assert_eq!(connections_of(&output.xml), vec![edge(1, "Output", 2)]);
    assert_eq!(
        output.warnings,
        vec![
            Warning::DanglingConnection {
                index: 0,
                from: "a".into(),
                to: "ghost".into(),
                missing: MissingEndpoint::Destination,
            },
            Warning::DanglingConnection {
                index: 2,
                from: "nowhere".into(),
                to: "b".into(),
                missing: MissingEndpoint::Source,
            },
            Warning::DanglingConnection {
                index: 3,
                from: "x".into(),
                to: "y".into(),
                missing: MissingEndpoint::Both,
            },
        ]
    );
    assert_eq!(output.warnings[0].code(), "W001");
}

#[test]
fn malformed_connection_entries_are_dangling() {
    let wf = json!({
        "nodes": [{ "node_id": "a", "schema_id": "Input" }],
        "connections": [{ "from": "a" }, 42],
    });
    let output = compile_ok(&wf);
    assert!(!output.xml.contains("<Connection>"));
    assert_eq!(output.warnings.len(), 2);
    assert!(output.warnings.iter().all(|w| w.code() == "W001"));
}

#[test]
fn all_dangling_leaves_connections_container_empty() {
    let wf = workflow(vec![node("a", "Input", json!({}))], vec![conn("a", "b")]);
    let xml = compile_xml(&wf);
    assert!(xml.contains("  <Connections>\n  </Connections>\n"));
}

#[test]
fn duplicate_node_id_resolves_to_later_tool() {
    let wf = workflow(
        vec![
            node("src", "Input", json!({ "table_name": "first.csv" })),
            node("src", "Input", json!({ "table_name": "second.csv" })),
            node("out", "Output", json!({})),
        ],
        vec![conn("src", "out")],
    );
    let output = compile_ok(&wf);

    // Both nodes are still emitted.
    assert!(output.xml.contains("first.csv"));
    assert!(output.xml.contains("second.csv"));
    assert_eq!(connections_of(&output.xml), vec![edge(2, "Output", 3)]);
    assert_eq!(
        output.warnings,
        vec![Warning::DuplicateNodeId {
            node_id: "src".into(),
            first_tool_id: 1,
            tool_id: 2,
        }]
    );
}

#[test]
fn cycles_warn_but_still_render() {
    let wf = workflow(
        vec![
            node("a", "Formula", json!({})),
            node("b", "Sort", json!({})),
        ],
        vec![conn("a", "b"), conn("b", "a")],
    );
    let output = compile_ok(&wf);
    assert_eq!(connections_of(&output.xml).len(), 2);
    assert_eq!(output.warnings, vec![Warning::CyclicConnections]);
    assert_eq!(output.warnings[0].code(), "W004");
}

#[test]
fn connections_to_unmapped_nodes_use_default_anchor() {
    let wf = workflow(
        vec![
            node("a", "Input", json!({})),
            json!({ "node_id": "b", "schema_id": "Crosstab" }),
        ],
        vec![conn("b", "a")],
    );
    let output = compile_ok(&wf);
    assert_eq!(connections_of(&output.xml), vec![edge(2, "Output", 1)]);
}
