//! IR validation: untrusted JSON value → typed `CanonicalWorkflow`.
//!
//! Only the workflow shape and node identity are enforced here. Config
//! contents are decoded leniently and never rejected.

use serde_json::{Map, Value};

use super::lenient::decode_config;
use super::types::*;
use crate::error::{CompileError, NodeViolation, ShapeViolation};

/// Validate a decoded JSON value against the Canonical Workflow shape.
///
/// Fails on the first violation: a non-object root, a missing or
/// non-sequence `nodes`/`connections`, or a node without a usable
/// `node_id`/`schema_id`.
pub fn validate_workflow(value: &Value) -> Result<CanonicalWorkflow, CompileError> {
    let root = value
        .as_object()
        .ok_or(CompileError::InvalidWorkflowShape(ShapeViolation::NotAnObject))?;

    let raw_nodes = sequence_field(root, "nodes")?;
    let raw_connections = sequence_field(root, "connections")?;

    let nodes = raw_nodes
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_node(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let connections = raw_connections.iter().map(decode_connection).collect();

    Ok(CanonicalWorkflow {
        metadata: decode_config(root.get("workflow")),
        nodes,
        connections,
        unmapped_acl: decode_unmapped(root.get("unmapped_acl")),
    })
}

fn sequence_field<'a>(
    root: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Vec<Value>, CompileError> {
    match root.get(field) {
        None | Some(Value::Null) => Err(CompileError::InvalidWorkflowShape(
            ShapeViolation::Missing(field),
        )),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(CompileError::InvalidWorkflowShape(
            ShapeViolation::NotASequence(field),
        )),
    }
}

fn validate_node(index: usize, raw: &Value) -> Result<Node, CompileError> {
    let invalid = |violation| CompileError::InvalidNode { index, violation };

    let obj = raw.as_object().ok_or(invalid(NodeViolation::NotAnObject))?;
    let node_id = non_empty_str(obj, "node_id").ok_or(invalid(NodeViolation::MissingNodeId))?;
    let schema_id =
        non_empty_str(obj, "schema_id").ok_or(invalid(NodeViolation::MissingSchemaId))?;

    let acl_source = obj
        .get("acl_source")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Node {
        node_id: node_id.to_string(),
        schema_id: schema_id.to_string(),
        acl_source,
        config: decode_tool_config(schema_id, obj.get("config")),
    })
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Select the payload shape from `schema_id` and decode `config` into it.
pub fn decode_tool_config(schema_id: &str, config: Option<&Value>) -> ToolConfig {
    let Some(kind) = ToolKind::from_schema_id(schema_id) else {
        return ToolConfig::Unmapped;
    };

    match kind {
        ToolKind::Input => ToolConfig::Input(decode_config(config)),
        ToolKind::Output => ToolConfig::Output(decode_config(config)),
        ToolKind::Filter => ToolConfig::Filter(decode_config(config)),
        ToolKind::Summarize => ToolConfig::Summarize(decode_config(config)),
        ToolKind::Formula => ToolConfig::Formula(decode_config(config)),
        ToolKind::Sort => ToolConfig::Sort(decode_config(config)),
        ToolKind::Join => ToolConfig::Join(decode_config(config)),
        ToolKind::Select => ToolConfig::Select(decode_config(config)),
        ToolKind::Sample => ToolConfig::Sample(decode_config(config)),
        ToolKind::Unique => ToolConfig::Unique(decode_config(config)),
    }
}

/// Endpoints that are missing or not strings decode as empty ids, which the
/// resolver then reports as dangling.
fn decode_connection(raw: &Value) -> Connection {
    let endpoint = |key: &str| {
        raw.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Connection {
        from: endpoint("from"),
        to: endpoint("to"),
    }
}

fn decode_unmapped(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
