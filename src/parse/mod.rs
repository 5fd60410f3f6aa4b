//! Parse phase: JSON text → `serde_json::Value` → typed workflow.

use serde_json::Value;

use crate::error::CompileError;
use crate::ir::types::CanonicalWorkflow;

/// Decode workflow JSON text. Shape is not checked here.
pub fn parse(json: &str) -> Result<Value, CompileError> {
    Ok(serde_json::from_str::<Value>(json)?)
}

/// Decode JSON text and validate it in one step.
pub fn parse_workflow(json: &str) -> Result<CanonicalWorkflow, CompileError> {
    let value = parse(json)?;
    crate::ir::validate_workflow(&value)
}
