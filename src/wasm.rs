//! WASM entry points for the browser host.

use wasm_bindgen::prelude::*;

use crate::diagnostics::Warning;
use crate::error::CompileError;

/// Parse and validate workflow JSON without generating XML.
/// Returns a JSON array of error objects (empty when valid).
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> Vec<ErrorDto> {
    match crate::parse::parse_workflow(json) {
        Ok(_) => Vec::new(),
        Err(e) => vec![ErrorDto::from(e)],
    }
}

/// Full pipeline: parse → validate → assign → codegen.
/// Returns `{ status: "success", ... }` or `{ status: "errors", errors }`.
#[wasm_bindgen]
pub fn compile_workflow(json: &str) -> JsValue {
    let result = compile_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_workflow_inner(json: &str) -> CompileResult {
    match crate::compile_str(json) {
        Ok(output) => CompileResult::Success {
            xml: output.xml,
            warnings: output.warnings.iter().map(WarningDto::from).collect(),
            unmapped_acl: output.unmapped_acl,
        },
        Err(e) => CompileResult::Errors { errors: vec![e.into()] },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_index: Option<usize>,
}

impl From<CompileError> for ErrorDto {
    fn from(e: CompileError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            phase: e.phase().to_string(),
            message: e.to_string(),
            node_index: e.node_index(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct WarningDto {
    code: String,
    message: String,
}

impl From<&Warning> for WarningDto {
    fn from(w: &Warning) -> Self {
        WarningDto {
            code: w.code().to_string(),
            message: w.to_string(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success {
        xml: String,
        warnings: Vec<WarningDto>,
        unmapped_acl: Vec<String>,
    },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
