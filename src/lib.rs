//! Deterministic compiler from a Canonical Workflow JSON graph to an Alteryx
//! `.yxmd` XML document.
//!
//! Pipeline: validate (`ir`) → assign ids and layout (`lower`) → structural
//! warnings (`validate`) → emit tools and connections (`codegen`).
//! The compile is a pure function of its input: no I/O, no shared state.

pub mod codegen;
pub mod diagnostics;
pub mod error;
pub mod ir;
pub mod lower;
pub mod parse;
pub mod validate;
pub mod wasm;

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::CompileError;

pub const TRACING_TARGET: &str = "yxmd_compiler";

/// A successful compile: the document plus any recoverable warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileOutput {
    pub xml: String,
    pub warnings: Vec<Warning>,
    /// Source lines the upstream translator could not map, passed through.
    pub unmapped_acl: Vec<String>,
}

/// Compile a decoded JSON value.
pub fn compile(value: &Value) -> Result<CompileOutput, CompileError> {
    let workflow = ir::validate_workflow(value)?;

    tracing::debug!(
        target: TRACING_TARGET,
        nodes = workflow.nodes.len(),
        connections = workflow.connections.len(),
        unmapped_acl = workflow.unmapped_acl.len(),
        "Compiling workflow"
    );

    let plan = lower::assign(&workflow);
    let graph = lower::ToolGraph::build(&plan, &workflow.connections);

    let mut diagnostics = Diagnostics::new();
    validate::validate_structural(&workflow, &graph, &mut diagnostics);

    let xml = codegen::codegen(&workflow, &plan, &mut diagnostics);

    tracing::debug!(
        target: TRACING_TARGET,
        tools = plan.len(),
        edges = graph.edge_count(),
        warnings = diagnostics.warnings().len(),
        bytes = xml.len(),
        "Workflow compiled"
    );

    Ok(CompileOutput {
        xml,
        warnings: diagnostics.into_warnings(),
        unmapped_acl: workflow.unmapped_acl,
    })
}

/// Decode JSON text and compile it.
pub fn compile_str(json: &str) -> Result<CompileOutput, CompileError> {
    let value = parse::parse(json)?;
    compile(&value)
}
