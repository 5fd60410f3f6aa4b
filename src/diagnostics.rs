//! Recoverable diagnostics collected during a compile.
//!
//! The compiler never prints. Every degraded-but-continued condition is
//! pushed into a [`Diagnostics`] collector and handed back to the caller
//! next to the generated document.

use serde::Serialize;

pub const TRACING_TARGET: &str = "yxmd_compiler::diagnostics";

/// Which side of a connection could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEndpoint {
    Source,
    Destination,
    Both,
}

impl MissingEndpoint {
    pub fn from_lookups(source_found: bool, destination_found: bool) -> Option<Self> {
        match (source_found, destination_found) {
            (true, true) => None,
            (false, true) => Some(MissingEndpoint::Source),
            (true, false) => Some(MissingEndpoint::Destination),
            (false, false) => Some(MissingEndpoint::Both),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A connection references a node id that is not in the workflow.
    DanglingConnection {
        index: usize,
        from: String,
        to: String,
        missing: MissingEndpoint,
    },
    /// A node whose `schema_id` has no emitter; rendered as a comment.
    UnmappedNode { tool_id: usize, schema_id: String },
    /// Two nodes share a `node_id`. Lookups resolve to the later one.
    DuplicateNodeId {
        node_id: String,
        first_tool_id: usize,
        tool_id: usize,
    },
    /// The resolved connections contain a cycle.
    CyclicConnections,
}

impl Warning {
    pub fn code(&self) -> &'static str {
        match self {
            Warning::DanglingConnection { .. } => "W001",
            Warning::UnmappedNode { .. } => "W002",
            Warning::DuplicateNodeId { .. } => "W003",
            Warning::CyclicConnections => "W004",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::DanglingConnection { from, to, missing, .. } => {
                write!(f, "Skipping connection \"{}\" -> \"{}\":", from, to)?;
                if matches!(missing, MissingEndpoint::Source | MissingEndpoint::Both) {
                    write!(f, " source node \"{}\" not found.", from)?;
                }
                if matches!(missing, MissingEndpoint::Destination | MissingEndpoint::Both) {
                    write!(f, " destination node \"{}\" not found.", to)?;
                }
                Ok(())
            }
            Warning::UnmappedNode { tool_id, schema_id } => write!(
                f,
                "Unknown schema_id \"{}\" on tool {}; rendered as a comment",
                schema_id, tool_id
            ),
            Warning::DuplicateNodeId {
                node_id,
                first_tool_id,
                tool_id,
            } => write!(
                f,
                "Duplicate node_id \"{}\" on tools {} and {}; connections resolve to tool {}",
                node_id, first_tool_id, tool_id, tool_id
            ),
            Warning::CyclicConnections => write!(f, "Connections form a cycle"),
        }
    }
}

/// Ordered collector for warnings.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(
            target: TRACING_TARGET,
            code = warning.code(),
            "{}",
            warning
        );
        self.warnings.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
