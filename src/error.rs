//! Fatal compiler errors. Anything reported here aborts the whole compile;
//! recoverable conditions live in `crate::diagnostics` instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

/// Which part of the top-level workflow shape was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    NotAnObject,
    Missing(&'static str),
    NotASequence(&'static str),
}

impl std::fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeViolation::NotAnObject => write!(f, "workflow is not an object"),
            ShapeViolation::Missing(field) => write!(f, "{} is missing", field),
            ShapeViolation::NotASequence(field) => write!(f, "{} is not a sequence", field),
        }
    }
}

/// Why a single node was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeViolation {
    NotAnObject,
    MissingNodeId,
    MissingSchemaId,
}

impl std::fmt::Display for NodeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeViolation::NotAnObject => write!(f, "node is not an object"),
            NodeViolation::MissingNodeId => {
                write!(f, "missing required \"node_id\" (must be a non-empty string)")
            }
            NodeViolation::MissingSchemaId => {
                write!(f, "missing required \"schema_id\" (must be a non-empty string)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Failed to parse workflow JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid workflow: {0}")]
    InvalidWorkflowShape(ShapeViolation),

    #[error("Invalid node at index {index}: {violation}")]
    InvalidNode {
        index: usize,
        violation: NodeViolation,
    },
}

impl CompileError {
    /// Stable error code surfaced to hosts.
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::InvalidJson(_) => "P001",
            CompileError::InvalidWorkflowShape(_) => "V001",
            CompileError::InvalidNode { .. } => "V002",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            CompileError::InvalidJson(_) => Phase::Parse,
            CompileError::InvalidWorkflowShape(_) | CompileError::InvalidNode { .. } => {
                Phase::Validate
            }
        }
    }

    /// Index of the offending node, for per-node failures.
    pub fn node_index(&self) -> Option<usize> {
        match self {
            CompileError::InvalidNode { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(e: serde_json::Error) -> Self {
        CompileError::InvalidJson(e.to_string())
    }
}
