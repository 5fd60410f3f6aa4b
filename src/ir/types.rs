//! Typed Canonical Workflow model.
//!
//! Produced by `ir::validate` from an untrusted JSON value and read-only
//! afterwards. Per-kind configuration is decoded at the validation boundary
//! into [`ToolConfig`]; nothing downstream looks at raw JSON again.
//!
//! Payload fields keep what the producer sent (`None` when missing or of the
//! wrong type). Defaults are applied by the emitters through `ir::defaults`.

use serde::{Deserialize, Serialize};

use super::lenient::{lenient, lenient_seq};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CanonicalWorkflow {
    pub metadata: WorkflowMetadata,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    /// Source fragments the producer could not map. Never rendered.
    pub unmapped_acl: Vec<String>,
}

/// Provenance record, carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub schema_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Graph key only; never rendered.
    pub node_id: String,
    pub schema_id: String,
    pub acl_source: String,
    pub config: ToolConfig,
}

impl Node {
    pub fn kind(&self) -> Option<ToolKind> {
        self.config.kind()
    }
}

/// The closed set of tool kinds the compiler can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolKind {
    Input,
    Output,
    Filter,
    Summarize,
    Formula,
    Sort,
    Join,
    Select,
    Sample,
    Unique,
}

impl ToolKind {
    pub const ALL: [ToolKind; 10] = [
        ToolKind::Input,
        ToolKind::Output,
        ToolKind::Filter,
        ToolKind::Summarize,
        ToolKind::Formula,
        ToolKind::Sort,
        ToolKind::Join,
        ToolKind::Select,
        ToolKind::Sample,
        ToolKind::Unique,
    ];

    /// Exact, case-sensitive match on `schema_id`.
    pub fn from_schema_id(schema_id: &str) -> Option<Self> {
        match schema_id {
            "Input" => Some(ToolKind::Input),
            "Output" => Some(ToolKind::Output),
            "Filter" => Some(ToolKind::Filter),
            "Summarize" => Some(ToolKind::Summarize),
            "Formula" => Some(ToolKind::Formula),
            "Sort" => Some(ToolKind::Sort),
            "Join" => Some(ToolKind::Join),
            "Select" => Some(ToolKind::Select),
            "Sample" => Some(ToolKind::Sample),
            "Unique" => Some(ToolKind::Unique),
            _ => None,
        }
    }

    pub fn schema_id(self) -> &'static str {
        match self {
            ToolKind::Input => "Input",
            ToolKind::Output => "Output",
            ToolKind::Filter => "Filter",
            ToolKind::Summarize => "Summarize",
            ToolKind::Formula => "Formula",
            ToolKind::Sort => "Sort",
            ToolKind::Join => "Join",
            ToolKind::Select => "Select",
            ToolKind::Sample => "Sample",
            ToolKind::Unique => "Unique",
        }
    }

    /// GUI plugin identifier in the target format.
    pub fn plugin(self) -> &'static str {
        match self {
            ToolKind::Input => "AlteryxBasePluginsGui.InputData.InputData",
            ToolKind::Output => "AlteryxBasePluginsGui.OutputData.OutputData",
            ToolKind::Filter => "AlteryxBasePluginsGui.Filter.Filter",
            ToolKind::Summarize => "AlteryxBasePluginsGui.Summarize.Summarize",
            ToolKind::Formula => "AlteryxBasePluginsGui.Formula.Formula",
            ToolKind::Sort => "AlteryxBasePluginsGui.Sort.Sort",
            ToolKind::Join => "AlteryxBasePluginsGui.Join.Join",
            ToolKind::Select => "AlteryxBasePluginsGui.AlteryxSelect.AlteryxSelect",
            ToolKind::Sample => "AlteryxBasePluginsGui.Sample.Sample",
            ToolKind::Unique => "AlteryxBasePluginsGui.Unique.Unique",
        }
    }

    /// Native engine entry point.
    pub fn entry_point(self) -> &'static str {
        match self {
            ToolKind::Input => "AlteryxInputData",
            ToolKind::Output => "AlteryxOutputData",
            ToolKind::Filter => "AlteryxFilter",
            ToolKind::Summarize => "AlteryxSummarize",
            ToolKind::Formula => "AlteryxFormula",
            ToolKind::Sort => "AlteryxSort",
            ToolKind::Join => "AlteryxJoin",
            ToolKind::Select => "AlteryxSelect",
            ToolKind::Sample => "AlteryxSample",
            ToolKind::Unique => "AlteryxUnique",
        }
    }

    /// Name of the anchor a connection leaves this tool from.
    ///
    /// Only Filter, Join and Unique expose a non-default output port. A new
    /// branching kind needs its own arm here; there is no fallback guess.
    pub fn output_anchor(self) -> &'static str {
        match self {
            ToolKind::Filter => "True",
            ToolKind::Join => "Join",
            ToolKind::Unique => "Unique",
            ToolKind::Input
            | ToolKind::Output
            | ToolKind::Summarize
            | ToolKind::Formula
            | ToolKind::Sort
            | ToolKind::Select
            | ToolKind::Sample => "Output",
        }
    }
}

/// Anchor a connection arrives at. Same for every kind.
pub const INPUT_ANCHOR: &str = "Input";

/// Default output anchor for tools whose kind is unknown.
pub const DEFAULT_OUTPUT_ANCHOR: &str = "Output";

// =============================================================================
// PER-KIND CONFIGURATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ToolConfig {
    Input(FileConfig),
    Output(FileConfig),
    Filter(FilterConfig),
    Summarize(SummarizeConfig),
    Formula(FormulaConfig),
    Sort(SortConfig),
    Join(JoinConfig),
    Select(SelectConfig),
    Sample(SampleConfig),
    Unique(UniqueConfig),
    /// Residual variant for a `schema_id` outside the closed set. Only the
    /// provenance text on the node is kept; the raw config is discarded.
    Unmapped,
}

impl ToolConfig {
    pub fn kind(&self) -> Option<ToolKind> {
        match self {
            ToolConfig::Input(_) => Some(ToolKind::Input),
            ToolConfig::Output(_) => Some(ToolKind::Output),
            ToolConfig::Filter(_) => Some(ToolKind::Filter),
            ToolConfig::Summarize(_) => Some(ToolKind::Summarize),
            ToolConfig::Formula(_) => Some(ToolKind::Formula),
            ToolConfig::Sort(_) => Some(ToolKind::Sort),
            ToolConfig::Join(_) => Some(ToolKind::Join),
            ToolConfig::Select(_) => Some(ToolKind::Select),
            ToolConfig::Sample(_) => Some(ToolKind::Sample),
            ToolConfig::Unique(_) => Some(ToolKind::Unique),
            ToolConfig::Unmapped => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub table_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub filter_expression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeConfig {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub group_fields: Vec<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub agg_fields: Vec<AggregateField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateField {
    #[serde(default, deserialize_with = "lenient")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaConfig {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub formulas: Vec<FormulaEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub sort_keys: Vec<SortKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    #[serde(default, deserialize_with = "lenient")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub order: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConfig {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub join_fields: Vec<JoinKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinKey {
    #[serde(default, deserialize_with = "lenient")]
    pub left: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub right: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub select_fields: Vec<SelectField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectField {
    #[serde(default, deserialize_with = "lenient")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub selected: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub n: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConfig {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub unique_fields: Vec<String>,
}
