//! Default-value policy for missing or unusable config fields.
//!
//! Every fallback the emitters apply lives here so the policy can be read and
//! tested in one place. An empty string counts as missing.

use super::types::*;

pub const INPUT_FILE_NAME: &str = "input.csv";
pub const OUTPUT_FILE_NAME: &str = "output.yxdb";
pub const FILTER_EXPRESSION: &str = "1=1";
pub const FORMULA_ANNOTATION: &str = "Formula";
pub const SAMPLE_COUNT: u64 = 1;
pub const SAMPLE_METHOD: &str = "First";
pub const SELECTED: bool = true;

/// File format codes understood by the target application.
pub const FORMAT_CSV: u32 = 0;
pub const FORMAT_YXDB: u32 = 19;
pub const FORMAT_XLSX: u32 = 25;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

pub fn input_file_name(config: &FileConfig) -> &str {
    non_empty(config.table_name.as_deref()).unwrap_or(INPUT_FILE_NAME)
}

pub fn output_file_name(config: &FileConfig) -> &str {
    non_empty(config.table_name.as_deref()).unwrap_or(OUTPUT_FILE_NAME)
}

pub fn filter_expression(config: &FilterConfig) -> &str {
    non_empty(config.filter_expression.as_deref()).unwrap_or(FILTER_EXPRESSION)
}

/// `rename` if given, otherwise `{action}_{field}`.
pub fn aggregate_rename(agg: &AggregateField) -> String {
    match non_empty(agg.rename.as_deref()) {
        Some(rename) => rename.to_string(),
        None => format!("{}_{}", text(&agg.action), text(&agg.field)),
    }
}

/// `{field} = {expression}` of the first formula, or the generic label.
pub fn formula_annotation(config: &FormulaConfig) -> String {
    match config.formulas.first() {
        Some(first) => format!("{} = {}", text(&first.field), text(&first.expression)),
        None => FORMULA_ANNOTATION.to_string(),
    }
}

pub fn sample_count(config: &SampleConfig) -> u64 {
    config.n.filter(|n| *n > 0).unwrap_or(SAMPLE_COUNT)
}

pub fn sample_method(config: &SampleConfig) -> &str {
    non_empty(config.method.as_deref()).unwrap_or(SAMPLE_METHOD)
}

pub fn selected(field: &SelectField) -> bool {
    field.selected.unwrap_or(SELECTED)
}

/// Plain text fields with no documented default render as empty.
pub fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Format code from the file extension (text after the last `.`,
/// case-insensitive). Unknown extensions fall back to CSV.
pub fn file_format(file_name: &str) -> u32 {
    let extension = file_name.rsplit('.').next().unwrap_or("");
    match extension.to_ascii_lowercase().as_str() {
        "csv" => FORMAT_CSV,
        "yxdb" => FORMAT_YXDB,
        "xlsx" => FORMAT_XLSX,
        _ => FORMAT_CSV,
    }
}
