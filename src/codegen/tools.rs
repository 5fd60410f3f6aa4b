//! Per-kind tool emitters.
//!
//! Each emitter renders the `<Configuration>` body for one `ToolConfig`
//! variant; the shared frame around it (GuiSettings, Annotation,
//! EngineSettings) is the same for every kind. Unmapped kinds become a
//! comment and a warning, never an error.

use crate::diagnostics::{Diagnostics, Warning};
use crate::ir::defaults;
use crate::ir::types::*;
use crate::lower::PlacedTool;

use super::writer::XmlWriter;

pub const ENGINE_DLL: &str = "AlteryxBasePluginsEngine.dll";

/// Length attribute on calculated string fields.
const FORMULA_FIELD_SIZE: &str = "1073741823";
const FORMULA_FIELD_TYPE: &str = "V_WString";

/// Emit one node at its assigned id and position.
pub fn emit_tool(node: &Node, tool: &PlacedTool, w: &mut XmlWriter, diagnostics: &mut Diagnostics) {
    match &node.config {
        ToolConfig::Input(config) => {
            let file_name = defaults::input_file_name(config);
            emit_frame(ToolKind::Input, tool, &[], file_name, w, |w| {
                emit_input_config(file_name, w)
            });
        }
        ToolConfig::Output(config) => {
            let file_name = defaults::output_file_name(config);
            emit_frame(ToolKind::Output, tool, &[], file_name, w, |w| {
                emit_output_config(file_name, w)
            });
        }
        ToolConfig::Filter(config) => {
            let expression = defaults::filter_expression(config);
            emit_frame(ToolKind::Filter, tool, &[], expression, w, |w| {
                w.text("Expression", &[], expression);
                w.text("Mode", &[], "Custom");
            });
        }
        ToolConfig::Summarize(config) => {
            emit_frame(ToolKind::Summarize, tool, &[], "", w, |w| {
                emit_summarize_config(config, w)
            });
        }
        ToolConfig::Formula(config) => {
            let annotation = defaults::formula_annotation(config);
            emit_frame(ToolKind::Formula, tool, &[], &annotation, w, |w| {
                emit_formula_config(config, w)
            });
        }
        ToolConfig::Sort(config) => {
            emit_frame(ToolKind::Sort, tool, &[], "", w, |w| {
                emit_sort_config(config, w)
            });
        }
        ToolConfig::Join(config) => {
            let attrs = [("joinByRecordPos", "False")];
            emit_frame(ToolKind::Join, tool, &attrs, "", w, |w| {
                emit_join_config(config, w)
            });
        }
        ToolConfig::Select(config) => {
            emit_frame(ToolKind::Select, tool, &[], "", w, |w| {
                emit_select_config(config, w)
            });
        }
        ToolConfig::Sample(config) => {
            emit_frame(ToolKind::Sample, tool, &[], "", w, |w| {
                w.text("Mode", &[], defaults::sample_method(config));
                w.text("N", &[], &defaults::sample_count(config).to_string());
            });
        }
        ToolConfig::Unique(config) => {
            emit_frame(ToolKind::Unique, tool, &[], "", w, |w| {
                emit_unique_config(config, w)
            });
        }
        ToolConfig::Unmapped => {
            diagnostics.warn(Warning::UnmappedNode {
                tool_id: tool.tool_id,
                schema_id: node.schema_id.clone(),
            });
            w.comment(&format!(
                "UNMAPPED NODE: {} - {}",
                node.schema_id, node.acl_source
            ));
        }
    }
}

/// The element skeleton shared by every tool kind.
fn emit_frame(
    kind: ToolKind,
    tool: &PlacedTool,
    configuration_attrs: &[(&str, &str)],
    annotation: &str,
    w: &mut XmlWriter,
    configuration: impl FnOnce(&mut XmlWriter),
) {
    let tool_id = tool.tool_id.to_string();
    let x = tool.position.x.to_string();
    let y = tool.position.y.to_string();

    w.open("Node", &[("ToolID", tool_id.as_str())]);

    w.open("GuiSettings", &[("Plugin", kind.plugin())]);
    w.empty("Position", &[("x", x.as_str()), ("y", y.as_str())]);
    w.close("GuiSettings");

    w.open("Properties", &[]);
    w.open("Configuration", configuration_attrs);
    configuration(w);
    w.close("Configuration");
    w.open("Annotation", &[("DisplayMode", "0")]);
    w.empty("Name", &[]);
    w.text("DefaultAnnotationText", &[], annotation);
    w.value("Left", "False");
    w.close("Annotation");
    w.close("Properties");

    w.empty(
        "EngineSettings",
        &[
            ("EngineDll", ENGINE_DLL),
            ("EngineDllEntryPoint", kind.entry_point()),
        ],
    );
    w.close("Node");
}

fn emit_file(file_name: &str, w: &mut XmlWriter) {
    let format = defaults::file_format(file_name).to_string();
    w.text("File", &[("FileFormat", format.as_str())], file_name);
}

fn emit_input_config(file_name: &str, w: &mut XmlWriter) {
    emit_file(file_name, w);
    w.open("FormatSpecificOptions", &[]);
    w.text("HeaderRow", &[], "True");
    w.text("FieldLen", &[], "254");
    // Element name is spelled this way by the target format.
    w.text("Delimeter", &[], ",");
    w.text("IgnoreQuotes", &[], "DoubleQuotes");
    w.close("FormatSpecificOptions");
}

fn emit_output_config(file_name: &str, w: &mut XmlWriter) {
    emit_file(file_name, w);
    w.open("FormatSpecificOptions", &[]);
    w.text("PreserveFormat", &[], "True");
    w.text("SingleFile", &[], "True");
    w.close("FormatSpecificOptions");
    w.value("MultiFile", "False");
}

/// Group-by entries first, then aggregations, both in input order.
fn emit_summarize_config(config: &SummarizeConfig, w: &mut XmlWriter) {
    w.open("SummarizeFields", &[]);
    for field in &config.group_fields {
        w.empty(
            "SummarizeField",
            &[
                ("field", field.as_str()),
                ("action", "GroupBy"),
                ("rename", field.as_str()),
            ],
        );
    }
    for agg in &config.agg_fields {
        let rename = defaults::aggregate_rename(agg);
        w.empty(
            "SummarizeField",
            &[
                ("field", defaults::text(&agg.field)),
                ("action", defaults::text(&agg.action)),
                ("rename", rename.as_str()),
            ],
        );
    }
    w.close("SummarizeFields");
}

fn emit_formula_config(config: &FormulaConfig, w: &mut XmlWriter) {
    w.open("FormulaFields", &[]);
    for formula in &config.formulas {
        w.empty(
            "FormulaField",
            &[
                ("expression", defaults::text(&formula.expression)),
                ("field", defaults::text(&formula.field)),
                ("size", FORMULA_FIELD_SIZE),
                ("type", FORMULA_FIELD_TYPE),
            ],
        );
    }
    w.close("FormulaFields");
}

fn emit_sort_config(config: &SortConfig, w: &mut XmlWriter) {
    w.open("SortInfo", &[]);
    for key in &config.sort_keys {
        w.empty(
            "Field",
            &[
                ("field", defaults::text(&key.field)),
                ("order", defaults::text(&key.order)),
            ],
        );
    }
    w.close("SortInfo");
}

fn emit_join_config(config: &JoinConfig, w: &mut XmlWriter) {
    w.open("JoinFields", &[]);
    for key in &config.join_fields {
        w.empty(
            "JoinField",
            &[
                ("LeftField", defaults::text(&key.left)),
                ("RightField", defaults::text(&key.right)),
            ],
        );
    }
    w.close("JoinFields");
}

fn emit_select_config(config: &SelectConfig, w: &mut XmlWriter) {
    w.open("SelectFields", &[]);
    for field in &config.select_fields {
        let selected = if defaults::selected(field) { "True" } else { "False" };
        w.empty(
            "SelectField",
            &[("field", defaults::text(&field.field)), ("selected", selected)],
        );
    }
    w.close("SelectFields");
}

fn emit_unique_config(config: &UniqueConfig, w: &mut XmlWriter) {
    w.open("UniqueFields", &[]);
    for field in &config.unique_fields {
        w.empty("Field", &[("field", field.as_str())]);
    }
    w.close("UniqueFields");
}
