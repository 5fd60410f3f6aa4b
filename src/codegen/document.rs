//! Document envelope and the fixed workflow-level properties block.

use super::writer::XmlWriter;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;
pub const ROOT_ELEMENT: &str = "AlteryxDocument";
pub const FORMAT_VERSION: &str = "2025.2";
pub const METADATA_AUTHOR: &str = "Workflow Migrator";

/// Write the declaration and open the root element.
pub fn open_document(w: &mut XmlWriter) {
    w.raw_line(XML_DECLARATION);
    w.open(ROOT_ELEMENT, &[("yxmdVer", FORMAT_VERSION)]);
}

/// Append the properties block and close the root element.
pub fn close_document(w: &mut XmlWriter) {
    emit_properties(w);
    w.close(ROOT_ELEMENT);
}

/// Workflow-level settings. Identical on every compile.
fn emit_properties(w: &mut XmlWriter) {
    w.open("Properties", &[]);
    w.empty("Memory", &[("default", "True")]);
    w.value("GlobalRecordLimit", "0");
    w.empty("TempFiles", &[("default", "True")]);
    w.empty("Annotation", &[("on", "True"), ("includeToolName", "False")]);
    w.value("ConvErrorLimit", "10");
    w.value("ConvErrorLimit_Stop", "False");
    w.value("CancelOnError", "False");
    w.value("DisableBrowse", "False");
    w.value("EnablePerformanceProfiling", "False");
    w.value("PredictiveToolsCodePage", "1252");
    w.value("DisableAllOutput", "False");
    w.value("ShowAllMacroMessages", "False");
    w.value("ShowConnectionStatusIsOn", "True");
    w.value("ShowConnectionStatusOnlyWhenRunning", "True");
    w.value("ZoomLevel", "0");
    w.text("LayoutType", &[], "Horizontal");

    w.open("MetaInfo", &[]);
    w.value("NameIsFileName", "True");
    w.empty("Description", &[]);
    w.empty("RootToolName", &[]);
    w.empty("ToolVersion", &[]);
    w.value("ToolInDb", "False");
    w.empty("CategoryName", &[]);
    w.empty("SearchTags", &[]);
    w.text("Author", &[], METADATA_AUTHOR);
    w.empty("Company", &[]);
    w.empty("Copyright", &[]);
    w.close("MetaInfo");

    w.open("Events", &[]);
    w.value("Enabled", "True");
    w.close("Events");
    w.close("Properties");
}
