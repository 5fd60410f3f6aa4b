//! Indent-aware XML builder.
//!
//! Every attribute value, text node and comment body passes through
//! [`escape`] here; emitters hand over raw strings and never format markup
//! around user text themselves. Two-space indentation.

use std::borrow::Cow;

/// Replace the five reserved XML characters with their named entities.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['<', '>', '&', '\'', '"']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape text for a comment body. `--` may not appear inside a comment, so
/// consecutive hyphens are split with a space.
fn escape_comment(raw: &str) -> String {
    let escaped = escape(raw);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if c == '-' && out.ends_with('-') {
            out.push(' ');
        }
        out.push(c);
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

fn format_attrs(attrs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out
}

pub struct XmlWriter {
    buf: String,
    indent_level: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(8192),
            indent_level: 0,
        }
    }

    /// Write a raw, already well-formed line. Not for user text.
    pub fn raw_line(&mut self, markup: &str) {
        self.write_indent();
        self.buf.push_str(markup);
        self.buf.push('\n');
    }

    /// `<name attrs>` and indent.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.raw_line(&format!("<{}{}>", name, format_attrs(attrs)));
        self.indent_level += 1;
    }

    /// Dedent and `</name>`.
    pub fn close(&mut self, name: &str) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.raw_line(&format!("</{}>", name));
    }

    /// `<name attrs />`
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.raw_line(&format!("<{}{} />", name, format_attrs(attrs)));
    }

    /// `<name attrs>text</name>`, or `<name attrs />` for empty text.
    pub fn text(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        if text.is_empty() {
            self.empty(name, attrs);
        } else {
            self.raw_line(&format!(
                "<{}{}>{}</{}>",
                name,
                format_attrs(attrs),
                escape(text),
                name
            ));
        }
    }

    /// `<name value="..." />`, the target format's scalar-property idiom.
    pub fn value(&mut self, name: &str, value: &str) {
        self.empty(name, &[("value", value)]);
    }

    pub fn comment(&mut self, text: &str) {
        self.raw_line(&format!("<!-- {} -->", escape_comment(text)));
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buf.push_str("  ");
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
