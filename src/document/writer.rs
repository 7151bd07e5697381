use std::{borrow::Cow, ops::Range};

use roxmltree::Node;

use crate::foundation::{
    core::SVG_NAMESPACE,
    error::{SketchError, SketchResult},
};

/// How SVG elements are recognized in the input and how the source is parsed.
///
/// Passed explicitly into every parse/serialize call instead of registering namespaces globally.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Namespace URI whose `path` and `g` elements are processed.
    pub svg_namespace: String,
    /// Also process elements that have no namespace at all.
    pub accept_unqualified: bool,
    /// Accept a DOCTYPE declaration (potrace emits one).
    pub allow_dtd: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            svg_namespace: SVG_NAMESPACE.to_string(),
            accept_unqualified: true,
            allow_dtd: true,
        }
    }
}

impl WriterConfig {
    pub fn validate(&self) -> SketchResult<()> {
        if self.svg_namespace.trim().is_empty() {
            return Err(SketchError::validation("svg_namespace must be non-empty"));
        }
        Ok(())
    }

    pub fn parsing_options<'o>(&self) -> roxmltree::ParsingOptions<'o> {
        let mut opts = roxmltree::ParsingOptions::default();
        opts.allow_dtd = self.allow_dtd;
        opts
    }

    pub fn parse<'input>(&self, source: &'input str) -> SketchResult<roxmltree::Document<'input>> {
        roxmltree::Document::parse_with_options(source, self.parsing_options())
            .map_err(|e| SketchError::document(format!("parse svg markup: {e}")))
    }

    /// Whether `node` is an SVG element with local name `local`.
    pub fn is_svg_element(&self, node: Node<'_, '_>, local: &str) -> bool {
        if !node.is_element() || node.tag_name().name() != local {
            return false;
        }
        match node.tag_name().namespace() {
            Some(ns) => ns == self.svg_namespace,
            None => self.accept_unqualified,
        }
    }
}

/// Qualified tag name (prefix included) of the element whose markup starts at `range.start`.
pub fn qualified_tag<'a>(source: &'a str, range: &Range<usize>) -> &'a str {
    let Some(open) = source.get(range.start..range.end) else {
        return "path";
    };
    let name = open
        .strip_prefix('<')
        .unwrap_or(open)
        .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .next()
        .unwrap_or_default();
    if name.is_empty() { "path" } else { name }
}

/// `local` under the same prefix as the qualified name `qualified`, e.g. `s:path` -> `s:g`.
pub fn sibling_tag(qualified: &str, local: &str) -> String {
    match qualified.rsplit_once(':') {
        Some((prefix, _)) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn push_open_tag<'a>(
    out: &mut String,
    tag: &str,
    attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}

/// Append `<tag a="..." b="..."/>` to `out`.
pub fn write_empty_element<'a>(
    out: &mut String,
    tag: &str,
    attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    push_open_tag(out, tag, attributes);
    out.push_str("/>");
}

/// Append `<tag a="...">`; the caller writes the content and [`write_end_tag`].
pub fn write_start_tag<'a>(
    out: &mut String,
    tag: &str,
    attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    push_open_tag(out, tag, attributes);
    out.push('>');
}

pub fn write_end_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
#[path = "../../tests/unit/document/writer.rs"]
mod tests;
