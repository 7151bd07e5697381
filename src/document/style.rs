use std::collections::BTreeMap;

use roxmltree::Node;

use crate::{document::writer::WriterConfig, foundation::core::EVEN_ODD};

/// Presentation attributes that are resolved per path element and copied onto its replacements.
pub const STYLE_ATTRIBUTES: [&str; 5] = ["fill", "stroke", "stroke-width", "fill-rule", "style"];

const FILL_RULE: &str = "fill-rule";
const STYLE: &str = "style";

/// Own-then-inherited values of [`STYLE_ATTRIBUTES`] for one path element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    values: BTreeMap<&'static str, String>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve each recognized attribute from `node` itself, falling back to the nearest enclosing
    /// `g` element that sets it.
    pub fn resolve(node: Node<'_, '_>, writer: &WriterConfig) -> Self {
        let mut out = Self::new();
        for name in STYLE_ATTRIBUTES {
            let value = node.attribute(name).or_else(|| {
                node.ancestors()
                    .skip(1)
                    .filter(|a| writer.is_svg_element(*a, "g"))
                    .find_map(|g| g.attribute(name))
            });
            if let Some(v) = value {
                out.values.insert(name, v.to_string());
            }
        }
        out
    }

    pub fn is_recognized(name: &str) -> bool {
        STYLE_ATTRIBUTES.contains(&name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Set a recognized attribute. Unrecognized names are ignored and reported with `false`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match STYLE_ATTRIBUTES.iter().copied().find(|n| *n == name) {
            Some(key) => {
                self.values.insert(key, value.into());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Force `fill-rule="evenodd"`.
    ///
    /// A `fill-rule` declaration inside `style` would win over the attribute, so it is dropped
    /// (and `style` with it, once empty).
    pub fn force_even_odd(&mut self) {
        self.values.insert(FILL_RULE, EVEN_ODD.to_string());

        let Some(style) = self.values.get(STYLE) else {
            return;
        };
        let kept: Vec<&str> = style
            .split(';')
            .map(str::trim)
            .filter(|decl| !decl.is_empty())
            .filter(|decl| {
                let prop = decl.split(':').next().unwrap_or_default().trim();
                !prop.eq_ignore_ascii_case(FILL_RULE)
            })
            .collect();

        if kept.is_empty() {
            self.values.remove(STYLE);
        } else {
            let joined = kept.join(";");
            self.values.insert(STYLE, joined);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/style.rs"]
mod tests;
