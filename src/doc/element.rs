//! doc::element
//!
//! Owned XML element tree with the narrow accessor surface the core needs.

use std::fmt::Write as _;

use quick_xml::escape::escape;

/// One parsed XML element.
///
/// Attribute order and child order are preserved from the source document
/// so re-serialized screens stay byte-comparable with their export.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Attribute value by name, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute parsed as `u32`; `None` when absent or non-numeric.
    pub fn attr_u32(&self, name: &str) -> Option<u32> {
        self.attr(name)?.trim().parse().ok()
    }

    /// Attribute parsed as `f64`; `None` when absent or non-numeric.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.attr(name)?.trim().parse().ok()
    }

    /// Set an attribute, replacing an existing value or appending.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub(crate) fn push_attr(&mut self, name: String, value: String) {
        self.attrs.push((name, value));
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Concatenated text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Mutable variant of [`Element::children_named`].
    pub fn children_named_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> {
        self.children.iter_mut().filter(move |c| c.name == name)
    }

    /// Follow a chain of first-child lookups, e.g. `["ScreenSetup", "screens"]`.
    pub fn descend(&self, path: &[&str]) -> Option<&Element> {
        let mut node = self;
        for name in path {
            node = node.child(name)?;
        }
        Some(node)
    }

    /// Serialize to indented XML text, without a declaration.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, 0);
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", pad, self.name);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v.as_str()));
        }

        let text = self.text.trim();
        if self.children.is_empty() && text.is_empty() {
            out.push_str("/>\n");
            return;
        }
        if self.children.is_empty() {
            let _ = writeln!(out, ">{}</{}>", escape(text), self.name);
            return;
        }

        out.push_str(">\n");
        if !text.is_empty() {
            let _ = writeln!(out, "{}  {}", pad, escape(text));
        }
        for child in &self.children {
            child.write_indented(out, depth + 1);
        }
        let _ = writeln!(out, "{}</{}>", pad, self.name);
    }
}
