//! The placeholder node model.
//!
//! A placeholder is the atomic inline node binding a variable name inside a
//! content tree. It has two portable serializations:
//!
//! - canonical text form: `{{variableName}}`
//! - canonical markup form: an inline `<span>` carrying a machine-readable
//!   `data-variable` attribute, with the text form as visible fallback
//!
//! Round-trip law: serializing and parsing back yields the identical
//! variable name, for every legal name (non-empty, no `}}`). When markup
//! carries both the attribute and brace-shaped text, the attribute wins;
//! the text is consulted only when the attribute is absent.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An atomic inline node bound to a variable name.
///
/// No children, exactly one attribute. Editing surfaces must treat it as
/// indivisible: operations that would split it delete and replace it
/// wholesale instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderNode {
    /// Dotted lookup path, e.g. `pemohon.namaLengkap`. Not required to be
    /// present in any catalog at authoring time; unknown names simply fail
    /// resolution at merge time.
    pub variable_name: String,
}

impl PlaceholderNode {
    pub fn new(variable_name: impl Into<String>) -> Self {
        Self { variable_name: variable_name.into() }
    }

    /// Whether a string is a legal variable name for serialization:
    /// non-empty and free of the closing delimiter.
    #[must_use]
    pub fn is_legal_name(name: &str) -> bool {
        !name.is_empty() && !name.contains("}}")
    }

    /// Canonical text form: `{{name}}`.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!("{{{{{}}}}}", self.variable_name)
    }

    /// Parse the canonical text form. The input must be exactly
    /// `{{X}}` with X non-empty and containing no `}}`.
    #[must_use]
    pub fn parse_text(input: &str) -> Option<Self> {
        let inner = input.strip_prefix("{{")?.strip_suffix("}}")?;
        if Self::is_legal_name(inner) {
            Some(Self::new(inner))
        } else {
            None
        }
    }

    /// Canonical markup form: an inline span with the machine-readable
    /// attribute and the text form as visible fallback content.
    #[must_use]
    pub fn to_markup(&self) -> String {
        format!(
            "<span data-variable=\"{}\">{}</span>",
            escape_attribute(&self.variable_name),
            escape_text(&self.to_text()),
        )
    }

    /// Parse the markup form of a single inline element.
    ///
    /// Attribute-first precedence: a present `data-variable` attribute is
    /// authoritative; the element text is consulted only when the attribute
    /// is absent, and then only if it is exactly the `{{X}}` form.
    #[must_use]
    pub fn parse_markup(input: &str) -> Option<Self> {
        let input = input.trim();

        // Per-call compilation mirrors how the rest of the crate uses
        // regex; these patterns are small and the parse path is cold.
        let with_attr = Regex::new(
            r#"(?s)^<span\b[^>]*\bdata-variable="([^"]*)"[^>]*>(.*)</span>$"#,
        )
        .ok()?;
        if let Some(caps) = with_attr.captures(input) {
            let name = unescape(&caps[1]);
            return Self::is_legal_name(&name).then(|| Self::new(name));
        }

        let without_attr = Regex::new(r"(?s)^<span\b[^>]*>(.*)</span>$").ok()?;
        let caps = without_attr.captures(input)?;
        Self::parse_text(&unescape(&caps[1]))
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
