//! Trusted-markup string wrapper.
//!
//! Rendering code deals with two kinds of text: untrusted user/catalog text
//! that must be escaped, and markup the formatter has already produced (or
//! that an admin authored) which must be inserted verbatim. Mixing the two up
//! either double-escapes or opens an injection hole, so the distinction is a
//! type, not a convention.

use serde::{Deserialize, Serialize};

/// A string that is safe to insert into HTML without further escaping.
///
/// Construct via [`HtmlSafe::escape`] for untrusted text or
/// [`HtmlSafe::trusted`] for markup that is already safe. The latter is an
/// explicit trust boundary: the caller asserts the content is pre-sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlSafe(String);

impl HtmlSafe {
    /// Wrap markup that is already safe, without escaping.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escape untrusted text for HTML insertion.
    pub fn escape(text: &str) -> Self {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for HtmlSafe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HtmlSafe {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
