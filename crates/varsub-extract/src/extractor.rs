//! Delimiter-pair compilation and token extraction.
//!
//! The [`Extractor`] turns an arbitrary pair of literal markers into a
//! matching pattern and collects every `start + identifier + end` token
//! from a text body.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::{ExtractError, Result};

/// Characters that carry meaning inside a regular expression and must be
/// escaped when a marker contains them.
const METACHARS: &[char] = &['?', '$', '{', '}', '\\', '.', '*', '+', '[', ']', '|'];

/// Finds delimiter-wrapped tokens in text.
///
/// An extractor is configured with a start and end marker. Any literal
/// strings work, including ones made entirely of regex metacharacters
/// (`"${"`, `"[:"`, `"$"`). The identifier between the markers is
/// restricted to `[A-Za-z0-9_-]+`; a delimiter-shaped span with any other
/// character inside (such as `${/ssx}`) is not a token and is left alone.
///
/// The pattern is compiled once and reused. Call [`compile`](Self::compile)
/// up front to get configuration diagnostics; [`extract`](Self::extract)
/// compiles lazily and swallows compile errors into an empty result.
///
/// # Example
///
/// ```rust
/// use varsub_extract::Extractor;
///
/// let extractor = Extractor::new("${", "}");
/// extractor.compile().unwrap();
///
/// let tokens = extractor.extract("${number}/test/${bool}");
/// assert_eq!(tokens["number"], "${number}");
/// assert_eq!(tokens["bool"], "${bool}");
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    start: String,
    end: String,
    pattern: OnceCell<Regex>,
}

impl Extractor {
    /// Creates an extractor for the given marker pair.
    ///
    /// The markers are not validated here; validation happens at
    /// compilation.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Extractor {
            start: start.into(),
            end: end.into(),
            pattern: OnceCell::new(),
        }
    }

    /// Creates an extractor for `${name}` style tokens.
    pub fn braced() -> Self {
        Extractor::new("${", "}")
    }

    /// Returns the configured start marker.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the configured end marker.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Compiles the marker pair into a matching pattern.
    ///
    /// Fails with [`ExtractError::MissingStartDelimiter`] or
    /// [`ExtractError::MissingEndDelimiter`] if a marker is empty, and with
    /// [`ExtractError::InvalidPattern`] if the derived pattern does not
    /// compile. Succeeds at most once; later calls reuse the compiled
    /// pattern, and a failed call leaves the extractor ready to retry.
    pub fn compile(&self) -> Result<()> {
        self.compiled().map(|_| ())
    }

    /// Collects every token in `text`, keyed by identifier.
    ///
    /// Each entry maps the identifier to the literal matched token text,
    /// markers included. Matches are found left to right without overlap;
    /// if an identifier occurs at several spans, one entry survives.
    ///
    /// Compiles the pattern on first use. A lazy compilation failure yields
    /// an empty map; callers that need the error should call
    /// [`compile`](Self::compile) first or use
    /// [`try_extract`](Self::try_extract).
    pub fn extract(&self, text: &str) -> HashMap<String, String> {
        self.try_extract(text).unwrap_or_default()
    }

    /// Like [`extract`](Self::extract), but propagates compilation errors.
    pub fn try_extract(&self, text: &str) -> Result<HashMap<String, String>> {
        let pattern = self.compiled()?;
        let mut tokens = HashMap::new();
        for caps in pattern.captures_iter(text) {
            tokens.insert(caps[1].to_string(), caps[0].to_string());
        }
        Ok(tokens)
    }

    fn compiled(&self) -> Result<&Regex> {
        self.pattern.get_or_try_init(|| self.build())
    }

    fn build(&self) -> Result<Regex> {
        if self.start.is_empty() {
            return Err(ExtractError::MissingStartDelimiter);
        }
        if self.end.is_empty() {
            return Err(ExtractError::MissingEndDelimiter);
        }
        let expr = format!(
            "{}([A-Za-z0-9_-]+){}",
            escape_marker(&self.start),
            escape_marker(&self.end)
        );
        Ok(Regex::new(&expr)?)
    }
}

/// Escapes regex metacharacters in a marker, character by character, so the
/// marker always matches literally.
fn escape_marker(marker: &str) -> String {
    let mut escaped = String::with_capacity(marker.len());
    for ch in marker.chars() {
        if METACHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
