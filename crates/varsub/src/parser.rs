//! The substitution engine: binding assignment and fixpoint parsing.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use varsub_extract::Extractor;

use crate::bindings::Bindings;

/// Rewrites text by substituting bound values for extracted tokens.
///
/// A parser owns a [`Bindings`] store and applies it against whatever
/// tokens an extraction callback reports, pass after pass, until a pass
/// finds no tokens or none of the found tokens have a binding. A
/// substituted value that itself contains a token is resolved on a later
/// pass.
///
/// Parsing never fails: tokens without a binding stay in the text
/// verbatim. The one pathological input is a reference cycle between bound
/// values (A's rendering reintroduces a token for B and vice versa), which
/// does not terminate; populate bindings acyclically.
///
/// # Example
///
/// ```
/// use varsub::{Extractor, Parser, Value};
///
/// let extractor = Extractor::braced();
/// extractor.compile().unwrap();
///
/// let mut parser: Parser<String, Value> = Parser::new();
/// parser
///     .assign("number", Value::from(123))
///     .assign("bool", Value::from(true));
///
/// let result = parser.parse_with("${number}/test/${bool}", &extractor);
/// assert_eq!(result, "123/test/true");
/// ```
#[derive(Debug, Clone)]
pub struct Parser<K, V> {
    bindings: Bindings<K, V>,
}

impl<K, V> Default for Parser<K, V> {
    fn default() -> Self {
        Parser {
            bindings: Bindings::default(),
        }
    }
}

impl<K, V> Parser<K, V>
where
    K: Eq + Hash,
{
    /// Creates a parser with an empty binding store.
    pub fn new() -> Self {
        Parser::default()
    }

    /// Binds `key` to `value`, overwriting any previous binding. Chainable.
    pub fn assign(&mut self, key: impl Into<K>, value: impl Into<V>) -> &mut Self {
        self.bindings.insert(key.into(), value.into());
        self
    }

    /// Returns the bound value for `key`, or the value type's default if
    /// unbound.
    pub fn get<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone + Default,
    {
        self.bindings.get_or_default(key)
    }

    /// Returns the bound value for `key`, or `default` if unbound.
    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.bindings.get_or(key, default)
    }

    /// Returns the binding store.
    pub fn bindings(&self) -> &Bindings<K, V> {
        &self.bindings
    }

    /// Substitutes bound values into `text` until a fixpoint.
    ///
    /// Each pass asks `extract` for the tokens currently present in the
    /// text, as a map from identifier to the literal token text. Every
    /// occurrence of each bound token's literal text is replaced with the
    /// value's rendering; unbound tokens are left untouched. Passes repeat
    /// until extraction reports no tokens, or a pass replaces nothing.
    ///
    /// Neither the binding store nor the extraction callback's state is
    /// mutated.
    pub fn parse<F>(&self, text: &str, extract: F) -> String
    where
        F: Fn(&str) -> HashMap<K, String>,
        V: Display,
    {
        let mut content = text.to_string();
        loop {
            let tokens = extract(&content);
            if tokens.is_empty() {
                return content;
            }

            let mut replaced = false;
            for (key, literal) in &tokens {
                if let Some(value) = self.bindings.get(key) {
                    content = content.replace(literal.as_str(), &value.to_string());
                    replaced = true;
                }
            }

            // Only unbound tokens remain; further passes would see the
            // same map forever.
            if !replaced {
                return content;
            }
        }
    }
}

impl<V> Parser<String, V> {
    /// Substitutes using an [`Extractor`] for token discovery.
    ///
    /// Equivalent to `parse(text, |s| extractor.extract(s))`. Remember
    /// that the extractor swallows compile errors during lazy compilation;
    /// call [`Extractor::compile`] first for diagnostics.
    pub fn parse_with(&self, text: &str, extractor: &Extractor) -> String
    where
        V: Display,
    {
        self.parse(text, |content| extractor.extract(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn assign_chains_and_overwrites() {
        let mut parser: Parser<String, Value> = Parser::new();
        parser.assign("a", 1).assign("b", 2).assign("a", 3);

        assert_eq!(parser.get("a"), Value::Int(3));
        assert_eq!(parser.get("b"), Value::Int(2));
        assert_eq!(parser.bindings().len(), 2);
    }

    #[test]
    fn get_falls_back_to_default() {
        let parser: Parser<String, Value> = Parser::new();
        assert_eq!(parser.get("missing"), Value::default());
        assert_eq!(parser.get_or("missing", Value::from(9)), Value::Int(9));
    }

    #[test]
    fn parse_returns_text_unchanged_when_extraction_is_empty() {
        let mut parser: Parser<String, Value> = Parser::new();
        parser.assign("number", 123);

        let result = parser.parse("plain text", |_| HashMap::new());
        assert_eq!(result, "plain text");
    }

    #[test]
    fn parse_leaves_unbound_tokens_in_place() {
        let parser: Parser<String, Value> = Parser::new();
        let extractor = Extractor::braced();

        let result = parser.parse_with("${nobody}/home", &extractor);
        assert_eq!(result, "${nobody}/home");
    }

    #[test]
    fn parse_replaces_every_occurrence_of_a_token() {
        let mut parser: Parser<String, Value> = Parser::new();
        parser.assign("id", 7);
        let extractor = Extractor::braced();

        let result = parser.parse_with("${id}/${id}/${id}", &extractor);
        assert_eq!(result, "7/7/7");
    }

    #[test]
    fn parse_resolves_reintroduced_tokens_on_later_passes() {
        let mut parser: Parser<String, Value> = Parser::new();
        parser.assign("number", "${id}").assign("id", 123);
        let extractor = Extractor::braced();

        let result = parser.parse_with("${number}", &extractor);
        assert_eq!(result, "123");
    }

    #[test]
    fn parse_does_not_mutate_the_store() {
        let mut parser: Parser<String, Value> = Parser::new();
        parser.assign("number", 1);
        let extractor = Extractor::braced();

        parser.parse_with("${number}", &extractor);
        assert_eq!(parser.get("number"), Value::Int(1));
        assert_eq!(parser.bindings().len(), 1);
    }

    #[test]
    fn parse_works_with_display_payloads_directly() {
        // Any V: Display is a valid bound value; no wrapper needed.
        let mut parser: Parser<String, i64> = Parser::new();
        parser.assign("count", 42i64);
        let extractor = Extractor::braced();

        assert_eq!(parser.parse_with("n=${count}", &extractor), "n=42");
    }
}
