//! Varsub - variable placeholder substitution with configurable delimiters.
//!
//! Varsub rewrites text containing placeholder tokens like `${name}`,
//! `<name>`, or `[:name]` with previously bound values. The delimiter pair
//! is arbitrary (marker strings made of regex metacharacters work) and
//! substitution repeats until no resolvable tokens remain, so a bound value
//! may itself contain a placeholder that resolves on a later pass.
//!
//! The pieces:
//!
//! - [`Extractor`] (re-exported from `varsub-extract`) compiles a delimiter
//!   pair and finds the tokens currently present in a text body.
//! - [`Parser`] holds identifier → value bindings and runs the
//!   extract-and-replace loop to a fixpoint.
//! - [`Value`] is an owned payload type for stores mixing strings, numbers,
//!   and booleans; any `Display` type works as a binding value too.
//!
//! # Quick Start
//!
//! ```rust
//! use varsub::{Extractor, Parser, Value};
//!
//! let extractor = Extractor::new("${", "}");
//! extractor.compile().unwrap();
//!
//! let mut parser: Parser<String, Value> = Parser::new();
//! parser
//!     .assign("number", Value::from(123))
//!     .assign("bool", Value::from(true));
//!
//! let result = parser.parse_with("${number}/test/${bool}", &extractor);
//! assert_eq!(result, "123/test/true");
//! ```
//!
//! Tokens without a binding stay in the text verbatim, and a
//! delimiter-shaped span whose interior falls outside `[A-Za-z0-9_-]+`
//! (such as `${/ssx}`) is never treated as a token:
//!
//! ```rust
//! use varsub::{Extractor, Parser, Value};
//!
//! let extractor = Extractor::braced();
//! let mut parser: Parser<String, Value> = Parser::new();
//! parser.assign("number", Value::from("0001"));
//!
//! let result = parser.parse_with("${number}/${missing}/${/ssx}", &extractor);
//! assert_eq!(result, "0001/${missing}/${/ssx}");
//! ```
//!
//! # Concurrency
//!
//! Substitution is synchronous and single-threaded. A compiled extractor is
//! read-only and may be shared across threads, but the binding store has no
//! internal locking: populate bindings before parsing, or serialize access
//! externally.

mod bindings;
mod parser;
mod value;

// Re-export public API, including the extraction crate's surface.
pub use bindings::Bindings;
pub use parser::Parser;
pub use value::Value;
pub use varsub_extract::{ExtractError, Extractor};
