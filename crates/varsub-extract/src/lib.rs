//! Token extraction for delimiter-wrapped placeholders.
//!
//! This crate finds `start + identifier + end` tokens in a text body, for
//! any literal marker pair the caller configures. Markers may contain regex
//! metacharacters; they are escaped character by character so `"${"`,
//! `"[:"`, or a bare `"$"` all match literally. Identifiers are limited to
//! word characters, underscore, and hyphen; a span like `${/ssx}` is not a
//! token and is left untouched, which is the supported way to write text
//! that merely looks like a placeholder.
//!
//! # Example
//!
//! ```rust
//! use varsub_extract::Extractor;
//!
//! let extractor = Extractor::new("[:", "]");
//! extractor.compile().unwrap();
//!
//! let tokens = extractor.extract("[:number]/test/[:b_id]/[:/ssx]");
//! assert_eq!(tokens["number"], "[:number]");
//! assert_eq!(tokens["b_id"], "[:b_id]");
//! assert_eq!(tokens.len(), 2);
//! ```

mod error;
mod extractor;

pub use error::{ExtractError, Result};
pub use extractor::Extractor;
