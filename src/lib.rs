//! A canonical [cooklang](https://cooklang.org/) parser.
//!
//! One fixed pipeline, no extensions, behavior pinned to the published
//! conformance suite: the input is tokenized, metadata, comments and notes
//! are peeled off, the rest is split into blank-line separated steps and the
//! inline `@`/`#`/`~` elements are parsed out of each one.
//!
//! Parsing is total. Malformed markup never fails; it degrades to plain
//! text or to fewer recognized elements, so [`parse`] always hands back a
//! [`Recipe`].
//!
//! # Basic usage
//!
//! ```rust
//! let recipe = cooklang_canon::parse("Mix @flour{125%g} into the #bowl.");
//!
//! assert_eq!(recipe.ingredients[0].name, "flour");
//! assert_eq!(recipe.cookware[0].name, "bowl");
//! assert_eq!(recipe.steps[0].to_plain_text(), "Mix flour into the bowl.");
//! ```
//!
//! Reading from a file goes through [`parse_from_path`], the only fallible
//! entry point (I/O only, the parse itself still cannot fail).

#![warn(rustdoc::broken_intra_doc_links, clippy::doc_markdown)]

pub mod metadata;
pub mod model;
pub mod quantity;

mod lexer;
mod parser;
mod token_stream;

use std::path::Path;

use thiserror::Error;

pub use metadata::Metadata;
pub use model::{Cookware, Ingredient, Note, Recipe, Section, Segment, Step, Timer};
pub use quantity::Value;

/// Errors of the file reading convenience wrapper.
///
/// Parsing itself has no error variants; see the crate docs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read recipe: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a recipe.
///
/// Total and synchronous: any input produces a [`Recipe`], repeated calls on
/// the same input produce structurally equal results.
pub fn parse(input: &str) -> Recipe {
    parser::parse(input)
}

/// Read the file at `path` and parse its contents.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_from_path(path: impl AsRef<Path>) -> Result<Recipe, Error> {
    let input = std::fs::read_to_string(path)?;
    Ok(parse(&input))
}
