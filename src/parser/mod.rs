//! Recipe parsing pipeline
//!
//! Passes, in order:
//! ```txt
//! lex        input -> tokens
//! metadata   front matter + inline `>>` lines -> Metadata
//! comments   `--` and `[- -]` removed, newlines kept
//! notes      `>` lines -> Notes
//! sections   `=` markers read for names, tokens left in place
//! steps      blank-line groups -> segments + elements
//! assemble   aggregate, deduplicate, drop whitespace-only steps
//! ```
//! Every pass degrades gracefully; there is no failure mode for malformed
//! input, only fewer recognized elements.

mod comments;
mod metadata;
mod notes;
mod section;
mod step;

use indexmap::IndexMap;

use crate::{
    model::{Cookware, Ingredient, Recipe, Step},
    token_stream::TokenStream,
};

/// Parses one recipe. Total and side-effect free.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub(crate) fn parse(input: &str) -> Recipe {
    let stream = TokenStream::lex(input);

    let (metadata, stream) = metadata::extract(stream);
    let stream = comments::strip(stream);
    let (notes, mut stream) = notes::extract(stream);
    let sections = section::sections(&mut stream);
    let groups = section::split_steps(stream);

    let mut ingredients = Vec::new();
    let mut cookware = Vec::new();
    let mut timers = Vec::new();
    let mut steps = Vec::new();

    for group in groups {
        let parsed = step::parse_step(group);
        ingredients.extend(parsed.ingredients);
        cookware.extend(parsed.cookware);
        timers.extend(parsed.timers);
        steps.push(Step::new(parsed.segments));
    }

    // whitespace-only steps disappear from the list, but the elements they
    // carried were already aggregated above
    steps.retain(|step| !step.to_plain_text().trim().is_empty());

    tracing::debug!(
        steps = steps.len(),
        ingredients = ingredients.len(),
        cookware = cookware.len(),
        timers = timers.len(),
        sections = sections.len(),
        notes = notes.len(),
        "parsed recipe"
    );

    Recipe {
        ingredients: dedup_ingredients(ingredients),
        cookware: dedup_cookware(cookware),
        timers,
        steps,
        metadata,
        sections,
        notes,
    }
}

/// First occurrence wins; identity is the exact `(name, quantity, unit)`
/// triple, so the same name with different quantities stays duplicated.
fn dedup_ingredients(items: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut result: Vec<Ingredient> = Vec::new();
    for item in items {
        if !result.iter().any(|seen| seen.same_entry(&item)) {
            result.push(item);
        }
    }
    result
}

/// One entry per name, in first-appearance order. Among same-named items the
/// first one carrying a quantity wins, else the first occurrence.
fn dedup_cookware(items: Vec<Cookware>) -> Vec<Cookware> {
    let mut by_name: IndexMap<String, Cookware> = IndexMap::new();
    for item in items {
        match by_name.get_mut(&item.name) {
            None => {
                by_name.insert(item.name.clone(), item);
            }
            Some(existing) => {
                if existing.quantity.is_none() && item.quantity.is_some() {
                    *existing = item;
                }
            }
        }
    }
    by_name.into_values().collect()
}
