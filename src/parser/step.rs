//! Step parsing
//!
//! Walks one blank-line delimited token group and turns it into segments,
//! parsing `@`/`#`/`~` elements along the way. The three element parsers
//! share one scheme: an invalid-syntax guard, a lookahead for an opening
//! brace deciding between the multi-word and single-word name paths, and a
//! braced body where `%` splits the value from the unit. The kinds differ in
//! the details: only cookware yields a claimed brace to a later marker, a
//! timer takes its braced name from the first text token alone, and only a
//! timer's braced value keeps hyphens.

use crate::{
    lexer::T,
    model::{Cookware, Ingredient, Segment, Timer},
    quantity::Value,
    token_stream::TokenStream,
};

#[derive(Debug)]
pub(crate) struct ParsedStep {
    pub(crate) segments: Vec<Segment>,
    pub(crate) ingredients: Vec<Ingredient>,
    pub(crate) cookware: Vec<Cookware>,
    pub(crate) timers: Vec<Timer>,
}

pub(crate) fn parse_step(stream: TokenStream<'_>) -> ParsedStep {
    let mut stream = stream;
    let mut segments = Vec::new();
    let mut ingredients = Vec::new();
    let mut cookware = Vec::new();
    let mut timers = Vec::new();

    while let Some(token) = stream.current().copied() {
        match token.kind {
            T![@] => match ingredient(&mut stream) {
                Some((item, residual)) => {
                    ingredients.push(item.clone());
                    segments.push(Segment::Ingredient { value: item });
                    push_residual(&mut segments, residual);
                }
                None => {
                    segments.push(Segment::text(token.text));
                    let _ = stream.next_token();
                }
            },
            T![#] => match cookware_item(&mut stream) {
                Some((item, residual)) => {
                    cookware.push(item.clone());
                    segments.push(Segment::Cookware { value: item });
                    push_residual(&mut segments, residual);
                }
                None => {
                    segments.push(Segment::text(token.text));
                    let _ = stream.next_token();
                }
            },
            T![~] => match timer(&mut stream) {
                Some((item, residual)) => {
                    timers.push(item.clone());
                    segments.push(Segment::Timer { value: item });
                    push_residual(&mut segments, residual);
                }
                None => {
                    segments.push(Segment::text(token.text));
                    let _ = stream.next_token();
                }
            },
            T![text] => {
                segments.push(Segment::text(token.text));
                let _ = stream.next_token();
            }
            T![newline] => {
                segments.push(Segment::text("\n"));
                let _ = stream.next_token();
            }
            // stray structure reads back as its literal text
            T![---] | T!['{'] | T!['}'] | T!['('] | T![')'] | T![%] => {
                segments.push(Segment::text(token.text));
                let _ = stream.next_token();
            }
            _ => {
                let _ = stream.next_token();
            }
        }
    }

    trim_trailing(&mut segments);
    ParsedStep {
        segments,
        ingredients,
        cookware,
        timers,
    }
}

fn push_residual(segments: &mut Vec<Segment>, residual: Option<&str>) {
    if let Some(text) = residual {
        if !text.is_empty() {
            segments.push(Segment::text(text));
        }
    }
}

fn trim_trailing(segments: &mut Vec<Segment>) {
    while segments.last().is_some_and(Segment::is_whitespace_text) {
        segments.pop();
    }
}

/// A marker directly followed by space-led text is not an element; the
/// caller re-emits the marker as plain text and moves on by one token.
fn invalid_marker_syntax(stream: &TokenStream<'_>) -> bool {
    stream
        .current()
        .is_some_and(|t| t.kind == T![text] && t.text.starts_with(' '))
}

/// Splits a leading `[A-Za-z0-9_]` run off `text`. With no such run the
/// whole trimmed text is the name and nothing is left over.
fn split_leading_word(text: &str) -> (String, Option<&str>) {
    let end = text
        .bytes()
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'_'))
        .unwrap_or(text.len());
    if end == 0 {
        (text.trim().to_string(), None)
    } else {
        let rest = &text[end..];
        (text[..end].to_string(), (!rest.is_empty()).then_some(rest))
    }
}

/// Joins text and hyphen tokens up to (not including) `until` into a
/// trimmed multi-word name, consuming everything before it.
fn joined_name(stream: &mut TokenStream<'_>, until: usize) -> String {
    let mut parts = String::new();
    while stream.position() < until {
        match stream.next_token() {
            Some(tok) if matches!(tok.kind, T![text] | T![-]) => parts.push_str(tok.text),
            Some(_) => {}
            None => break,
        }
    }
    parts.trim().to_string()
}

fn ingredient<'i>(stream: &mut TokenStream<'i>) -> Option<(Ingredient, Option<&'i str>)> {
    let start = stream.position();
    let _ = stream.consume(T![@])?;
    if invalid_marker_syntax(stream) {
        stream.set_position(start);
        return None;
    }

    let mut name = String::new();
    let mut residual = None;
    if let Some(brace) = stream.find_next(T!['{']) {
        name = joined_name(stream, brace);
    } else if stream.at(T![text]) {
        if let Some(tok) = stream.next_token() {
            let (n, r) = split_leading_word(tok.text);
            name = n;
            residual = r;
        }
    }

    let mut quantity = None;
    let mut unit = None;
    if stream.consume(T!['{']).is_some() {
        let mut value_text = String::new();
        while let Some(tok) = stream.current().copied() {
            match tok.kind {
                T!['}'] => break,
                T![%] => {
                    let _ = stream.next_token();
                    if let Some(u) = stream.consume(T![text]) {
                        unit = Some(u.text.trim().to_string());
                    }
                }
                T![text] => {
                    value_text.push_str(tok.text);
                    let _ = stream.next_token();
                }
                _ => {
                    let _ = stream.next_token();
                }
            }
        }
        let _ = stream.consume(T!['}']);
        let value_text = value_text.trim();
        if !value_text.is_empty() {
            quantity = Some(Value::parse(value_text));
        }
    }

    let mut notes = None;
    if stream.consume(T!['(']).is_some() {
        let mut text = String::new();
        while let Some(tok) = stream.current().copied() {
            if tok.kind == T![')'] {
                break;
            }
            if tok.kind == T![text] {
                text.push_str(tok.text);
            }
            let _ = stream.next_token();
        }
        let _ = stream.consume(T![')']);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            notes = Some(trimmed.to_string());
        }
    }

    if quantity.is_none() && unit.is_none() {
        quantity = Some(Value::from("some"));
    }

    Some((
        Ingredient {
            name,
            quantity,
            unit,
            notes,
        },
        residual,
    ))
}

fn cookware_item<'i>(stream: &mut TokenStream<'i>) -> Option<(Cookware, Option<&'i str>)> {
    let start = stream.position();
    let _ = stream.consume(T![#])?;
    if invalid_marker_syntax(stream) {
        stream.set_position(start);
        return None;
    }

    let mut name = String::new();
    let mut residual = None;
    let mut braced = false;
    if let Some(brace) = stream.find_next(T!['{']) {
        // another element marker before the brace means the brace belongs to
        // that element, not this one; fall back to the single-word path
        let save = stream.position();
        let mut parts = String::new();
        let mut claimed = false;
        while stream.position() < brace {
            let Some(tok) = stream.current().copied() else {
                break;
            };
            match tok.kind {
                T![@] | T![#] | T![~] => {
                    claimed = true;
                    break;
                }
                T![text] | T![-] => {
                    parts.push_str(tok.text);
                    let _ = stream.next_token();
                }
                _ => {
                    let _ = stream.next_token();
                }
            }
        }
        if claimed {
            stream.set_position(save);
        } else {
            name = parts.trim().to_string();
            braced = true;
        }
    }
    if !braced && stream.at(T![text]) {
        if let Some(tok) = stream.next_token() {
            let (n, r) = split_leading_word(tok.text);
            name = n;
            residual = r;
        }
    }

    let mut quantity = None;
    if stream.consume(T!['{']).is_some() {
        let mut value_text = String::new();
        while let Some(tok) = stream.current().copied() {
            match tok.kind {
                T!['}'] => break,
                T![%] => {
                    // cookware has no unit; the split and its right half are
                    // accepted and dropped
                    let _ = stream.next_token();
                    let _ = stream.consume(T![text]);
                }
                T![text] => {
                    value_text.push_str(tok.text);
                    let _ = stream.next_token();
                }
                _ => {
                    let _ = stream.next_token();
                }
            }
        }
        let _ = stream.consume(T!['}']);
        let value_text = value_text.trim();
        if !value_text.is_empty() {
            quantity = Some(Value::parse_count(value_text));
        }
    }

    Some((
        Cookware {
            name,
            quantity: Some(quantity.unwrap_or(Value::Int(1))),
        },
        residual,
    ))
}

fn timer<'i>(stream: &mut TokenStream<'i>) -> Option<(Timer, Option<&'i str>)> {
    let start = stream.position();
    let _ = stream.consume(T![~])?;
    if invalid_marker_syntax(stream) {
        stream.set_position(start);
        return None;
    }

    let mut name = None;
    let mut residual = None;
    if let Some(tok) = stream.current().copied() {
        if tok.kind == T![text] && !tok.text.trim().is_empty() {
            if let Some(brace) = stream.find_next(T!['{']) {
                // named timer: the first text token is the whole name
                name = Some(tok.text.trim().to_string());
                stream.advance_to(brace);
            } else {
                let (n, r) = split_leading_word(tok.text);
                name = Some(n);
                residual = r;
                let _ = stream.next_token();
            }
        }
    }

    let mut duration = None;
    let mut unit = None;
    if stream.consume(T!['{']).is_some() {
        let mut value_text = String::new();
        while let Some(tok) = stream.current().copied() {
            match tok.kind {
                T!['}'] => break,
                T![%] => {
                    let _ = stream.next_token();
                    if let Some(u) = stream.consume(T![text]) {
                        unit = Some(u.text.trim().to_string());
                    }
                }
                // ranges like `2-3` keep their hyphen
                T![text] | T![-] => {
                    value_text.push_str(tok.text);
                    let _ = stream.next_token();
                }
                _ => {
                    let _ = stream.next_token();
                }
            }
        }
        let _ = stream.consume(T!['}']);
        let value_text = value_text.trim();
        if !value_text.is_empty() {
            duration = Some(Value::parse(value_text));
        }
    }

    Some((Timer {
        name,
        duration,
        unit,
    }, residual))
}
