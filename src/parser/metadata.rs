//! Metadata extraction
//!
//! Two sources feed the same map: a `---` fenced front matter block at the
//! very start of the input, and inline `>> key: value` lines anywhere in the
//! body. Front matter is read first, inline entries second, so an inline
//! entry wins when both set the same key.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    lexer::T,
    metadata::Metadata,
    quantity::Value,
    token_stream::TokenStream,
};

static KEY_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^:]+):\s*(.*)$").unwrap());

/// Pulls all metadata out of the stream, returning the map and the stream of
/// remaining content tokens.
pub(crate) fn extract(stream: TokenStream<'_>) -> (Metadata, TokenStream<'_>) {
    let mut stream = stream;
    let mut metadata = Metadata::new();
    front_matter(&mut stream, &mut metadata);
    let content = inline_entries(&mut stream, &mut metadata);
    (metadata, content)
}

/// Reads a `---` fenced block, only when the stream starts with one and a
/// closing fence exists. The cursor ends up past the closing fence.
fn front_matter(stream: &mut TokenStream<'_>, metadata: &mut Metadata) {
    if !stream.at(T![---]) {
        return;
    }
    let save = stream.position();
    let _ = stream.next_token();
    let Some(close) = stream.find_next(T![---]) else {
        // unterminated fence, the delimiter reads as step text later
        stream.set_position(save);
        return;
    };

    let mut text = String::new();
    while stream.position() < close {
        match stream.next_token() {
            Some(tok) if matches!(tok.kind, T![text] | T![newline]) => text.push_str(tok.text),
            Some(_) => {}
            None => break,
        }
    }
    stream.advance_to(close + 1);

    for line in text.lines() {
        entry(line, metadata);
    }
}

/// Walks the remaining tokens once. A metadata marker whose immediately
/// following text token holds a `key: value` line yields an entry and both
/// tokens are dropped; everything else is content.
fn inline_entries<'i>(stream: &mut TokenStream<'i>, metadata: &mut Metadata) -> TokenStream<'i> {
    let mut content = Vec::new();
    while let Some(token) = stream.next_token() {
        if token.kind == T![>>] {
            let matched = stream
                .current()
                .is_some_and(|next| next.kind == T![text] && entry(next.text, metadata));
            if matched {
                let _ = stream.next_token();
                continue;
            }
        }
        content.push(token);
    }
    TokenStream::new(content)
}

/// Parses one `key: value` line into the map. Returns whether the line
/// matched.
fn entry(line: &str, metadata: &mut Metadata) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    let Some(captures) = KEY_VALUE.captures(line) else {
        return false;
    };
    let key = captures[1].trim();
    let value = unquote(captures[2].trim());
    metadata.insert(key.to_string(), Value::parse(value));
    true
}

/// Strips one pair of matching single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
