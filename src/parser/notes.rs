//! Note extraction
//!
//! A `>` marker starts a note running to the end of its line. The marker and
//! the rest of the line are removed from the stream; the newline stays so
//! step grouping still sees the line boundary.

use crate::{lexer::T, model::Note, token_stream::TokenStream};

pub(crate) fn extract(stream: TokenStream<'_>) -> (Vec<Note>, TokenStream<'_>) {
    let mut stream = stream;
    let mut notes = Vec::new();
    let mut content = Vec::new();
    while let Some(token) = stream.next_token() {
        if token.kind != T![>] {
            content.push(token);
            continue;
        }
        let mut text = String::new();
        while let Some(tok) = stream.current().copied() {
            if tok.kind == T![newline] {
                break;
            }
            if tok.kind == T![text] {
                text.push_str(tok.text);
            }
            let _ = stream.next_token();
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            notes.push(Note {
                content: trimmed.to_string(),
            });
        }
    }
    (notes, TokenStream::new(content))
}
