//! Comment stripping
//!
//! Runs after metadata extraction and before notes and segmentation. Line
//! comments take the rest of their physical line but leave the newline token
//! in place, so blank line detection still sees the boundary. Block comments
//! disappear entirely, unterminated ones included.

use crate::{
    lexer::{Token, TokenKind, T},
    token_stream::TokenStream,
};

pub(crate) fn strip(stream: TokenStream<'_>) -> TokenStream<'_> {
    let mut stream = stream;
    let mut result = Vec::new();
    while let Some(token) = stream.next_token() {
        match token.kind {
            T![line comment] => line_comment(&mut stream, &mut result),
            T![block comment start] => block_comment(&mut stream),
            _ => result.push(token),
        }
    }
    TokenStream::new(result)
}

fn line_comment<'i>(stream: &mut TokenStream<'i>, result: &mut Vec<Token<'i>>) {
    // a following text token holding an embedded newline is split: only the
    // part after the newline survives
    if let Some(next) = stream.current().copied() {
        if next.kind == T![text] {
            if let Some(newline_at) = next.text.find('\n') {
                let remaining = &next.text[newline_at + 1..];
                if !remaining.is_empty() {
                    result.push(Token {
                        kind: TokenKind::Text,
                        text: remaining,
                        ..next
                    });
                }
                let _ = stream.next_token();
                return;
            }
        }
    }
    // drop everything up to the newline, which stays for segmentation
    while let Some(tok) = stream.current().copied() {
        if tok.kind == T![newline] {
            break;
        }
        let _ = stream.next_token();
    }
}

fn block_comment(stream: &mut TokenStream<'_>) {
    while let Some(tok) = stream.next_token() {
        if tok.kind == T![block comment end] {
            break;
        }
    }
}
