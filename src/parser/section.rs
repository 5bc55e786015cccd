//! Sections and step grouping
//!
//! Section markers are read for their names but not removed: the tokens of a
//! section line keep flowing into step grouping. Step boundaries are blank
//! lines: two newline tokens in a row, or a newline, a whitespace-only text
//! token and another newline.

use crate::{
    lexer::{Token, T},
    model::Section,
    token_stream::TokenStream,
};

/// Collects the named sections. The cursor position is restored afterwards;
/// sections never own steps.
pub(crate) fn sections(stream: &mut TokenStream<'_>) -> Vec<Section> {
    let save = stream.position();
    stream.set_position(0);
    let mut sections = Vec::new();
    while let Some(token) = stream.next_token() {
        if token.kind != T![=] {
            continue;
        }
        let mut name = String::new();
        while let Some(tok) = stream.current().copied() {
            if matches!(tok.kind, T![=] | T![newline]) {
                break;
            }
            if tok.kind == T![text] {
                name.push_str(tok.text);
            }
            let _ = stream.next_token();
        }
        let name = name.trim();
        if !name.is_empty() {
            sections.push(Section::new(Some(name.to_string())));
        }
    }
    stream.set_position(save);
    sections
}

/// Splits the stream into blank-line separated step groups. Groups holding
/// nothing but newlines are dropped.
pub(crate) fn split_steps(stream: TokenStream<'_>) -> Vec<TokenStream<'_>> {
    let mut stream = stream;
    let mut groups = Vec::new();
    let mut current: Vec<Token<'_>> = Vec::new();

    while let Some(token) = stream.next_token() {
        current.push(token);
        if token.kind != T![newline] {
            continue;
        }
        let blank = if stream.at(T![newline]) {
            if let Some(tok) = stream.next_token() {
                current.push(tok);
            }
            true
        } else if stream
            .current()
            .is_some_and(|t| t.kind == T![text] && t.text.trim().is_empty())
            && stream.peek(1).is_some_and(|t| t.kind == T![newline])
        {
            for _ in 0..2 {
                if let Some(tok) = stream.next_token() {
                    current.push(tok);
                }
            }
            true
        } else {
            false
        };
        if blank {
            flush(&mut groups, &mut current);
        }
    }
    flush(&mut groups, &mut current);
    groups
}

fn flush<'i>(groups: &mut Vec<TokenStream<'i>>, current: &mut Vec<Token<'i>>) {
    if current.iter().any(|t| t.kind != T![newline]) {
        groups.push(TokenStream::new(std::mem::take(current)));
    } else {
        current.clear();
    }
}
