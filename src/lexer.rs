//! Cooklang lexer
//!
//! Turns the raw input into a flat sequence of [`Token`]s. The lexer never
//! fails: every byte either starts a token or is dropped and scanning
//! continues, so the whole input is always consumable.

use std::collections::VecDeque;

/// A single lexed token.
///
/// `text` borrows from the input buffer. `offset` is a byte offset from the
/// start of the input; `line` and `column` are 1-based and `column` counts
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// "@"
    IngredientMarker,
    /// "#"
    CookwareMarker,
    /// "~"
    TimerMarker,
    /// "{"
    OpenBrace,
    /// "}"
    CloseBrace,
    /// "("
    OpenParen,
    /// ")"
    CloseParen,
    /// "%"
    Percent,
    /// "--"
    CommentLine,
    /// "[-"
    CommentBlockStart,
    /// "-]"
    CommentBlockEnd,
    /// ">>"
    MetadataMarker,
    /// one or more "="
    SectionMarker,
    /// ">" not followed by a second ">"
    NoteMarker,
    /// "\n"
    Newline,
    /// "---"
    YamlDelimiter,
    /// a maximal run of printable characters (tabs included) that are not
    /// markers, braces, parens, `%`, `-`, `[`, `]`, `=`, `>` or newlines
    Text,
    /// a single "-" not starting a comment
    Hyphen,
}

fn is_text_char(c: char) -> bool {
    if c == '\t' {
        return true;
    }
    if c.is_control() {
        return false;
    }
    !matches!(
        c,
        '@' | '#' | '~' | '{' | '}' | '(' | ')' | '%' | '-' | '[' | ']' | '=' | '>'
    )
}

/// A single forward pass over the input.
///
/// Implemented as a consuming iterator: finite, not restartable. Compound
/// rules (line and block comments) emit their content as follow-up tokens
/// through a small queue.
#[derive(Debug)]
pub struct Lexer<'i> {
    input: &'i str,
    pos: usize,
    line: u32,
    column: u32,
    queued: VecDeque<Token<'i>>,
}

impl<'i> Lexer<'i> {
    pub fn new(input: &'i str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            queued: VecDeque::new(),
        }
    }

    /// Builds a token of `len` bytes at the current position and advances
    /// past it, updating line/column per character.
    fn token(&mut self, kind: TokenKind, len: usize) -> Token<'i> {
        let text = &self.input[self.pos..self.pos + len];
        let token = Token {
            kind,
            text,
            offset: self.pos,
            line: self.line,
            column: self.column,
        };
        self.advance(text);
        token
    }

    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    fn block_comment(&mut self) -> Token<'i> {
        let start = self.token(TokenKind::CommentBlockStart, 2);
        let rest = &self.input[self.pos..];
        let content_len = rest.find("-]").unwrap_or(rest.len());
        if content_len > 0 {
            let content = self.token(TokenKind::Text, content_len);
            self.queued.push_back(content);
        }
        if self.input[self.pos..].starts_with("-]") {
            let end = self.token(TokenKind::CommentBlockEnd, 2);
            self.queued.push_back(end);
        }
        start
    }

    fn line_comment(&mut self) -> Token<'i> {
        let marker = self.token(TokenKind::CommentLine, 2);
        let rest = &self.input[self.pos..];
        let content_len = rest.find('\n').unwrap_or(rest.len());
        if content_len > 0 {
            let content = self.token(TokenKind::Text, content_len);
            self.queued.push_back(content);
        }
        marker
    }
}

impl<'i> Iterator for Lexer<'i> {
    type Item = Token<'i>;

    fn next(&mut self) -> Option<Token<'i>> {
        if let Some(token) = self.queued.pop_front() {
            return Some(token);
        }
        loop {
            let rest = &self.input[self.pos..];
            let c = rest.chars().next()?;

            // first match wins, longest match within a rule
            let token = if rest.starts_with("---") {
                self.token(TokenKind::YamlDelimiter, 3)
            } else if rest.starts_with("[-") {
                self.block_comment()
            } else if rest.starts_with("--") {
                self.line_comment()
            } else if rest.starts_with(">>") {
                self.token(TokenKind::MetadataMarker, 2)
            } else if c == '=' {
                let len = rest.chars().take_while(|&c| c == '=').count();
                self.token(TokenKind::SectionMarker, len)
            } else if c == '>' {
                self.token(TokenKind::NoteMarker, 1)
            } else {
                match c {
                    '@' => self.token(TokenKind::IngredientMarker, 1),
                    '#' => self.token(TokenKind::CookwareMarker, 1),
                    '~' => self.token(TokenKind::TimerMarker, 1),
                    '{' => self.token(TokenKind::OpenBrace, 1),
                    '}' => self.token(TokenKind::CloseBrace, 1),
                    '(' => self.token(TokenKind::OpenParen, 1),
                    ')' => self.token(TokenKind::CloseParen, 1),
                    '%' => self.token(TokenKind::Percent, 1),
                    '\n' => self.token(TokenKind::Newline, 1),
                    '-' => self.token(TokenKind::Hyphen, 1),
                    c if is_text_char(c) => {
                        let len = rest
                            .chars()
                            .take_while(|&c| is_text_char(c))
                            .map(char::len_utf8)
                            .sum();
                        self.token(TokenKind::Text, len)
                    }
                    // unrecognized character, drop it and keep scanning
                    _ => {
                        let skipped = &self.input[self.pos..self.pos + c.len_utf8()];
                        self.advance(skipped);
                        continue;
                    }
                }
            };
            return Some(token);
        }
    }
}

/// Shorthand macro for [`TokenKind`]
macro_rules! T {
    [@] => {
        $crate::lexer::TokenKind::IngredientMarker
    };
    [#] => {
        $crate::lexer::TokenKind::CookwareMarker
    };
    [~] => {
        $crate::lexer::TokenKind::TimerMarker
    };
    ['{'] => {
        $crate::lexer::TokenKind::OpenBrace
    };
    ['}'] => {
        $crate::lexer::TokenKind::CloseBrace
    };
    ['('] => {
        $crate::lexer::TokenKind::OpenParen
    };
    [')'] => {
        $crate::lexer::TokenKind::CloseParen
    };
    [%] => {
        $crate::lexer::TokenKind::Percent
    };
    [line comment] => {
        $crate::lexer::TokenKind::CommentLine
    };
    [block comment start] => {
        $crate::lexer::TokenKind::CommentBlockStart
    };
    [block comment end] => {
        $crate::lexer::TokenKind::CommentBlockEnd
    };
    [>>] => {
        $crate::lexer::TokenKind::MetadataMarker
    };
    [=] => {
        $crate::lexer::TokenKind::SectionMarker
    };
    [>] => {
        $crate::lexer::TokenKind::NoteMarker
    };
    [newline] => {
        $crate::lexer::TokenKind::Newline
    };
    [---] => {
        $crate::lexer::TokenKind::YamlDelimiter
    };
    [text] => {
        $crate::lexer::TokenKind::Text
    };
    [-] => {
        $crate::lexer::TokenKind::Hyphen
    };
}
pub(crate) use T;
