/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token vocabulary shared by the IO scanner
 *            and parser.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the IO scripting language project.
 *
 * IO is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in the IO language.
///
/// `TokenKind` identifies how a span of source text is interpreted by the
/// parser. The set is closed: the parser and every fault message speak only
/// this vocabulary.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Scanner → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One or more decimal digits: `42`
    Number,

    /// A quoted string, delimiters included: `"abc"`, `'abc'`, `` `abc` ``
    String,

    /// `true` or `false`
    Boolean,

    /// A user-defined name (variables, functions, parameters).
    Identifier,

    /// `;`
    Semicolon,

    /// `{`
    OpeningBracket,

    /// `}`
    ClosingBracket,

    /// `(`
    OpeningParenthesis,

    /// `)`
    ClosingParenthesis,

    /// `,`
    Comma,

    /// The two characters `,)` scanned as **one** token.
    ///
    /// The parameter-list production only ever sees one token of lookahead,
    /// so a trailing comma is fused with the closing parenthesis here and
    /// rejected there.
    CommaFollowedByClosingParenthesis,

    /// `&&`, `||`, `==` or `!=`
    BinaryOperator,

    /// `=`
    AssignmentOperator,

    FunctionKeyword,
    LetKeyword,
    IfKeyword,
    ElseKeyword,
    ForKeyword,
    OfKeyword,
}

impl TokenKind {
    /// The stable name of this kind, as printed in fault messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Boolean => "Boolean",
            TokenKind::Identifier => "Identifier",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::OpeningBracket => "OpeningBracket",
            TokenKind::ClosingBracket => "ClosingBracket",
            TokenKind::OpeningParenthesis => "OpeningParenthesis",
            TokenKind::ClosingParenthesis => "ClosingParenthesis",
            TokenKind::Comma => "Comma",
            TokenKind::CommaFollowedByClosingParenthesis => "CommaFollowedByClosingParenthesis",
            TokenKind::BinaryOperator => "BinaryOperator",
            TokenKind::AssignmentOperator => "AssignmentOperator",
            TokenKind::FunctionKeyword => "FunctionKeyword",
            TokenKind::LetKeyword => "LetKeyword",
            TokenKind::IfKeyword => "IfKeyword",
            TokenKind::ElseKeyword => "ElseKeyword",
            TokenKind::ForKeyword => "ForKeyword",
            TokenKind::OfKeyword => "OfKeyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** produced by the IO scanner.
///
/// # Example Tokens
/// ```text
/// let      →  { kind: LetKeyword, lexeme: "let",   span: 1:1 }
/// age      →  { kind: Identifier, lexeme: "age",   span: 1:5 }
/// "jone"   →  { kind: String,     lexeme: "\"jone\"", span: 1:11 }
/// ```
///
/// Tokens are transient: the parser consumes each one inside exactly one
/// grammar production and keeps only the values it needs for the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// String tokens keep their quote delimiters here; the parser strips
    /// them when building a `StringLiteral`.
    pub lexeme: String,

    /// Where the first character of the token appeared.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only the lexeme is
    /// printed, never the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// The three quote styles a string literal may be delimited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    Backtick,
}

impl Quote {
    pub const ALL: [Quote; 3] = [Quote::Double, Quote::Single, Quote::Backtick];

    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
            Quote::Backtick => '`',
        }
    }

    /// Returns the quote style a string lexeme opens with, if any.
    pub fn opening(lexeme: &str) -> Option<Quote> {
        let first = lexeme.chars().next()?;
        Quote::ALL.into_iter().find(|quote| quote.as_char() == first)
    }

    /// Strips one matching delimiter from each end of `lexeme`.
    ///
    /// Interior content, including leading and trailing whitespace, is
    /// returned byte-for-byte. Returns `None` when `lexeme` is not a
    /// complete quoted string.
    pub fn unquote(lexeme: &str) -> Option<&str> {
        let quote = Quote::opening(lexeme)?.as_char();
        lexeme
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    }
}
