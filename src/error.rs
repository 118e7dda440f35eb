/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Fault types raised by the IO scanner and parser.
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

use crate::lexer::token::TokenKind;
use crate::span::Span;
use thiserror::Error;

/// Raised by the scanner when no lexical rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character: '{character}'")]
    UnexpectedCharacter { character: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }
}

/// Raised by the parser when the token stream violates the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lookahead token is not the kind the production requires.
    #[error("Unexpected token: \"{found}\", Expected: \"{expected}\"")]
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
        span: Span,
    },

    /// The production requires a token but the input is exhausted.
    #[error("Unexpected end of input, expected: {expected}")]
    UnexpectedEndOfInput { expected: TokenKind },
}

impl ParseError {
    pub fn expected(&self) -> TokenKind {
        match self {
            ParseError::UnexpectedToken { expected, .. } => *expected,
            ParseError::UnexpectedEndOfInput { expected } => *expected,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::UnexpectedEndOfInput { .. } => None,
        }
    }
}

/// Any fault `parse` can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Stable error code (E_LEX, E_UNEXPECTED_TOKEN, …)
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(_) => "E_LEX",
            Error::Parse(ParseError::UnexpectedToken { .. }) => "E_UNEXPECTED_TOKEN",
            Error::Parse(ParseError::UnexpectedEndOfInput { .. }) => "E_UNEXPECTED_EOF",
        }
    }

    /// Primary source location, when the fault has one.
    ///
    /// End-of-input faults have no token to point at.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => Some(err.span()),
            Error::Parse(err) => err.span(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
