/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      scanner.rs
 * Purpose:   Pull-based scanner turning IO source text into tokens, one
 *            token per call.
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

use crate::error::LexError;
use crate::lexer::rules::{first_match, RuleAction};
use crate::lexer::token::Token;
use crate::span::Span;

/// Lazy scanner over a borrowed source buffer.
///
/// Unlike a batch lexer, the scanner never materializes the token list:
/// the parser asks for one token at a time through [`Scanner::next_token`].
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,

    /// Byte offset of the scan position.
    cursor: usize,

    /// Line/column of the scan position.
    span: Span,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: 0,
            span: Span::default(),
        }
    }

    /// Resets the scanner to the start of `source`.
    ///
    /// Any state from a previous scan is discarded.
    pub fn init(&mut self, source: &'src str) {
        self.source = source;
        self.cursor = 0;
        self.span = Span::default();
    }

    /// Returns true once the scan position reaches the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Scans and returns the next token.
    ///
    /// # Behavior
    /// - Rules are tried in table order; the first match wins
    /// - Whitespace and comments are consumed silently and scanning retries
    /// - `Ok(None)` marks the end of input
    ///
    /// # Errors
    /// `LexError::UnexpectedCharacter` when no rule matches at the current
    /// position. The position is left on the offending character.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while !self.is_at_end() {
            let rest = &self.source[self.cursor..];

            let Some((len, action)) = first_match(rest) else {
                let character = rest.chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter {
                    character,
                    span: self.span,
                });
            };

            let lexeme = &rest[..len];
            let start = self.span;
            self.cursor += len;
            self.span = start.advanced_by(lexeme);

            tracing::trace!(?action, lexeme, %start, "scanner rule matched");

            if let RuleAction::Emit(kind) = action {
                return Ok(Some(Token::new(kind, lexeme, start)));
            }
        }

        Ok(None)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens until the end of input.
    ///
    /// After an error the scanner jumps to the end of its buffer so the
    /// iterator is fused.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.cursor = self.source.len();
                Some(Err(err))
            }
        }
    }
}

/// Scans the whole of `source` into a token list.
///
/// The parser does not use this; it is a convenience for tools that want
/// to inspect the token stream.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).collect()
}
