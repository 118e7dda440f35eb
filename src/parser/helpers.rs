/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * Author:   Sam Wilcox
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

use crate::error::{ParseError, Result};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// Consumes the lookahead if it is of kind `expected`.
    ///
    /// This is the only place tokens are consumed. On success the next
    /// token is pulled from the scanner and the consumed token returned.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` when no lookahead remains
    /// - `UnexpectedToken` when the lookahead is of another kind
    /// - any `LexError` raised while pulling the next token
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token> {
        let Some(token) = self.lookahead.take() else {
            return Err(ParseError::UnexpectedEndOfInput { expected }.into());
        };

        if token.kind != expected {
            let err = ParseError::UnexpectedToken {
                found: token.kind,
                expected,
                span: token.span,
            };
            self.lookahead = Some(token);
            return Err(err.into());
        }

        self.lookahead = self.scanner.next_token()?;
        Ok(token)
    }

    /// Checks the lookahead kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead
            .as_ref()
            .is_some_and(|token| token.kind == kind)
    }

    /// Kind of the lookahead, if any.
    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Returns true once every token has been consumed.
    pub(crate) fn is_at_end(&self) -> bool {
        self.lookahead.is_none()
    }
}
