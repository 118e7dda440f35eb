/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform IO source text into a `Program` tree.
 *
 * The grammar itself is split across multiple modules:
 * - `statements.rs`   → Program, blocks, `function`, `if`, `for ... of`
 * - `expressions.rs`  → `let`, literals and binary chains
 * - `helpers.rs`      → `eat`, lookahead checks
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Program;
use crate::error::Result;
use crate::lexer::scanner::Scanner;
use crate::lexer::token::Token;

/// The IO recursive-descent parser.
///
/// This structure holds all mutable parse state:
/// - The scanner it pulls tokens from
/// - The single token of lookahead
///
/// Grammar productions live in extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
///
/// A parser may be reused, but every call to [`Parser::parse`] starts from
/// a fully reset state. Reuse needs `&mut self`, so one instance can never
/// run two parses at once.
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    /// Token source for the current parse.
    pub(crate) scanner: Scanner<'src>,

    /// The next unconsumed token; `None` once input is exhausted.
    pub(crate) lookahead: Option<Token>,
}

/// Public entry point for the IO parsing phase.
///
/// # Returns
/// - `Ok(Program)` holding every top-level statement in source order
/// - `Err` with the **first** fault met scanning left to right
///
/// # IO Pipeline
/// ```text
/// Source → Scanner → Tokens → Parser → AST → (external evaluator)
/// ```
///
/// # Example
/// ```rust
/// let program = io_lang::parse("let answer = 42;").unwrap();
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Program> {
    Parser::new().parse(source)
}

impl<'src> Parser<'src> {
    /// Creates an idle parser with an empty scanner.
    pub fn new() -> Self {
        Self {
            scanner: Scanner::new(""),
            lookahead: None,
        }
    }

    /// Parses `source` into a `Program`.
    ///
    /// # Behavior
    /// - Resets the scanner and lookahead
    /// - Primes the lookahead with the first token
    /// - Runs the `Program` production
    /// - Never returns a partial tree
    pub fn parse(&mut self, source: &'src str) -> Result<Program> {
        self.scanner.init(source);
        self.lookahead = None;

        tracing::debug!(bytes = source.len(), "parsing program");

        let result = self.prime().and_then(|()| self.program());

        match &result {
            Ok(program) => tracing::debug!(statements = program.len(), "parsed program"),
            Err(err) => tracing::debug!(code = err.code(), %err, "parse failed"),
        }

        result
    }

    /// Pulls the first token into the lookahead slot.
    fn prime(&mut self) -> Result<()> {
        self.lookahead = self.scanner.next_token()?;
        Ok(())
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LexError, ParseError};
    use crate::lexer::token::TokenKind;
    use crate::span::Span;

    #[test]
    fn reuses_an_instance_after_a_failure() {
        let mut parser = Parser::new();

        let err = parser.parse("function f(a,) {}").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { .. })));

        let program = parser.parse("true; false;").unwrap();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn second_parse_starts_from_a_clean_state() {
        let mut parser = Parser::default();
        parser.parse("{ 1; }").unwrap();

        // The previous source ended cleanly; no stale lookahead may leak in.
        let err = parser.parse("").unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::UnexpectedEndOfInput {
                expected: TokenKind::Identifier,
            })
        );
    }

    #[test]
    fn lex_errors_in_the_first_token_surface() {
        let err = parse("  @").unwrap_err();
        assert_eq!(
            err,
            Error::Lex(LexError::UnexpectedCharacter {
                character: '@',
                span: Span::new(1, 2),
            })
        );
    }
}
