/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains all grammar rules responsible for parsing **IO
 * statements** into their corresponding Abstract Syntax Tree (AST) forms.
 *
 * It handles:
 * - The program root and statement lists
 * - Blocks
 * - Function declarations and their parameter lists
 * - Control flow (`if` / `else`, `for ... of`)
 * - Expression-backed statements
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

use crate::ast::{
    Alternate, Block, ForOfStatement, Function, Identifier, IfStatement, Program, Statement,
};
use crate::error::{ParseError, Result};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// ```text
    /// Program
    ///    : StatementList
    ///    ;
    /// ```
    pub(crate) fn program(&mut self) -> Result<Program> {
        Ok(Program {
            statements: self.statement_list(None)?,
        })
    }

    /// ```text
    /// StatementList
    ///    : Statement
    ///    | StatementList Statement
    ///    ;
    /// ```
    ///
    /// At least one statement is parsed. Parsing stops at end of input or
    /// when the lookahead is `stop_at`, which is left unconsumed.
    fn statement_list(&mut self, stop_at: Option<TokenKind>) -> Result<Vec<Statement>> {
        let mut statements = vec![self.statement()?];

        while !self.is_at_end() && !stop_at.is_some_and(|kind| self.check(kind)) {
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// This is the **main dispatcher** for statement forms: the lookahead
    /// alone picks the production, anything unrecognised is an expression
    /// statement.
    fn statement(&mut self) -> Result<Statement> {
        match self.peek_kind() {
            Some(TokenKind::OpeningBracket) => self.block().map(Statement::Block),
            Some(TokenKind::ForKeyword) => self.for_of_statement().map(Statement::ForOf),
            Some(TokenKind::IfKeyword) => self.if_statement().map(Statement::If),
            Some(TokenKind::FunctionKeyword) => self.function_statement().map(Statement::Function),
            _ => self.expression_statement(),
        }
    }

    /// ```text
    /// Block
    ///    : '{' StatementList? '}'
    ///    ;
    /// ```
    ///
    /// An unterminated block is reported by the final `eat` as an
    /// end-of-input fault rather than being silently closed.
    pub(crate) fn block(&mut self) -> Result<Block> {
        self.eat(TokenKind::OpeningBracket)?;

        let statements = if !self.check(TokenKind::ClosingBracket) && !self.is_at_end() {
            self.statement_list(Some(TokenKind::ClosingBracket))?
        } else {
            Vec::new()
        };

        self.eat(TokenKind::ClosingBracket)?;
        Ok(Block { statements })
    }

    /// ```text
    /// ExpressionStatement
    ///    : Expression ';'
    ///    ;
    /// ```
    fn expression_statement(&mut self) -> Result<Statement> {
        let expression = self.expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::Expression(expression))
    }

    /// ```text
    /// FunctionStatement
    ///    : 'function' Identifier '(' Parameters ')' Block
    ///    ;
    /// ```
    fn function_statement(&mut self) -> Result<Function> {
        self.eat(TokenKind::FunctionKeyword)?;
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        let parameters = self.parameters()?;
        let body = self.block()?;

        Ok(Function {
            name,
            parameters,
            body,
        })
    }

    /// ```text
    /// Parameters
    ///    : '(' (Identifier (',' Identifier)*)? ')'
    ///    ;
    /// ```
    ///
    /// # Errors
    /// - `a,)` → `UnexpectedToken { found: Comma, expected: ClosingParenthesis }`
    /// - `(,a` → `UnexpectedToken { found: Comma, expected: Identifier }`
    fn parameters(&mut self) -> Result<Vec<Identifier>> {
        self.eat(TokenKind::OpeningParenthesis)?;
        let mut parameters = Vec::new();

        while !self.check(TokenKind::ClosingParenthesis) {
            parameters.push(self.identifier()?);

            if let Some(token) = self
                .lookahead
                .as_ref()
                .filter(|token| token.kind == TokenKind::CommaFollowedByClosingParenthesis)
            {
                return Err(ParseError::UnexpectedToken {
                    found: TokenKind::Comma,
                    expected: TokenKind::ClosingParenthesis,
                    span: token.span,
                }
                .into());
            }

            if !self.check(TokenKind::ClosingParenthesis) {
                self.eat(TokenKind::Comma)?;
            }
        }

        self.eat(TokenKind::ClosingParenthesis)?;
        Ok(parameters)
    }

    /// ```text
    /// IfStatement
    ///    : 'if' '(' Expression ')' Block
    ///    | 'if' '(' Expression ')' Block 'else' IfStatement
    ///    | 'if' '(' Expression ')' Block 'else' Block
    ///    ;
    /// ```
    fn if_statement(&mut self) -> Result<IfStatement> {
        self.eat(TokenKind::IfKeyword)?;
        self.eat(TokenKind::OpeningParenthesis)?;
        let test = self.expression()?;
        self.eat(TokenKind::ClosingParenthesis)?;
        let consequent = self.block()?;

        let mut alternate = None;
        if self.check(TokenKind::ElseKeyword) {
            self.eat(TokenKind::ElseKeyword)?;

            alternate = Some(if self.check(TokenKind::IfKeyword) {
                Alternate::If(Box::new(self.if_statement()?))
            } else {
                Alternate::Block(self.block()?)
            });
        }

        Ok(IfStatement {
            test,
            consequent,
            alternate,
        })
    }

    /// ```text
    /// ForOfStatement
    ///    : 'for' '(' 'let' Identifier 'of' Identifier ')' Block
    ///    ;
    /// ```
    ///
    /// The loop variable becomes `right`, the iterable becomes `left`.
    fn for_of_statement(&mut self) -> Result<ForOfStatement> {
        self.eat(TokenKind::ForKeyword)?;
        self.eat(TokenKind::OpeningParenthesis)?;
        self.eat(TokenKind::LetKeyword)?;
        let right = self.identifier()?;
        self.eat(TokenKind::OfKeyword)?;
        let left = self.identifier()?;
        self.eat(TokenKind::ClosingParenthesis)?;
        let body = self.block()?;

        Ok(ForOfStatement { left, right, body })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::{Error, ParseError};
    use crate::lexer::token::TokenKind;
    use crate::parser::parse;

    fn parse_err(source: &str) -> ParseError {
        match parse(source) {
            Err(Error::Parse(err)) => err,
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn parses_sibling_and_nested_blocks() {
        let program = parse("{ 1; { 2; } } {}").unwrap();
        assert_eq!(program.len(), 2);

        let Statement::Block(outer) = &program.statements[0] else {
            panic!("expected a block");
        };
        assert_eq!(outer.len(), 2);
        assert!(matches!(outer.statements[1], Statement::Block(ref inner) if inner.len() == 1));
        assert_eq!(program.statements[1], Statement::Block(Block::default()));
    }

    #[test]
    fn parses_function_parameters_in_order() {
        let program = parse("function greet(first, last) { first; }").unwrap();
        let Statement::Function(function) = &program.statements[0] else {
            panic!("expected a function");
        };

        assert_eq!(function.name, "greet");
        assert_eq!(
            function.parameters,
            vec![Identifier::new("first"), Identifier::new("last")]
        );
        assert_eq!(function.body.len(), 1);
    }

    #[test]
    fn parses_function_without_parameters() {
        let program = parse("function noop() {}").unwrap();
        let Statement::Function(function) = &program.statements[0] else {
            panic!("expected a function");
        };
        assert!(function.parameters.is_empty());
        assert!(function.body.is_empty());
    }

    #[test]
    fn rejects_trailing_comma() {
        let err = parse_err("function f(a, b,) {}");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Comma,
                expected: TokenKind::ClosingParenthesis,
                ..
            }
        ));
    }

    #[test]
    fn rejects_leading_comma() {
        let err = parse_err("function f(,a) {}");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Comma,
                expected: TokenKind::Identifier,
                ..
            }
        ));
    }

    #[test]
    fn rejects_double_trailing_comma() {
        let err = parse_err("function f(a,,) {}");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::CommaFollowedByClosingParenthesis,
                expected: TokenKind::Identifier,
                ..
            }
        ));
    }

    #[test]
    fn rejects_missing_separator() {
        let err = parse_err("function f(a b) {}");
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Identifier,
                expected: TokenKind::Comma,
                ..
            }
        ));
    }

    #[test]
    fn reports_missing_and_unterminated_bodies() {
        assert_eq!(
            parse_err("function f(a)  "),
            ParseError::UnexpectedEndOfInput {
                expected: TokenKind::OpeningBracket
            }
        );
        assert_eq!(
            parse_err("function f(a) {\n\n"),
            ParseError::UnexpectedEndOfInput {
                expected: TokenKind::ClosingBracket
            }
        );
        assert_eq!(
            parse_err("function f(a) { 34; \"abc\";"),
            ParseError::UnexpectedEndOfInput {
                expected: TokenKind::ClosingBracket
            }
        );
        assert!(matches!(
            parse_err("function f(a) }"),
            ParseError::UnexpectedToken {
                found: TokenKind::ClosingBracket,
                expected: TokenKind::OpeningBracket,
                ..
            }
        ));
    }

    #[test]
    fn builds_else_if_chains() {
        let program = parse("if (true) {} else if (false) {} else { 1; }").unwrap();
        let Statement::If(stmt) = &program.statements[0] else {
            panic!("expected an if statement");
        };

        let Some(Alternate::If(else_if)) = &stmt.alternate else {
            panic!("expected an else-if");
        };
        assert_eq!(else_if.test, Expression::BooleanLiteral(BooleanLiteral { value: false }));

        let Some(Alternate::Block(otherwise)) = &else_if.alternate else {
            panic!("expected a trailing else block");
        };
        assert_eq!(otherwise.len(), 1);
    }

    #[test]
    fn if_without_else_has_no_alternate() {
        let program = parse("if (x == 1) {}").unwrap();
        let Statement::If(stmt) = &program.statements[0] else {
            panic!("expected an if statement");
        };
        assert_eq!(stmt.alternate, None);
        assert!(stmt.consequent.is_empty());
    }

    #[test]
    fn parses_for_of() {
        let program = parse("for (let v of xs) {}").unwrap();
        assert_eq!(
            program.statements[0],
            Statement::ForOf(ForOfStatement {
                left: Identifier::new("xs"),
                right: Identifier::new("v"),
                body: Block::default(),
            })
        );
    }

    #[test]
    fn for_of_requires_let() {
        assert!(matches!(
            parse_err("for (v of xs) {}"),
            ParseError::UnexpectedToken {
                found: TokenKind::Identifier,
                expected: TokenKind::LetKeyword,
                ..
            }
        ));
    }

    #[test]
    fn expression_statements_need_a_semicolon() {
        assert_eq!(
            parse_err("42"),
            ParseError::UnexpectedEndOfInput {
                expected: TokenKind::Semicolon
            }
        );
    }

    #[test]
    fn unclosed_block_fails_on_the_pending_statement() {
        assert_eq!(
            parse_err("{42"),
            ParseError::UnexpectedEndOfInput {
                expected: TokenKind::Semicolon
            }
        );
        assert_eq!(
            parse_err("{42;"),
            ParseError::UnexpectedEndOfInput {
                expected: TokenKind::ClosingBracket
            }
        );
    }
}
