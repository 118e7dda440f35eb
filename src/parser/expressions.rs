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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire IO expression grammar**:
 *
 *   expression → 'let' declaration | literal ( operator expression )?
 *
 * There is no precedence climbing. A binary operator takes the literal on
 * its left and the *whole remaining expression* on its right, so every
 * chain nests to the right:
 *
 *   a || b && c   →   a || (b && c)
 *   a == b || c   →   a == (b || c)
 *
 * ==========================================================================
 */

use crate::ast::{
    BinaryExpression, BinaryOperator, BinaryOperatorKind, BooleanLiteral, Expression, Identifier,
    NumericLiteral, StringLiteral, VariableDeclaration,
};
use crate::error::{ParseError, Result};
use crate::lexer::token::{Quote, TokenKind};
use crate::parser::parser::Parser;

impl Parser<'_> {
    /// expression → variable_declaration | literal ( BinaryOperator expression )?
    pub(crate) fn expression(&mut self) -> Result<Expression> {
        if self.check(TokenKind::LetKeyword) {
            return self.variable_declaration().map(Expression::VariableDeclaration);
        }

        let literal = self.literal()?;

        if self.check(TokenKind::BinaryOperator) {
            return self.binary_expression(literal);
        }

        Ok(literal)
    }

    /// variable_declaration → 'let' Identifier '=' expression
    fn variable_declaration(&mut self) -> Result<VariableDeclaration> {
        self.eat(TokenKind::LetKeyword)?;
        let id = self.identifier()?;
        self.eat(TokenKind::AssignmentOperator)?;
        let value = self.expression()?;

        Ok(VariableDeclaration {
            id,
            value: Box::new(value),
        })
    }

    /// binary_expression → <left> BinaryOperator expression
    ///
    /// The chain is read in a loop and folded from the right, so its length
    /// does not grow the call stack. A `let` operand takes the rest of the
    /// chain as its value.
    fn binary_expression(&mut self, first: Expression) -> Result<Expression> {
        let mut pairs = Vec::new();
        let mut last = first;

        while self.check(TokenKind::BinaryOperator) {
            let operator = self.binary_operator()?;
            let operand = if self.check(TokenKind::LetKeyword) {
                Expression::VariableDeclaration(self.variable_declaration()?)
            } else {
                self.literal()?
            };
            pairs.push((std::mem::replace(&mut last, operand), operator));
        }

        Ok(pairs.into_iter().rev().fold(last, |right, (left, operator)| {
            Expression::Binary(BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            })
        }))
    }

    fn binary_operator(&mut self) -> Result<BinaryOperator> {
        let token = self.eat(TokenKind::BinaryOperator)?;

        let kind = BinaryOperatorKind::from_symbol(&token.lexeme).ok_or(
            ParseError::UnexpectedToken {
                found: token.kind,
                expected: TokenKind::BinaryOperator,
                span: token.span,
            },
        )?;

        Ok(BinaryOperator {
            kind,
            symbol: token.lexeme,
        })
    }

    /// literal → Number | String | Boolean | Identifier
    ///
    /// Anything that is not a number, string or boolean is handed to the
    /// identifier production, which reports the fault.
    fn literal(&mut self) -> Result<Expression> {
        match self.peek_kind() {
            Some(TokenKind::Number) => self.numeric_literal().map(Expression::NumericLiteral),
            Some(TokenKind::String) => self.string_literal().map(Expression::StringLiteral),
            Some(TokenKind::Boolean) => self.boolean_literal().map(Expression::BooleanLiteral),
            _ => self.identifier().map(Expression::Identifier),
        }
    }

    /// ASCII decimal digits only; no sign, fraction or radix prefix reaches here.
    fn numeric_literal(&mut self) -> Result<NumericLiteral> {
        let token = self.eat(TokenKind::Number)?;

        let value = token
            .lexeme
            .parse::<f64>()
            .map_err(|_| ParseError::UnexpectedToken {
                found: token.kind,
                expected: TokenKind::Number,
                span: token.span,
            })?;

        Ok(NumericLiteral { value })
    }

    fn string_literal(&mut self) -> Result<StringLiteral> {
        let token = self.eat(TokenKind::String)?;
        let value = Quote::unquote(&token.lexeme).unwrap_or_default().to_string();
        Ok(StringLiteral { value })
    }

    fn boolean_literal(&mut self) -> Result<BooleanLiteral> {
        let token = self.eat(TokenKind::Boolean)?;
        Ok(BooleanLiteral {
            value: token.lexeme == "true",
        })
    }

    pub(crate) fn identifier(&mut self) -> Result<Identifier> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(Identifier::new(token.lexeme))
    }
}
