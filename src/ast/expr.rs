/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      ast/expr.rs
 * Purpose:   Expression nodes of the IO abstract syntax tree.
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

use serde::Serialize;

/// Every IO expression.
///
/// Literals, identifiers, binary chains and `let` declarations are the
/// whole expression language: there are no calls, no unary operators and
/// no arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    Identifier(Identifier),
    Binary(BinaryExpression),
    VariableDeclaration(VariableDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NumericLiteral {
    pub value: f64,
}

/// A string literal with its delimiters already stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperatorKind {
    And,
    Or,
    Equal,
    NotEqual,
}

impl BinaryOperatorKind {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperatorKind::And => "&&",
            BinaryOperatorKind::Or => "||",
            BinaryOperatorKind::Equal => "==",
            BinaryOperatorKind::NotEqual => "!=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "&&" => Some(BinaryOperatorKind::And),
            "||" => Some(BinaryOperatorKind::Or),
            "==" => Some(BinaryOperatorKind::Equal),
            "!=" => Some(BinaryOperatorKind::NotEqual),
            _ => None,
        }
    }
}

/// An operator node.
///
/// `symbol` repeats what `kind` already says; consumers match on either.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryOperator {
    pub kind: BinaryOperatorKind,
    pub symbol: String,
}

impl From<BinaryOperatorKind> for BinaryOperator {
    fn from(kind: BinaryOperatorKind) -> Self {
        Self {
            kind,
            symbol: kind.symbol().to_string(),
        }
    }
}

/// `left <operator> right`
///
/// Chains nest to the right: `a || b && c` is `a || (b && c)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Chains can be tens of thousands of operators long, so nested operands
/// are unlinked onto a heap stack instead of dropped recursively.
impl Drop for BinaryExpression {
    fn drop(&mut self) {
        let mut pending = vec![take_operand(&mut self.left), take_operand(&mut self.right)];

        while let Some(expr) = pending.pop() {
            if let Expression::Binary(mut nested) = expr {
                pending.push(take_operand(&mut nested.left));
                pending.push(take_operand(&mut nested.right));
            }
        }
    }
}

fn take_operand(slot: &mut Box<Expression>) -> Expression {
    std::mem::replace(&mut **slot, Expression::BooleanLiteral(BooleanLiteral { value: false }))
}

/// `let <id> = <value>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub value: Box<Expression>,
}

/* ----------------------------- */
/* CONVERSIONS                   */
/* ----------------------------- */

impl From<NumericLiteral> for Expression {
    fn from(node: NumericLiteral) -> Self {
        Expression::NumericLiteral(node)
    }
}

impl From<StringLiteral> for Expression {
    fn from(node: StringLiteral) -> Self {
        Expression::StringLiteral(node)
    }
}

impl From<BooleanLiteral> for Expression {
    fn from(node: BooleanLiteral) -> Self {
        Expression::BooleanLiteral(node)
    }
}

impl From<Identifier> for Expression {
    fn from(node: Identifier) -> Self {
        Expression::Identifier(node)
    }
}

impl From<BinaryExpression> for Expression {
    fn from(node: BinaryExpression) -> Self {
        Expression::Binary(node)
    }
}

impl From<VariableDeclaration> for Expression {
    fn from(node: VariableDeclaration) -> Self {
        Expression::VariableDeclaration(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operator_symbols_round_trip() {
        for kind in [
            BinaryOperatorKind::And,
            BinaryOperatorKind::Or,
            BinaryOperatorKind::Equal,
            BinaryOperatorKind::NotEqual,
        ] {
            assert_eq!(BinaryOperatorKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(BinaryOperatorKind::from_symbol("="), None);
    }

    #[test]
    fn nodes_serialize_with_their_type_tag() {
        let expr = Expression::from(BinaryExpression {
            operator: BinaryOperatorKind::NotEqual.into(),
            left: Box::new(StringLiteral { value: "true".into() }.into()),
            right: Box::new(BooleanLiteral { value: true }.into()),
        });

        assert_eq!(
            serde_json::to_value(&expr).unwrap(),
            json!({
                "type": "BinaryExpression",
                "operator": { "type": "BinaryOperator", "kind": "NotEqual", "symbol": "!=" },
                "left": { "type": "StringLiteral", "value": "true" },
                "right": { "type": "BooleanLiteral", "value": true },
            })
        );
    }
}
