/*
 * ============================================================================
 * IO - A minimal scripting language
 * ============================================================================
 *
 * File:      ast/stmt.rs
 * Purpose:   Statement nodes and the `Program` root of the IO syntax tree.
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
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use crate::ast::{Expression, Identifier};
use serde::Serialize;

/// All IO statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    /// `<expression>;` (the semicolon is not kept)
    Expression(Expression),

    /* ----------------------------- */
    /* BLOCKS & FUNCTIONS            */
    /* ----------------------------- */

    Block(Block),

    Function(Function),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    If(IfStatement),

    ForOf(ForOfStatement),
}

/// The root node: every top-level statement in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Serializes the tree for an external evaluator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `{ ... }`, possibly empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type")]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// `function <name>(<parameters>) <body>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

/// `if (<test>) <consequent> [else <alternate>]`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Block,

    /// `None` when there is no `else`; serialized as `null`.
    pub alternate: Option<Alternate>,
}

/// What follows an `else`.
///
/// A chain of `else if` clauses nests through `Alternate::If` and ends in
/// either a bare `else` block or no alternate at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Alternate {
    If(Box<IfStatement>),
    Block(Block),
}

/// `for (let <right> of <left>) <body>`
///
/// `left` names the iterable source and `right` the loop variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForOfStatement {
    pub left: Identifier,
    pub right: Identifier,
    pub body: Block,
}

/* ----------------------------- */
/* CONVERSIONS                   */
/* ----------------------------- */

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Statement::Block(block)
    }
}

impl From<Function> for Statement {
    fn from(function: Function) -> Self {
        Statement::Function(function)
    }
}

impl From<IfStatement> for Statement {
    fn from(stmt: IfStatement) -> Self {
        Statement::If(stmt)
    }
}

impl From<ForOfStatement> for Statement {
    fn from(stmt: ForOfStatement) -> Self {
        Statement::ForOf(stmt)
    }
}

impl From<IfStatement> for Alternate {
    fn from(stmt: IfStatement) -> Self {
        Alternate::If(Box::new(stmt))
    }
}

impl From<Block> for Alternate {
    fn from(block: Block) -> Self {
        Alternate::Block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BooleanLiteral;
    use serde_json::json;

    #[test]
    fn empty_alternate_serializes_as_null() {
        let stmt = Statement::from(IfStatement {
            test: BooleanLiteral { value: true }.into(),
            consequent: Block::default(),
            alternate: None,
        });

        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({
                "type": "IfStatement",
                "test": { "type": "BooleanLiteral", "value": true },
                "consequent": { "type": "Block", "statements": [] },
                "alternate": null,
            })
        );
    }

    #[test]
    fn program_to_json() {
        let program = Program {
            statements: vec![Block::default().into()],
        };
        assert_eq!(
            program.to_json().unwrap(),
            r#"{"type":"Program","statements":[{"type":"Block","statements":[]}]}"#
        );
        assert_eq!(program.len(), 1);
        assert!(!program.is_empty());
    }
}
