/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:     ast.rs
 * Purpose:  Abstract Syntax Tree produced by the IO parser.
 *
 * The tree is a closed set of plain data nodes. Nodes carry no behavior;
 * a consumer (evaluator, compiler, pretty printer) matches on them
 * exhaustively. Every node struct serializes with a `"type"` field naming
 * its variant, which is the shape external consumers read.
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

pub mod expr;
pub mod stmt;

pub use expr::{
    BinaryExpression, BinaryOperator, BinaryOperatorKind, BooleanLiteral, Expression, Identifier,
    NumericLiteral, StringLiteral, VariableDeclaration,
};
pub use stmt::{Alternate, Block, ForOfStatement, Function, IfStatement, Program, Statement};
