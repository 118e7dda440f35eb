/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root: scanner, recursive-descent parser and AST for IO.
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

//! Front end for the IO scripting language.
//!
//! ```text
//! Source → Scanner → Tokens → Parser → AST
//! ```
//!
//! [`parse`] is the single entry point. It returns a complete
//! [`ast::Program`] or the first fault met, never a partial tree.
//!
//! ```rust
//! use io_lang::ast::{Expression, Statement};
//!
//! let program = io_lang::parse(r#"let greeting = "hi" || false;"#).unwrap();
//! assert!(matches!(
//!     program.statements[0],
//!     Statement::Expression(Expression::VariableDeclaration(_))
//! ));
//! ```
//!
//! The library emits `tracing` events (`trace` per scanned token, `debug`
//! per parse) and never installs a subscriber itself.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use diagnostics::DiagnosticPrinter;
pub use error::{Error, LexError, ParseError, Result};
pub use parser::{parse, Parser};
pub use span::Span;
