/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:     lexer.rs
 * Purpose:  Root module for lexical analysis.
 *
 * This module wires together:
 *   - The token vocabulary
 *   - The ordered lexical rule table
 *   - The pull-based scanner
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

/// Token kinds, tokens and quote styles.
pub mod token;

/// The ordered (pattern → action) table.
pub mod rules;

/// `Scanner` and the `tokenize` helper.
pub mod scanner;

pub use scanner::{tokenize, Scanner};
pub use token::{Quote, Token, TokenKind};
