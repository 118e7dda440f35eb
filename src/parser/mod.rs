/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the IO recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement parsing
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(source)` entry point
#[allow(clippy::module_inception)]
pub mod parser;

/// Statement-level parsing:
/// - program / statement lists / blocks
/// - function declarations and parameter lists
/// - if / else, for ... of
mod statements;

/// Expression-level parsing:
/// - `let` declarations
/// - literals
/// - right-nested binary chains
mod expressions;

/// Shared parser helpers:
/// - `eat`
/// - lookahead checks
mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Parser};
