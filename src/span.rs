/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source positions attached to tokens and faults.
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

use std::fmt;

/// A position inside IO source text.
///
/// - `line` is **1-based**
/// - `column` is **0-based** and counted in characters, not bytes
///
/// Diagnostics print `column + 1` so users see 1-based columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position reached after scanning over `text`.
    pub fn advanced_by(self, text: &str) -> Self {
        text.chars().fold(self, |span, ch| {
            if ch == '\n' {
                Span::new(span.line + 1, 0)
            } else {
                Span::new(span.line, span.column + 1)
            }
        })
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_columns_and_lines() {
        let span = Span::default().advanced_by("ab\ncd");
        assert_eq!(span, Span::new(2, 2));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let span = Span::default().advanced_by("\"héllo\"");
        assert_eq!(span, Span::new(1, 7));
    }

    #[test]
    fn displays_one_based_column() {
        assert_eq!(Span::new(3, 4).to_string(), "3:5");
    }
}
