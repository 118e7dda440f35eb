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
 * ==========================================================================
 */

use crate::error::Error;
use crate::span::Span;
use std::fmt::Write;

/// Renders human-friendly, compiler-style diagnostics for IO faults.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position with a caret (`^`)
/// - Adds a short hint naming the token the parser wanted
///
/// The output is inspired by `rustc` diagnostics and stays readable
/// without color. Hosts decide where it goes; the library itself never
/// prints unless [`DiagnosticPrinter::print`] is called.
pub struct DiagnosticPrinter {
    /// Full source text the fault was raised against.
    source: String,

    /// Name shown in the `-->` line (e.g. `main.io`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders `error` as a multi-line diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_UNEXPECTED_TOKEN]: Unexpected token: "Comma", Expected: "ClosingParenthesis"
    ///   --> main.io:1:16
    ///    |
    ///   1 | function f(a, b,) {}
    ///    |                ^
    /// help: expected ClosingParenthesis
    /// ```
    ///
    /// End-of-input faults point just past the last character.
    pub fn render(&self, error: &Error) -> String {
        let Span { line, column } = error.span().unwrap_or_else(|| self.end_of_source());

        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "error[{}]: {}", error.code(), error);
        let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, line, column + 1);
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}^", " ".repeat(column));

        if let Error::Parse(err) = error {
            let _ = writeln!(out, "help: expected {}", err.expected());
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &Error) {
        eprint!("{}", self.render(error));
    }

    /// Position just past the last character of the source.
    fn end_of_source(&self) -> Span {
        Span::default().advanced_by(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn points_at_the_offending_token() {
        let source = "function f(a, b,) {}";
        let err = parse(source).unwrap_err();
        let rendered = DiagnosticPrinter::new("main.io", source).render(&err);

        let caret = format!("   | {}^", " ".repeat(15));
        let expected = [
            "error[E_UNEXPECTED_TOKEN]: Unexpected token: \"Comma\", Expected: \"ClosingParenthesis\"",
            "  --> main.io:1:16",
            "   |",
            "  1 | function f(a, b,) {}",
            caret.as_str(),
            "help: expected ClosingParenthesis",
            "",
        ]
        .join("\n");

        assert_eq!(rendered, expected);
    }

    #[test]
    fn end_of_input_points_past_the_source() {
        let source = "let a = 1;\n{";
        let err = parse(source).unwrap_err();
        let rendered = DiagnosticPrinter::new("main.io", source).render(&err);

        assert!(rendered.starts_with("error[E_UNEXPECTED_EOF]: Unexpected end of input, expected: ClosingBracket\n"));
        assert!(rendered.contains("  --> main.io:2:2\n"));
        assert!(rendered.contains("  2 | {\n"));
    }

    #[test]
    fn lex_errors_have_no_hint() {
        let source = "1 # 2";
        let err = parse(source).unwrap_err();
        let rendered = DiagnosticPrinter::new("main.io", source).render(&err);

        assert!(rendered.starts_with("error[E_LEX]: Unexpected character: '#'\n"));
        assert!(rendered.contains("   |   ^\n"));
        assert!(!rendered.contains("help:"));
    }
}
