/*
 * ==========================================================================
 * IO - A minimal scripting language
 * ==========================================================================
 *
 * File:      rules.rs
 * Purpose:   Defines the ordered lexical rule table used by the IO scanner,
 *            including every reserved word of the language.
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

use crate::lexer::token::TokenKind;
use regex::Regex;
use std::sync::LazyLock;

/// What the scanner does with text matched by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Consume the text and emit nothing (whitespace, comments).
    Skip,

    /// Consume the text and emit a token of this kind.
    Emit(TokenKind),
}

/// A single entry of the lexical rule table.
#[derive(Debug)]
pub struct LexRule {
    pattern: Regex,
    action: RuleAction,

    /// Reserved words must not be followed by an identifier character,
    /// otherwise `forEach` would scan as `for` + `Each`.
    reserved: bool,
}

impl LexRule {
    fn new(pattern: &str, action: RuleAction) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("lexical rule patterns are valid regexes"),
            action,
            reserved: false,
        }
    }

    fn reserved(word: &str, kind: TokenKind) -> Self {
        Self {
            reserved: true,
            ..Self::new(&format!("^(?:{word})"), RuleAction::Emit(kind))
        }
    }

    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Returns the byte length this rule matches at the start of `rest`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let matched = self.pattern.find(rest)?;
        debug_assert_eq!(matched.start(), 0);

        if self.reserved && rest[matched.end()..].chars().next().is_some_and(is_identifier_char) {
            return None;
        }

        Some(matched.end())
    }
}

/// Characters that may continue an identifier.
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// The rule table, in priority order.
///
/// Order is load-bearing: `,)` must precede `,`, two-character operators
/// must precede `=`, and every reserved word must precede the identifier
/// rule.
static RULES: LazyLock<Vec<LexRule>> = LazyLock::new(|| {
    use RuleAction::{Emit, Skip};

    vec![
        // Whitespace and comments
        LexRule::new(r"^\s+", Skip),
        LexRule::new(r"^//[^\n]*", Skip),
        LexRule::new(r"(?s)^/\*.*?\*/", Skip),

        // Punctuation
        LexRule::new(r"^;", Emit(TokenKind::Semicolon)),
        LexRule::new(r"^\{", Emit(TokenKind::OpeningBracket)),
        LexRule::new(r"^\}", Emit(TokenKind::ClosingBracket)),
        LexRule::new(r"^,\)", Emit(TokenKind::CommaFollowedByClosingParenthesis)),
        LexRule::new(r"^,", Emit(TokenKind::Comma)),
        LexRule::new(r"^\(", Emit(TokenKind::OpeningParenthesis)),
        LexRule::new(r"^\)", Emit(TokenKind::ClosingParenthesis)),

        // Operators
        LexRule::new(r"^(?:&&|\|\||==|!=)", Emit(TokenKind::BinaryOperator)),
        LexRule::new(r"^=", Emit(TokenKind::AssignmentOperator)),

        // Reserved words
        LexRule::reserved("function", TokenKind::FunctionKeyword),
        LexRule::reserved("true|false", TokenKind::Boolean),
        LexRule::reserved("let", TokenKind::LetKeyword),
        LexRule::reserved("if", TokenKind::IfKeyword),
        LexRule::reserved("else", TokenKind::ElseKeyword),
        LexRule::reserved("of", TokenKind::OfKeyword),
        LexRule::reserved("for", TokenKind::ForKeyword),

        // Literals and names
        LexRule::new(r"^[0-9]+", Emit(TokenKind::Number)),
        LexRule::new(r#"^(?:"[^"]*"|'[^']*'|`[^`]*`)"#, Emit(TokenKind::String)),
        LexRule::new(r"^[\p{Alphabetic}_$][\w$]*", Emit(TokenKind::Identifier)),
    ]
});

/// Returns the compiled rule table.
pub fn rules() -> &'static [LexRule] {
    &RULES
}

/// Finds the first rule matching at the start of `rest`.
///
/// Returns the matched byte length together with the rule's action.
pub fn first_match(rest: &str) -> Option<(usize, RuleAction)> {
    rules()
        .iter()
        .find_map(|rule| rule.match_len(rest).map(|len| (len, rule.action())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(text: &str) -> Option<(usize, RuleAction)> {
        first_match(text)
    }

    #[test]
    fn all_patterns_compile() {
        assert_eq!(rules().len(), 22);
    }

    #[test]
    fn fused_comma_wins_over_plain_comma() {
        assert_eq!(
            kind_of(",)"),
            Some((2, RuleAction::Emit(TokenKind::CommaFollowedByClosingParenthesis)))
        );
        assert_eq!(kind_of(", )"), Some((1, RuleAction::Emit(TokenKind::Comma))));
    }

    #[test]
    fn two_character_operators_are_not_split() {
        assert_eq!(kind_of("== 1"), Some((2, RuleAction::Emit(TokenKind::BinaryOperator))));
        assert_eq!(kind_of("!="), Some((2, RuleAction::Emit(TokenKind::BinaryOperator))));
        assert_eq!(kind_of("= 1"), Some((1, RuleAction::Emit(TokenKind::AssignmentOperator))));
    }

    #[test]
    fn reserved_words_need_a_boundary() {
        assert_eq!(kind_of("for ("), Some((3, RuleAction::Emit(TokenKind::ForKeyword))));
        assert_eq!(kind_of("forEach"), Some((7, RuleAction::Emit(TokenKind::Identifier))));
        assert_eq!(kind_of("office"), Some((6, RuleAction::Emit(TokenKind::Identifier))));
        assert_eq!(kind_of("true_ish"), Some((8, RuleAction::Emit(TokenKind::Identifier))));
        assert_eq!(kind_of("if("), Some((2, RuleAction::Emit(TokenKind::IfKeyword))));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kind_of("// note\n1"), Some((7, RuleAction::Skip)));
        assert_eq!(kind_of("/**/1"), Some((4, RuleAction::Skip)));
        assert_eq!(kind_of("/* a\n * b/c */x"), Some((14, RuleAction::Skip)));
    }

    #[test]
    fn strings_keep_their_delimiters() {
        assert_eq!(kind_of("'a b' rest"), Some((5, RuleAction::Emit(TokenKind::String))));
        assert_eq!(kind_of("`x`"), Some((3, RuleAction::Emit(TokenKind::String))));
    }

    #[test]
    fn unknown_characters_match_nothing() {
        assert_eq!(kind_of("@"), None);
        assert_eq!(kind_of("& b"), None);
        assert_eq!(kind_of("/* open"), None);
    }

    #[test]
    fn numbers_are_ascii_digits() {
        assert_eq!(kind_of("123;"), Some((3, RuleAction::Emit(TokenKind::Number))));
        assert_eq!(kind_of("\u{0661}"), None);
        assert_eq!(kind_of("\u{FF11}\u{FF12}"), None);
    }
}
