//! Lexer (tokenizer) for LDAP filter text.

use std::iter::Peekable;
use std::str::Chars;

/// The kind of a token in LDAP filter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    // ==================== Structure ====================
    /// Opening bracket `(`.
    OpenBracket,

    /// Closing bracket `)`.
    CloseBracket,

    // ==================== Comparison Operators ====================
    /// The equality operator `=`.
    Equals,

    /// The presence operator `=*`.
    IsPresent,

    /// The greater-than operator `>`.
    GreaterThan,

    /// The greater-than-or-equals operator `>=`.
    GreaterThanOrEquals,

    /// The less-than operator `<`.
    LessThan,

    /// The less-than-or-equals operator `<=`.
    LessThanOrEquals,

    // ==================== Group Operators ====================
    /// The AND operator `&`.
    Ampersand,

    /// The OR operator `|`.
    Pipe,

    /// The NOT operator `!`.
    Exclamation,

    // ==================== Runs ====================
    /// A maximal run of characters that are neither structural nor
    /// whitespace, such as an attribute name.
    Word,

    /// A maximal run of whitespace characters.
    Whitespace,

    /// End of input.
    End,
}

/// A token with its literal text and position.
///
/// Lines and columns are 1-based and counted in characters, so a token
/// position can be turned into a caret diagnostic directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The literal text of the token; empty for `End`.
    pub value: String,
    /// 1-based line the token starts on.
    pub line: u32,
    /// 1-based column the token starts at.
    pub column: u32,
}

/// Characters that begin a structural token rather than a word.
fn is_structural(c: char) -> bool {
    matches!(c, '(' | ')' | '=' | '>' | '<' | '&' | '|' | '!')
}

/// Returns true if `c` would start a token of the given kind.
fn starts_kind(c: char, kind: TokenKind) -> bool {
    match kind {
        TokenKind::OpenBracket => c == '(',
        TokenKind::CloseBracket => c == ')',
        TokenKind::Equals | TokenKind::IsPresent => c == '=',
        TokenKind::GreaterThan | TokenKind::GreaterThanOrEquals => c == '>',
        TokenKind::LessThan | TokenKind::LessThanOrEquals => c == '<',
        TokenKind::Ampersand => c == '&',
        TokenKind::Pipe => c == '|',
        TokenKind::Exclamation => c == '!',
        TokenKind::Word => !is_structural(c) && !c.is_whitespace(),
        TokenKind::Whitespace => c.is_whitespace(),
        TokenKind::End => false,
    }
}

/// On-demand tokenizer over LDAP filter text.
///
/// Lexing never fails: any character that does not begin a structural
/// token is folded into a `Word` run, and exhausted input produces `End`
/// tokens forever.
pub(crate) struct Tokenizer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    /// 1-based line of the next unconsumed character.
    line: u32,
    /// 1-based column of the next unconsumed character.
    column: u32,
    current: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given filter text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
            current: None,
        }
    }

    /// The full text being lexed, for error reporting.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The most recent token produced by [`next_token`](Self::next_token),
    /// if any. Unaffected by [`consume_until`](Self::consume_until).
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Consumes one character, updating line and column.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        c
    }

    /// Consumes the single peeked character `c` as a whole token.
    fn single(&mut self, kind: TokenKind, c: char, line: u32, column: u32) -> Token {
        self.bump();
        Token {
            kind,
            value: c.to_string(),
            line,
            column,
        }
    }

    /// Reads a maximal run of characters satisfying `keep`.
    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut run = String::new();
        while let Some(&c) = self.chars.peek() {
            if !keep(c) {
                break;
            }
            run.push(c);
            self.bump();
        }
        run
    }

    /// Produces the next token, using greedy longest-match for the
    /// two-character operators `>=`, `<=` and `=*`.
    pub fn next_token(&mut self) -> Token {
        let line = self.line;
        let column = self.column;

        let token = match self.chars.peek().copied() {
            None => Token {
                kind: TokenKind::End,
                value: String::new(),
                line,
                column,
            },
            Some(c @ '(') => self.single(TokenKind::OpenBracket, c, line, column),
            Some(c @ ')') => self.single(TokenKind::CloseBracket, c, line, column),
            Some(c @ '&') => self.single(TokenKind::Ampersand, c, line, column),
            Some(c @ '|') => self.single(TokenKind::Pipe, c, line, column),
            Some(c @ '!') => self.single(TokenKind::Exclamation, c, line, column),
            Some('=') => {
                self.bump();
                if self.chars.peek() == Some(&'*') {
                    self.bump();
                    Token {
                        kind: TokenKind::IsPresent,
                        value: "=*".to_string(),
                        line,
                        column,
                    }
                } else {
                    Token {
                        kind: TokenKind::Equals,
                        value: "=".to_string(),
                        line,
                        column,
                    }
                }
            }
            Some('>') => {
                self.bump();
                if self.chars.peek() == Some(&'=') {
                    self.bump();
                    Token {
                        kind: TokenKind::GreaterThanOrEquals,
                        value: ">=".to_string(),
                        line,
                        column,
                    }
                } else {
                    Token {
                        kind: TokenKind::GreaterThan,
                        value: ">".to_string(),
                        line,
                        column,
                    }
                }
            }
            Some('<') => {
                self.bump();
                if self.chars.peek() == Some(&'=') {
                    self.bump();
                    Token {
                        kind: TokenKind::LessThanOrEquals,
                        value: "<=".to_string(),
                        line,
                        column,
                    }
                } else {
                    Token {
                        kind: TokenKind::LessThan,
                        value: "<".to_string(),
                        line,
                        column,
                    }
                }
            }
            Some(c) if c.is_whitespace() => {
                let value = self.take_while(char::is_whitespace);
                Token {
                    kind: TokenKind::Whitespace,
                    value,
                    line,
                    column,
                }
            }
            Some(_) => {
                let value = self.take_while(|c| !is_structural(c) && !c.is_whitespace());
                Token {
                    kind: TokenKind::Word,
                    value,
                    line,
                    column,
                }
            }
        };

        self.current = Some(token.clone());
        token
    }

    /// Produces the next token that is not whitespace.
    pub fn next_non_whitespace(&mut self) -> Token {
        loop {
            let token = self.next_token();
            if token.kind != TokenKind::Whitespace {
                return token;
            }
        }
    }

    /// Captures characters verbatim until one that would begin a token of
    /// `kind`, or the end of input. The stopping character is left
    /// unconsumed.
    pub fn consume_until(&mut self, kind: TokenKind) -> String {
        let mut captured = String::new();
        while let Some(&c) = self.chars.peek() {
            if starts_kind(c, kind) {
                break;
            }
            captured.push(c);
            self.bump();
        }
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut tokenizer = Tokenizer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let kind = token.kind;
            kinds.push(kind);
            if kind == TokenKind::End {
                return kinds;
            }
        }
    }

    #[test]
    fn test_tokenize_simple_comparison() {
        assert_eq!(
            kinds("(cn=John)"),
            vec![
                TokenKind::OpenBracket,
                TokenKind::Word,
                TokenKind::Equals,
                TokenKind::Word,
                TokenKind::CloseBracket,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_tokenize_group_operators() {
        assert_eq!(
            kinds("(&(a)(b))"),
            vec![
                TokenKind::OpenBracket,
                TokenKind::Ampersand,
                TokenKind::OpenBracket,
                TokenKind::Word,
                TokenKind::CloseBracket,
                TokenKind::OpenBracket,
                TokenKind::Word,
                TokenKind::CloseBracket,
                TokenKind::CloseBracket,
                TokenKind::End,
            ]
        );
        assert_eq!(kinds("|")[0], TokenKind::Pipe);
        assert_eq!(kinds("!")[0], TokenKind::Exclamation);
    }

    #[test]
    fn test_tokenize_two_character_operators_are_greedy() {
        assert_eq!(
            kinds(">= <= =*"),
            vec![
                TokenKind::GreaterThanOrEquals,
                TokenKind::Whitespace,
                TokenKind::LessThanOrEquals,
                TokenKind::Whitespace,
                TokenKind::IsPresent,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_tokenize_single_character_operators() {
        assert_eq!(
            kinds("> < ="),
            vec![
                TokenKind::GreaterThan,
                TokenKind::Whitespace,
                TokenKind::LessThan,
                TokenKind::Whitespace,
                TokenKind::Equals,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_tokenize_presence_operator_keeps_text() {
        let mut tokenizer = Tokenizer::new("=*");
        let token = tokenizer.next_token();
        assert_eq!(token.kind, TokenKind::IsPresent);
        assert_eq!(token.value, "=*");
    }

    #[test]
    fn test_tokenize_word_runs() {
        let mut tokenizer = Tokenizer::new("objectCategory");
        let token = tokenizer.next_token();
        assert_eq!(token.kind, TokenKind::Word);
        assert_eq!(token.value, "objectCategory");
    }

    #[test]
    fn test_tokenize_word_accepts_exotic_characters() {
        let mut tokenizer = Tokenizer::new("a-b_c.1:ä");
        let token = tokenizer.next_token();
        assert_eq!(token.kind, TokenKind::Word);
        assert_eq!(token.value, "a-b_c.1:ä");
    }

    #[test]
    fn test_tokenize_whitespace_run_is_one_token() {
        let mut tokenizer = Tokenizer::new("  \t x");
        let token = tokenizer.next_token();
        assert_eq!(token.kind, TokenKind::Whitespace);
        assert_eq!(token.value, "  \t ");
    }

    #[test]
    fn test_tokenize_positions() {
        let mut tokenizer = Tokenizer::new("(cn=John)");
        let positions = [
            (TokenKind::OpenBracket, 1, 1),
            (TokenKind::Word, 1, 2),
            (TokenKind::Equals, 1, 4),
            (TokenKind::Word, 1, 5),
            (TokenKind::CloseBracket, 1, 9),
            (TokenKind::End, 1, 10),
        ];
        for (kind, line, column) in positions {
            let token = tokenizer.next_token();
            assert_eq!((token.kind, token.line, token.column), (kind, line, column));
        }
    }

    #[test]
    fn test_tokenize_positions_across_lines() {
        let mut tokenizer = Tokenizer::new("(\n  cn=x)");
        assert_eq!(tokenizer.next_token().kind, TokenKind::OpenBracket);
        assert_eq!(tokenizer.next_token().kind, TokenKind::Whitespace);
        let word = tokenizer.next_token();
        assert_eq!(word.kind, TokenKind::Word);
        assert_eq!((word.line, word.column), (2, 3));
    }

    #[test]
    fn test_tokenize_end_repeats_at_exhaustion() {
        let mut tokenizer = Tokenizer::new("");
        assert_eq!(tokenizer.next_token().kind, TokenKind::End);
        let token = tokenizer.next_token();
        assert_eq!(token.kind, TokenKind::End);
        assert_eq!((token.line, token.column), (1, 1));
    }

    #[test]
    fn test_next_non_whitespace_skips_runs() {
        let mut tokenizer = Tokenizer::new("  ( \t cn");
        assert_eq!(tokenizer.next_non_whitespace().kind, TokenKind::OpenBracket);
        assert_eq!(tokenizer.next_non_whitespace().value, "cn");
    }

    #[test]
    fn test_current_token_tracks_next_token() {
        let mut tokenizer = Tokenizer::new("(cn");
        assert!(tokenizer.current_token().is_none());
        tokenizer.next_token();
        assert_eq!(
            tokenizer.current_token().map(|t| t.kind),
            Some(TokenKind::OpenBracket)
        );
        tokenizer.next_token();
        assert_eq!(tokenizer.current_token().map(|t| t.value.as_str()), Some("cn"));
    }

    #[test]
    fn test_consume_until_stops_before_character() {
        let mut tokenizer = Tokenizer::new("John Smith)rest");
        assert_eq!(
            tokenizer.consume_until(TokenKind::CloseBracket),
            "John Smith"
        );
        let stop = tokenizer.next_token();
        assert_eq!(stop.kind, TokenKind::CloseBracket);
        assert_eq!(stop.column, 11);
    }

    #[test]
    fn test_consume_until_captures_structural_characters_verbatim() {
        let mut tokenizer = Tokenizer::new("a&b|c=d)");
        assert_eq!(tokenizer.consume_until(TokenKind::CloseBracket), "a&b|c=d");
    }

    #[test]
    fn test_consume_until_runs_to_end_of_input() {
        let mut tokenizer = Tokenizer::new("unterminated");
        assert_eq!(
            tokenizer.consume_until(TokenKind::CloseBracket),
            "unterminated"
        );
        assert_eq!(tokenizer.next_token().kind, TokenKind::End);
    }

    #[test]
    fn test_consume_until_leaves_current_token_alone() {
        let mut tokenizer = Tokenizer::new("cn=John)");
        tokenizer.next_token();
        tokenizer.next_token();
        tokenizer.consume_until(TokenKind::CloseBracket);
        assert_eq!(
            tokenizer.current_token().map(|t| t.kind),
            Some(TokenKind::Equals)
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let tokenizer = Tokenizer::new("(cn=John)");
        assert_eq!(tokenizer.source(), "(cn=John)");
    }
}
