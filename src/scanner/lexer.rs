//! Template lexer using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Escaped opening delimiter (longer pattern wins over `{`)
    #[token("{{")]
    EscapedBrace,

    #[token("{")]
    BraceOpen,

    // There is no `}}` escape: a stray `}` is ordinary text
    #[token("}")]
    BraceClose,

    #[regex(r"[^{}]+")]
    Literal,
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(tokens("hello world"), vec![Token::Literal]);
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(
            tokens("a {0} b"),
            vec![
                Token::Literal,
                Token::BraceOpen,
                Token::Literal,
                Token::BraceClose,
                Token::Literal
            ]
        );
    }

    #[test]
    fn test_escape_is_longest_match() {
        assert_eq!(
            tokens("{{{0}"),
            vec![
                Token::EscapedBrace,
                Token::BraceOpen,
                Token::Literal,
                Token::BraceClose
            ]
        );
        assert_eq!(tokens("{{{{"), vec![Token::EscapedBrace, Token::EscapedBrace]);
    }

    #[test]
    fn test_closing_braces_are_separate() {
        assert_eq!(tokens("}}"), vec![Token::BraceClose, Token::BraceClose]);
    }

    #[test]
    fn test_spans_cover_input() {
        let spans: Vec<_> = lex("ab{1,2:x}\ncd").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..2, 2..3, 3..8, 8..9, 9..12]);
    }

    #[test]
    fn test_multibyte_literal() {
        let spans: Vec<_> = lex("héllo{0}").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..6, 6..7, 7..8, 8..9]);
    }
}
