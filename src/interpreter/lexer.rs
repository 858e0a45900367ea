use logos::Logos;

use crate::{error::ParseError, interpreter::value::float_parser};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Float literal tokens, such as `3.14`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`, `0x2A` or `0b101010`. Integer
    /// literals are always unsigned.
    #[regex(r"[0-9]+", |lex| parse_integer(lex.slice(), 10))]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_integer(&lex.slice()[2..], 16))]
    #[regex(r"0[bB][01]+", |lex| parse_integer(&lex.slice()[2..], 2))]
    Integer(u64),
    /// String literal tokens, such as `"label"`.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    String(String),
    /// `let`
    #[token("let")]
    Let,
    /// `assert`
    #[token("assert")]
    Assert,
    /// `org`
    #[token("org")]
    Org,
    /// Identifier tokens; symbol or function names such as `start` or `len`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `; Comments.`
    #[regex(r";[^\n\r]*", logos::skip)]
    Comment,
    /// `$`, the program counter.
    #[token("$")]
    Dollar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `^`
    #[token("^")]
    Caret,
    /// `|`
    #[token("|")]
    Pipe,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `===`
    #[token("===")]
    TripleEqual,
    /// `!==`
    #[token("!==")]
    BangDoubleEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Line breaks end statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes `source`, pairing every token with the line it starts on.
///
/// # Errors
/// `ParseError::InvalidInput` with the offending text if a piece of input is
/// not a token, including integer literals that do not fit 64 bits and
/// strings with unknown escapes.
///
/// # Example
/// ```
/// use asmexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 0x10 ; sixteen\n$").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Let,
///                 Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Integer(16),
///                 Token::NewLine,
///                 Token::Dollar]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            let line = if tok == Token::NewLine { lexer.extras.line - 1 } else { lexer.extras.line };
            tokens.push((tok, line));
        } else {
            return Err(ParseError::InvalidInput { slice: lexer.slice().to_string(),
                                                  line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a float literal from the current token slice with the language's
/// own float reader.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    float_parser::parse_float(lex.slice())
}

/// Parses the digits of an integer literal in the given radix.
///
/// # Returns
/// - `Some(u64)`: The parsed value if it fits 64 bits.
/// - `None`: Otherwise.
fn parse_integer(digits: &str, radix: u32) -> Option<u64> {
    u64::from_str_radix(digits, radix).ok()
}

/// Strips the quotes of a string literal and resolves its escapes.
///
/// Supported escapes are `\"`, `\\`, `\n` and `\t`.
///
/// # Returns
/// - `Some(String)`: The literal's text.
/// - `None`: If the literal contains an unknown escape.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        text.push(match chars.next()? {
                      '"' => '"',
                      '\\' => '\\',
                      'n' => '\n',
                      't' => '\t',
                      _ => return None,
                  });
    }

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(kinds("a !== b === c"),
                   vec![Token::Identifier("a".into()),
                        Token::BangDoubleEqual,
                        Token::Identifier("b".into()),
                        Token::TripleEqual,
                        Token::Identifier("c".into())]);
        assert_eq!(kinds("<< <= < && &"),
                   vec![Token::ShiftLeft,
                        Token::LessEqual,
                        Token::Less,
                        Token::DoubleAmpersand,
                        Token::Ampersand]);
    }

    #[test]
    fn literals() {
        assert_eq!(kinds(r#"1.5E3 0b101 18446744073709551615 "a\"b\n""#),
                   vec![Token::Float(1500.0),
                        Token::Integer(5),
                        Token::Integer(u64::MAX),
                        Token::String("a\"b\n".into())]);
    }

    #[test]
    fn oversized_integer_is_rejected() {
        assert!(tokenize("18446744073709551616").is_err());
        assert!(tokenize(r#""\q""#).is_err());
    }

    #[test]
    fn lines_are_tracked() {
        let tokens = tokenize("a\n; comment\nb").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("a".into()), 1),
                        (Token::NewLine, 1),
                        (Token::NewLine, 2),
                        (Token::Identifier("b".into()), 3)]);
    }
}
