use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses the items of a delimited list up to and including `closing`.
///
/// The opening delimiter must already be consumed. Items are separated by
/// commas; a trailing comma is not allowed, and `closing` right away yields
/// an empty list.
///
/// Grammar: `list := (item ("," item)*)? closing`
///
/// # Errors
/// - Whatever `parse_item` reports for a malformed item.
/// - `UnexpectedToken` if an item is followed by anything but a comma or
///   `closing`.
/// - `UnexpectedEndOfInput` if the line ends inside the list.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|(tok, _)| tok == closing).is_some() {
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => return Ok(items),
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
}

/// Takes the symbol name a `let` binds.
///
/// # Errors
/// `UnexpectedToken` if the next token is not an identifier (keywords
/// included), `UnexpectedEndOfInput` if there is none.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("Expected symbol name, found {tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Errors
/// `UnexpectedToken` naming both tokens, or `UnexpectedEndOfInput`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
