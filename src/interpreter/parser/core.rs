use std::{iter::Peekable, sync::Arc};

use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the conditional operator, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := conditional`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_conditional(tokens)
}

/// Parses a conditional expression.
///
/// The conditional is right-associative: `a ? b : c ? d : e` parses as
/// `a ? b : (c ? d : e)`. The middle operand may be any expression.
///
/// Grammar: `conditional := logical_or ("?" expression ":" conditional)?`
///
/// # Errors
/// - `ExpectedColon` if the `:` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_logical_or(tokens)?;

    let Some((Token::Question, line)) = tokens.peek() else {
        return Ok(condition);
    };
    let line = *line;
    tokens.next();

    let when_true = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::Colon, _)) => {},
        _ => return Err(ParseError::ExpectedColon { line }),
    }

    let when_false = parse_conditional(tokens)?;

    Ok(Expression::conditional(condition, when_true, when_false))
}
