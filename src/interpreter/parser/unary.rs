use std::{iter::Peekable, sync::Arc};

use crate::{
    ast::{Expression, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (unary plus)
/// - `-`  (negation)
/// - `~`  (bitwise not)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix operators via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "~" | "!") unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A unary node or a primary expression possibly followed by postfixes.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Tilde, _)) => UnaryOperator::BitNot,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => {
            let primary = parse_primary(tokens)?;
            return parse_postfix(tokens, primary);
        },
    };

    tokens.next();
    let operand = parse_unary(tokens)?;
    Ok(Expression::unary(op, operand))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, float and string literals
/// - identifiers
/// - the program counter `$`
/// - parenthesized expressions, which stay in the tree as groupings
///
/// This function does not handle unary operators or postfix operators.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier
///              | "$"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary expression or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match token {
        Token::Integer(n) => Ok(Expression::value(*n)),
        Token::Float(f) => Ok(Expression::value(*f)),
        Token::String(text) => Ok(Expression::value(text.clone())),
        Token::Identifier(name) => Ok(Expression::identifier(name.clone())),
        Token::Dollar => Ok(Arc::new(Expression::ProgramCounter)),
        Token::LParen => {
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(Expression::grouping(inner)),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                 line:  *line, }),
    }
}

/// Parses postfix operators applied to an expression.
///
/// This function is called after parsing a primary expression and handles
/// three kinds of postfix constructs, in any order and any number:
///
/// 1. **Function calls** `expr(arg, ...)`
/// 2. **Indexers** `expr[index]`
/// 3. **Periods** `expr.primary`
///
/// All three bind tighter than any prefix operator and associate to the left,
/// so `a.b[1](x)` calls the result of indexing `a.b`.
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "(" (expression ("," expression)*)? ")"
///              | postfix "[" expression "]"
///              | postfix "." primary
/// ```
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                                   mut expr: Arc<Expression>)
                                   -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::LParen, _)) => {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                expr = Expression::call(expr, arguments);
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();
                let index = parse_expression(tokens)?;
                match tokens.next() {
                    Some((Token::RBracket, _)) => {},
                    _ => return Err(ParseError::ExpectedClosingBracket { line }),
                }
                expr = Expression::indexer(expr, index);
            },
            Some((Token::Dot, _)) => {
                tokens.next();
                let right = parse_primary(tokens)?;
                expr = Expression::period(expr, right);
            },
            _ => return Ok(expr),
        }
    }
}
