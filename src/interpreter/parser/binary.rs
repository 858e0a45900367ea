use std::{iter::Peekable, sync::Arc};

use crate::{
    ast::{BinaryOperator, Expression},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := bitwise_or ("&&" bitwise_or)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_bitwise_or, |op| op == BinaryOperator::And)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bitwise_or := bitwise_xor ("|" bitwise_xor)*`
pub fn parse_bitwise_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_bitwise_xor, |op| op == BinaryOperator::BitOr)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitwise_xor := bitwise_and ("^" bitwise_and)*`
pub fn parse_bitwise_xor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_bitwise_and, |op| op == BinaryOperator::BitXor)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitwise_and := equality ("&" equality)*`
pub fn parse_bitwise_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_equality, |op| op == BinaryOperator::BitAnd)
}

/// Parses loose and strict equality.
///
/// Grammar: `equality := relational (("==" | "!=" | "===" | "!==") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_relational, |op| {
        matches!(op,
                 BinaryOperator::Equal
                 | BinaryOperator::NotEqual
                 | BinaryOperator::StrictEqual
                 | BinaryOperator::StrictNotEqual)
    })
}

/// Parses relational operators.
///
/// Grammar: `relational := shift (("<" | "<=" | ">" | ">=") shift)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_shift, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses shifts.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_additive, |op| {
        matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses one precedence level of left-associative binary operators.
///
/// Operands are parsed with `operand`; the loop continues as long as the next
/// token maps to an operator `accepts` admits.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `operand`: Parser for the next higher precedence level.
/// - `accepts`: Selects the operators of this level.
///
/// # Returns
/// A left-leaning tree of binary nodes.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operand: impl Fn(&mut Peekable<I>) -> ParseResult<Arc<Expression>>,
                                 accepts: impl Fn(BinaryOperator) -> bool)
                                 -> ParseResult<Arc<Expression>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens)?;

    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expression::binary(op, left, right);
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens. `+` and `-` map to addition and
/// subtraction; their unary readings are decided by the unary parser.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use asmexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::TripleEqual),
///            Some(BinaryOperator::StrictEqual));
/// assert_eq!(token_to_binary_operator(&Token::Tilde), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        Token::ShiftRight => Some(BinaryOperator::ShiftRight),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::TripleEqual => Some(BinaryOperator::StrictEqual),
        Token::BangDoubleEqual => Some(BinaryOperator::StrictNotEqual),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::DoublePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
