use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a whole program: one statement per non-empty line.
///
/// # Parameters
/// - `tokens`: The output of the lexer, newlines included.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use asmexpr::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_program},
/// };
///
/// let tokens = tokenize("let a = 1\n\nassert a == 1\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Statement::Assert { line: 3, .. }));
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    tokens.split(|(token, _)| *token == Token::NewLine)
          .filter(|line| !line.is_empty())
          .map(|line| {
              let number = line[0].1;
              parse_statement(&mut line.iter().peekable(), number)
          })
          .collect()
}

/// Parses a single statement spanning the given tokens.
///
/// A statement may be one of:
/// - `let NAME = expression`, a symbol definition.
/// - `assert expression`.
/// - `org expression`, which moves the program counter.
/// - an expression used as a statement.
///
/// Every token must be consumed; leftovers are reported as trailing tokens.
///
/// # Parameters
/// - `tokens`: Token iterator over the statement's tokens only.
/// - `line`: The line the statement is on.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_statement_body(tokens, line).map_err(|error| match error {
                                          ParseError::UnexpectedEndOfInput { line: 0 } => {
                                              ParseError::UnexpectedEndOfInput { line }
                                          },
                                          other => other,
                                      })
}

fn parse_statement_body<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.peek() {
        Some((Token::Let, _)) => {
            tokens.next();
            let name = parse_identifier(tokens)?;
            expect_token(tokens, &Token::Equals)?;
            let value = parse_expression(tokens)?;
            Statement::Let { name,
                             value,
                             line }
        },
        Some((Token::Assert, _)) => {
            tokens.next();
            let condition = parse_expression(tokens)?;
            Statement::Assert { condition, line }
        },
        Some((Token::Org, _)) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            Statement::Origin { value, line }
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Statement::Expression { expr, line }
        },
    };

    if let Some((tok, line)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(statement)
}
