//! Grouping and postfix translation of criteria symbol streams.
//!
//! Both passes are free functions over a borrowed slice. They never modify
//! their input and keep no state between calls.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    ast::{Conjunction, Expression, Parenthesis, PostfixSymbol, Symbol},
    error::{SyntaxError, SyntaxResult},
    output::render_symbols,
};

/// Entries of the shunting-yard operator stack. Expressions bypass the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Conjunction(Conjunction),
    LeftParen,
}

/// Folds every `key operator value [value]` run into a single
/// [`Symbol::Expression`].
///
/// A key must be followed by an operator and a value; [`Operator::Between`](crate::Operator::Between)
/// takes a second value. Everything that is not a key is copied through
/// unchanged, so grouping an already grouped stream is a no-op.
///
/// # Examples
///
/// ```
/// use ccl_lang::{group_expressions, Conjunction, Operator, Symbol};
///
/// let symbols = vec![
///     Symbol::key("age"),
///     Symbol::Operator(Operator::GreaterThan),
///     Symbol::value(21i64),
///     Symbol::Conjunction(Conjunction::And),
///     Symbol::key("name"),
///     Symbol::Operator(Operator::Equals),
///     Symbol::value("bob"),
/// ];
///
/// let grouped = group_expressions(&symbols).unwrap();
/// assert_eq!(grouped.len(), 3);
/// assert!(matches!(grouped[0], Symbol::Expression(_)));
/// assert_eq!(grouped[1], Symbol::Conjunction(Conjunction::And));
/// ```
pub fn group_expressions(symbols: &[Symbol]) -> SyntaxResult<Vec<Symbol>> {
    let mut grouped = Vec::with_capacity(symbols.len());
    let mut it = symbols.iter();

    while let Some(symbol) = it.next() {
        match symbol {
            Symbol::Key(key) => {
                let operator = match it.next() {
                    Some(Symbol::Operator(op)) => *op,
                    other => {
                        return Err(malformed(
                            symbols,
                            format!("expected an operator after key '{}', found {}", key, describe(other)),
                        ));
                    }
                };

                let mut values = Vec::with_capacity(operator.arity());
                while values.len() < operator.arity() {
                    match it.next() {
                        Some(Symbol::Value(value)) => values.push(value.clone()),
                        other => {
                            return Err(malformed(
                                symbols,
                                format!(
                                    "'{} {}' expects {} value(s), found {}",
                                    key,
                                    operator,
                                    operator.arity(),
                                    describe(other)
                                ),
                            ));
                        }
                    }
                }

                let expression = Expression::from_run(key, operator, values);
                trace!(%expression, "grouped expression");
                grouped.push(Symbol::Expression(expression));
            }
            other => grouped.push(other.clone()),
        }
    }

    debug!(input = symbols.len(), grouped = grouped.len(), "grouped expressions");
    Ok(grouped)
}

/// Converts an infix symbol stream into a postfix (RPN) queue.
///
/// The stream is grouped with [`group_expressions`] first, then reordered
/// with the shunting-yard algorithm. `AND` binds tighter than `OR`;
/// parentheses are consumed and never appear in the result.
///
/// # Errors
///
/// [`SyntaxError::MalformedExpression`] when a comparison run is incomplete
/// or a bare key, operator or value is left over, and
/// [`SyntaxError::MismatchedParenthesis`] for an unmatched `(` or `)`.
///
/// # Examples
///
/// ```
/// use ccl_lang::{to_postfix_notation, Conjunction, Operator, PostfixSymbol, Symbol};
///
/// let symbols = vec![
///     Symbol::key("age"),
///     Symbol::Operator(Operator::GreaterThan),
///     Symbol::value(21i64),
///     Symbol::Conjunction(Conjunction::And),
///     Symbol::key("name"),
///     Symbol::Operator(Operator::Equals),
///     Symbol::value("bob"),
/// ];
///
/// let queue = to_postfix_notation(&symbols).unwrap();
/// let rendered: Vec<String> = queue.iter().map(|s| s.to_string()).collect();
/// assert_eq!(rendered, ["age > 21", "name = \"bob\"", "AND"]);
/// ```
pub fn to_postfix_notation(symbols: &[Symbol]) -> SyntaxResult<VecDeque<PostfixSymbol>> {
    let grouped = group_expressions(symbols)?;
    debug!(symbols = grouped.len(), "translating to postfix notation");

    let mut stack: Vec<StackEntry> = Vec::new();
    let mut queue: VecDeque<PostfixSymbol> = VecDeque::with_capacity(grouped.len());

    for symbol in &grouped {
        match symbol {
            Symbol::Conjunction(conjunction) => {
                while let Some(StackEntry::Conjunction(top)) = stack.last().copied() {
                    if *conjunction != Conjunction::Or {
                        break;
                    }
                    stack.pop();
                    trace!(%top, "pop for incoming OR");
                    queue.push_back(PostfixSymbol::Conjunction(top));
                }
                stack.push(StackEntry::Conjunction(*conjunction));
            }
            Symbol::Parenthesis(Parenthesis::Left) => stack.push(StackEntry::LeftParen),
            Symbol::Parenthesis(Parenthesis::Right) => loop {
                match stack.pop() {
                    Some(StackEntry::LeftParen) => break,
                    Some(StackEntry::Conjunction(top)) => {
                        trace!(%top, "pop for closing parenthesis");
                        queue.push_back(PostfixSymbol::Conjunction(top));
                    }
                    None => return Err(mismatched(&grouped)),
                }
            },
            other => {
                let postfix = PostfixSymbol::try_from(other.clone()).map_err(|bare| {
                    malformed(
                        &grouped,
                        format!("unexpected {} '{}' outside of an expression", bare.kind(), bare),
                    )
                })?;
                queue.push_back(postfix);
            }
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            StackEntry::Conjunction(c) => queue.push_back(PostfixSymbol::Conjunction(c)),
            StackEntry::LeftParen => return Err(mismatched(&grouped)),
        }
    }

    debug!(postfix = queue.len(), "translated to postfix notation");
    Ok(queue)
}

fn describe(symbol: Option<&Symbol>) -> String {
    match symbol {
        Some(s) => format!("{} '{}'", s.kind(), s),
        None => "end of input".to_string(),
    }
}

fn malformed(symbols: &[Symbol], reason: String) -> SyntaxError {
    let err = SyntaxError::MalformedExpression {
        input: render_symbols(symbols),
        reason,
    };
    debug!(%err, "rejected symbol stream");
    err
}

fn mismatched(symbols: &[Symbol]) -> SyntaxError {
    let err = SyntaxError::MismatchedParenthesis {
        input: render_symbols(symbols),
    };
    debug!(%err, "rejected symbol stream");
    err
}
