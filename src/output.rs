//! Text rendering for symbol streams and postfix queues.
//!
//! # Examples
//!
//! ```
//! use ccl_lang::{Conjunction, Expression, PostfixSymbol};
//! use ccl_lang::output::to_rpn;
//!
//! let queue = vec![
//!     PostfixSymbol::from(Expression::between("age", 10i64, 20i64)),
//!     PostfixSymbol::from(Expression::between("score", 1i64, 5i64)),
//!     PostfixSymbol::from(Conjunction::And),
//! ];
//!
//! assert_eq!(to_rpn(&queue), "age >< 10 20, score >< 1 5, AND");
//! ```

use std::fmt::Display;

/// Renders symbols in order, comma separated, inside brackets.
///
/// This is the form error messages use to quote the offending input.
pub fn render_symbols<'a, T, I>(symbols: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    format!("[{}]", join(symbols))
}

/// Renders a postfix queue as comma separated RPN.
///
/// Expressions render with spaces of their own, so commas keep operands
/// apart.
pub fn to_rpn<'a, T, I>(queue: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    join(queue)
}

fn join<'a, T, I>(items: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
