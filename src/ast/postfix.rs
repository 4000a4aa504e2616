use std::fmt;

use crate::ast::{Conjunction, Expression, Symbol};

/// A symbol that may appear in postfix output.
///
/// Evaluation reads the queue front to back: an expression is a leaf pushed
/// onto the operand stack, a conjunction pops two operands and pushes the
/// combined result.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixSymbol {
    Expression(Expression),
    Conjunction(Conjunction),
}

impl fmt::Display for PostfixSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixSymbol::Expression(e) => write!(f, "{}", e),
            PostfixSymbol::Conjunction(c) => write!(f, "{}", c),
        }
    }
}

impl From<Expression> for PostfixSymbol {
    fn from(e: Expression) -> Self {
        PostfixSymbol::Expression(e)
    }
}

impl From<Conjunction> for PostfixSymbol {
    fn from(c: Conjunction) -> Self {
        PostfixSymbol::Conjunction(c)
    }
}

/// Narrows a [`Symbol`]; keys, operators, values and parentheses are given
/// back unchanged as the error.
impl TryFrom<Symbol> for PostfixSymbol {
    type Error = Symbol;

    fn try_from(symbol: Symbol) -> Result<Self, Self::Error> {
        match symbol {
            Symbol::Expression(e) => Ok(PostfixSymbol::Expression(e)),
            Symbol::Conjunction(c) => Ok(PostfixSymbol::Conjunction(c)),
            other @ (Symbol::Key(_)
            | Symbol::Operator(_)
            | Symbol::Value(_)
            | Symbol::Parenthesis(_)) => Err(other),
        }
    }
}
