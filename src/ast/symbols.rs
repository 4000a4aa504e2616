use std::fmt;

use crate::{
    ast::{Conjunction, Expression, Operator, Parenthesis},
    value::Value,
};

/// One lexical unit of a criteria.
///
/// A tokenizer produces a flat, infix-ordered list of these; the parser folds
/// comparison runs into [`Symbol::Expression`] and then reorders the result
/// into postfix notation.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// Field name to compare
    ///
    /// # Example
    /// ```text
    /// age
    /// ```
    Key(String),

    /// Comparison operator
    ///
    /// # Examples
    /// ```text
    /// >
    /// ><
    /// ```
    Operator(Operator),

    /// Literal operand
    ///
    /// # Examples
    /// ```text
    /// 21
    /// "bob"
    /// ```
    Value(Value),

    /// Logical connective
    Conjunction(Conjunction),

    /// Grouping delimiter
    Parenthesis(Parenthesis),

    /// A grouped comparison run.
    ///
    /// Never produced by a tokenizer; only the grouping pass creates these.
    Expression(Expression),
}

impl Symbol {
    pub fn key(name: impl Into<String>) -> Self {
        Symbol::Key(name.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Symbol::Value(value.into())
    }

    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::Key(_) => "key",
            Symbol::Operator(_) => "operator",
            Symbol::Value(_) => "value",
            Symbol::Conjunction(_) => "conjunction",
            Symbol::Parenthesis(_) => "parenthesis",
            Symbol::Expression(_) => "expression",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Key(name) => write!(f, "{}", name),
            Symbol::Operator(op) => write!(f, "{}", op),
            Symbol::Value(value) => write!(f, "{}", value),
            Symbol::Conjunction(c) => write!(f, "{}", c),
            Symbol::Parenthesis(p) => write!(f, "{}", p),
            Symbol::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl From<Operator> for Symbol {
    fn from(op: Operator) -> Self {
        Symbol::Operator(op)
    }
}

impl From<Conjunction> for Symbol {
    fn from(c: Conjunction) -> Self {
        Symbol::Conjunction(c)
    }
}

impl From<Parenthesis> for Symbol {
    fn from(p: Parenthesis) -> Self {
        Symbol::Parenthesis(p)
    }
}

impl From<Expression> for Symbol {
    fn from(e: Expression) -> Self {
        Symbol::Expression(e)
    }
}
