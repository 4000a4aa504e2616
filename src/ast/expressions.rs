use std::fmt;

use crate::{ast::Operator, value::Value};

/// An atomic comparison: one key, one operator and its values.
///
/// Holds exactly `operator.arity()` values, so two for
/// [`Operator::Between`] and one for everything else. Fields are private and
/// there are no setters; once built an expression does not change.
///
/// # Examples
///
/// ```
/// use ccl_lang::{Expression, Operator, Value};
///
/// let adult = Expression::try_new("age", Operator::GreaterThan, vec![Value::Integer(21)]).unwrap();
/// assert_eq!(adult.to_string(), "age > 21");
///
/// let teen = Expression::between("age", 13i64, 20i64);
/// assert_eq!(teen.values().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    key: String,
    operator: Operator,
    values: Vec<Value>,
}

impl Expression {
    /// Build an expression, checking the number of values against the
    /// operator's arity. On mismatch the rejected values are handed back.
    pub fn try_new(
        key: impl Into<String>,
        operator: Operator,
        values: Vec<Value>,
    ) -> Result<Self, Vec<Value>> {
        if values.len() != operator.arity() {
            return Err(values);
        }
        Ok(Expression {
            key: key.into(),
            operator,
            values,
        })
    }

    /// Build from a comparison run whose values were collected up to
    /// `operator.arity()`.
    pub(crate) fn from_run(key: &str, operator: Operator, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), operator.arity());
        Expression {
            key: key.to_string(),
            operator,
            values,
        }
    }

    /// `key >< low high`
    pub fn between(key: impl Into<String>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Expression {
            key: key.into(),
            operator: Operator::Between,
            values: vec![low.into(), high.into()],
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.operator)?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}
