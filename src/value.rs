use std::fmt;

/// A literal operand in a criteria comparison.
///
/// Values are carried through grouping and translation untouched; nothing in
/// this crate compares them, so there is no coercion between variants.
/// Strings display quoted and escaped so rendered symbol lists stay
/// unambiguous.
///
/// # Examples
///
/// ```
/// use ccl_lang::Value;
///
/// let age = Value::Integer(21);
/// let name = Value::String("bob".to_string());
/// let ratio = Value::Float(0.5);
/// let flag = Value::Boolean(true);
/// let parent = Value::Link(17);
///
/// assert_eq!(age.to_string(), "21");
/// assert_eq!(name.to_string(), "\"bob\"");
/// assert_eq!(parent.to_string(), "@17");
/// # let _ = (ratio, flag);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// true/false
    Boolean(bool),

    /// Integer number (kept apart from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Reference to another record by id
    Link(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Link(id) => write!(f, "@{}", id),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
