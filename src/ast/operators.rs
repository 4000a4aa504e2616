use std::{fmt, str::FromStr};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Matches a regular expression (`regex`)
    Regex,
    /// Does not match a regular expression (`nregex`)
    NotRegex,
    /// Equal (`=`)
    Equals,
    /// Not equal (`!=`)
    NotEquals,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterThanOrEquals,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessThanOrEquals,
    /// Inclusive lower bound, exclusive upper bound (`><`)
    ///
    /// The only operator that takes two values.
    Between,
    /// Links to the record with the given id (`->`)
    LinksTo,
}

impl Operator {
    /// Number of values this operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Operator::Between => 2,
            _ => 1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Regex => "regex",
            Operator::NotRegex => "nregex",
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEquals => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEquals => "<=",
            Operator::Between => "><",
            Operator::LinksTo => "->",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regex" => Ok(Operator::Regex),
            "nregex" => Ok(Operator::NotRegex),
            "=" | "==" | "eq" => Ok(Operator::Equals),
            "!=" | "ne" => Ok(Operator::NotEquals),
            ">" | "gt" => Ok(Operator::GreaterThan),
            ">=" | "gte" => Ok(Operator::GreaterThanOrEquals),
            "<" | "lt" => Ok(Operator::LessThan),
            "<=" | "lte" => Ok(Operator::LessThanOrEquals),
            "><" | "bw" | "between" => Ok(Operator::Between),
            "->" | "lnk2" | "links_to" => Ok(Operator::LinksTo),
            _ => Err(format!("Unknown operator: '{}'", s)),
        }
    }
}

/// Logical connectives. `And` binds tighter than `Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunction::And => f.write_str("AND"),
            Conjunction::Or => f.write_str("OR"),
        }
    }
}

impl FromStr for Conjunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "and" | "&&" => Ok(Conjunction::And),
            "or" | "||" => Ok(Conjunction::Or),
            _ => Err(format!("Unknown conjunction: '{}'", s)),
        }
    }
}

/// Grouping delimiters. Structural only; never part of postfix output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parenthesis {
    Left,
    Right,
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parenthesis::Left => f.write_str("("),
            Parenthesis::Right => f.write_str(")"),
        }
    }
}

impl FromStr for Parenthesis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "(" => Ok(Parenthesis::Left),
            ")" => Ok(Parenthesis::Right),
            _ => Err(format!("Unknown parenthesis: '{}'", s)),
        }
    }
}
