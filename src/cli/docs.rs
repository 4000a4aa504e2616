//! Documentation content for ccl CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Symbols,
    Operators,
    Precedence,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "symbols" | "symbol" | "input" => Some(Self::Symbols),
            "operators" | "ops" => Some(Self::Operators),
            "precedence" | "postfix" | "rpn" => Some(Self::Precedence),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"CCL DOCUMENTATION

ccl turns a flat criteria symbol stream into postfix (RPN) order. Symbols are
read as a JSON array from --input or stdin.

DOCUMENTATION CATEGORIES

  symbols           JSON form of keys, operators, values and conjunctions
  operators         Comparison operators and how many values each takes
  precedence        AND/OR precedence, parentheses and the postfix output
  errors            What makes a symbol stream malformed

QUICK REFERENCE

  ccl postfix       Group comparisons and reorder into postfix notation
  ccl group         Only group comparisons into expressions

Run 'ccl doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Symbols) => Ok(SYMBOLS_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Precedence) => Ok(PRECEDENCE_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYMBOLS_DOC: &str = r#"SYMBOLS - JSON Input Form

A criteria is a JSON array of symbols in infix order.

KEY
  {"key": "age"}

OPERATOR
  {"operator": ">"}
    See 'ccl doc operators' for every accepted spelling.

VALUE
  {"value": 21}
  {"value": 1.5}
  {"value": "bob"}
  {"value": true}
  {"value": {"link": 17}}     Reference to record 17

CONJUNCTION
  "and"   "or"

PARENTHESIS
  "("   ")"

EXPRESSION
  {"expression": {"key": "age", "operator": "><", "values": [10, 20]}}
    Already grouped comparison. 'ccl group' emits these, so its output can
    be fed straight back into 'ccl postfix'.

EXAMPLE
  ccl postfix --input '[{"key":"age"},{"operator":">"},{"value":21},"and",
                        {"key":"name"},{"operator":"="},{"value":"bob"}]'
  => [{"key":"age","operator":">","values":[21]},
      {"key":"name","operator":"=","values":["bob"]},"AND"]
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Comparisons

  OPERATOR   ALIASES              VALUES
  =          ==, eq               1
  !=         ne                   1
  >          gt                   1
  >=         gte                  1
  <          lt                   1
  <=         lte                  1
  ><         bw, between          2   (lower bound, upper bound)
  regex                           1
  nregex                          1
  ->         lnk2, links_to       1

Aliases are case-insensitive. A key must be followed by exactly one operator
and as many values as the operator takes.
"#;

const PRECEDENCE_DOC: &str = r#"PRECEDENCE - Postfix Translation

AND binds tighter than OR. Parentheses group explicitly.

  a AND b OR c        =>  a b AND c OR
  a OR b AND c        =>  a b c AND OR
  (a OR b) AND c      =>  a b OR c AND

OUTPUT
  Expressions are emitted as objects, conjunctions as "AND" / "OR".
  Parentheses never appear in the output.

EVALUATING
  Read left to right. Push each expression. On a conjunction pop two
  results, combine them, push the combination. The last remaining result is
  the answer.
"#;

const ERRORS_DOC: &str = r#"ERRORS - Rejected Input

MALFORMED EXPRESSION
  A key not followed by an operator and the right number of values:

    [{"key":"age"},{"operator":">"}]                         missing value
    [{"key":"age"},{"operator":"><"},{"value":10}]          missing upper bound
    [{"key":"age"},{"value":21}]                             missing operator

  An operator or value with no key in front of it.

MISMATCHED PARENTHESIS
  "(" that is never closed, or ")" with nothing to close.

Any error rejects the whole criteria; nothing is printed to stdout.
"#;
