//! JSON <-> symbol conversion
//!
//! Input symbols are a JSON array. Each element is one of
//!
//! ```text
//! {"key": "age"}
//! {"operator": ">"}
//! {"value": 21}            (also true, 1.5, "bob", {"link": 17})
//! {"expression": {"key": "age", "operator": "><", "values": [10, 20]}}
//! "and" | "or" | "(" | ")"
//! ```

use serde_json::{Map, Number, Value as Json};
use thiserror::Error;

use crate::{Conjunction, Expression, Operator, Parenthesis, PostfixSymbol, Symbol, Value};

/// JSON that does not describe a symbol
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Expected a JSON array of symbols")]
    NotAnArray,

    #[error("Invalid symbol at index {index}: {reason}")]
    InvalidSymbol { index: usize, reason: String },

    #[error("Invalid value {0}: expected a boolean, number, string or {{\"link\": id}}")]
    InvalidValue(String),

    #[error("Float {0} has no JSON representation")]
    NonFiniteFloat(f64),
}

/// Convert a JSON array into symbols
pub fn json_to_symbols(v: Json) -> Result<Vec<Symbol>, ConvertError> {
    match v {
        Json::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                json_to_symbol(item).map_err(|reason| ConvertError::InvalidSymbol { index, reason })
            })
            .collect(),
        _ => Err(ConvertError::NotAnArray),
    }
}

fn json_to_symbol(v: Json) -> Result<Symbol, String> {
    match v {
        Json::String(s) => s
            .parse::<Conjunction>()
            .map(Symbol::Conjunction)
            .or_else(|_| s.parse::<Parenthesis>().map(Symbol::Parenthesis))
            .map_err(|_| format!("'{}' is not a conjunction or parenthesis", s)),
        Json::Object(obj) if obj.len() == 1 => {
            let (tag, body) = obj.into_iter().next().ok_or("empty object")?;
            match tag.as_str() {
                "key" => match body {
                    Json::String(name) => Ok(Symbol::Key(name)),
                    other => Err(format!("key must be a string, got {}", other)),
                },
                "operator" => match body {
                    Json::String(op) => op.parse::<Operator>().map(Symbol::Operator),
                    other => Err(format!("operator must be a string, got {}", other)),
                },
                "value" => json_to_value(body)
                    .map(Symbol::Value)
                    .map_err(|e| e.to_string()),
                "expression" => json_to_expression(body).map(Symbol::Expression),
                other => Err(format!("unknown symbol tag '{}'", other)),
            }
        }
        other => Err(format!("unrecognized symbol {}", other)),
    }
}

fn json_to_expression(v: Json) -> Result<Expression, String> {
    let Json::Object(mut obj) = v else {
        return Err("expression must be an object".to_string());
    };

    let key = match obj.remove("key") {
        Some(Json::String(k)) => k,
        _ => return Err("expression requires a string 'key'".to_string()),
    };
    let operator = match obj.remove("operator") {
        Some(Json::String(op)) => op.parse::<Operator>()?,
        _ => return Err("expression requires a string 'operator'".to_string()),
    };
    let values = match obj.remove("values") {
        Some(Json::Array(values)) => values
            .into_iter()
            .map(json_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?,
        _ => return Err("expression requires a 'values' array".to_string()),
    };

    Expression::try_new(key, operator, values).map_err(|values| {
        format!(
            "operator '{}' takes {} value(s), got {}",
            operator,
            operator.arity(),
            values.len()
        )
    })
}

/// Convert a JSON scalar into a criteria value
pub fn json_to_value(v: Json) -> Result<Value, ConvertError> {
    match v {
        Json::Bool(b) => Ok(Value::Boolean(b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| ConvertError::InvalidValue(n.to_string()))
            }
        }
        Json::String(s) => Ok(Value::String(s)),
        Json::Object(obj) => {
            let link = obj.get("link").and_then(Json::as_i64);
            match link {
                Some(id) if obj.len() == 1 => Ok(Value::Link(id)),
                _ => Err(ConvertError::InvalidValue(Json::Object(obj).to_string())),
            }
        }
        other => Err(ConvertError::InvalidValue(other.to_string())),
    }
}

/// Convert a criteria value to JSON. NaN and infinities are rejected rather
/// than written as `null`, which would not read back as a value.
pub fn value_to_json(v: &Value) -> Result<Json, ConvertError> {
    match v {
        Value::Boolean(b) => Ok(Json::Bool(*b)),
        Value::Integer(i) => Ok(Json::Number((*i).into())),
        Value::Float(f) => Number::from_f64(*f)
            .map(Json::Number)
            .ok_or(ConvertError::NonFiniteFloat(*f)),
        Value::String(s) => Ok(Json::String(s.clone())),
        Value::Link(id) => Ok(tagged("link", Json::Number((*id).into()))),
    }
}

fn expression_to_json(e: &Expression) -> Result<Json, ConvertError> {
    let values = e
        .values()
        .iter()
        .map(value_to_json)
        .collect::<Result<Vec<_>, _>>()?;

    let mut obj = Map::new();
    obj.insert("key".to_string(), Json::String(e.key().to_string()));
    obj.insert("operator".to_string(), Json::String(e.operator().symbol().to_string()));
    obj.insert("values".to_string(), Json::Array(values));
    Ok(Json::Object(obj))
}

fn tagged(tag: &str, body: Json) -> Json {
    let mut obj = Map::new();
    obj.insert(tag.to_string(), body);
    Json::Object(obj)
}

/// Convert symbols back to the input wire form
pub fn symbols_to_json(symbols: &[Symbol]) -> Result<Json, ConvertError> {
    symbols
        .iter()
        .map(|symbol| -> Result<Json, ConvertError> {
            Ok(match symbol {
                Symbol::Key(name) => tagged("key", Json::String(name.clone())),
                Symbol::Operator(op) => tagged("operator", Json::String(op.symbol().to_string())),
                Symbol::Value(value) => tagged("value", value_to_json(value)?),
                Symbol::Conjunction(c) => Json::String(c.to_string().to_lowercase()),
                Symbol::Parenthesis(p) => Json::String(p.to_string()),
                Symbol::Expression(e) => tagged("expression", expression_to_json(e)?),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Json::Array)
}

/// Convert a postfix queue to JSON: expressions as objects, conjunctions as
/// `"AND"` / `"OR"`
pub fn postfix_to_json<'a>(
    queue: impl IntoIterator<Item = &'a PostfixSymbol>,
) -> Result<Json, ConvertError> {
    queue
        .into_iter()
        .map(|symbol| match symbol {
            PostfixSymbol::Expression(e) => expression_to_json(e),
            PostfixSymbol::Conjunction(c) => Ok(Json::String(c.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Json::Array)
}
