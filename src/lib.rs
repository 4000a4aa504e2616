pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Conjunction, Expression, Operator, Parenthesis, PostfixSymbol, Symbol};
pub use error::{SyntaxError, SyntaxResult};
pub use output::{render_symbols, to_rpn};
pub use parser::{group_expressions, to_postfix_notation};
pub use value::Value;
