//! # Criteria Language - Symbols
//!
//! This module defines the symbol model the parser works on. A criteria is a
//! boolean combination of comparisons against record fields:
//!
//! ```text
//! age > 21 and (name = "bob" or name = "alice")
//! ```
//!
//! ## Architecture Overview
//!
//! - **[symbols]** - The flat, infix-ordered [`Symbol`] stream a tokenizer produces
//! - **[operators]** - Comparison [`Operator`]s, [`Conjunction`]s and [`Parenthesis`]
//! - **[expressions]** - [`Expression`], a grouped `key operator value [value]` run
//! - **[postfix]** - [`PostfixSymbol`], the subset legal in postfix output
//!
//! ## Pipeline
//!
//! ```text
//! [Symbol] --group_expressions--> [Symbol] --shunting-yard--> VecDeque<PostfixSymbol>
//! ```
//!
//! After grouping, the example above becomes
//!
//! ```text
//! (age > 21) AND ( (name = "bob") OR (name = "alice") )
//! ```
//!
//! and its postfix form is
//!
//! ```text
//! age > 21, name = "bob", name = "alice", OR, AND
//! ```
//!
//! ## Precedence
//!
//! `AND` binds tighter than `OR`; parentheses override both.
pub mod expressions;
pub mod operators;
pub mod postfix;
pub mod symbols;

pub use expressions::Expression;
pub use operators::{Conjunction, Operator, Parenthesis};
pub use postfix::PostfixSymbol;
pub use symbols::Symbol;
