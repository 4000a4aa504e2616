// tests/parser_tests.rs

use ccl_lang::ast::{Conjunction, Expression, Operator, Parenthesis, PostfixSymbol, Symbol};
use ccl_lang::error::SyntaxError;
use ccl_lang::parser::{group_expressions, to_postfix_notation};
use ccl_lang::value::Value;
use ccl_lang::to_rpn;

// ============================================================================
// Helpers
// ============================================================================

/// `key op value` as raw symbols
fn cmp(key: &str, op: Operator, value: impl Into<Value>) -> Vec<Symbol> {
    vec![Symbol::key(key), Symbol::Operator(op), Symbol::value(value)]
}

fn and() -> Vec<Symbol> {
    vec![Symbol::Conjunction(Conjunction::And)]
}

fn or() -> Vec<Symbol> {
    vec![Symbol::Conjunction(Conjunction::Or)]
}

fn lparen() -> Vec<Symbol> {
    vec![Symbol::Parenthesis(Parenthesis::Left)]
}

fn rparen() -> Vec<Symbol> {
    vec![Symbol::Parenthesis(Parenthesis::Right)]
}

fn a() -> Vec<Symbol> {
    cmp("a", Operator::Equals, 1i64)
}

fn b() -> Vec<Symbol> {
    cmp("b", Operator::Equals, 2i64)
}

fn c() -> Vec<Symbol> {
    cmp("c", Operator::Equals, 3i64)
}

fn seq(parts: Vec<Vec<Symbol>>) -> Vec<Symbol> {
    parts.into_iter().flatten().collect()
}

fn rpn(symbols: &[Symbol]) -> String {
    let queue = to_postfix_notation(symbols).unwrap();
    to_rpn(&queue)
}

fn is_raw(symbol: &Symbol) -> bool {
    matches!(symbol, Symbol::Key(_) | Symbol::Operator(_) | Symbol::Value(_))
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_group_single_comparison() {
    let grouped = group_expressions(&cmp("age", Operator::GreaterThan, 21i64)).unwrap();

    assert_eq!(grouped.len(), 1);
    match &grouped[0] {
        Symbol::Expression(e) => {
            assert_eq!(e.key(), "age");
            assert_eq!(e.operator(), Operator::GreaterThan);
            assert_eq!(e.values(), &[Value::Integer(21)]);
        }
        other => panic!("Expected expression, got {:?}", other),
    }
}

#[test]
fn test_group_between_takes_two_values() {
    let symbols = vec![
        Symbol::key("age"),
        Symbol::Operator(Operator::Between),
        Symbol::value(10i64),
        Symbol::value(20i64),
    ];
    let grouped = group_expressions(&symbols).unwrap();

    assert_eq!(grouped, vec![Symbol::Expression(Expression::between("age", 10i64, 20i64))]);
}

#[test]
fn test_group_passes_conjunctions_and_parentheses_through() {
    let symbols = seq(vec![lparen(), a(), or(), b(), rparen(), and(), c()]);
    let grouped = group_expressions(&symbols).unwrap();

    assert_eq!(grouped.len(), 7);
    assert_eq!(grouped[0], Symbol::Parenthesis(Parenthesis::Left));
    assert_eq!(grouped[2], Symbol::Conjunction(Conjunction::Or));
    assert_eq!(grouped[4], Symbol::Parenthesis(Parenthesis::Right));
    assert_eq!(grouped[5], Symbol::Conjunction(Conjunction::And));
    assert!(!grouped.iter().any(is_raw));
}

#[test]
fn test_group_leaves_no_raw_symbols() {
    let symbols = seq(vec![
        a(),
        and(),
        vec![
            Symbol::key("age"),
            Symbol::Operator(Operator::Between),
            Symbol::value(1i64),
            Symbol::value(9i64),
        ],
        or(),
        cmp("name", Operator::Regex, "^b"),
        and(),
        cmp("parent", Operator::LinksTo, Value::Link(4)),
    ]);
    let grouped = group_expressions(&symbols).unwrap();

    assert!(!grouped.iter().any(is_raw));
    let expressions: Vec<&Expression> = grouped
        .iter()
        .filter_map(|s| match s {
            Symbol::Expression(e) => Some(e),
            _ => None,
        })
        .collect();
    assert_eq!(expressions.len(), 4);
    for e in expressions {
        assert_eq!(e.values().len(), e.operator().arity(), "{}", e);
    }
}

#[test]
fn test_group_is_idempotent() {
    let symbols = seq(vec![lparen(), a(), or(), b(), rparen(), and(), c()]);
    let once = group_expressions(&symbols).unwrap();
    let twice = group_expressions(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_group_does_not_modify_input() {
    let symbols = seq(vec![a(), and(), b()]);
    let before = symbols.clone();
    let _ = group_expressions(&symbols).unwrap();
    assert_eq!(symbols, before);
}

#[test]
fn test_group_empty() {
    assert_eq!(group_expressions(&[]).unwrap(), Vec::<Symbol>::new());
}

#[test]
fn test_string_values_render_quoted() {
    let symbols = cmp("a", Operator::Equals, "1, OR");
    let queue = to_postfix_notation(&symbols).unwrap();

    assert_eq!(queue.len(), 1);
    assert_eq!(to_rpn(&queue), r#"a = "1, OR""#);
    assert_ne!(to_rpn(&queue), rpn(&seq(vec![a(), or()])));
}

#[test]
fn test_error_message_quotes_string_values() {
    let symbols = seq(vec![lparen(), cmp("name", Operator::Equals, "bob), (x")]);
    let err = to_postfix_notation(&symbols).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Syntax error in [(, name = "bob), (x"]: Mismatched parenthesis"#
    );
}

// ============================================================================
// Malformed expressions
// ============================================================================

fn assert_malformed(symbols: &[Symbol]) -> String {
    match group_expressions(symbols) {
        Err(err @ SyntaxError::MalformedExpression { .. }) => err.to_string(),
        other => panic!("Expected malformed expression, got {:?}", other),
    }
}

#[test]
fn test_key_at_end_of_input() {
    let msg = assert_malformed(&[Symbol::key("age")]);
    assert!(msg.contains("found end of input"), "{}", msg);
}

#[test]
fn test_key_missing_value() {
    let msg = assert_malformed(&[Symbol::key("age"), Symbol::Operator(Operator::GreaterThan)]);
    assert!(msg.starts_with("Syntax error in [age, >]"), "{}", msg);
}

#[test]
fn test_key_followed_by_value() {
    let msg = assert_malformed(&[Symbol::key("age"), Symbol::value(21i64)]);
    assert!(msg.contains("expected an operator after key 'age'"), "{}", msg);
}

#[test]
fn test_key_followed_by_key() {
    assert_malformed(&[Symbol::key("age"), Symbol::key("name")]);
}

#[test]
fn test_between_missing_second_value() {
    let symbols = seq(vec![
        vec![
            Symbol::key("age"),
            Symbol::Operator(Operator::Between),
            Symbol::value(10i64),
        ],
        and(),
        b(),
    ]);
    let msg = assert_malformed(&symbols);
    assert!(msg.contains("expects 2 value(s), found conjunction 'AND'"), "{}", msg);
}

#[test]
fn test_malformed_fails_through_postfix() {
    let err = to_postfix_notation(&[Symbol::key("age"), Symbol::Operator(Operator::Equals)]).unwrap_err();
    assert!(matches!(err, SyntaxError::MalformedExpression { .. }));
}

#[test]
fn test_bare_operator_rejected_by_postfix() {
    let symbols = vec![Symbol::Operator(Operator::Equals)];
    // Grouping only reacts to keys
    assert_eq!(group_expressions(&symbols).unwrap(), symbols);

    let err = to_postfix_notation(&symbols).unwrap_err();
    assert!(matches!(err, SyntaxError::MalformedExpression { .. }));
    assert!(err.to_string().contains("unexpected operator '='"), "{}", err);
}

#[test]
fn test_trailing_value_rejected_by_postfix() {
    let symbols = seq(vec![a(), vec![Symbol::value(5i64)]]);
    let err = to_postfix_notation(&symbols).unwrap_err();
    assert!(err.to_string().contains("unexpected value '5'"), "{}", err);
}

// ============================================================================
// Postfix translation
// ============================================================================

#[test]
fn test_end_to_end_example() {
    let symbols = seq(vec![
        cmp("age", Operator::GreaterThan, 21i64),
        and(),
        cmp("name", Operator::Equals, "bob"),
    ]);
    let queue = to_postfix_notation(&symbols).unwrap();

    let expected = vec![
        PostfixSymbol::Expression(
            Expression::try_new("age", Operator::GreaterThan, vec![Value::Integer(21)]).unwrap(),
        ),
        PostfixSymbol::Expression(
            Expression::try_new("name", Operator::Equals, vec![Value::from("bob")]).unwrap(),
        ),
        PostfixSymbol::Conjunction(Conjunction::And),
    ];
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_between_alone() {
    let symbols = vec![
        Symbol::key("age"),
        Symbol::Operator(Operator::Between),
        Symbol::value(10i64),
        Symbol::value(20i64),
    ];
    let queue = to_postfix_notation(&symbols).unwrap();

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0], PostfixSymbol::Expression(Expression::between("age", 10i64, 20i64)));
}

#[test]
fn test_and_then_or() {
    let symbols = seq(vec![a(), and(), b(), or(), c()]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, AND, c = 3, OR");
}

#[test]
fn test_or_then_and() {
    let symbols = seq(vec![a(), or(), b(), and(), c()]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, c = 3, AND, OR");
}

#[test]
fn test_and_chain() {
    let symbols = seq(vec![a(), and(), b(), and(), c()]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, c = 3, AND, AND");
}

#[test]
fn test_or_chain_is_left_associative() {
    let symbols = seq(vec![a(), or(), b(), or(), c()]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, OR, c = 3, OR");
}

#[test]
fn test_parentheses_override_precedence() {
    let symbols = seq(vec![lparen(), a(), or(), b(), rparen(), and(), c()]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, OR, c = 3, AND");
}

#[test]
fn test_parenthesized_right_operand() {
    let symbols = seq(vec![a(), and(), lparen(), b(), or(), c(), rparen()]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, c = 3, OR, AND");
}

#[test]
fn test_nested_parentheses() {
    let symbols = seq(vec![
        lparen(),
        lparen(),
        a(),
        rparen(),
        or(),
        lparen(),
        b(),
        and(),
        lparen(),
        c(),
        rparen(),
        rparen(),
        rparen(),
    ]);
    assert_eq!(rpn(&symbols), "a = 1, b = 2, c = 3, AND, OR");
}

#[test]
fn test_output_has_no_parentheses() {
    let symbols = seq(vec![lparen(), a(), rparen(), and(), lparen(), b(), or(), c(), rparen()]);
    let queue = to_postfix_notation(&symbols).unwrap();

    let expressions = queue
        .iter()
        .filter(|s| matches!(s, PostfixSymbol::Expression(_)))
        .count();
    let conjunctions = queue
        .iter()
        .filter(|s| matches!(s, PostfixSymbol::Conjunction(_)))
        .count();
    assert_eq!(expressions, 3);
    assert_eq!(conjunctions, 2);
    assert_eq!(queue.len(), 5);
}

#[test]
fn test_empty_input() {
    assert!(to_postfix_notation(&[]).unwrap().is_empty());
}

#[test]
fn test_operands_precede_their_conjunction() {
    let symbols = seq(vec![a(), or(), b(), and(), lparen(), c(), or(), a(), rparen()]);
    let queue = to_postfix_notation(&symbols).unwrap();

    // A well-formed RPN queue never pops an empty operand stack and ends
    // with exactly one result
    let mut depth = 0usize;
    for symbol in &queue {
        match symbol {
            PostfixSymbol::Expression(_) => depth += 1,
            PostfixSymbol::Conjunction(_) => {
                assert!(depth >= 2, "conjunction before its operands in {}", to_rpn(&queue));
                depth -= 1;
            }
        }
    }
    assert_eq!(depth, 1);
}

// ============================================================================
// Mismatched parentheses
// ============================================================================

#[test]
fn test_unclosed_left_parenthesis() {
    let symbols = seq(vec![lparen(), a(), and(), b()]);
    let err = to_postfix_notation(&symbols).unwrap_err();

    assert_eq!(
        err,
        SyntaxError::MismatchedParenthesis {
            input: "[(, a = 1, AND, b = 2]".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Syntax error in [(, a = 1, AND, b = 2]: Mismatched parenthesis"
    );
}

#[test]
fn test_stray_right_parenthesis() {
    let symbols = seq(vec![a(), and(), b(), rparen()]);
    let err = to_postfix_notation(&symbols).unwrap_err();
    assert!(matches!(err, SyntaxError::MismatchedParenthesis { .. }));
}

#[test]
fn test_right_before_left() {
    let symbols = seq(vec![rparen(), a(), lparen()]);
    let err = to_postfix_notation(&symbols).unwrap_err();
    assert!(matches!(err, SyntaxError::MismatchedParenthesis { .. }));
}

#[test]
fn test_extra_closing_after_balanced_group() {
    let symbols = seq(vec![lparen(), a(), rparen(), rparen()]);
    assert!(matches!(
        to_postfix_notation(&symbols),
        Err(SyntaxError::MismatchedParenthesis { .. })
    ));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Symbol>();
    assert_send_sync::<PostfixSymbol>();
    assert_send_sync::<SyntaxError>();
}

#[test]
fn test_concurrent_translation_of_shared_input() {
    let symbols = seq(vec![a(), and(), b(), or(), c()]);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| rpn(&symbols))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "a = 1, b = 2, AND, c = 3, OR");
        }
    });
}
