use safecalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

fn eval_int(src: &str) -> i64 {
    match evaluate(src) {
        Ok(Value::Integer(n)) => n,
        other => panic!("Expected an integer from {src:?}, got {other:?}"),
    }
}

fn eval_real(src: &str) -> f64 {
    match evaluate(src) {
        Ok(Value::Real(r)) => r,
        other => panic!("Expected a real from {src:?}, got {other:?}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match evaluate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse failure from {src:?}, got {other:?}"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime failure from {src:?}, got {other:?}"),
    }
}

#[test]
fn precedence_follows_standard_arithmetic() {
    assert_eq!(eval_int("3 + 4 * 2"), 11);
    assert_eq!(eval_int("2 + 3 * 4 - 5"), 9);
    assert_eq!(eval_int("100 - 10 - 20"), 70);
    assert_eq!(eval_int("2 * 3 % 4"), 2);
    assert_eq!(eval_int("1 + 2 ** 3 * 2"), 17);
    assert_eq!(eval_real("10 / 2 / 5"), 1.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_int("(3 + 4) * 2"), 14);
    assert_eq!(eval_int("((2))"), 2);
    assert_eq!(eval_int("2 * (3 + 4)"), 14);
    assert_eq!(eval_int("-(2 + 3)"), -5);
}

#[test]
fn unary_operators() {
    assert_eq!(eval_int("-5"), -5);
    assert_eq!(eval_int("--5"), 5);
    assert_eq!(eval_int("+7"), 7);
    assert_eq!(eval_int("-+-3"), 3);
    assert_eq!(eval_int("2 - -3"), 5);
    assert_eq!(eval_real("-2.5"), -2.5);
}

#[test]
fn power_is_right_associative_and_binds_tightly() {
    assert_eq!(eval_int("2 ** 10"), 1024);
    assert_eq!(eval_int("2 ** 3 ** 2"), 512);
    assert_eq!(eval_int("-2 ** 2"), -4);
    assert_eq!(eval_int("(-2) ** 3"), -8);
    assert_eq!(eval_real("2 ** -1"), 0.5);
    assert_eq!(eval_real("9 ** 0.5"), 3.0);
    assert_eq!(eval_real("(-8.0) ** 2"), 64.0);
    assert_eq!(eval_int("0 ** 0"), 1);
}

#[test]
fn power_edge_cases_are_reported() {
    assert!(matches!(runtime_failure("0 ** -1"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_failure("0.0 ** -2"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_failure("(-8) ** (1/3)"),
                     RuntimeError::DomainError { .. }));
    assert!(matches!(runtime_failure("(-2.0) ** 0.5"),
                     RuntimeError::DomainError { .. }));
    assert!(matches!(runtime_failure("2 ** 64"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_failure("2 ** 9999999999"),
                     RuntimeError::LiteralTooLarge { .. }));
}

#[test]
fn true_division_always_produces_a_real() {
    assert_eq!(eval_real("10 / 4"), 2.5);
    assert_eq!(eval_real("10 / 5"), 2.0);
    assert_eq!(eval_real("1 / 3"), 1.0 / 3.0);
    assert_eq!(eval_real("0 / 5"), 0.0);
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    assert_eq!(eval_int("7 // 2"), 3);
    assert_eq!(eval_int("-7 // 2"), -4);
    assert_eq!(eval_int("7 // -2"), -4);
    assert_eq!(eval_int("-7 // -2"), 3);
    assert_eq!(eval_real("7.5 // 2"), 3.0);
    assert_eq!(eval_real("-7.5 // 2"), -4.0);
}

#[test]
fn modulo_takes_the_divisor_sign() {
    assert_eq!(eval_int("7 % 3"), 1);
    assert_eq!(eval_int("7 % -3"), -2);
    assert_eq!(eval_int("-7 % 3"), 2);
    assert_eq!(eval_int("-7 % -3"), -1);
    assert_eq!(eval_real("7.5 % 2"), 1.5);
    assert_eq!(eval_real("-7.5 % 2"), 0.5);
    assert_eq!(eval_real("7.5 % -2"), -0.5);
}

#[test]
fn division_family_rejects_zero_divisors() {
    for src in ["10 / 0", "10 // 0", "10 % 0", "10.0 / 0.0", "10 / 0.0", "0 / 0"] {
        assert!(matches!(runtime_failure(src), RuntimeError::DivisionByZero { .. }),
                "{src:?} should divide by zero");
    }
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_eq!(eval_real("1 + 2.5"), 3.5);
    assert_eq!(eval_real("2 * 2.5"), 5.0);
    assert_eq!(eval_real("2.5 - 2"), 0.5);
    assert_eq!(eval_int("2 + 3"), 5);
    assert_eq!(eval_int("2 * 3"), 6);
}

#[test]
fn literal_forms() {
    assert_eq!(eval_int("42"), 42);
    assert_eq!(eval_real("2.5"), 2.5);
    assert_eq!(eval_real(".5 + .5"), 1.0);
    assert_eq!(eval_real("2."), 2.0);
    assert_eq!(eval_real("1e3"), 1000.0);
    assert_eq!(eval_real("2.1e-3"), 2.1e-3);
}

#[test]
fn integer_overflow_is_reported() {
    assert!(matches!(runtime_failure("9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_failure("9223372036854775807 * 2"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_failure("0 - 9223372036854775807 - 2"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn operators_outside_the_whitelist_are_rejected() {
    for src in ["1 and 2",
                "1 or 2",
                "not 1",
                "1 < 2",
                "1 > 2",
                "1 <= 2",
                "1 >= 2",
                "1 == 1",
                "1 != 2",
                "1 < 2 < 3",
                "1 & 2",
                "1 | 2",
                "1 ^ 2",
                "1 << 2",
                "1 >> 2",
                "~1"]
    {
        assert!(matches!(runtime_failure(src), RuntimeError::UnsupportedOperator { .. }),
                "{src:?} should be rejected as an unsupported operator");
    }
}

#[test]
fn hostile_constructs_are_rejected_not_evaluated() {
    for src in ["__import__('os')",
                "__import__('os').system('true')",
                "'os'.system('true')",
                "x",
                "abs(1)",
                "(1).real",
                "().__class__",
                "[1, 2, 3]",
                "[1, 2][0]",
                "(1, 2)",
                "()",
                "a[0]"]
    {
        assert!(matches!(runtime_failure(src), RuntimeError::InvalidExpression { .. }),
                "{src:?} should be rejected as an invalid expression");
    }
}

#[test]
fn non_numeric_constants_are_rejected() {
    for src in ["'hello'", "\"hello\"", "true", "false", "false + 1", "'a' * 3"] {
        assert!(matches!(runtime_failure(src), RuntimeError::UnsupportedConstant { .. }),
                "{src:?} should be rejected as an unsupported constant");
    }
}

#[test]
fn syntax_failures() {
    assert!(matches!(parse_failure(""), ParseError::EmptyInput));
    assert!(matches!(parse_failure("   "), ParseError::EmptyInput));
    assert!(matches!(parse_failure("1 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("(1"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_failure("[1, 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure(")"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("* 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("2 ** ** 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_failure("1)"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_failure("x = 1"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_failure("(x := 1)"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_failure("1 @ 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("{1: 2}"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("1; 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("99999999999999999999999999"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn nesting_depth_is_bounded_while_parsing() {
    let shallow = format!("{}1{}", "(".repeat(16), ")".repeat(16));
    assert_eq!(eval_int(&shallow), 1);

    let deep = format!("{}1{}", "(".repeat(400), ")".repeat(400));
    assert!(matches!(parse_failure(&deep), ParseError::TooDeep { .. }));

    let prefix_chain = format!("{}1", "-".repeat(400));
    assert!(matches!(parse_failure(&prefix_chain), ParseError::TooDeep { .. }));
}

#[test]
fn nesting_depth_is_bounded_while_evaluating() {
    // Long flat chains parse iteratively but build a deep tree; the
    // evaluator's own counter has to catch them.
    let chain = format!("1{}", " + 1".repeat(400));
    assert!(matches!(runtime_failure(&chain), RuntimeError::TooDeep { .. }));

    let short_chain = format!("1{}", " + 1".repeat(100));
    assert_eq!(eval_int(&short_chain), 101);
}

#[test]
fn custom_depth_limit_is_respected() {
    let evaluator = Evaluator::with_max_depth(2);
    assert!(evaluator.evaluate("(((1)))").is_err());
    assert!(evaluator.evaluate("1 + 2").is_ok());
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["3 + 4 * 2", "10 / 4", "10 / 0", "__import__('os')", "(((1)))"] {
        let first = format!("{:?}", evaluate(src));
        let second = format!("{:?}", evaluate(src));
        assert_eq!(first, second, "{src:?} should evaluate the same twice");
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(eval_int("  3 + 4  "), 7);
    assert_eq!(eval_int("\t2 * 3\n"), 6);
}
