use lithp::{
    ErrorKind, ParseError, Value,
    ast::{Expr, Function},
    combine, evaluate, get_result,
    interpreter::parser::core::{MAX_NESTING_DEPTH, parse},
    render_line,
};

fn assert_value(src: &str, expected: Value) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src:?}"),
        Err(e) => panic!("Line {src:?} failed to parse: {e}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind) {
    assert_value(src, Value::Error(kind));
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "formatting {src:?}"),
        Err(e) => panic!("Line {src:?} failed to parse: {e}"),
    }
}

fn assert_syntax_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("Line {src:?} parsed but was expected to fail: {expr}"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("+ 1 2", Value::Integer(3));
    assert_value("- 8 5", Value::Integer(3));
    assert_value("* 7 9", Value::Integer(63));
    assert_value("/ 10 2", Value::Integer(5));
    assert_value("% 10 3", Value::Integer(1));
    assert_value("^ 2 10", Value::Integer(1024));
    assert_value("+ 1 (* 2 3)", Value::Integer(7));
    assert_value("* (+ 1 2) (- 10 4)", Value::Integer(18));
}

#[test]
fn literals_evaluate_to_themselves_under_unary_plus() {
    for text in ["0", "42", "-42", "9223372036854775807", "-9223372036854775808"] {
        let expected: i64 = text.parse().unwrap();
        assert_value(&format!("+ {text}"), Value::Integer(expected));
    }
    for text in ["0.5", "-3.25", "100.0", "0.001"] {
        let expected: f64 = text.parse().unwrap();
        assert_value(&format!("+ {text}"), Value::Decimal(expected));
    }
}

#[test]
fn integer_and_decimal_promotion() {
    assert_value("+ 1 2.5", Value::Decimal(3.5));
    assert_value("+ 2.5 1", Value::Decimal(3.5));
    assert_value("+ 1 2", Value::Integer(3));
    assert!(matches!(combine(Value::Integer(4), Value::Decimal(0.25), "+"), Value::Decimal(_)));
    assert!(matches!(combine(Value::Integer(4), Value::Integer(1), "+"), Value::Integer(5)));
}

#[test]
fn integer_results_truncate_toward_zero() {
    assert_value("/ 7 2", Value::Integer(3));
    assert_value("/ -7 2", Value::Integer(-3));
    assert_value("^ 2 -1", Value::Integer(0));
    assert_value("/ 7 2.0", Value::Decimal(3.5));
}

#[test]
fn remainder_uses_truncated_operands() {
    assert_value("% 7.9 3", Value::Decimal(1.0));
    assert_value("% -7 3", Value::Integer(-1));
    assert_value("% 10 3.5", Value::Decimal(1.0));
}

#[test]
fn division_by_zero_is_an_error_value() {
    assert_error("/ 5 0", ErrorKind::DivideByZero);
    assert_error("/ 5.0 0.0", ErrorKind::DivideByZero);
    assert_error("% 5 0", ErrorKind::DivideByZero);
    assert_error("% 5 0.5", ErrorKind::DivideByZero);
    assert_error("^ 0 -1", ErrorKind::DivideByZero);
    assert_error("^ 0.0 -0.5", ErrorKind::DivideByZero);
    assert_value("^ 0 0", Value::Integer(1));
}

#[test]
fn integer_overflow_saturates() {
    assert_value("^ 10 400", Value::Integer(i64::MAX));
    assert_value("- -9223372036854775808", Value::Integer(i64::MAX));
    assert_value("+ 9007199254740993 0", Value::Integer(9_007_199_254_740_992));
}

#[test]
fn unary_minus_negates() {
    assert_value("- 5", Value::Integer(-5));
    assert_value("- 5.5", Value::Decimal(-5.5));
    assert_value("- -5", Value::Integer(5));
}

#[test]
fn other_single_operand_applications_return_the_operand() {
    assert_value("+ 5", Value::Integer(5));
    assert_value("* 5", Value::Integer(5));
    assert_value("/ 0", Value::Integer(0));
    assert_value("min 2.5", Value::Decimal(2.5));
    assert_value("^ (- 3)", Value::Integer(-3));
}

#[test]
fn negative_literal_in_function_position_is_subtraction() {
    assert_value("-5 3", Value::Integer(2));
    assert_value("+ 1 (-5 3)", Value::Integer(3));
    assert_value("-5", Value::Integer(-5));
    assert_value("-2.5 1", Value::Decimal(1.5));
}

#[test]
fn errors_propagate_unchanged() {
    assert_error("+ (/ 1 0) 3", ErrorKind::DivideByZero);
    assert_error("+ (/ 1 0) 3 4 5 6", ErrorKind::DivideByZero);
    assert_error("* 2 (/ 1 0)", ErrorKind::DivideByZero);
    assert_error("- (/ 1 0)", ErrorKind::DivideByZero);
    assert_error("max (/ 1 0) 99999 (+ 9223372036854775808 1)", ErrorKind::DivideByZero);
    assert_error("+ 9223372036854775808 (/ 1 0)", ErrorKind::BadIntegerLiteral);
}

#[test]
fn out_of_range_literals() {
    assert_error("+ 9223372036854775808", ErrorKind::BadIntegerLiteral);
    assert_error("+ 1 -9223372036854775809", ErrorKind::BadIntegerLiteral);

    let huge = format!("+ 1{}.0", "0".repeat(400));
    assert_error(&huge, ErrorKind::BadDecimalLiteral);

    let tiny = format!("+ 0.{}1", "0".repeat(400));
    assert_error(&tiny, ErrorKind::BadDecimalLiteral);
}

#[test]
fn bad_operator_is_only_reachable_through_combine() {
    assert_eq!(combine(Value::Integer(1), Value::Integer(2), "@"),
               Value::Error(ErrorKind::BadOperator));
    assert_eq!(combine(Value::Error(ErrorKind::DivideByZero), Value::Integer(2), "@"),
               Value::Error(ErrorKind::DivideByZero));
    assert_syntax_error("@ 1 2");
}

#[test]
fn multi_operand_fold_is_left_to_right() {
    assert_value("- 10 1 2 3", Value::Integer(4));
    assert_value("/ 100 2 5", Value::Integer(10));
    assert_value("^ 2 3 2", Value::Integer(64));
    assert_value("+ 1 2 3 4 5 6 7 8 9 10", Value::Integer(55));
}

#[test]
fn min_and_max() {
    assert_value("max 3 7 2", Value::Integer(7));
    assert_value("min 3.0 7 2", Value::Decimal(2.0));
    assert_value("min -1 -2", Value::Integer(-2));
    assert_value("max 1.5 1", Value::Decimal(1.5));
}

#[test]
fn output_formatting() {
    assert_output("+ 1 2", "3");
    assert_output("/ 7 2.0", "3.5");
    assert_output("- 1.5 3.5", "-2");
    assert_output("* 10000000000.0 1", "1e+10");
    assert_output("/ 1.0 3", "0.333333");
    assert_output("/ 5 0", "Error: division by zero");
    assert_output("+ 99999999999999999999", "Error: invalid integer");
    assert_eq!(Value::Error(ErrorKind::BadOperator).to_string(), "Error: invalid operator");
    assert_eq!(Value::Error(ErrorKind::BadDecimalLiteral).to_string(), "Error: invalid decimal");
    assert_eq!(format!("{:.10}", get_result("/ 1.0 3").unwrap()), "0.3333333333");
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  +1   2  ", Value::Integer(3));
    assert_value("+\t(*2 3)(max 1 4)", Value::Integer(10));
    assert_value("max(+ 1 1)(+ 2 2)", Value::Integer(4));
}

#[test]
fn parse_tree_shape() {
    let expr = parse("max 1 (- 2.5) 3").unwrap();
    let Expr::Application { function,
                            first,
                            rest,
                            column, } = &expr
    else {
        panic!("expected an application, found {expr:?}");
    };

    assert_eq!(*function, Function::Max);
    assert_eq!(*column, 1);
    assert_eq!(**first,
               Expr::IntegerLiteral { text:   "1".to_string(),
                                      column: 5, });
    assert_eq!(rest.len(), 2);
    assert_eq!(expr.operands().count(), 3);
    assert_eq!(expr.to_string(), "(max 1 (- 2.5) 3)");
}

#[test]
fn lines_must_match_the_grammar() {
    assert!(matches!(assert_syntax_error(""), ParseError::UnexpectedEndOfInput { column: 1, .. }));
    assert!(matches!(assert_syntax_error("   "),
                     ParseError::UnexpectedEndOfInput { column: 4, .. }));
    assert!(matches!(assert_syntax_error("5"), ParseError::UnexpectedToken { column: 1, .. }));
    assert!(matches!(assert_syntax_error("+"), ParseError::UnexpectedEndOfInput { column: 2, .. }));
    assert!(matches!(assert_syntax_error("+ 1)"),
                     ParseError::UnexpectedTrailingTokens { column: 4, .. }));
    assert!(matches!(assert_syntax_error("+ 1 (* 2 3"),
                     ParseError::ExpectedClosingParen { opened: 5, .. }));
    assert!(matches!(assert_syntax_error("+ 1 ()"), ParseError::UnexpectedToken { column: 6, .. }));
    assert!(matches!(assert_syntax_error("+ 1 (2 3)"),
                     ParseError::UnexpectedToken { column: 6, .. }));
    assert!(matches!(assert_syntax_error("+ 1 (+ 2 -)"),
                     ParseError::UnexpectedToken { column: 10, .. }));
    assert!(matches!(assert_syntax_error("+ 1 x"),
                     ParseError::UnexpectedToken { column: 5, .. }));
    assert!(matches!(assert_syntax_error("+ 1 2 max"),
                     ParseError::UnexpectedTrailingTokens { column: 7, .. }));
    assert!(matches!(assert_syntax_error("(+ 1 2)"), ParseError::UnexpectedToken { column: 1, .. }));
    assert_syntax_error("+ 1.");
    assert_syntax_error("+ .5");
    assert_syntax_error("+ 1 - 2");
}

#[test]
fn syntax_errors_describe_expectation_and_column() {
    let message = assert_syntax_error("+ 1 (* 2 3").to_string();
    assert!(message.starts_with("Error at column 11:"), "{message}");
    assert!(message.contains("')'"), "{message}");

    let message = assert_syntax_error("5").to_string();
    assert!(message.contains("a function"), "{message}");
}

const FUNCTIONS: &str = "('+', '-', '*', '/', '%', '^', 'min' or 'max')";

#[test]
fn unrecognized_text_is_reported_where_the_grammar_meets_it() {
    assert_eq!(assert_syntax_error("@ 1 2").to_string(),
               format!("Error at column 1: Expected a function {FUNCTIONS}, found '@'."));
    assert_eq!(assert_syntax_error("5 x").to_string(),
               format!("Error at column 1: Expected a function {FUNCTIONS}, found '5'."));
    assert_eq!(assert_syntax_error("+ x").to_string(),
               "Error at column 3: Expected a number or '(', found 'x'.");
    assert_eq!(assert_syntax_error("+ 1 x").to_string(),
               "Error at column 5: Expected a number, '(' or end of input, found 'x'.");
    assert_eq!(assert_syntax_error("+ (* 2 x)").to_string(),
               "Error at column 8: Expected a number, '(' or ')', found 'x'.");
    assert_eq!(assert_syntax_error("+ 1.").to_string(),
               "Error at column 4: Expected a number, '(' or end of input, found '.'.");
}

#[test]
fn rendered_lines() {
    assert_eq!(render_line("+ 1 2", 6), Ok("3".to_string()));
    assert_eq!(render_line("/ 1.0 3", 3), Ok("0.333".to_string()));
    assert_eq!(render_line("/ 5 0", 6), Ok("Error: division by zero".to_string()));

    let diagnostic = render_line("+ 1 (* 2 3", 6).unwrap_err();
    assert_eq!(diagnostic.lines().collect::<Vec<_>>(),
               ["+ 1 (* 2 3",
                "          ^",
                "Error at column 11: Expected closing parenthesis ')' for '(' at column 5 but none found."]);
}

#[test]
fn nesting_is_bounded() {
    let nested = |depth: usize| format!("+ {}1{}", "(+ ".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_NESTING_DEPTH), Value::Integer(1));
    assert!(matches!(assert_syntax_error(&nested(MAX_NESTING_DEPTH + 1)),
                     ParseError::NestingTooDeep { .. }));
}

#[test]
fn trees_can_be_evaluated_more_than_once() {
    let expr = parse("* 1.5 (max 2 4)").unwrap();
    assert_eq!(evaluate(&expr), Value::Decimal(6.0));
    assert_eq!(evaluate(&expr), Value::Decimal(6.0));
}
