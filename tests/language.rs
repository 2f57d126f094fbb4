use seriesmath::{
    Error, Options, Outcome, TimeSeries, Value, evaluate, evaluate_scalar,
    error::{ParseError, RuntimeError},
    interpreter::parser::binary::{Factor, reduce_exponents},
};

const NO_BINDINGS: [(&str, f64); 0] = [];

fn eval(src: &str) -> Result<Outcome<TimeSeries>, Error> {
    evaluate_scalar(src, NO_BINDINGS)
}

fn evaluate_with_options(src: &str, options: &Options) -> Outcome<TimeSeries> {
    seriesmath::evaluate_with(src, [("unused", 0.0)], options).unwrap()
}

fn assert_integer(src: &str, expected: i64) {
    match eval(src) {
        Ok(Outcome::Integer(n)) => assert_eq!(n, expected, "wrong result for {src:?}"),
        other => panic!("expected integer {expected} for {src:?}, got {other:?}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match eval(src) {
        Ok(Outcome::Real(r)) => assert_eq!(r.to_bits(), expected.to_bits(), "wrong result for {src:?}"),
        other => panic!("expected real {expected} for {src:?}, got {other:?}"),
    }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match eval(src) {
        Err(Error::Parse(e)) => assert_eq!(&e, expected, "wrong error for {src:?}"),
        other => panic!("expected {expected:?} for {src:?}, got {other:?}"),
    }
}

fn assert_runtime_error(src: &str, expected: &RuntimeError) {
    match eval(src) {
        Err(Error::Runtime(e)) => assert_eq!(&e, expected, "wrong error for {src:?}"),
        other => panic!("expected {expected:?} for {src:?}, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_integer("2*3+4", 10);
    assert_integer("2+3*4", 14);
    assert_integer("2*(3+4)", 14);
    assert_integer("10 - 4 - 3", 3);
    assert_integer("100 / 10 / 5", 2);
    assert_integer("7 - 2 * 3 + 1", 2);
    assert_integer("((1 + 2) * (3 + 4))", 21);
}

#[test]
fn fractional_results_are_not_snapped() {
    assert_real("10/4", 2.5);
    assert_real("1/8", 0.125);
    assert_real("0.1 + 0.2", 0.1 + 0.2);
}

#[test]
fn floating_noise_is_snapped_to_integers() {
    assert_integer("1/3*3", 1);
    assert_integer("2 ** 0.5 * 2 ** 0.5", 2);
    assert_integer("6.999999999996", 7);
    assert_integer("-6.999999999996", -7);
    assert_integer("7.000000000004", 7);
}

#[test]
fn exponentiation_is_left_associative() {
    assert_integer("2 ** 3 ** 2", 64);
    assert_integer("2**10", 1024);
    assert_integer("3 ** 2 * 2 ** 3", 72);
    assert_real("2 ** -1", 0.5);
}

#[test]
fn division_inverts_before_exponents_apply() {
    assert_integer("8 / 2 ** 2", 2);
    assert_integer("2 ** 3 / 4", 2);
}

#[test]
fn unary_minus_binds_to_its_grouping() {
    assert_integer("-3", -3);
    assert_integer("--3", 3);
    assert_integer("-(1 + 2) * 2", -6);
    assert_integer("4 - -2", 6);
    assert_integer("-2 ** 2", 4);
}

#[test]
fn literals_and_whitespace() {
    assert_integer(".5 * 4", 2);
    assert_integer("5. + 1", 6);
    assert_integer(" \t( 1 +\n2 )\r* 3 ", 9);
    assert_integer("007", 7);
}

#[test]
fn constants_are_available() {
    assert_real("pi", std::f64::consts::PI);
    assert_real("e", std::f64::consts::E);
    assert_real("2 * pi", 2.0 * std::f64::consts::PI);
}

#[test]
fn variables_are_case_sensitive() {
    let bindings = [("x_1", 1.0), ("X", 2.0), ("x", 10.0)];
    assert_eq!(evaluate_scalar("x_1 + X * x", bindings).unwrap(), Outcome::Integer(21));
}

#[test]
fn integral_results_beyond_i64_stay_real() {
    assert_real("2 ** 70", 2f64.powi(70));
}

#[test]
fn integer_classification() {
    assert!(eval("1/3*3").unwrap().is_integer());
    assert!(!eval("10/4").unwrap().is_integer());
    assert!(!eval("2 ** 70").unwrap().is_integer());
}

#[test]
fn non_finite_powers_are_errors() {
    assert_runtime_error("0 ** -1", &RuntimeError::NonFiniteResult { index: Some(2) });
    assert_runtime_error("(0-8) ** 0.5", &RuntimeError::NonFiniteResult { index: Some(6) });
    assert_runtime_error("10 ** 400", &RuntimeError::NonFiniteResult { index: Some(3) });
    assert_runtime_error("1 + 2 ** 3 ** 400",
                         &RuntimeError::NonFiniteResult { index: Some(11) });
}

#[test]
fn non_finite_results_are_errors() {
    let huge = [("big", f64::MAX)];
    let err = evaluate_scalar("big * 2", huge).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::NonFiniteResult { index: None }));
    assert_eq!(err.index(), None);
    assert!(err.to_string().contains("not a finite number"));

    let err = evaluate_scalar("big + big - big", huge).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::NonFiniteResult { index: None }));

    assert_eq!(evaluate_scalar("big / 4 * 2", huge).unwrap(), Outcome::Real(f64::MAX / 2.0));
}

#[test]
fn exponent_reduction_stops_at_its_cap() {
    let factors = || -> Vec<Factor<TimeSeries>> {
        vec![Factor::Operand(Value::Scalar(2.0)),
             Factor::Exponent { value: Value::Scalar(3.0),
                                index: 1, }]
    };

    let err = reduce_exponents(factors(), 1).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::ExponentReductionStalled { steps: 1 }));
    assert_eq!(err.index(), None);

    let err = reduce_exponents(factors(), 0).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::ExponentReductionStalled { steps: 0 }));

    assert_eq!(reduce_exponents(factors(), 2).unwrap(), vec![Value::Scalar(8.0)]);
}

#[test]
fn reduction_cap_is_never_zero() {
    let options = Options::default();
    assert_eq!(options.reduction_cap(0), 4);
    assert_eq!(options.reduction_cap(3), 12);

    let options = Options { exponent_step_factor: 0,
                            ..Options::default() };
    assert_eq!(options.reduction_cap(0), 1);
    assert_eq!(options.reduction_cap(5), 5);

    let options = Options { exponent_step_factor: 1,
                            ..Options::default() };
    assert_eq!(evaluate_with_options("2 ** 3 ** 2 * 5", &options), Outcome::Integer(320));
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_error("5/0", &RuntimeError::DivisionByZero { index: 1 });
    assert_runtime_error("5 / (1 - 1)", &RuntimeError::DivisionByZero { index: 2 });
    assert_runtime_error("5/-0", &RuntimeError::DivisionByZero { index: 1 });
}

#[test]
fn unclosed_parenthesis_is_error() {
    assert_parse_error("2*(3+4", &ParseError::UnclosedParenthesis { index: 6 });
    assert_parse_error("((1)", &ParseError::UnclosedParenthesis { index: 4 });
}

#[test]
fn trailing_input_is_error() {
    assert_parse_error("2 3", &ParseError::TrailingInput { found: '3', index: 2 });
    assert_parse_error("(1))", &ParseError::TrailingInput { found: ')', index: 3 });
}

#[test]
fn malformed_literals_are_errors() {
    assert_parse_error("1.2.3", &ParseError::MalformedNumber { index: 3 });
    assert_parse_error(".", &ParseError::ExpectedNumber { found: '.', index: 0 });
}

#[test]
fn missing_operands_are_errors() {
    assert_parse_error("", &ParseError::UnexpectedEnd);
    assert_parse_error("2+", &ParseError::UnexpectedEnd);
    assert_parse_error("(", &ParseError::UnexpectedEnd);
}

#[test]
fn unknown_variable_is_error() {
    assert_runtime_error("foo + 1",
                         &RuntimeError::UnknownVariable { name:  "foo".to_string(),
                                                          index: 0, });
    assert_runtime_error("2*)",
                         &RuntimeError::UnknownVariable { name:  String::new(),
                                                          index: 2, });
    assert_runtime_error("2* *3",
                         &RuntimeError::UnknownVariable { name:  String::new(),
                                                          index: 3, });
}

#[test]
fn redefinition_is_error() {
    let err = evaluate_scalar("1", [("pi", 1.0)]).unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::VariableRedefined { name: "pi".to_string() }));

    let err = evaluate_scalar("1", [("e", 1.0)]).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::VariableRedefined { name: "e".to_string() }));

    let err = evaluate_scalar("x", [("x", 1.0), ("x", 2.0)]).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::VariableRedefined { name: "x".to_string() }));
}

#[test]
fn errors_report_messages_and_indices() {
    let err = eval("5/0").unwrap_err();
    assert_eq!(err.index(), Some(1));
    assert!(err.to_string().contains("Division by zero"));

    let err = eval("2 3").unwrap_err();
    assert_eq!(err.index(), Some(2));
    assert!(err.to_string().contains("'3'"));

    assert_eq!(eval("").unwrap_err().index(), None);
}

#[test]
fn evaluation_is_repeatable() {
    let bindings = [("a", 0.1), ("b", 0.7)];
    let first = evaluate_scalar("a * 3 + b / 7 ** 0.5", bindings).unwrap();
    let second = evaluate_scalar("a * 3 + b / 7 ** 0.5", bindings).unwrap();

    match (first, second) {
        (Outcome::Real(a), Outcome::Real(b)) => assert_eq!(a.to_bits(), b.to_bits()),
        other => panic!("expected two reals, got {other:?}"),
    }
}

#[test]
fn generic_entry_point_accepts_integer_bindings() {
    let result = evaluate::<TimeSeries, _, _, i32>("n * 2", [("n", 21)]).unwrap();
    assert_eq!(result, Outcome::Integer(42));
}
