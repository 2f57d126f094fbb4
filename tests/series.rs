use std::thread;

use seriesmath::{
    Composite, Error, Outcome, TimeSeries, Value, evaluate,
    error::{RuntimeError, SeriesError},
};

fn series(pairs: &[(i64, f64)]) -> TimeSeries {
    TimeSeries::from_pairs(pairs.iter().copied()).expect("valid series")
}

fn hourly() -> TimeSeries {
    series(&[(0, 1.0), (60, 2.0), (120, 3.0)])
}

fn eval_series(src: &str, bindings: Vec<(&str, Value<TimeSeries>)>) -> TimeSeries {
    match evaluate(src, bindings) {
        Ok(Outcome::Composite(s)) => s,
        other => panic!("expected a series for {src:?}, got {other:?}"),
    }
}

fn with_s(src: &str) -> TimeSeries {
    eval_series(src, vec![("s", Value::Composite(hourly()))])
}

#[test]
fn scalar_operands_dispatch_regardless_of_order() {
    assert_eq!(with_s("s + 3"), with_s("3 + s"));
    assert_eq!(with_s("s * 2"), with_s("2 * s"));
    assert_eq!(with_s("s + 3").values(), &[4.0, 5.0, 6.0]);
}

#[test]
fn mixed_expressions_over_a_series() {
    assert_eq!(with_s("2*s - 1").values(), &[1.0, 3.0, 5.0]);
    assert_eq!(with_s("-s").values(), &[-1.0, -2.0, -3.0]);
    assert_eq!(with_s("s / 2").values(), &[0.5, 1.0, 1.5]);
    assert_eq!(with_s("s ** 2").values(), &[1.0, 4.0, 9.0]);
    assert_eq!(with_s("(s + 1) ** 2 / 2").values(), &[2.0, 4.5, 8.0]);
    assert_eq!(with_s("s").times(), &[0, 60, 120]);
}

#[test]
fn series_with_series() {
    assert_eq!(with_s("s * s").values(), &[1.0, 4.0, 9.0]);
    assert_eq!(with_s("s / s").values(), &[1.0, 1.0, 1.0]);
    assert_eq!(with_s("s - s").values(), &[0.0, 0.0, 0.0]);
}

#[test]
fn series_combine_on_shared_timestamps() {
    let other = series(&[(60, 10.0), (120, 20.0), (180, 30.0)]);
    let result = eval_series("s + t",
                             vec![("s", Value::Composite(hourly())), ("t", Value::Composite(other))]);

    assert_eq!(result.times(), &[60, 120]);
    assert_eq!(result.values(), &[12.0, 23.0]);
}

#[test]
fn magnitudes_are_snapped_individually() {
    let noisy = series(&[(0, 6.999_999_999_996), (1, 2.5), (2, -3.000_000_000_002)]);
    let result = eval_series("n", vec![("n", Value::Composite(noisy))]);

    assert_eq!(result.times(), &[0, 1, 2]);
    assert_eq!(result.values(), &[7.0, 2.5, -3.0]);
}

#[test]
fn inverting_a_zero_magnitude_is_not_an_error() {
    let z = series(&[(0, 0.0), (1, 4.0)]);
    let result = eval_series("1 / z", vec![("z", Value::Composite(z))]);

    assert!(result.values()[0].is_infinite());
    assert_eq!(result.values()[1], 0.25);
}

#[test]
fn non_finite_magnitudes_pass_through() {
    let mixed = series(&[(0, -8.0), (1, 4.0)]);
    let result = eval_series("m ** 0.5", vec![("m", Value::Composite(mixed))]);

    assert!(result.values()[0].is_nan());
    assert_eq!(result.values()[1], 2.0);
}

#[test]
fn scalar_zero_divisor_is_still_an_error() {
    let err = evaluate("s / (2 - 2)", vec![("s", Value::Composite(hourly()))]).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { index: 2 }));
}

#[test]
fn series_exponent_is_error() {
    let err = evaluate("2 ** s", vec![("s", Value::Composite(hourly()))]).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::CompositeExponent { index: 2 }));
}

#[test]
fn bound_series_is_left_untouched() {
    let original = hourly();
    let bindings = vec![("s", Value::Composite(original.clone()))];
    let _ = evaluate::<TimeSeries, _, _, _>("-s * 10 + 1", bindings).unwrap();

    assert_eq!(original.values(), &[1.0, 2.0, 3.0]);
}

#[test]
fn scalar_only_expressions_still_produce_scalars() {
    let k: Value<TimeSeries> = Value::Scalar(2.0);
    assert!(!k.is_composite());
    assert!(Value::Composite(hourly()).is_composite());

    let result = evaluate::<TimeSeries, _, _, _>("k * 3", vec![("k", k)]);
    assert_eq!(result.unwrap(), Outcome::Integer(6));
}

#[test]
fn concurrent_evaluations_share_nothing() {
    let shared = hourly();

    let results: Vec<TimeSeries> = thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|_| {
                      let s = shared.clone();
                      scope.spawn(move || eval_series("s * 2 + 1", vec![("s", Value::Composite(s))]))
                  })
                  .collect();
        handles.into_iter().map(|h| h.join().expect("thread panicked")).collect()
    });

    for result in &results {
        assert_eq!(result, &results[0]);
        assert_eq!(result.values(), &[3.0, 5.0, 7.0]);
    }
}

#[test]
fn series_construction_is_validated() {
    assert_eq!(TimeSeries::new(vec![0, 1], vec![1.0]).unwrap_err(),
               SeriesError::LengthMismatch { times:  2,
                                             values: 1, });
    assert_eq!(TimeSeries::new(vec![0, 5, 3], vec![1.0, 2.0, 3.0]).unwrap_err(),
               SeriesError::Unordered { index: 2 });
    assert!(TimeSeries::new(Vec::new(), Vec::new()).unwrap().is_empty());
}

#[test]
fn series_display_and_capabilities() {
    let s = hourly();
    assert_eq!(s.to_string(), "[0: 1, 60: 2, 120: 3]");
    assert_eq!(s.negate().invert().values(), &[-1.0, -0.5, -1.0 / 3.0]);
    assert_eq!(s.exponentiate(0.0).values(), &[1.0, 1.0, 1.0]);
    assert_eq!(s.map_magnitudes(f64::floor).times(), s.times());
}

#[test]
fn nan_magnitudes_compare_equal_to_themselves() {
    let s = series(&[(0, f64::NAN)]);
    assert_eq!(s, s.clone());
}
