/// Default tolerance used when snapping results to integers.
pub const SNAP_EPSILON: f64 = 1e-10;

/// `2^63` as an `f64`; the first value past the `i64` range.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` if the value is finite, integral, and inside the
/// `i64` range. Returns `None` otherwise.
///
/// ## Example
/// ```
/// use seriesmath::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(-12.0), Some(-12));
/// assert_eq!(f64_to_i64_exact(2.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_exact(1e300), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < -I64_UPPER_BOUND || value >= I64_UPPER_BOUND {
        return None;
    }
    Some(value as i64)
}

/// Snaps a value to the nearest integer when it lies within `epsilon` of it.
///
/// Floating-point chains such as `1/3*3` tend to land a hair away from the
/// integer they should produce. Truncation toward zero is compared before and
/// after nudging the value by `epsilon`; if the nudge crosses an integer
/// boundary the value is moved onto that boundary. Values that are not close to
/// an integer, and non-finite values, are returned unchanged.
///
/// Values within `epsilon` of zero are left alone: truncation toward zero does
/// not change across the origin.
///
/// ## Example
/// ```
/// use seriesmath::util::num::{SNAP_EPSILON, snap_to_integer};
///
/// assert_eq!(snap_to_integer(6.999_999_999_996, SNAP_EPSILON), 7.0);
/// assert_eq!(snap_to_integer(7.000_000_000_004, SNAP_EPSILON), 7.0);
/// assert_eq!(snap_to_integer(-6.999_999_999_996, SNAP_EPSILON), -7.0);
/// assert_eq!(snap_to_integer(2.5, SNAP_EPSILON), 2.5);
/// ```
#[must_use]
pub fn snap_to_integer(value: f64, epsilon: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let whole = value.trunc();
    let above = (value + epsilon).trunc();
    let below = (value - epsilon).trunc();

    if value > 0.0 {
        if above != whole {
            above
        } else if below != whole {
            whole
        } else {
            value
        }
    } else if above != whole {
        whole
    } else if below != whole {
        below
    } else {
        value
    }
}
