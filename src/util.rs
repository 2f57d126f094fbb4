/// Numeric conversion and snapping helpers.
///
/// This module provides the exact `f64` to `i64` conversion used when
/// reporting integral results, together with the epsilon-tolerant integer
/// snapping applied to final results.
pub mod num;
