use std::fmt::Debug;

/// The arithmetic a structured value must support to be bound as a variable.
///
/// The evaluator treats implementors as opaque: it never inspects their
/// contents and never mutates them. Every method returns a new value, so a
/// composite bound by the caller is left exactly as it was supplied.
///
/// Scalar-aware variants exist so that `composite + 3` and `3 + composite`
/// route to the same method regardless of operand order.
///
/// # Example
/// ```
/// use seriesmath::interpreter::value::{composite::Composite, series::TimeSeries};
///
/// let flow = TimeSeries::new(vec![0, 60], vec![1.0, 4.0]).unwrap();
/// let scaled = flow.multiply_scalar(2.0).add_scalar(1.0);
/// assert_eq!(scaled.values(), &[3.0, 9.0]);
/// assert_eq!(flow.values(), &[1.0, 4.0]);
/// ```
pub trait Composite: Clone + Debug {
    /// Combines two composites by addition.
    #[must_use]
    fn add(&self, other: &Self) -> Self;

    /// Adds a scalar to every magnitude.
    #[must_use]
    fn add_scalar(&self, scalar: f64) -> Self;

    /// Combines two composites by multiplication.
    #[must_use]
    fn multiply(&self, other: &Self) -> Self;

    /// Multiplies every magnitude by a scalar.
    #[must_use]
    fn multiply_scalar(&self, scalar: f64) -> Self;

    /// Negates every magnitude.
    #[must_use]
    fn negate(&self) -> Self;

    /// Returns the multiplicative inverse of every magnitude.
    #[must_use]
    fn invert(&self) -> Self;

    /// Raises every magnitude to a scalar power.
    #[must_use]
    fn exponentiate(&self, exponent: f64) -> Self;

    /// Rebuilds the composite with each magnitude passed through `f`.
    ///
    /// Any structure other than the magnitudes themselves, such as
    /// timestamps, must be carried over unchanged.
    #[must_use]
    fn map_magnitudes<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64;
}
