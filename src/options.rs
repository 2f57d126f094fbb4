use crate::util::num::SNAP_EPSILON;

/// Default multiplier applied to a factor list's length to cap the number of
/// exponent reduction steps.
pub const EXPONENT_STEP_FACTOR: usize = 4;

/// Tunables for a single evaluation.
///
/// `Options::default()` reproduces the standard behavior; most callers never
/// need anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Tolerance within which results are snapped onto integers.
    pub snap_epsilon:         f64,
    /// Multiplier for the exponent reduction iteration cap.
    pub exponent_step_factor: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { snap_epsilon:         SNAP_EPSILON,
               exponent_step_factor: EXPONENT_STEP_FACTOR, }
    }
}

impl Options {
    /// Returns a copy with a different snapping tolerance.
    ///
    /// # Example
    /// ```
    /// use seriesmath::Options;
    ///
    /// let options = Options::default().with_epsilon(1e-6);
    /// assert_eq!(options.snap_epsilon, 1e-6);
    /// ```
    #[must_use]
    pub const fn with_epsilon(mut self, snap_epsilon: f64) -> Self {
        self.snap_epsilon = snap_epsilon;
        self
    }

    /// Returns the iteration cap for a factor list of `len` entries.
    #[must_use]
    pub const fn reduction_cap(&self, len: usize) -> usize {
        let len = if len == 0 { 1 } else { len };
        let factor = if self.exponent_step_factor == 0 { 1 } else { self.exponent_step_factor };
        len.saturating_mul(factor)
    }
}
