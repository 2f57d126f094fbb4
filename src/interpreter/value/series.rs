use std::{cmp::Ordering, fmt, sync::Arc};

use ordered_float::OrderedFloat;

use crate::{error::SeriesError, interpreter::value::composite::Composite};

/// A sequence of magnitudes, each tagged with a timestamp.
///
/// Timestamps are strictly ascending integers in whatever unit the caller
/// chose. They are shared between a series and every series derived from it
/// by scalar arithmetic, so scaling a long record does not copy its time axis.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    times:  Arc<[i64]>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Constructs a series from parallel timestamp and magnitude sequences.
    ///
    /// # Errors
    /// - `SeriesError::LengthMismatch` if the sequences differ in length.
    /// - `SeriesError::Unordered` if the timestamps are not strictly
    ///   ascending.
    ///
    /// # Example
    /// ```
    /// use seriesmath::{error::SeriesError, interpreter::value::series::TimeSeries};
    ///
    /// let series = TimeSeries::new(vec![0, 1440, 2880], vec![10.0, 12.5, 9.0]).unwrap();
    /// assert_eq!(series.len(), 3);
    ///
    /// let err = TimeSeries::new(vec![0, 0], vec![1.0, 2.0]).unwrap_err();
    /// assert_eq!(err, SeriesError::Unordered { index: 1 });
    /// ```
    pub fn new(times: Vec<i64>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch { times:  times.len(),
                                                     values: values.len(), });
        }
        if let Some(index) = times.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SeriesError::Unordered { index: index + 1 });
        }

        Ok(Self { times: times.into(),
                  values })
    }

    /// Constructs a series from `(timestamp, magnitude)` pairs.
    ///
    /// # Errors
    /// Returns `SeriesError::Unordered` if the timestamps are not strictly
    /// ascending.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SeriesError>
        where I: IntoIterator<Item = (i64, f64)>
    {
        let (times, values) = pairs.into_iter().unzip();
        Self::new(times, values)
    }

    /// Returns the timestamps.
    #[must_use]
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    /// Returns the magnitudes, one per timestamp.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(timestamp, magnitude)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { times:  Arc::clone(&self.times),
               values: self.values.iter().map(|&v| f(v)).collect(), }
    }

    /// Combines two series on the timestamps they share.
    ///
    /// Timestamps present in only one operand are dropped. When both series
    /// use the same time axis it is shared with the result.
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        if Arc::ptr_eq(&self.times, &other.times) || self.times == other.times {
            return Self { times:  Arc::clone(&self.times),
                          values: self.values
                                      .iter()
                                      .zip(&other.values)
                                      .map(|(&a, &b)| f(a, b))
                                      .collect(), };
        }

        let mut times = Vec::new();
        let mut values = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.len() && j < other.len() {
            match self.times[i].cmp(&other.times[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    times.push(self.times[i]);
                    values.push(f(self.values[i], other.values[j]));
                    i += 1;
                    j += 1;
                },
            }
        }

        Self { times: times.into(),
               values }
    }
}

impl Composite for TimeSeries {
    fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    fn add_scalar(&self, scalar: f64) -> Self {
        self.map_values(|v| v + scalar)
    }

    fn multiply(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    fn multiply_scalar(&self, scalar: f64) -> Self {
        self.map_values(|v| v * scalar)
    }

    fn negate(&self) -> Self {
        self.map_values(|v| -v)
    }

    fn invert(&self) -> Self {
        self.map_values(|v| 1.0 / v)
    }

    fn exponentiate(&self, exponent: f64) -> Self {
        self.map_values(|v| v.powf(exponent))
    }

    fn map_magnitudes<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        self.map_values(f)
    }
}

impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        self.times == other.times
        && self.values.len() == other.values.len()
        && self.values
               .iter()
               .zip(&other.values)
               .all(|(&a, &b)| OrderedFloat(a) == OrderedFloat(b))
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (index, (time, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{time}: {value}")?;
        }

        write!(f, "]")
    }
}
