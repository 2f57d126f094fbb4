use std::collections::{HashMap, hash_map::Entry};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Constants available to every expression.
///
/// These are process-wide and read-only; a table only ever copies them out.
pub const CONSTANTS: [(&str, f64); 2] = [("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Returns `true` if `name` is one of the [`CONSTANTS`].
#[must_use]
pub fn is_constant(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name)
}

/// The names an expression may reference, mapped to their values.
///
/// Names are case-sensitive. The table is immutable once built and lives for a
/// single evaluation.
#[derive(Debug, Clone)]
pub struct VariableTable<C> {
    bindings: HashMap<String, Value<C>>,
}

impl<C: Clone> VariableTable<C> {
    /// Builds a table from caller-supplied bindings.
    ///
    /// Bindings are taken as pairs rather than as a map so that a name supplied
    /// twice is detected instead of silently overwritten.
    ///
    /// # Errors
    /// Returns `RuntimeError::VariableRedefined` if a name collides with a
    /// constant or with an earlier binding.
    ///
    /// # Example
    /// ```
    /// use seriesmath::{
    ///     error::RuntimeError,
    ///     interpreter::{value::series::TimeSeries, variables::VariableTable},
    /// };
    ///
    /// let table = VariableTable::<TimeSeries>::new([("x", 1.0)]).unwrap();
    /// assert!(table.get("x").is_some());
    /// assert!(table.get("pi").is_some());
    ///
    /// let err = VariableTable::<TimeSeries>::new([("x", 1.0), ("x", 2.0)]).unwrap_err();
    /// assert_eq!(err, RuntimeError::VariableRedefined { name: "x".to_string() });
    /// ```
    pub fn new<I, K, V>(bindings: I) -> Result<Self, RuntimeError>
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<Value<C>>
    {
        let mut table = HashMap::new();

        for (name, value) in bindings {
            let name = name.into();
            if is_constant(&name) {
                return Err(RuntimeError::VariableRedefined { name });
            }
            match table.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(RuntimeError::VariableRedefined { name: entry.key().clone() });
                },
                Entry::Vacant(entry) => {
                    entry.insert(value.into());
                },
            }
        }

        Ok(Self { bindings: table })
    }

    /// Looks up a name, returning a copy of its value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value<C>> {
        CONSTANTS.iter()
                 .find(|(constant, _)| *constant == name)
                 .map(|(_, v)| Value::Scalar(*v))
                 .or_else(|| self.bindings.get(name).cloned())
    }

    /// Returns the number of caller-supplied bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if the caller supplied no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
