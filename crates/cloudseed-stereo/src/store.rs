//! Flat storage of normalized control values.

use std::collections::BTreeMap;

use cloudseed_core::Parameter;

/// One normalized value per [`Parameter`], indexed by [`Parameter::index`].
///
/// Values are conventionally in `[0.0, 1.0]` but are stored as given: range
/// handling happens in the physical mapping, where curves saturate and
/// linear formulas extrapolate. Reads through an index or name that does not
/// resolve return `0.0` instead of failing.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use cloudseed_stereo::{Parameter, ParameterStore};
///
/// let mut store = ParameterStore::new();
/// store.set(Parameter::LineFeedback, 0.8);
///
/// let mut program = BTreeMap::new();
/// program.insert("StereoWidth".to_string(), 0.7);
/// assert_eq!(store.restore(&program), 1);
///
/// assert_eq!(store.get(Parameter::LineFeedback), 0.8);
/// assert_eq!(store.get(Parameter::StereoWidth), 0.7);
/// assert_eq!(store.get_index(99), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    values: [f64; Parameter::COUNT],
}

impl ParameterStore {
    /// Creates a store with every value at `0.0`.
    pub const fn new() -> Self {
        Self {
            values: [0.0; Parameter::COUNT],
        }
    }

    /// Creates a store from a full value array in index order.
    pub const fn from_values(values: [f64; Parameter::COUNT]) -> Self {
        Self { values }
    }

    /// Normalized value of `param`.
    #[inline]
    pub fn get(&self, param: Parameter) -> f64 {
        self.values[param.index()]
    }

    /// Normalized value at `index`, or `0.0` if the index is out of range.
    #[inline]
    pub fn get_index(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    /// Normalized value of the parameter named `name`, or `0.0` if the name
    /// is unknown.
    pub fn get_by_name(&self, name: &str) -> f64 {
        Parameter::from_name(name).map_or(0.0, |p| self.get(p))
    }

    /// Overwrites the value of `param`. No clamping is applied.
    #[inline]
    pub fn set(&mut self, param: Parameter, value: f64) {
        self.values[param.index()] = value;
    }

    /// All values in index order.
    pub fn values(&self) -> &[f64; Parameter::COUNT] {
        &self.values
    }

    /// Iterates over `(parameter, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::iter().zip(self.values.iter().copied())
    }

    /// `(name, value)` pairs in index order, one per parameter.
    pub fn snapshot(&self) -> Vec<(&'static str, f64)> {
        self.iter().map(|(p, v)| (p.name(), v)).collect()
    }

    /// Merges named values into the store.
    ///
    /// Every recognized name overwrites its entry. Parameters absent from
    /// `values` keep their current value and unknown names are ignored.
    /// Returns the number of entries written.
    pub fn restore(&mut self, values: &BTreeMap<String, f64>) -> usize {
        let mut applied = 0;
        for (name, &value) in values {
            if let Some(param) = Parameter::from_name(name) {
                self.set(param, value);
                applied += 1;
            }
        }
        applied
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
