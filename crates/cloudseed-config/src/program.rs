//! Program documents: named sets of normalized parameter values.

use std::collections::BTreeMap;
use std::path::Path;

use cloudseed_core::{Parameter, ResponseCurve, ReverbEngine};
use cloudseed_stereo::{ParameterStore, StereoReverb};

use crate::PresetError;
use crate::codec::{Entries, decode};
use crate::paths::{find_program_in, user_programs_dir};

/// A reverb program as stored on disk.
///
/// A program is a name → normalized value mapping. It may be partial: applying
/// it only touches the parameters it names, so a program holding just
/// `StereoWidth` acts as a single-parameter tweak on top of the current state.
/// Keys that do not name a parameter are kept so a program written by a newer
/// version survives a load/save cycle.
///
/// # Example
///
/// ```rust
/// use cloudseed_config::Program;
/// use cloudseed_stereo::{Parameter, ParameterStore};
///
/// let program = Program::from_bytes(br#"{"StereoWidth": 0.7, "Shimmer": 1.0}"#).unwrap();
/// assert_eq!(program.get(Parameter::StereoWidth), Some(0.7));
/// assert_eq!(program.unknown_keys().collect::<Vec<_>>(), ["Shimmer"]);
///
/// let mut store = ParameterStore::new();
/// store.set(Parameter::LineOut, 0.8);
/// assert_eq!(program.restore_into(&mut store), 1);
/// assert_eq!(store.get(Parameter::LineOut), 0.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    values: BTreeMap<String, f64>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures every parameter of `store`.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            values: store
                .iter()
                .map(|(param, value)| (param.name().to_string(), value))
                .collect(),
        }
    }

    /// Wraps an already decoded mapping.
    pub fn from_values(values: BTreeMap<String, f64>) -> Self {
        Self { values }
    }

    /// Decodes a JSON program document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PresetError> {
        decode(bytes).map(Self::from_values)
    }

    /// Encodes the program as indented JSON.
    ///
    /// Parameters come first, in index order, followed by unknown keys in
    /// sorted order.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PresetError> {
        self.entries().to_vec(true)
    }

    /// Loads a program from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| PresetError::read_file(path, e))?;
        let program = Self::from_bytes(&bytes)?;
        tracing::debug!(path = %path.display(), entries = program.len(), "loaded program");
        Ok(program)
    }

    /// Loads a program by path or by name from the user programs directory.
    ///
    /// See [`find_program`](crate::find_program) for how `name` is resolved.
    pub fn load_named(name: &str) -> Result<Self, PresetError> {
        Self::load_named_in(name, &user_programs_dir())
    }

    pub(crate) fn load_named_in(name: &str, dir: &Path) -> Result<Self, PresetError> {
        let path = find_program_in(name, dir)
            .ok_or_else(|| PresetError::ProgramNotFound(name.to_string()))?;
        Self::load(path)
    }

    /// Saves the program to a JSON file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| PresetError::create_dir(parent, e))?;
        }

        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(|e| PresetError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), entries = self.len(), "saved program");
        Ok(())
    }

    /// Value stored for `param`, if the program names it.
    pub fn get(&self, param: Parameter) -> Option<f64> {
        self.values.get(param.name()).copied()
    }

    /// Sets the value of `param`.
    pub fn set(&mut self, param: Parameter, value: f64) {
        self.values.insert(param.name().to_string(), value);
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with_value(mut self, param: Parameter, value: f64) -> Self {
        self.set(param, value);
        self
    }

    /// Number of entries, unknown keys included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the program has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw name → value mapping.
    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    /// Keys that do not name a parameter.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|name| Parameter::from_name(name).is_none())
    }

    /// Merges the program into `store`. Returns the number of parameters written.
    pub fn restore_into(&self, store: &mut ParameterStore) -> usize {
        store.restore(&self.values)
    }

    /// Merges the program into a running reverb, pushing each named parameter
    /// to both engines. Returns the number of parameters set.
    pub fn apply_to<E, C>(&self, reverb: &mut StereoReverb<E, C>) -> Result<usize, PresetError>
    where
        E: ReverbEngine,
        C: ResponseCurve,
    {
        for key in self.unknown_keys() {
            tracing::warn!(key, "ignoring unknown program key");
        }
        Ok(reverb.apply(&self.values)?)
    }

    fn entries(&self) -> Entries<'_> {
        let known = Parameter::iter()
            .filter_map(|param| self.values.get_key_value(param.name()));
        let unknown = self
            .values
            .iter()
            .filter(|(name, _)| Parameter::from_name(name).is_none());
        Entries(
            known
                .chain(unknown)
                .map(|(name, &value)| (name.as_str(), value))
                .collect(),
        )
    }
}

impl From<&ParameterStore> for Program {
    fn from(store: &ParameterStore) -> Self {
        Self::from_store(store)
    }
}
