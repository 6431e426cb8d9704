//! JSON encoding of normalized parameter state.
//!
//! A program document is a flat UTF-8 JSON object mapping each parameter's
//! stable name to its normalized value:
//!
//! ```json
//! {"CrossMix":0.0,"PreDelay":0.25,"HighPass":0.0, ... ,"LineOut":0.8}
//! ```
//!
//! Encoding writes every parameter, in index order. Decoding accepts any
//! object of numbers: missing parameters are simply absent from the result
//! and unknown keys are kept, so the caller decides what to apply. There is
//! no version field.
//!
//! Values round-trip bit-exactly: `serde_json` writes the shortest
//! representation that parses back to the same `f64`, and is built with
//! `float_roundtrip` so parsing is correctly rounded.

use std::collections::BTreeMap;

use cloudseed_stereo::ParameterStore;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::PresetError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Ordered `(name, value)` entries serialized as a JSON object.
pub(crate) struct Entries<'a>(pub(crate) Vec<(&'a str, f64)>);

impl Entries<'_> {
    /// Fails on the first value JSON cannot carry.
    pub(crate) fn check_finite(&self) -> Result<(), PresetError> {
        match self.0.iter().find(|(_, v)| !v.is_finite()) {
            Some(&(name, value)) => Err(PresetError::NonFinite {
                name: name.to_string(),
                value,
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn to_vec(&self, pretty: bool) -> Result<Vec<u8>, PresetError> {
        self.check_finite()?;
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        };
        bytes.map_err(PresetError::Encode)
    }
}

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Encodes the store as a compact JSON object, one entry per parameter in
/// index order.
///
/// Fails with [`PresetError::NonFinite`] if any value is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use cloudseed_config::{decode, encode};
/// use cloudseed_stereo::{Parameter, ParameterStore};
///
/// let mut store = ParameterStore::new();
/// store.set(Parameter::StereoWidth, 0.7);
///
/// let bytes = encode(&store).unwrap();
/// assert!(bytes.starts_with(b"{\"CrossMix\":0.0,"));
///
/// let decoded = decode(&bytes).unwrap();
/// assert_eq!(decoded.len(), Parameter::COUNT);
/// assert_eq!(decoded["StereoWidth"], 0.7);
/// ```
pub fn encode(store: &ParameterStore) -> Result<Vec<u8>, PresetError> {
    Entries(store.snapshot()).to_vec(false)
}

/// Same as [`encode`], indented for files meant to be read by people.
pub fn encode_pretty(store: &ParameterStore) -> Result<Vec<u8>, PresetError> {
    Entries(store.snapshot()).to_vec(true)
}

/// Decodes a program document into a name → value mapping.
///
/// A leading UTF-8 byte order mark is ignored. Anything other than a JSON
/// object whose values are all numbers fails with [`PresetError::Decode`].
pub fn decode(bytes: &[u8]) -> Result<BTreeMap<String, f64>, PresetError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(serde_json::from_slice(bytes)?)
}
