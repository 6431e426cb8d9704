//! Program (preset) storage for the CloudSeed reverb.
//!
//! A program is the full set of normalized control values, stored as a flat
//! JSON object keyed by parameter name. This crate encodes and decodes that
//! format, wraps it in a [`Program`] document type with file I/O, reports
//! suspicious content, and locates program files on disk.
//!
//! # Features
//!
//! - **Codec**: [`encode`], [`encode_pretty`] and [`decode`] between a
//!   [`ParameterStore`](cloudseed_stereo::ParameterStore) and JSON bytes
//! - **Programs**: load, save and merge-apply partial or complete programs
//! - **Validation**: unknown keys and values outside `[0, 1]`
//! - **Paths**: platform-specific program directory
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudseed_config::{Program, user_programs_dir};
//! use cloudseed_stereo::{Parameter, ParameterStore};
//!
//! let mut store = ParameterStore::new();
//! store.set(Parameter::LineDelay, 0.6);
//! store.set(Parameter::LineFeedback, 0.85);
//!
//! let path = user_programs_dir().join("long_tail.json");
//! Program::from_store(&store).save(&path).unwrap();
//!
//! let loaded = Program::load(&path).unwrap();
//! let mut restored = ParameterStore::new();
//! loaded.restore_into(&mut restored);
//! assert_eq!(restored, store);
//! ```

mod codec;
mod error;
mod program;

/// Platform-specific locations for program files.
pub mod paths;

/// Program validation.
pub mod validation;

pub use codec::{decode, encode, encode_pretty};
pub use error::PresetError;
pub use paths::{
    PROGRAM_EXTENSION, ensure_user_programs_dir, find_program, list_programs_in,
    list_user_programs, program_name_from_path, user_programs_dir,
};
pub use program::Program;
pub use validation::{ValidationIssue, ValidationReport, validate_program};
