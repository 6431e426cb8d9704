//! CloudSeed Core - parameter space and engine interface for the CloudSeed reverb
//!
//! This crate holds the pieces of the reverb facade that do not depend on any
//! particular engine or storage: the closed set of control identifiers, the
//! physical value type handed to engines, the response curves used to shape
//! frequency and gain controls, and the per-channel engine trait.
//!
//! # Core Abstractions
//!
//! ## Parameter Space
//!
//! - [`Parameter`] - The 38 reverb controls, totally ordered, with stable names
//! - [`ParamKind`] - How a control's normalized value becomes a physical one
//! - [`ParamGroup`] - Processing stage a control belongs to
//! - [`ParamUnit`] - Display unit of the physical value
//!
//! ## Values
//!
//! - [`ParamValue`] - Physical value (float, integer, or toggle) pushed to engines
//! - [`format_value`] - Human-readable rendering of a physical value
//!
//! ## Response Curves
//!
//! - [`ResponseCurve`] - Normalized → shaped mapping contract
//! - [`CurveKind`] - Octave-span (frequency) or decade-span (gain) shaping
//! - [`ResponseTable`] - Default 40001-point quantized exponential curves
//!
//! ## Engines
//!
//! - [`ReverbEngine`] - Per-channel DSP unit driven by the stereo facade
//! - [`EngineError`] - Failures an engine may report for a parameter push
//!
//! # Example
//!
//! ```rust
//! use cloudseed_core::{CurveKind, Parameter, ResponseCurve, ResponseTable};
//!
//! let param: Parameter = "StereoWidth".parse().unwrap();
//! assert_eq!(param.index(), 33);
//! assert_eq!(Parameter::from_index(33), Some(param));
//!
//! let curve = ResponseTable;
//! assert_eq!(curve.map(1.0, CurveKind::OctaveSpan), 1.0);
//! ```
//!
//! # no_std Support
//!
//! Disable the default `std` feature to use this crate without the standard
//! library. [`format_value`] then allocates through `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod engine;
pub mod format;
pub mod parameter;
pub mod response;
pub mod value;

pub use engine::{EngineError, ReverbEngine};
pub use format::format_value;
pub use parameter::{ParamGroup, ParamKind, ParamUnit, Parameter, UnknownParameter};
pub use response::{CurveKind, ResponseCurve, ResponseTable, TABLE_SIZE};
pub use value::ParamValue;
