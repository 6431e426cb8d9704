//! Stereo parameter mapping and block dispatch for the CloudSeed reverb.
//!
//! [`StereoReverb`] is the facade a host talks to. It owns the flat array of
//! normalized control values ([`ParameterStore`]), translates each control
//! into the physical value a [`ReverbEngine`] consumes, and drives one engine
//! per channel.
//!
//! # Parameter Flow
//!
//! ```text
//! host ──set_parameter(p, v)──▶ ParameterStore
//!                                   │
//!                      physical_value(p, v, sample_rate)
//!                                   │
//!                    ┌──────────────┴──────────────┐
//!                    ▼                             ▼
//!              left engine                  right engine
//!                              (seeds + 1_000_000)
//! ```
//!
//! The right channel receives the same physical values as the left, except
//! for the four seed controls, which are offset by [`SEED_DECORRELATION`] so
//! the two engines build different pseudo-random delay patterns. That
//! difference is what gives the reverb tail its stereo width.
//!
//! # Example
//!
//! ```rust
//! use cloudseed_core::{EngineError, ParamValue, Parameter, ReverbEngine};
//! use cloudseed_stereo::StereoReverb;
//!
//! struct Silent(Vec<f64>);
//!
//! impl ReverbEngine for Silent {
//!     fn set_parameter(&mut self, _: Parameter, _: ParamValue) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!     fn process(&mut self, input: &[f64]) {
//!         self.0[..input.len()].fill(0.0);
//!     }
//!     fn output(&self) -> &[f64] {
//!         &self.0
//!     }
//! }
//!
//! let mut reverb = StereoReverb::new(48000.0, |size, _| Silent(vec![0.0; size]));
//! reverb.set_parameter(Parameter::PreDelay, 1.0).unwrap();
//! assert_eq!(reverb.physical(Parameter::PreDelay).0, ParamValue::Int(24000));
//!
//! let (left, right) = reverb.process(&[0.5; 64], &[0.5; 64]).unwrap();
//! assert_eq!((left.len(), right.len()), (64, 64));
//! ```
//!
//! # Threading
//!
//! The facade has no internal locking. Parameter changes and block
//! processing both take `&mut self`; hosts that set parameters from a
//! control thread must serialize access themselves (a `Mutex` around the
//! facade, or a single-producer queue drained on the audio thread).
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events for parameter dispatch and engine
//!   failures. Off by default to keep the audio path free of logging.

mod error;
mod mapper;
mod processor;
mod reverb;
mod store;

pub use error::StereoError;
pub use mapper::{SEED_DECORRELATION, decorrelate, physical_value, stereo_values};
pub use reverb::{Channel, StereoReverb};
pub use store::ParameterStore;

pub use cloudseed_core::{
    CurveKind, EngineError, ParamValue, Parameter, ResponseCurve, ResponseTable, ReverbEngine,
};
