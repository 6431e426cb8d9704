//! Per-channel reverb engine interface.
//!
//! The stereo facade drives two independent [`ReverbEngine`] instances, one
//! per channel. The engine owns all DSP state (delay lines, diffusers,
//! filters, modulation); the facade only tells it what physical parameter
//! values to use and feeds it blocks of audio.
//!
//! ## Design Decisions
//!
//! - **Engine-owned output**: an engine renders into its own buffer of
//!   [`buffer_size`](ReverbEngine::buffer_size) samples, and the caller copies
//!   the first `n` samples out after each block. This keeps the hot path free
//!   of allocation on both sides.
//!
//! - **Fallible parameter pushes**: engines may refuse a value (wrong value
//!   shape, unsupported control). The facade uses the error to keep the left
//!   and right channels in lockstep.

use core::fmt;

use crate::{ParamValue, Parameter};

/// A single-channel reverb processor.
///
/// # Example
///
/// ```rust
/// use cloudseed_core::{EngineError, ParamValue, Parameter, ReverbEngine};
///
/// /// Scales its input by the `DryOut` level.
/// struct DryOnly {
///     level: f64,
///     output: Vec<f64>,
/// }
///
/// impl ReverbEngine for DryOnly {
///     fn set_parameter(&mut self, param: Parameter, value: ParamValue) -> Result<(), EngineError> {
///         if param == Parameter::DryOut {
///             match value {
///                 ParamValue::Float(level) => self.level = level,
///                 other => return Err(EngineError::ValueType { param, value: other }),
///             }
///         }
///         Ok(())
///     }
///
///     fn process(&mut self, input: &[f64]) {
///         for (out, x) in self.output.iter_mut().zip(input) {
///             *out = x * self.level;
///         }
///     }
///
///     fn output(&self) -> &[f64] {
///         &self.output
///     }
/// }
///
/// let mut engine = DryOnly { level: 1.0, output: vec![0.0; 4] };
/// engine.set_parameter(Parameter::DryOut, ParamValue::Float(0.5)).unwrap();
/// engine.process(&[1.0, 1.0]);
/// assert_eq!(&engine.output()[..2], &[0.5, 0.5]);
/// ```
pub trait ReverbEngine {
    /// Applies a physical value for `param`.
    fn set_parameter(&mut self, param: Parameter, value: ParamValue) -> Result<(), EngineError>;

    /// Renders one block. `input.len()` never exceeds [`buffer_size`](Self::buffer_size).
    ///
    /// After this call the first `input.len()` samples of
    /// [`output`](Self::output) hold the rendered block.
    fn process(&mut self, input: &[f64]);

    /// The engine's output buffer.
    fn output(&self) -> &[f64];

    /// Largest block the engine accepts, in samples.
    ///
    /// Defaults to the length of the output buffer.
    fn buffer_size(&self) -> usize {
        self.output().len()
    }

    /// Clears delay lines and filter history without touching parameters.
    ///
    /// Default does nothing.
    fn clear_buffers(&mut self) {}
}

/// Errors an engine reports when refusing a parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// The engine has no use for this parameter.
    Unsupported(Parameter),
    /// The value has the wrong shape for this parameter.
    ValueType {
        /// Parameter being set.
        param: Parameter,
        /// Value that was refused.
        value: ParamValue,
    },
    /// The engine cannot apply the value in its current state.
    Rejected {
        /// Parameter being set.
        param: Parameter,
        /// Value that was refused.
        value: ParamValue,
    },
}

impl EngineError {
    /// Parameter the failed push was for.
    pub fn parameter(&self) -> Parameter {
        match self {
            EngineError::Unsupported(param)
            | EngineError::ValueType { param, .. }
            | EngineError::Rejected { param, .. } => *param,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(param) => write!(f, "parameter {param} is not supported"),
            Self::ValueType { param, value } => write!(
                f,
                "parameter {param} does not accept a {} value",
                value.type_name()
            ),
            Self::Rejected { param, value } => {
                write!(f, "parameter {param} rejected value {value}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        output: [f64; 8],
    }

    impl ReverbEngine for Fixed {
        fn set_parameter(&mut self, param: Parameter, _: ParamValue) -> Result<(), EngineError> {
            Err(EngineError::Unsupported(param))
        }
        fn process(&mut self, input: &[f64]) {
            self.output[..input.len()].copy_from_slice(input);
        }
        fn output(&self) -> &[f64] {
            &self.output
        }
    }

    #[test]
    fn default_buffer_size_is_output_len() {
        let engine = Fixed { output: [0.0; 8] };
        assert_eq!(engine.buffer_size(), 8);
    }

    #[test]
    fn error_reports_parameter() {
        let mut engine = Fixed { output: [0.0; 8] };
        let err = engine
            .set_parameter(Parameter::LineOut, ParamValue::Float(1.0))
            .unwrap_err();
        assert_eq!(err.parameter(), Parameter::LineOut);
    }

    #[test]
    fn display() {
        let err = EngineError::ValueType {
            param: Parameter::TapCount,
            value: ParamValue::Float(0.5),
        };
        assert_eq!(
            err.to_string(),
            "parameter TapCount does not accept a float value"
        );
        let err = EngineError::Rejected {
            param: Parameter::CombSeed,
            value: ParamValue::Int(12),
        };
        assert_eq!(err.to_string(), "parameter CombSeed rejected value 12");
        assert_eq!(
            EngineError::Unsupported(Parameter::HighPass).to_string(),
            "parameter HighPass is not supported"
        );
    }
}
