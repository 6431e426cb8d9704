//! Error types for stereo dispatch and processing.

use cloudseed_core::{EngineError, Parameter};
use thiserror::Error;

use crate::Channel;

/// Errors that can occur while dispatching parameters or processing blocks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StereoError {
    /// Left and right input blocks differ in length.
    #[error("stereo input length mismatch: left has {left} samples, right has {right}")]
    LengthMismatch {
        /// Length of the left input.
        left: usize,
        /// Length of the right input.
        right: usize,
    },

    /// Output buffers do not match the input block length.
    #[error("output buffers must hold {expected} samples, got left {left} and right {right}")]
    OutputMismatch {
        /// Input block length.
        expected: usize,
        /// Length of the left output.
        left: usize,
        /// Length of the right output.
        right: usize,
    },

    /// Block is longer than the engines can render at once.
    #[error("block of {len} samples exceeds engine buffer size {capacity}")]
    BlockTooLarge {
        /// Requested block length.
        len: usize,
        /// Smallest engine buffer size.
        capacity: usize,
    },

    /// An engine refused a parameter value.
    #[error("{channel} engine: {source}")]
    Engine {
        /// Channel whose engine failed.
        channel: Channel,
        /// Engine error.
        #[source]
        source: EngineError,
    },

    /// An engine refused a value and putting back the previous value failed
    /// as well. The two engines may now hold different values for `param`.
    #[error("{channel} engine: {source}; restoring {param} failed: {rollback}")]
    RollbackFailed {
        /// Channel whose engine refused the update.
        channel: Channel,
        /// Why the update was refused.
        #[source]
        source: EngineError,
        /// Parameter that could not be restored.
        param: Parameter,
        /// Why the restore was refused.
        rollback: EngineError,
    },
}

impl StereoError {
    /// Create an engine error for `channel`.
    pub fn engine(channel: Channel, source: EngineError) -> Self {
        StereoError::Engine { channel, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudseed_core::ParamValue;
    use std::error::Error;

    #[test]
    fn length_mismatch_display() {
        let err = StereoError::LengthMismatch { left: 64, right: 32 };
        assert_eq!(
            err.to_string(),
            "stereo input length mismatch: left has 64 samples, right has 32"
        );
    }

    #[test]
    fn block_too_large_display() {
        let err = StereoError::BlockTooLarge { len: 50000, capacity: 48000 };
        assert_eq!(err.to_string(), "block of 50000 samples exceeds engine buffer size 48000");
    }

    #[test]
    fn engine_error_has_source() {
        let err = StereoError::engine(
            Channel::Right,
            EngineError::Rejected {
                param: Parameter::TapSeed,
                value: ParamValue::Int(1),
            },
        );
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "right engine: parameter TapSeed rejected value 1");
    }

    #[test]
    fn rollback_failure_names_both_errors() {
        let err = StereoError::RollbackFailed {
            channel: Channel::Right,
            source: EngineError::Unsupported(Parameter::LineDelay),
            param: Parameter::LineDelay,
            rollback: EngineError::Unsupported(Parameter::LineDelay),
        };
        assert_eq!(
            err.to_string(),
            "right engine: parameter LineDelay is not supported; \
             restoring LineDelay failed: parameter LineDelay is not supported"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn length_errors_have_no_source() {
        assert!(StereoError::LengthMismatch { left: 1, right: 2 }.source().is_none());
        assert!(
            StereoError::OutputMismatch { expected: 1, left: 1, right: 2 }
                .source()
                .is_none()
        );
    }
}
