//! The stereo reverb facade.

use core::fmt;

use cloudseed_core::{ResponseCurve, ResponseTable, ReverbEngine};

use crate::ParameterStore;

/// One side of the stereo pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Left channel.
    Left,
    /// Right channel.
    Right,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Left => "left",
            Channel::Right => "right",
        })
    }
}

/// Stereo reverb built from two mono engines.
///
/// Owns the normalized parameter state, the sample rate, the response curve
/// used for frequency and gain shaping, and one [`ReverbEngine`] per channel.
/// Parameter methods live in the mapper module, block processing in the
/// processor module.
///
/// # Type Parameters
///
/// - `E`: engine type, one instance per channel
/// - `C`: response curve, [`ResponseTable`] by default
#[derive(Debug)]
pub struct StereoReverb<E, C = ResponseTable> {
    pub(crate) store: ParameterStore,
    pub(crate) sample_rate: f64,
    pub(crate) curve: C,
    pub(crate) left: E,
    pub(crate) right: E,
}

impl<E: ReverbEngine> StereoReverb<E> {
    /// Creates a facade with the default response curve.
    ///
    /// `make_engine(buffer_size, sample_rate)` is called once per channel
    /// (left first). Engines are sized to hold one second of audio, so
    /// `buffer_size` is the sample rate truncated to an integer.
    ///
    /// All parameters start at `0.0`. Nothing is pushed to the engines until
    /// a parameter is set or [`refresh`](Self::refresh) is called.
    pub fn new(sample_rate: f64, make_engine: impl FnMut(usize, f64) -> E) -> Self {
        Self::with_curve(sample_rate, ResponseTable, make_engine)
    }
}

impl<E: ReverbEngine, C: ResponseCurve> StereoReverb<E, C> {
    /// Creates a facade with a custom response curve.
    pub fn with_curve(
        sample_rate: f64,
        curve: C,
        mut make_engine: impl FnMut(usize, f64) -> E,
    ) -> Self {
        let buffer_size = sample_rate as usize;
        let left = make_engine(buffer_size, sample_rate);
        let right = make_engine(buffer_size, sample_rate);
        Self::from_engines(left, right, sample_rate, curve)
    }

    /// Wraps two existing engines.
    pub fn from_engines(left: E, right: E, sample_rate: f64, curve: C) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            left_buffer = left.buffer_size(),
            right_buffer = right.buffer_size(),
            "stereo reverb created"
        );
        Self {
            store: ParameterStore::new(),
            sample_rate,
            curve,
            left,
            right,
        }
    }

    /// Normalized parameter state.
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Response curve used for frequency and gain shaping.
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Engine for `channel`.
    pub fn engine(&self, channel: Channel) -> &E {
        match channel {
            Channel::Left => &self.left,
            Channel::Right => &self.right,
        }
    }

    /// Left engine.
    pub fn left(&self) -> &E {
        &self.left
    }

    /// Right engine.
    pub fn right(&self) -> &E {
        &self.right
    }

    /// Clears both engines' delay lines and filter history.
    pub fn clear_buffers(&mut self) {
        self.left.clear_buffers();
        self.right.clear_buffers();
    }

    /// Consumes the facade and returns `(left, right)` engines.
    pub fn into_engines(self) -> (E, E) {
        (self.left, self.right)
    }
}
