//! Normalized → physical parameter mapping and stereo dispatch.
//!
//! [`physical_value`] is the formula table: one conversion per
//! [`ParamKind`], selected statically by [`Parameter::kind`]. Float to
//! integer conversions truncate toward zero and saturate at the `i32` range
//! (NaN becomes 0), so out-of-range inputs degrade instead of failing.
//!
//! | Parameter | Physical value |
//! |-----------|----------------|
//! | `PreDelay`, `TapLength`, `LineDelay` | `trunc(v * 0.5 * sr)` samples |
//! | `DiffusionDelay`, `PostDiffusionDelay` | `trunc(v * 0.05 * sr)` samples |
//! | `TapCount` | `trunc(v * 100)` |
//! | `DiffusionStages`, `PostDiffusionStages` | `1 + trunc(v * 3.999)` |
//! | `LineCount` | `1 + trunc(v * 11.999)` |
//! | `DiffusionEnabled`, `PostDiffusionEnabled` | `v >= 0.5` |
//! | gains and output levels | `decade(v)` |
//! | `HighPass` | `20 + octave(v) * 980` Hz |
//! | `LowPass` | `400 + octave(v) * 19600` Hz |
//! | `PostLowShelfFrequency` | `octave(v) * 1000` Hz |
//! | `PostHighShelfFrequency`, `PostCutoffFrequency` | `octave(v) * 20000` Hz |
//! | `DiffuserModRate`, `LineModRate` | `decade(v) * 10` Hz |
//! | seeds | `trunc(v * 1_000_000)` |
//! | everything else | `v` |

use std::collections::BTreeMap;

use cloudseed_core::{
    CurveKind, EngineError, ParamKind, ParamValue, Parameter, ResponseCurve, ReverbEngine,
};

use crate::{Channel, StereoError, StereoReverb};

/// Offset added to the right channel's seeds.
pub const SEED_DECORRELATION: i32 = 1_000_000;

/// Physical value of `param` for the normalized value `normalized`.
///
/// Pure: the result depends only on the arguments.
///
/// # Example
///
/// ```rust
/// use cloudseed_stereo::{physical_value, ParamValue, Parameter, ResponseTable};
///
/// let v = physical_value(Parameter::PreDelay, 1.0, 48000.0, &ResponseTable);
/// assert_eq!(v, ParamValue::Int(24000));
///
/// let v = physical_value(Parameter::TapCount, 1.0, 48000.0, &ResponseTable);
/// assert_eq!(v, ParamValue::Int(100));
/// ```
pub fn physical_value<C>(param: Parameter, normalized: f64, sample_rate: f64, curve: &C) -> ParamValue
where
    C: ResponseCurve + ?Sized,
{
    let v = normalized;
    match param.kind() {
        ParamKind::Linear => ParamValue::Float(v),
        ParamKind::Duration { max_seconds } => ParamValue::Int((v * max_seconds * sample_rate) as i32),
        ParamKind::Count { min, scale } => ParamValue::Int(min.saturating_add((v * scale) as i32)),
        ParamKind::Toggle => ParamValue::Bool(v >= 0.5),
        ParamKind::Gain => ParamValue::Float(curve.map(v, CurveKind::DecadeSpan)),
        ParamKind::Frequency { low_hz, span_hz } => {
            ParamValue::Float(low_hz + curve.map(v, CurveKind::OctaveSpan) * span_hz)
        }
        ParamKind::Rate { max_hz } => ParamValue::Float(curve.map(v, CurveKind::DecadeSpan) * max_hz),
        ParamKind::Seed => ParamValue::Int((v * ParamKind::SEED_SCALE) as i32),
    }
}

/// Right-channel variant of a left-channel physical value.
///
/// Seed values are shifted by [`SEED_DECORRELATION`] (saturating); every
/// other value is returned unchanged.
pub fn decorrelate(param: Parameter, value: ParamValue) -> ParamValue {
    match value {
        ParamValue::Int(seed) if param.is_seed() => {
            ParamValue::Int(seed.saturating_add(SEED_DECORRELATION))
        }
        other => other,
    }
}

/// `(left, right)` physical values of `param` for `normalized`.
pub fn stereo_values<C>(
    param: Parameter,
    normalized: f64,
    sample_rate: f64,
    curve: &C,
) -> (ParamValue, ParamValue)
where
    C: ResponseCurve + ?Sized,
{
    let left = physical_value(param, normalized, sample_rate, curve);
    (left, decorrelate(param, left))
}

impl<E: ReverbEngine, C: ResponseCurve> StereoReverb<E, C> {
    /// `(left, right)` physical values the engines receive for the current
    /// state of `param`.
    pub fn physical(&self, param: Parameter) -> (ParamValue, ParamValue) {
        stereo_values(param, self.store.get(param), self.sample_rate, &self.curve)
    }

    /// Stores a normalized value and pushes its physical values to both engines.
    ///
    /// The update is all-or-nothing. If the left engine refuses the value the
    /// store is rolled back. If the right engine refuses it, the left engine
    /// is sent the physical value of the previous normalized value and the
    /// store is rolled back. In both cases the engine error is returned.
    ///
    /// If the left engine also refuses its previous value, the result is
    /// [`StereoError::RollbackFailed`]: the store is rolled back but the left
    /// engine keeps the new value while the right keeps the old one.
    pub fn set_parameter(&mut self, param: Parameter, value: f64) -> Result<(), StereoError> {
        let previous = self.store.get(param);
        let (left, right) = stereo_values(param, value, self.sample_rate, &self.curve);
        let previous_left = physical_value(param, previous, self.sample_rate, &self.curve);

        self.store.set(param, value);
        if let Err(err) = self.push(param, left, right, Some(previous_left)) {
            self.store.set(param, previous);
            return Err(err);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(%param, value, ?left, ?right, "parameter dispatched");
        Ok(())
    }

    /// [`set_parameter`](Self::set_parameter) by index.
    ///
    /// Out-of-range indices are ignored and return `Ok(false)`.
    pub fn set_parameter_at(&mut self, index: usize, value: f64) -> Result<bool, StereoError> {
        match Parameter::from_index(index) {
            Some(param) => self.set_parameter(param, value).map(|()| true),
            None => Ok(false),
        }
    }

    /// Changes the sample rate and re-sends every duration parameter, whose
    /// length in samples depends on it.
    ///
    /// If an engine refuses a re-sent value the change is undone: the old rate
    /// is restored and the durations already re-sent are sent again at the old
    /// rate. The refusal is returned, or [`StereoError::RollbackFailed`] if an
    /// engine also refuses an old value.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), StereoError> {
        let old_rate = self.sample_rate;
        self.sample_rate = sample_rate;

        for (resent, param) in Parameter::iter().filter(|p| p.is_duration()).enumerate() {
            let v = self.store.get(param);
            let (left, right) = stereo_values(param, v, sample_rate, &self.curve);
            let previous_left = physical_value(param, v, old_rate, &self.curve);
            if let Err(err) = self.push(param, left, right, Some(previous_left)) {
                self.sample_rate = old_rate;
                return Err(match (self.restore_durations(resent), err) {
                    (Err((param, rollback)), StereoError::Engine { channel, source }) => {
                        StereoError::RollbackFailed {
                            channel,
                            source,
                            param,
                            rollback,
                        }
                    }
                    (_, err) => err,
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(old_rate, sample_rate, "sample rate changed");
        Ok(())
    }

    /// Re-sends every parameter's physical values in index order.
    ///
    /// Useful after constructing the facade, or after swapping engine state.
    /// Unlike [`set_parameter`](Self::set_parameter) this is not atomic: the
    /// facade does not know what the engines held before, so nothing is
    /// undone. On the first refusal the error is returned and the remaining
    /// parameters are not sent. If the right engine refused, the left engine
    /// already holds the refused parameter's value.
    pub fn refresh(&mut self) -> Result<(), StereoError> {
        for param in Parameter::iter() {
            let (left, right) = self.physical(param);
            self.push(param, left, right, None)?;
        }
        Ok(())
    }

    /// Merges a name → normalized value mapping, typically a decoded program.
    ///
    /// Recognized names are applied through [`set_parameter`](Self::set_parameter)
    /// in index order; parameters absent from `values` are left alone and
    /// unknown names are skipped. Stops at the first engine failure, leaving
    /// earlier parameters applied. Returns the number of parameters set.
    pub fn apply(&mut self, values: &BTreeMap<String, f64>) -> Result<usize, StereoError> {
        let mut applied = 0;
        for param in Parameter::iter() {
            if let Some(&value) = values.get(param.name()) {
                self.set_parameter(param, value)?;
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Pushes `left` then `right`. If the right push fails and `previous_left`
    /// is given, it is re-sent to the left engine so both channels stay in step.
    fn push(
        &mut self,
        param: Parameter,
        left: ParamValue,
        right: ParamValue,
        previous_left: Option<ParamValue>,
    ) -> Result<(), StereoError> {
        if let Err(source) = self.left.set_parameter(param, left) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%param, ?left, error = %source, "left engine refused parameter");
            return Err(StereoError::engine(Channel::Left, source));
        }

        if let Err(source) = self.right.set_parameter(param, right) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%param, ?right, error = %source, "right engine refused parameter");

            if let Some(previous) = previous_left
                && let Err(rollback) = self.left.set_parameter(param, previous)
            {
                #[cfg(feature = "tracing")]
                tracing::warn!(%param, error = %rollback, "left engine rollback failed");
                return Err(StereoError::RollbackFailed {
                    channel: Channel::Right,
                    source,
                    param,
                    rollback,
                });
            }
            return Err(StereoError::engine(Channel::Right, source));
        }
        Ok(())
    }

    /// Sends the first `count` duration parameters again at the current rate.
    /// Stops at the first refusal.
    fn restore_durations(&mut self, count: usize) -> Result<(), (Parameter, EngineError)> {
        for param in Parameter::iter().filter(|p| p.is_duration()).take(count) {
            let (left, right) = self.physical(param);
            self.left
                .set_parameter(param, left)
                .and_then(|()| self.right.set_parameter(param, right))
                .map_err(|rollback| {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%param, error = %rollback, "duration rollback failed");
                    (param, rollback)
                })?;
        }
        Ok(())
    }
}
