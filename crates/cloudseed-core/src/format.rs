//! Display formatting of physical parameter values.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use libm::log10;

use crate::{ParamKind, ParamValue, Parameter};

/// Renders a physical value the way a host UI shows it.
///
/// Durations are converted from samples to milliseconds using `sample_rate`
/// (shown in samples if the rate is not positive), gains are shown in dB,
/// frequencies switch to kHz above 1 kHz, pass-through amounts are shown as
/// percentages. A value whose shape does not match the parameter's kind is
/// printed as-is.
///
/// # Example
///
/// ```rust
/// use cloudseed_core::{format_value, ParamValue, Parameter};
///
/// assert_eq!(format_value(Parameter::PreDelay, ParamValue::Int(24000), 48000.0), "500 ms");
/// assert_eq!(format_value(Parameter::DryOut, ParamValue::Float(1.0), 48000.0), "0.0 dB");
/// assert_eq!(format_value(Parameter::DiffusionEnabled, ParamValue::Bool(true), 48000.0), "On");
/// ```
pub fn format_value(param: Parameter, value: ParamValue, sample_rate: f64) -> String {
    let suffix = param.unit().suffix();
    match (param.kind(), value) {
        (ParamKind::Duration { .. }, ParamValue::Int(samples)) => {
            if sample_rate > 0.0 {
                format!("{:.0}{suffix}", f64::from(samples) * 1000.0 / sample_rate)
            } else {
                format!("{samples} samples")
            }
        }
        (ParamKind::Gain, ParamValue::Float(gain)) => {
            if gain <= 0.0 {
                format!("-inf{suffix}")
            } else {
                format!("{:.1}{suffix}", 20.0 * log10(gain))
            }
        }
        (ParamKind::Frequency { .. }, ParamValue::Float(hz)) => {
            if hz >= 1000.0 {
                format!("{:.2} k{}", hz / 1000.0, suffix.trim_start())
            } else {
                format!("{hz:.0}{suffix}")
            }
        }
        (ParamKind::Rate { .. }, ParamValue::Float(hz)) => format!("{hz:.2}{suffix}"),
        (ParamKind::Linear, ParamValue::Float(v)) => format!("{:.0}{suffix}", v * 100.0),
        (ParamKind::Toggle, ParamValue::Bool(on)) => String::from(if on { "On" } else { "Off" }),
        (ParamKind::Count { .. } | ParamKind::Seed, ParamValue::Int(n)) => format!("{n}{suffix}"),
        (_, other) => format!("{other}"),
    }
}
