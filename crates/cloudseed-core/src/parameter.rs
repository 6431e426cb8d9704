//! The closed set of reverb controls.
//!
//! Every control the reverb exposes is a variant of [`Parameter`]. Variants are
//! totally ordered and map one-to-one onto indices `0..Parameter::COUNT`; the
//! order is part of the preset and host-automation contract and must never
//! change. Each variant also carries a stable name (the variant name itself,
//! e.g. `"PreDelay"`) used as the key in serialized programs.
//!
//! Beyond identity, a parameter knows its [`ParamKind`] (how the normalized
//! control value becomes the physical value an engine consumes), its
//! [`ParamGroup`] (the processing stage it belongs to), and the
//! [`ParamUnit`] its physical value is displayed in.
//!
//! # Example
//!
//! ```rust
//! use cloudseed_core::{ParamGroup, ParamKind, Parameter};
//!
//! assert_eq!(Parameter::COUNT, 38);
//! assert_eq!(Parameter::PreDelay.name(), "PreDelay");
//! assert_eq!(Parameter::from_name("LineOut"), Some(Parameter::LineOut));
//! assert_eq!(Parameter::TapSeed.group(), ParamGroup::Seeds);
//! assert_eq!(Parameter::DiffusionEnabled.kind(), ParamKind::Toggle);
//! ```

use core::fmt;
use core::str::FromStr;

/// A reverb control identifier.
///
/// The discriminant is the control's index in the flat parameter array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Parameter {
    // Input
    /// Blend between the two input channels before processing.
    CrossMix = 0,
    /// Pre-delay before early reflections, up to half a second.
    PreDelay,
    /// Input high-pass cutoff.
    HighPass,
    /// Input low-pass cutoff.
    LowPass,

    // Early
    /// Number of early-reflection taps.
    TapCount,
    /// Time span covered by the early-reflection taps.
    TapLength,
    /// Gain of the early-reflection taps.
    TapGain,
    /// Decay applied across successive taps.
    TapDecay,
    /// Enables the early diffusion network.
    DiffusionEnabled,
    /// Number of allpass stages in the early diffuser.
    DiffusionStages,
    /// Delay of each early diffusion stage, up to 50 ms.
    DiffusionDelay,
    /// Feedback of the early diffusion allpasses.
    DiffusionFeedback,

    // Late
    /// Number of parallel late delay lines.
    LineCount,
    /// Gain into the late delay lines.
    LineGain,
    /// Length of the late delay lines.
    LineDelay,
    /// Feedback of the late delay lines.
    LineFeedback,
    /// Enables the diffuser inside each late line.
    PostDiffusionEnabled,
    /// Number of allpass stages in the late diffuser.
    PostDiffusionStages,
    /// Delay of each late diffusion stage, up to 50 ms.
    PostDiffusionDelay,
    /// Feedback of the late diffusion allpasses.
    PostDiffusionFeedback,

    // Frequency response
    /// Gain of the low shelf in the late lines.
    PostLowShelfGain,
    /// Corner frequency of the low shelf.
    PostLowShelfFrequency,
    /// Gain of the high shelf in the late lines.
    PostHighShelfGain,
    /// Corner frequency of the high shelf.
    PostHighShelfFrequency,
    /// Low-pass cutoff in the late lines.
    PostCutoffFrequency,

    // Modulation
    /// Depth of delay modulation in the diffusers.
    DiffuserModAmount,
    /// Rate of delay modulation in the diffusers.
    DiffuserModRate,
    /// Depth of delay modulation in the late lines.
    LineModAmount,
    /// Rate of delay modulation in the late lines.
    LineModRate,

    // Seeds
    /// Seed for the early-reflection tap pattern.
    TapSeed,
    /// Seed for the early diffuser delays.
    DiffusionSeed,
    /// Seed for the late line delays.
    CombSeed,
    /// Seed for the late diffuser delays.
    PostDiffusionSeed,

    // Output
    /// Stereo width of the wet signal.
    StereoWidth,
    /// Level of the dry signal.
    DryOut,
    /// Level of the pre-delayed signal.
    PredelayOut,
    /// Level of the early reflections.
    EarlyOut,
    /// Level of the late reverb.
    LineOut,
}

impl Parameter {
    /// Number of parameters. Valid indices are `0..COUNT`.
    pub const COUNT: usize = 38;

    /// All parameters in index order.
    pub const ALL: [Parameter; Self::COUNT] = [
        Parameter::CrossMix,
        Parameter::PreDelay,
        Parameter::HighPass,
        Parameter::LowPass,
        Parameter::TapCount,
        Parameter::TapLength,
        Parameter::TapGain,
        Parameter::TapDecay,
        Parameter::DiffusionEnabled,
        Parameter::DiffusionStages,
        Parameter::DiffusionDelay,
        Parameter::DiffusionFeedback,
        Parameter::LineCount,
        Parameter::LineGain,
        Parameter::LineDelay,
        Parameter::LineFeedback,
        Parameter::PostDiffusionEnabled,
        Parameter::PostDiffusionStages,
        Parameter::PostDiffusionDelay,
        Parameter::PostDiffusionFeedback,
        Parameter::PostLowShelfGain,
        Parameter::PostLowShelfFrequency,
        Parameter::PostHighShelfGain,
        Parameter::PostHighShelfFrequency,
        Parameter::PostCutoffFrequency,
        Parameter::DiffuserModAmount,
        Parameter::DiffuserModRate,
        Parameter::LineModAmount,
        Parameter::LineModRate,
        Parameter::TapSeed,
        Parameter::DiffusionSeed,
        Parameter::CombSeed,
        Parameter::PostDiffusionSeed,
        Parameter::StereoWidth,
        Parameter::DryOut,
        Parameter::PredelayOut,
        Parameter::EarlyOut,
        Parameter::LineOut,
    ];

    /// Index of this parameter in the flat parameter array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up the parameter at `index`.
    ///
    /// Returns `None` for `index >= COUNT`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Parameter> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Stable name used for serialization keys and display.
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::CrossMix => "CrossMix",
            Parameter::PreDelay => "PreDelay",
            Parameter::HighPass => "HighPass",
            Parameter::LowPass => "LowPass",
            Parameter::TapCount => "TapCount",
            Parameter::TapLength => "TapLength",
            Parameter::TapGain => "TapGain",
            Parameter::TapDecay => "TapDecay",
            Parameter::DiffusionEnabled => "DiffusionEnabled",
            Parameter::DiffusionStages => "DiffusionStages",
            Parameter::DiffusionDelay => "DiffusionDelay",
            Parameter::DiffusionFeedback => "DiffusionFeedback",
            Parameter::LineCount => "LineCount",
            Parameter::LineGain => "LineGain",
            Parameter::LineDelay => "LineDelay",
            Parameter::LineFeedback => "LineFeedback",
            Parameter::PostDiffusionEnabled => "PostDiffusionEnabled",
            Parameter::PostDiffusionStages => "PostDiffusionStages",
            Parameter::PostDiffusionDelay => "PostDiffusionDelay",
            Parameter::PostDiffusionFeedback => "PostDiffusionFeedback",
            Parameter::PostLowShelfGain => "PostLowShelfGain",
            Parameter::PostLowShelfFrequency => "PostLowShelfFrequency",
            Parameter::PostHighShelfGain => "PostHighShelfGain",
            Parameter::PostHighShelfFrequency => "PostHighShelfFrequency",
            Parameter::PostCutoffFrequency => "PostCutoffFrequency",
            Parameter::DiffuserModAmount => "DiffuserModAmount",
            Parameter::DiffuserModRate => "DiffuserModRate",
            Parameter::LineModAmount => "LineModAmount",
            Parameter::LineModRate => "LineModRate",
            Parameter::TapSeed => "TapSeed",
            Parameter::DiffusionSeed => "DiffusionSeed",
            Parameter::CombSeed => "CombSeed",
            Parameter::PostDiffusionSeed => "PostDiffusionSeed",
            Parameter::StereoWidth => "StereoWidth",
            Parameter::DryOut => "DryOut",
            Parameter::PredelayOut => "PredelayOut",
            Parameter::EarlyOut => "EarlyOut",
            Parameter::LineOut => "LineOut",
        }
    }

    /// Looks up a parameter by its stable name (exact, case-sensitive).
    pub fn from_name(name: &str) -> Option<Parameter> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// The conversion this parameter applies to its normalized value.
    pub const fn kind(self) -> ParamKind {
        match self {
            Parameter::CrossMix
            | Parameter::TapDecay
            | Parameter::DiffusionFeedback
            | Parameter::LineFeedback
            | Parameter::PostDiffusionFeedback
            | Parameter::DiffuserModAmount
            | Parameter::LineModAmount
            | Parameter::StereoWidth => ParamKind::Linear,

            Parameter::PreDelay | Parameter::TapLength | Parameter::LineDelay => {
                ParamKind::Duration { max_seconds: 0.5 }
            }
            Parameter::DiffusionDelay | Parameter::PostDiffusionDelay => {
                ParamKind::Duration { max_seconds: 0.05 }
            }

            Parameter::TapCount => ParamKind::Count { min: 0, scale: 100.0 },
            Parameter::DiffusionStages | Parameter::PostDiffusionStages => {
                ParamKind::Count { min: 1, scale: 3.999 }
            }
            Parameter::LineCount => ParamKind::Count { min: 1, scale: 11.999 },

            Parameter::DiffusionEnabled | Parameter::PostDiffusionEnabled => ParamKind::Toggle,

            Parameter::TapGain
            | Parameter::LineGain
            | Parameter::PostLowShelfGain
            | Parameter::PostHighShelfGain
            | Parameter::DryOut
            | Parameter::PredelayOut
            | Parameter::EarlyOut
            | Parameter::LineOut => ParamKind::Gain,

            Parameter::HighPass => ParamKind::Frequency { low_hz: 20.0, span_hz: 980.0 },
            Parameter::LowPass => ParamKind::Frequency { low_hz: 400.0, span_hz: 19600.0 },
            Parameter::PostLowShelfFrequency => ParamKind::Frequency { low_hz: 0.0, span_hz: 1000.0 },
            Parameter::PostHighShelfFrequency | Parameter::PostCutoffFrequency => {
                ParamKind::Frequency { low_hz: 0.0, span_hz: 20000.0 }
            }

            Parameter::DiffuserModRate | Parameter::LineModRate => ParamKind::Rate { max_hz: 10.0 },

            Parameter::TapSeed
            | Parameter::DiffusionSeed
            | Parameter::CombSeed
            | Parameter::PostDiffusionSeed => ParamKind::Seed,
        }
    }

    /// The processing stage this parameter belongs to.
    pub const fn group(self) -> ParamGroup {
        match self.index() {
            0..=3 => ParamGroup::Input,
            4..=11 => ParamGroup::Early,
            12..=19 => ParamGroup::Late,
            20..=24 => ParamGroup::Frequency,
            25..=28 => ParamGroup::Modulation,
            29..=32 => ParamGroup::Seeds,
            _ => ParamGroup::Output,
        }
    }

    /// Display unit of the physical value.
    pub const fn unit(self) -> ParamUnit {
        self.kind().unit()
    }

    /// Returns `true` for the four pseudo-random seed controls.
    #[inline]
    pub const fn is_seed(self) -> bool {
        matches!(self.kind(), ParamKind::Seed)
    }

    /// Returns `true` for controls whose physical value is a length in samples,
    /// and therefore depends on the sample rate.
    #[inline]
    pub const fn is_duration(self) -> bool {
        matches!(self.kind(), ParamKind::Duration { .. })
    }

    /// Iterates over all parameters in index order.
    pub fn iter() -> impl Iterator<Item = Parameter> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownParameter;

impl fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown parameter name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownParameter {}

impl FromStr for Parameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::from_name(s).ok_or(UnknownParameter)
    }
}

impl TryFrom<usize> for Parameter {
    type Error = UnknownParameter;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Parameter::from_index(index).ok_or(UnknownParameter)
    }
}

/// How a parameter's normalized value maps to its physical value.
///
/// `v` is the normalized control value, `sr` the sample rate, `r` the
/// octave-span response of `v`, and `g` the decade-span response of `v`.
///
/// | Kind | Physical value |
/// |------|----------------|
/// | `Linear` | `v` |
/// | `Duration` | `trunc(v * max_seconds * sr)` samples |
/// | `Count` | `min + trunc(v * scale)` |
/// | `Toggle` | `v >= 0.5` |
/// | `Gain` | `g` (linear gain) |
/// | `Frequency` | `low_hz + r * span_hz` |
/// | `Rate` | `g * max_hz` |
/// | `Seed` | `trunc(v * 1_000_000)` |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Passed through unchanged.
    Linear,
    /// Length in samples, scaled by the sample rate.
    Duration {
        /// Length in seconds at `v = 1.0`.
        max_seconds: f64,
    },
    /// Integer count.
    Count {
        /// Count at `v = 0.0`.
        min: i32,
        /// Multiplier applied before truncation. Slightly below the number of
        /// steps so that `v = 1.0` lands on the top step.
        scale: f64,
    },
    /// On/off switch, thresholded at one half.
    Toggle,
    /// Linear gain shaped by the decade-span curve.
    Gain,
    /// Frequency band shaped by the octave-span curve.
    Frequency {
        /// Frequency at `v = 0.0`.
        low_hz: f64,
        /// Width of the band.
        span_hz: f64,
    },
    /// Modulation rate shaped by the decade-span curve.
    Rate {
        /// Rate at `v = 1.0`.
        max_hz: f64,
    },
    /// Pseudo-random seed.
    Seed,
}

impl ParamKind {
    /// Scale applied to the normalized value of seed controls.
    pub const SEED_SCALE: f64 = 1_000_000.0;

    /// Display unit for values of this kind.
    pub const fn unit(self) -> ParamUnit {
        match self {
            ParamKind::Linear => ParamUnit::Percent,
            ParamKind::Duration { .. } => ParamUnit::Milliseconds,
            ParamKind::Count { .. } | ParamKind::Seed => ParamUnit::None,
            ParamKind::Toggle => ParamUnit::Toggle,
            ParamKind::Gain => ParamUnit::Decibels,
            ParamKind::Frequency { .. } | ParamKind::Rate { .. } => ParamUnit::Hertz,
        }
    }
}

/// Processing stage of a parameter, used for grouping in host UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamGroup {
    /// Input filtering and pre-delay.
    Input,
    /// Early reflections and early diffusion.
    Early,
    /// Late delay lines and late diffusion.
    Late,
    /// Shelving and cutoff filters in the late lines.
    Frequency,
    /// Delay modulation.
    Modulation,
    /// Pseudo-random seeds.
    Seeds,
    /// Output mix.
    Output,
}

impl ParamGroup {
    /// Display name of the group.
    pub const fn name(self) -> &'static str {
        match self {
            ParamGroup::Input => "Input",
            ParamGroup::Early => "Early",
            ParamGroup::Late => "Late",
            ParamGroup::Frequency => "Frequency Response",
            ParamGroup::Modulation => "Modulation",
            ParamGroup::Seeds => "Seeds",
            ParamGroup::Output => "Output",
        }
    }
}

/// Display unit of a physical parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels, for gains and output levels.
    Decibels,
    /// Hertz, for cutoffs and modulation rates.
    Hertz,
    /// Milliseconds, for durations held in samples.
    Milliseconds,
    /// Percent, for pass-through controls.
    Percent,
    /// On/Off.
    Toggle,
    /// Dimensionless counts and seeds.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Milliseconds => " ms",
            ParamUnit::Percent => "%",
            ParamUnit::Toggle | ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_a_bijection() {
        for (i, p) in Parameter::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Parameter::from_index(i), Some(*p));
        }
        assert_eq!(Parameter::from_index(Parameter::COUNT), None);
        assert_eq!(Parameter::from_index(usize::MAX), None);
    }

    #[test]
    fn last_variant_matches_count() {
        assert_eq!(Parameter::LineOut.index(), Parameter::COUNT - 1);
    }

    #[test]
    fn names_round_trip() {
        for p in Parameter::iter() {
            assert_eq!(Parameter::from_name(p.name()), Some(p));
            assert_eq!(p.name().parse::<Parameter>(), Ok(p));
        }
    }

    #[test]
    fn names_are_unique() {
        for a in Parameter::iter() {
            for b in Parameter::iter() {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Parameter::from_name("RoomSize"), None);
        assert_eq!(Parameter::from_name("stereowidth"), None);
        assert_eq!("".parse::<Parameter>(), Err(UnknownParameter));
    }

    #[test]
    fn try_from_index() {
        assert_eq!(Parameter::try_from(1), Ok(Parameter::PreDelay));
        assert_eq!(Parameter::try_from(38), Err(UnknownParameter));
    }

    #[test]
    fn seeds_are_contiguous() {
        let seeds: Vec<usize> = Parameter::iter()
            .filter(|p| p.is_seed())
            .map(Parameter::index)
            .collect();
        assert_eq!(seeds, vec![29, 30, 31, 32]);
    }

    #[test]
    fn duration_parameters() {
        let durations: Vec<Parameter> = Parameter::iter().filter(|p| p.is_duration()).collect();
        assert_eq!(
            durations,
            vec![
                Parameter::PreDelay,
                Parameter::TapLength,
                Parameter::DiffusionDelay,
                Parameter::LineDelay,
                Parameter::PostDiffusionDelay,
            ]
        );
    }

    #[test]
    fn groups_follow_index_order() {
        assert_eq!(Parameter::LowPass.group(), ParamGroup::Input);
        assert_eq!(Parameter::TapCount.group(), ParamGroup::Early);
        assert_eq!(Parameter::DiffusionFeedback.group(), ParamGroup::Early);
        assert_eq!(Parameter::LineCount.group(), ParamGroup::Late);
        assert_eq!(Parameter::PostLowShelfGain.group(), ParamGroup::Frequency);
        assert_eq!(Parameter::LineModRate.group(), ParamGroup::Modulation);
        assert_eq!(Parameter::PostDiffusionSeed.group(), ParamGroup::Seeds);
        assert_eq!(Parameter::StereoWidth.group(), ParamGroup::Output);
        assert_eq!(Parameter::LineOut.group(), ParamGroup::Output);
        assert_eq!(Parameter::PostCutoffFrequency.group().name(), "Frequency Response");
    }

    #[test]
    fn units() {
        assert_eq!(Parameter::PreDelay.unit(), ParamUnit::Milliseconds);
        assert_eq!(Parameter::HighPass.unit(), ParamUnit::Hertz);
        assert_eq!(Parameter::DryOut.unit(), ParamUnit::Decibels);
        assert_eq!(Parameter::CrossMix.unit(), ParamUnit::Percent);
        assert_eq!(Parameter::TapSeed.unit(), ParamUnit::None);
        assert_eq!(ParamUnit::Decibels.suffix(), " dB");
    }
}
