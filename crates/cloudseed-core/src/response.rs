//! Response curves for frequency- and gain-like controls.
//!
//! A knob position is rarely a good physical value on its own: cutoffs want
//! roughly equal travel per octave, levels want roughly equal travel per
//! decade. [`ResponseCurve`] is the contract for that shaping and
//! [`ResponseTable`] the default implementation.
//!
//! # Curve Formulas
//!
//! Both curves share one exponential shape, normalized so that `0 → 0` and
//! `1 → 1`:
//!
//! ```text
//! f(x) = (base^x - 1) / (base - 1)
//! ```
//!
//! - **OctaveSpan**: `base = 16` (four octaves)
//! - **DecadeSpan**: `base = 1000` (three decades, 60 dB)
//!
//! [`ResponseTable`] quantizes `x` to a 40001-point grid before evaluating,
//! so that values match a precomputed lookup table exactly.

use libm::pow;

/// Which response shape to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Four-octave exponential, used for cutoff and shelf frequencies.
    OctaveSpan,
    /// Three-decade exponential, used for gains, levels and modulation rates.
    DecadeSpan,
}

impl CurveKind {
    /// Ratio between the curve's output at `x = 1` and at the start of its
    /// exponential segment.
    pub const fn base(self) -> f64 {
        match self {
            CurveKind::OctaveSpan => 16.0,
            CurveKind::DecadeSpan => 1000.0,
        }
    }
}

/// Maps a normalized value through a nonlinear response.
///
/// Implementations must be pure, deterministic and monotonic non-decreasing
/// in `value`. Inputs outside `[0, 1]` must not panic; clamping is expected.
///
/// Closures `Fn(f64, CurveKind) -> f64` implement this trait, which is handy
/// for tests and for hosts that ship their own curves.
pub trait ResponseCurve {
    /// Returns the shaped value for `value` under `kind`.
    fn map(&self, value: f64, kind: CurveKind) -> f64;
}

impl<F> ResponseCurve for F
where
    F: Fn(f64, CurveKind) -> f64,
{
    fn map(&self, value: f64, kind: CurveKind) -> f64 {
        self(value, kind)
    }
}

/// Number of grid points in a response table.
pub const TABLE_SIZE: usize = 40001;

/// Multiplier turning a normalized value into a grid index. The fractional
/// part above `TABLE_SIZE - 1` lets `1.0` land on the last entry.
const INDEX_SCALE: f64 = 40000.999;

/// Default [`ResponseCurve`]: exponential curves sampled on a fixed grid.
///
/// Stateless; the table entries are evaluated on demand rather than stored.
///
/// # Example
///
/// ```rust
/// use cloudseed_core::{CurveKind, ResponseCurve, ResponseTable};
///
/// let curve = ResponseTable;
/// assert_eq!(curve.map(0.0, CurveKind::DecadeSpan), 0.0);
/// assert_eq!(curve.map(1.0, CurveKind::DecadeSpan), 1.0);
/// assert!(curve.map(0.5, CurveKind::DecadeSpan) < 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseTable;

impl ResponseTable {
    /// Grid index for a normalized value, clamped to the table.
    ///
    /// Negative and NaN inputs land on index 0.
    #[inline]
    pub fn index_of(value: f64) -> usize {
        let scaled = value * INDEX_SCALE;
        (scaled as usize).min(TABLE_SIZE - 1)
    }

    /// Table entry at `index` for `kind`. Indices past the end are clamped.
    pub fn entry(index: usize, kind: CurveKind) -> f64 {
        let x = index.min(TABLE_SIZE - 1) as f64 / (TABLE_SIZE - 1) as f64;
        let base = kind.base();
        (pow(base, x) - 1.0) / (base - 1.0)
    }
}

impl ResponseCurve for ResponseTable {
    #[inline]
    fn map(&self, value: f64, kind: CurveKind) -> f64 {
        Self::entry(Self::index_of(value), kind)
    }
}
