//! Program validation.
//!
//! Loading never fails on suspicious content: unknown keys are ignored and
//! out-of-range values flow through the mapping, where curves saturate and
//! linear formulas extrapolate. This module reports those cases so tools can
//! warn about them.
//!
//! # Example
//!
//! ```rust
//! use cloudseed_config::{Program, ValidationIssue, validate_program};
//!
//! let program = Program::from_bytes(br#"{"LineOut": 1.5, "Shimmer": 0.2}"#).unwrap();
//! let report = validate_program(&program);
//!
//! assert!(!report.is_clean());
//! assert_eq!(report.issues().len(), 2);
//! assert!(matches!(report.issues()[0], ValidationIssue::OutOfRange { .. }));
//! ```

use cloudseed_core::Parameter;
use thiserror::Error;

use crate::Program;

/// A single finding about a program.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationIssue {
    /// Key that does not name a parameter.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Value outside the normalized range.
    #[error("parameter '{param}' value {value} out of range [0, 1]")]
    OutOfRange {
        /// The parameter.
        param: Parameter,
        /// The stored value.
        value: f64,
    },
}

/// Findings from [`validate_program`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether the program produced no findings.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// All findings. Out-of-range values come first in parameter order,
    /// then unknown keys in sorted order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Parameters whose value lies outside `[0, 1]`.
    pub fn out_of_range(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        self.issues.iter().filter_map(|issue| match issue {
            ValidationIssue::OutOfRange { param, value } => Some((*param, *value)),
            ValidationIssue::UnknownParameter(_) => None,
        })
    }

    /// Keys that do not name a parameter.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().filter_map(|issue| match issue {
            ValidationIssue::UnknownParameter(name) => Some(name.as_str()),
            ValidationIssue::OutOfRange { .. } => None,
        })
    }
}

/// Checks a program for unknown keys and values outside `[0, 1]`.
pub fn validate_program(program: &Program) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = Parameter::iter()
        .filter_map(|param| {
            let value = program.get(param)?;
            (!(0.0..=1.0).contains(&value)).then_some(ValidationIssue::OutOfRange { param, value })
        })
        .collect();

    issues.extend(
        program
            .unknown_keys()
            .map(|name| ValidationIssue::UnknownParameter(name.to_string())),
    );

    ValidationReport { issues }
}
