//! Error types for natural breaks classification
//!
//! Provides a unified error type for all breaks crates.

use std::fmt;
use thiserror::Error;

/// Iterative stage of a classification run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Duplicate-value resolution
    Resolve,
    /// Boundary-value optimization
    Optimize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "duplicate resolution"),
            Stage::Optimize => write!(f, "boundary optimization"),
        }
    }
}

/// Core error type for classification operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data or class count
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A distinct value cannot be kept within two adjacent classes
    #[error(
        "Degenerate duplicate span: value {value} cannot be held within two adjacent classes \
         (k={k}, partition={partition:?})"
    )]
    DegenerateDuplicateSpan {
        /// The value whose occurrences could not be gathered
        value: f64,
        /// Class count being classified
        k: usize,
        /// Class sizes at the time of failure
        partition: Vec<usize>,
    },

    /// An iterative stage exceeded its pass guard
    #[error("Iteration limit: {stage} did not converge within {passes} passes (k={k}, partition={partition:?})")]
    IterationLimit {
        /// Stage that tripped the guard
        stage: Stage,
        /// Class count being classified
        k: usize,
        /// Passes completed before giving up
        passes: usize,
        /// Class sizes at the time of failure
        partition: Vec<usize>,
    },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidInput(format!("{context} requires at least one value"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a class count outside `1..=distinct`
    pub fn class_count_out_of_range(k: usize, distinct: usize) -> Self {
        Self::InvalidInput(format!(
            "Class count {k} must be in [1, {distinct}] (number of distinct values)"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("bad data".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad data");

        let err = Error::InvalidParameter("max_passes must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: max_passes must be positive");

        let err = Error::DegenerateDuplicateSpan {
            value: 3.0,
            k: 4,
            partition: vec![1, 5, 1, 1],
        };
        assert_eq!(
            err.to_string(),
            "Degenerate duplicate span: value 3 cannot be held within two adjacent classes \
             (k=4, partition=[1, 5, 1, 1])"
        );

        let err = Error::IterationLimit {
            stage: Stage::Optimize,
            k: 5,
            passes: 64,
            partition: vec![2, 2, 2, 2, 2],
        };
        assert_eq!(
            err.to_string(),
            "Iteration limit: boundary optimization did not converge within 64 passes \
             (k=5, partition=[2, 2, 2, 2, 2])"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("classification");
        assert_eq!(
            err.to_string(),
            "Invalid input: classification requires at least one value"
        );

        let err = Error::non_finite("input data");
        assert_eq!(
            err.to_string(),
            "Invalid input: input data contains NaN or infinite values"
        );

        let err = Error::class_count_out_of_range(0, 3);
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("[1, 3]"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Resolve.to_string(), "duplicate resolution");
        assert_eq!(Stage::Optimize.to_string(), "boundary optimization");
    }
}
