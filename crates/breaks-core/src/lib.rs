//! Core types for natural breaks classification
//!
//! This crate provides the shared building blocks used by the classification
//! engine and the label formatter:
//!
//! - [`ValueSet`]: observations sorted ascending, with a distinct value →
//!   multiplicity map and scale-free SSDs for very wide spreads
//! - [`ClassPartition`]: `k` contiguous classes stored as index ranges over
//!   the sorted values
//! - [`ClassMaxima`]: the `k + 1` class edges handed to presentation layers
//! - [`Error`] / [`Result`]: the unified error type
//!
//! # Example
//!
//! ```rust
//! use breaks_core::{ClassMaxima, ClassPartition, ValueSet};
//!
//! let values = ValueSet::new(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
//! let partition = ClassPartition::from_sizes(&[4, 1]).unwrap();
//! let maxima = ClassMaxima::from_partition(&values, &partition);
//!
//! assert_eq!(maxima.as_slice(), &[1.0, 4.0, 100.0]);
//! assert_eq!(values.mean(&partition.range(0)), 2.5);
//! ```

pub mod error;
pub mod partition;
pub mod utils;
pub mod values;

pub use error::{Error, Result, Stage};
pub use partition::{ClassMaxima, ClassPartition};
pub use values::ValueSet;
