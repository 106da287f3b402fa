//! Jenks natural breaks classification
//!
//! This crate partitions a one-dimensional set of observations into `k`
//! contiguous classes so that values within a class sit close to the class
//! mean, and picks a suitable `k` by goodness of variance fit (GVF).
//!
//! # Algorithm Overview
//!
//! Classification for a fixed `k` runs in three stages:
//! 1. An initial quantile partition, or the exact one-class-per-value
//!    partition when `k` equals the number of distinct values
//! 2. Duplicate resolution, so every distinct value lives in one class
//! 3. Boundary optimization, moving class edge values to a neighbouring
//!    class until no move lowers their squared deviation
//!
//! The boundary search is a heuristic local optimization, not the
//! dynamic-programming optimum. Class-count selection classifies every `k` in
//! a range and keeps the one with the strictly highest GVF.
//!
//! # Examples
//!
//! ## Fixed class count
//!
//! ```rust
//! use breaks_jenks::JenksClassifier;
//!
//! let classification = JenksClassifier::new()
//!     .classify(&[1.0, 2.0, 3.0, 4.0, 100.0], 2)
//!     .unwrap();
//!
//! assert_eq!(classification.class_sizes(), vec![4, 1]);
//! assert_eq!(classification.maxima().as_slice(), &[1.0, 4.0, 100.0]);
//! ```
//!
//! ## Selecting the class count
//!
//! ```rust
//! use breaks_jenks::JenksClassifier;
//!
//! let data: Vec<f64> = (1..=40).map(|i| f64::from(i % 13) * 3.5).collect();
//! let classifier = JenksClassifier::builder().class_range(3, 6).build().unwrap();
//! let selection = classifier.select(&data).unwrap();
//!
//! println!("k={} gvf={:.3}", selection.k(), selection.gvf());
//! for (k, gvf) in selection.gvf_table() {
//!     println!("  k={k}: {gvf:.3}");
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: classify candidate class counts concurrently with rayon
//! - `test-utils`: seeded datasets in [`test_data`]

pub mod builder;
pub mod classifier;
pub mod config;
pub mod gvf;
pub mod initializer;
pub mod optimizer;
pub mod resolver;
pub mod selector;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

// Re-exports
pub use builder::{classifier_with_range, default_classifier, JenksClassifierBuilder};
pub use classifier::JenksClassifier;
pub use config::{JenksConfig, DEFAULT_MAX_CLASSES, DEFAULT_MIN_CLASSES};
pub use initializer::{initial_partition, InitialPartition};
pub use optimizer::BoundaryOptimizer;
pub use resolver::DuplicateResolver;
pub use selector::ClassCountSelector;
pub use traits::BreakClassifier;
pub use types::{Classification, Selection, StageStats};

pub use breaks_core::{ClassMaxima, ClassPartition, Error, Result, ValueSet};
