//! Legend labels for natural breaks classes
//!
//! Presentation layers that color locations by class need one short label
//! per class. [`BreaksFormatter`] derives those labels from a
//! [`ClassMaxima`](breaks_core::ClassMaxima) and the values it was computed
//! over, rendering each class as `"low - high"` or as a single number when
//! the class holds one distinct value.
//!
//! # Example
//!
//! ```rust
//! use breaks_core::ClassMaxima;
//! use breaks_labels::BreaksFormatter;
//!
//! let values = [0.8, 1.5, 2.25, 6.0, 6.5, 14.0];
//! let maxima = ClassMaxima::new(vec![0.8, 2.25, 6.5, 14.0]).unwrap();
//!
//! let labels = BreaksFormatter::new().format(&values, &maxima).unwrap();
//! assert_eq!(labels, vec!["0.8 - 2.25", "6 - 6.5", "14"]);
//! ```

pub mod formatter;

pub use formatter::{BreaksFormatter, LabelStyle};
