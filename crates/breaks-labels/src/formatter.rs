//! Range labels for class maxima

use breaks_core::{ClassMaxima, Result, ValueSet};
use serde::{Deserialize, Serialize};

/// How numbers and ranges are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Text placed between the low and high end of a range
    pub separator: String,
    /// Fixed number of decimals; `None` prints the shortest exact form
    pub precision: Option<usize>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            separator: " - ".to_string(),
            precision: None,
        }
    }
}

impl LabelStyle {
    fn number(&self, value: f64) -> String {
        match self.precision {
            Some(decimals) => format!("{value:.decimals$}"),
            None => format!("{value}"),
        }
    }
}

/// Turns class maxima into one readable label per class
///
/// Class `i` opens at the smallest value strictly above the maximum of class
/// `i - 1` (the first class opens at the global minimum) and closes at its own
/// maximum. The last class always closes at the global maximum of the data. A
/// class whose opening and closing values coincide gets a single number
/// instead of a range.
///
/// ```rust
/// use breaks_core::ClassMaxima;
/// use breaks_labels::BreaksFormatter;
///
/// let maxima = ClassMaxima::new(vec![1.0, 4.0, 100.0]).unwrap();
/// let labels = BreaksFormatter::new()
///     .format(&[1.0, 2.0, 3.0, 4.0, 100.0], &maxima)
///     .unwrap();
/// assert_eq!(labels, vec!["1 - 4", "100"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreaksFormatter {
    style: LabelStyle,
}

impl BreaksFormatter {
    /// Formatter with the default `"low - high"` style
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter using an explicit style
    pub fn from_style(style: LabelStyle) -> Self {
        Self { style }
    }

    /// Replace the range separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.style.separator = separator.into();
        self
    }

    /// Print every number with a fixed number of decimals
    pub fn with_precision(mut self, decimals: usize) -> Self {
        self.style.precision = Some(decimals);
        self
    }

    /// The active style
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Label each class described by `maxima` over raw `values`
    pub fn format(&self, values: &[f64], maxima: &ClassMaxima) -> Result<Vec<String>> {
        let values = ValueSet::new(values)?;
        Ok(self.format_set(&values, maxima))
    }

    /// Label each class described by `maxima` over a prepared value set
    pub fn format_set(&self, values: &ValueSet, maxima: &ClassMaxima) -> Vec<String> {
        let k = maxima.class_count();
        if k == 1 {
            return vec![self.style.number(values.max())];
        }

        let sorted = values.as_slice();
        let mut labels = Vec::with_capacity(k);
        for class in 0..k {
            let high = if class + 1 == k {
                values.max()
            } else {
                maxima.upper(class)
            };
            let low = if class == 0 {
                Some(maxima.min())
            } else {
                let previous = maxima.upper(class - 1);
                sorted.get(sorted.partition_point(|&v| v <= previous)).copied()
            };

            let label = match low {
                Some(low) if low < high => {
                    format!(
                        "{}{}{}",
                        self.style.number(low),
                        self.style.separator,
                        self.style.number(high)
                    )
                }
                // Single-value class, or a class with nothing above the previous maximum
                _ => self.style.number(high),
            };
            labels.push(label);
        }

        log::debug!("formatted {k} class labels");
        labels
    }
}
