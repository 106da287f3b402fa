//! Configuration for Jenks classification

use breaks_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default lower bound of the class-count search
pub const DEFAULT_MIN_CLASSES: usize = 4;

/// Default upper bound of the class-count search
pub const DEFAULT_MAX_CLASSES: usize = 7;

/// Tunable parameters for [`JenksClassifier`](crate::JenksClassifier)
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```rust
/// use breaks_jenks::JenksConfig;
///
/// let config = JenksConfig::from_json_str(r#"{ "max_classes": 5 }"#).unwrap();
/// assert_eq!(config.min_classes, 4);
/// assert_eq!(config.max_classes, 5);
/// assert_eq!(config.max_passes, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JenksConfig {
    /// Smallest class count tried by the selector
    pub min_classes: usize,
    /// Largest class count tried by the selector
    pub max_classes: usize,
    /// Pass guard for each iterative stage; `None` scales with the input
    pub max_passes: Option<usize>,
}

impl Default for JenksConfig {
    fn default() -> Self {
        Self {
            min_classes: DEFAULT_MIN_CLASSES,
            max_classes: DEFAULT_MAX_CLASSES,
            max_passes: None,
        }
    }
}

impl JenksConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("Malformed Jenks config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the class range and pass guard are usable
    pub fn validate(&self) -> Result<()> {
        if self.min_classes == 0 {
            return Err(Error::InvalidParameter(
                "min_classes must be at least 1".to_string(),
            ));
        }
        if self.min_classes > self.max_classes {
            return Err(Error::InvalidParameter(format!(
                "min_classes ({}) must not exceed max_classes ({})",
                self.min_classes, self.max_classes
            )));
        }
        if self.max_passes == Some(0) {
            return Err(Error::InvalidParameter(
                "max_passes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Pass guard for a run over `distinct` values with `k` classes
    pub fn pass_limit(&self, distinct: usize, k: usize) -> usize {
        self.max_passes.unwrap_or(8 * (distinct + k) + 64)
    }
}
