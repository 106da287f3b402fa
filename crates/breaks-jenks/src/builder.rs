use crate::classifier::JenksClassifier;
use crate::config::JenksConfig;
use breaks_core::Result;

/// Builder for configuring and creating Jenks classifiers.
#[derive(Debug, Clone, Default)]
pub struct JenksClassifierBuilder {
    config: JenksConfig,
}

impl JenksClassifierBuilder {
    /// Creates a builder with the default 4–7 class search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: JenksConfig) -> Self {
        Self { config }
    }

    /// Sets the inclusive class-count range searched by
    /// [`JenksClassifier::select`].
    pub fn class_range(mut self, min_classes: usize, max_classes: usize) -> Self {
        self.config.min_classes = min_classes;
        self.config.max_classes = max_classes;
        self
    }

    /// Caps the number of passes each iterative stage may take.
    ///
    /// Without a cap the guard scales with the number of distinct values.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.config.max_passes = Some(max_passes);
        self
    }

    /// Builds the classifier, validating the configuration.
    pub fn build(self) -> Result<JenksClassifier> {
        JenksClassifier::with_config(self.config)
    }
}

/// Convenience function for creating a classifier with default settings.
pub fn default_classifier() -> JenksClassifier {
    JenksClassifier::new()
}

/// Convenience function for creating a classifier searching a custom range.
pub fn classifier_with_range(min_classes: usize, max_classes: usize) -> Result<JenksClassifier> {
    JenksClassifierBuilder::new()
        .class_range(min_classes, max_classes)
        .build()
}
