//! The Jenks natural breaks classifier

use crate::builder::JenksClassifierBuilder;
use crate::config::JenksConfig;
use crate::initializer::{initial_partition, InitialPartition};
use crate::optimizer::BoundaryOptimizer;
use crate::resolver::DuplicateResolver;
use crate::selector::ClassCountSelector;
use crate::traits::BreakClassifier;
use crate::types::{Classification, Selection, StageStats};
use breaks_core::{Result, ValueSet};

/// Jenks natural breaks classifier
///
/// Each classification runs three stages over the sorted values:
/// 1. A quantile initial partition (or the exact one-class-per-value
///    partition when `k` equals the number of distinct values)
/// 2. Duplicate resolution, so no value is split across classes
/// 3. Boundary optimization, migrating class edge values to the
///    neighbouring class whose mean they sit closer to
///
/// The classifier holds only configuration, so it can be shared freely
/// between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JenksClassifier {
    config: JenksConfig,
}

impl JenksClassifier {
    /// Create a classifier with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier from a validated configuration
    pub fn with_config(config: JenksConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start configuring a classifier
    pub fn builder() -> JenksClassifierBuilder {
        JenksClassifierBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &JenksConfig {
        &self.config
    }

    /// Classify raw observations into exactly `k` classes
    pub fn classify(&self, values: &[f64], k: usize) -> Result<Classification> {
        self.classify_set(&ValueSet::new(values)?, k)
    }

    /// Choose the class count with the best goodness of variance fit
    ///
    /// Searches the configured `[min_classes, max_classes]` range.
    pub fn select(&self, values: &[f64]) -> Result<Selection> {
        self.selector().select(&ValueSet::new(values)?)
    }

    /// [`select`](Self::select) over a prepared value set
    pub fn select_set(&self, values: &ValueSet) -> Result<Selection> {
        self.selector().select(values)
    }

    fn selector(&self) -> ClassCountSelector<&Self> {
        ClassCountSelector::new(self, self.config.min_classes, self.config.max_classes)
    }
}

impl BreakClassifier for JenksClassifier {
    fn classify_set(&self, values: &ValueSet, k: usize) -> Result<Classification> {
        let mut partition = match initial_partition(values, k)? {
            InitialPartition::Exact(partition) => {
                log::debug!("k={k} equals the distinct count, using the exact partition");
                return Ok(Classification::new(
                    values,
                    partition,
                    true,
                    StageStats::default(),
                    StageStats::default(),
                ));
            }
            InitialPartition::Quantile(partition) => partition,
        };

        let limit = self.config.pass_limit(values.distinct_count(), k);
        let resolve_stats = DuplicateResolver::new(limit).resolve(values, &mut partition)?;
        let optimize_stats = BoundaryOptimizer::new(limit).optimize(values, &mut partition)?;

        let classification =
            Classification::new(values, partition, false, resolve_stats, optimize_stats);
        log::debug!("jenks {classification}");
        Ok(classification)
    }

    fn name(&self) -> &'static str {
        "jenks"
    }
}

impl<C: BreakClassifier + ?Sized> BreakClassifier for &C {
    fn classify_set(&self, values: &ValueSet, k: usize) -> Result<Classification> {
        (**self).classify_set(values, k)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
