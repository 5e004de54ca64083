//! Scan aggregation
//!
//! Folds classified components into running totals and, when enabled,
//! per-tier complexity groupings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::classifier::{classify, script_content, Classification};
use crate::complexity::{self, ComplexityRecord, Tier};
use crate::error::Result;
use crate::logging;
use crate::walker::{self, Blacklist, SourceUnit};

/// One value per complexity tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable<T> {
  pub low: T,
  pub medium: T,
  pub high: T,
}

impl<T> TierTable<T> {
  pub fn get(&self, tier: Tier) -> &T {
    match tier {
      Tier::Low => &self.low,
      Tier::Medium => &self.medium,
      Tier::High => &self.high,
    }
  }

  pub fn get_mut(&mut self, tier: Tier) -> &mut T {
    match tier {
      Tier::Low => &mut self.low,
      Tier::Medium => &mut self.medium,
      Tier::High => &mut self.high,
    }
  }
}

/// Complexity groupings of the Options API components in a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexitySummary {
  /// Component count per module, modules in first-seen order
  pub modules: TierTable<IndexMap<String, usize>>,
  /// Records in traversal order
  pub details: TierTable<Vec<ComplexityRecord>>,
}

impl ComplexitySummary {
  pub fn add(&mut self, record: ComplexityRecord) {
    *self.modules.get_mut(record.tier).entry(record.module_name.clone()).or_insert(0) += 1;
    self.details.get_mut(record.tier).push(record);
  }

  pub fn tier_total(&self, tier: Tier) -> usize {
    self.modules.get(tier).values().sum()
  }
}

/// Outcome of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
  pub total: usize,
  pub options_count: usize,
  pub composition_count: usize,
  pub template_only_count: usize,
  pub unclassified_count: usize,
  /// Path of the first unclassified component seen
  pub unclassified_example: Option<String>,
  /// Present only when complexity analysis was requested
  pub complexity: Option<ComplexitySummary>,
}

impl AnalysisResult {
  pub fn count(&self, class: Classification) -> usize {
    match class {
      Classification::TemplateOnly => self.template_only_count,
      Classification::Composition => self.composition_count,
      Classification::Options => self.options_count,
      Classification::Unclassified => self.unclassified_count,
    }
  }

  /// Files counted in the total that matched no category
  pub fn dropped(&self) -> usize {
    self.total
      - self.template_only_count
      - self.composition_count
      - self.options_count
      - self.unclassified_count
  }
}

/// Settings for a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
  /// Directory names skipped in addition to the built-in ones
  pub blacklist: Vec<String>,
  pub analyze_complexity: bool,
  pub extension: String,
}

impl Default for ScanOptions {
  fn default() -> Self {
    Self {
      blacklist: Vec::new(),
      analyze_complexity: false,
      extension: walker::DEFAULT_EXTENSION.to_string(),
    }
  }
}

/// Accumulates an [`AnalysisResult`] one component at a time
#[derive(Debug)]
pub struct Census {
  result: AnalysisResult,
}

impl Census {
  pub fn new(analyze_complexity: bool) -> Self {
    let result = AnalysisResult {
      complexity: analyze_complexity.then(ComplexitySummary::default),
      ..AnalysisResult::default()
    };
    Self { result }
  }

  /// Classify one component and fold it into the totals
  pub fn record(&mut self, unit: &SourceUnit) -> Option<Classification> {
    let result = &mut self.result;
    result.total += 1;

    let class = classify(&unit.content);
    match class {
      Some(Classification::TemplateOnly) => result.template_only_count += 1,
      Some(Classification::Composition) => result.composition_count += 1,
      Some(Classification::Options) => {
        result.options_count += 1;
        if let Some(summary) = result.complexity.as_mut() {
          summary.add(complexity::score(&unit.path, &unit.content));
        }
      }
      Some(Classification::Unclassified) => {
        result.unclassified_count += 1;
        let path = unit.path.display().to_string();
        logging::unclassified_block(&path, script_content(&unit.content).unwrap_or_default());
        result.unclassified_example.get_or_insert(path);
      }
      None => debug!(path = %unit.path.display(), "no template, script or known signal"),
    }
    class
  }

  pub fn finish(self) -> AnalysisResult {
    self.result
  }
}

/// Scan every component under `root`.
///
/// Unreadable files are logged and left out of the total. Only an
/// inaccessible root is an error.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<AnalysisResult> {
  let blacklist = Blacklist::with_defaults(&options.blacklist);
  let mut census = Census::new(options.analyze_complexity);

  for unit in walker::source_units(root, &blacklist, &options.extension)? {
    match unit {
      Ok(unit) => {
        census.record(&unit);
      }
      Err(err) => logging::error(&err.to_string()),
    }
  }

  Ok(census.finish())
}
