//! Complexity scoring for Options API components
//!
//! A score is the sum of weighted structural signals found in the source
//! text. It only ranks components against each other for migration effort,
//! it is not a semantic measure.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

pub const MIXINS_WEIGHT: u32 = 30;
pub const IMMEDIATE_WATCH_WEIGHT: u32 = 20;
pub const DEEP_WATCH_WEIGHT: u32 = 20;
pub const FILTERS_WEIGHT: u32 = 15;
pub const LIFECYCLE_HOOK_WEIGHT: u32 = 5;
pub const COMPUTED_WEIGHT: u32 = 3;
pub const METHOD_WEIGHT: u32 = 2;
pub const WATCH_BLOCK_WEIGHT: u32 = 4;

pub const HIGH_THRESHOLD: u32 = 30;
pub const MEDIUM_THRESHOLD: u32 = 10;

/// Fallback module for paths outside `components/` and `views/`
pub const OTHER_MODULE: &str = "other";

fn compile(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static MIXINS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)mixins\s*:\s*\["));
static IMMEDIATE_WATCH: Lazy<Regex> =
  Lazy::new(|| compile(r"(?i)watch\s*:\s*\{[^}]*immediate\s*:\s*true"));
static DEEP_WATCH: Lazy<Regex> = Lazy::new(|| compile(r"(?i)watch\s*:\s*\{[^}]*deep\s*:\s*true"));
static FILTERS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)filters\s*:\s*\{"));
static LIFECYCLE_HOOKS: Lazy<Regex> = Lazy::new(|| {
  compile(
    r"(?-u:\b)(created|mounted|beforeMount|beforeCreate|updated|beforeUpdate|destroyed|beforeDestroy)\s*\(",
  )
});
static COMPUTED_BLOCK: Lazy<Regex> = Lazy::new(|| compile(r"computed\s*:\s*\{[^}]*\}"));
static METHODS_BLOCK: Lazy<Regex> = Lazy::new(|| compile(r"methods\s*:\s*\{[^}]*\}"));
static WATCH_BLOCK: Lazy<Regex> = Lazy::new(|| compile(r"watch\s*:\s*\{[^}]*\}"));
static PROPS_OBJECT: Lazy<Regex> = Lazy::new(|| compile(r"(?i)props\s*:\s*\{"));
static PROPS_ARRAY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)props\s*:\s*\["));
static DATA_FUNCTION: Lazy<Regex> = Lazy::new(|| compile(r"(?i)data\s*\(\s*\)\s*\{"));
static DATA_ARROW: Lazy<Regex> = Lazy::new(|| compile(r"(?i)data\s*:\s*\("));

/// Bucketed complexity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
  Low,
  Medium,
  High,
}

impl Tier {
  pub const ALL: [Tier; 3] = [Tier::Low, Tier::Medium, Tier::High];

  pub fn from_score(score: u32) -> Self {
    if score >= HIGH_THRESHOLD {
      Tier::High
    } else if score >= MEDIUM_THRESHOLD {
      Tier::Medium
    } else {
      Tier::Low
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Tier::Low => "Low",
      Tier::Medium => "Medium",
      Tier::High => "High",
    }
  }
}

/// Complexity analysis of one Options API component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityRecord {
  pub file_name: String,
  pub path: String,
  pub module_name: String,
  pub score: u32,
  pub tier: Tier,
  pub lifecycle_hooks: usize,
  pub computed_count: usize,
  pub methods_count: usize,
  pub has_watchers: bool,
  pub has_mixins: bool,
  pub has_filters: bool,
  pub has_props: bool,
  pub has_data: bool,
}

/// Rough number of entries in an object literal body.
///
/// Splits the text on commas and counts the pieces, so `"a, b"` is 2 and
/// any non-empty text without a comma is 1. Empty input counts as 0.
///
/// Known to miscount:
/// - a comma inside a string literal or nested literal adds a piece;
/// - block matches stop at the first `}`, so entries after a nested
///   function body are never seen;
/// - a trailing comma adds a piece.
pub fn approximate_entry_count(text: &str) -> usize {
  if text.is_empty() {
    0
  } else {
    text.split(',').count()
  }
}

/// Grouping key for a component path.
///
/// The segment after `components`, else `views` when the path runs through a
/// `views` directory, else [`OTHER_MODULE`]. `components` is checked first.
pub fn module_name(path: &Path) -> String {
  let segments: Vec<String> = path
    .components()
    .filter_map(|c| match c {
      Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
      _ => None,
    })
    .collect();

  if let Some(index) = segments.iter().position(|s| s == "components") {
    return segments.get(index + 1).cloned().unwrap_or_else(|| OTHER_MODULE.to_string());
  }
  if segments.iter().any(|s| s == "views") {
    return "views".to_string();
  }
  OTHER_MODULE.to_string()
}

/// Score an Options API component.
pub fn score(path: &Path, content: &str) -> ComplexityRecord {
  let has_mixins = MIXINS.is_match(content);
  let has_filters = FILTERS.is_match(content);
  let lifecycle_hooks = LIFECYCLE_HOOKS.find_iter(content).count();

  let computed_blocks: String = COMPUTED_BLOCK.find_iter(content).map(|m| m.as_str()).collect();
  let computed_count = approximate_entry_count(&computed_blocks);

  let methods_count = METHODS_BLOCK.find(content).map_or(0, |m| approximate_entry_count(m.as_str()));
  let watch_blocks = WATCH_BLOCK.find_iter(content).count();

  let mut total = 0;
  if has_mixins {
    total += MIXINS_WEIGHT;
  }
  if IMMEDIATE_WATCH.is_match(content) {
    total += IMMEDIATE_WATCH_WEIGHT;
  }
  if DEEP_WATCH.is_match(content) {
    total += DEEP_WATCH_WEIGHT;
  }
  if has_filters {
    total += FILTERS_WEIGHT;
  }
  total += lifecycle_hooks as u32 * LIFECYCLE_HOOK_WEIGHT;
  total += computed_count as u32 * COMPUTED_WEIGHT;
  total += methods_count as u32 * METHOD_WEIGHT;
  total += watch_blocks as u32 * WATCH_BLOCK_WEIGHT;

  ComplexityRecord {
    file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
    path: path.display().to_string(),
    module_name: module_name(path),
    score: total,
    tier: Tier::from_score(total),
    lifecycle_hooks,
    computed_count,
    methods_count,
    has_watchers: watch_blocks > 0,
    has_mixins,
    has_filters,
    has_props: PROPS_OBJECT.is_match(content) || PROPS_ARRAY.is_match(content),
    has_data: DATA_FUNCTION.is_match(content) || DATA_ARROW.is_match(content),
  }
}
