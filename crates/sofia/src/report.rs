//! Report rendering
//!
//! Turns a finished [`AnalysisResult`] into the text report or JSON.

use clap::ValueEnum;
use indexmap::IndexMap;

use crate::census::{AnalysisResult, ComplexitySummary};
use crate::classifier::Classification;
use crate::complexity::{ComplexityRecord, Tier};
use crate::error::Result;
use crate::logging::banner_line;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

/// `part` as a percentage of `whole` with two decimals, `0.00` when `whole` is 0
pub fn percent(part: usize, whole: usize) -> String {
  if whole == 0 {
    return "0.00".to_string();
  }
  format!("{:.2}", part as f64 / whole as f64 * 100.0)
}

pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Pretty => Ok(render_pretty(result)),
    OutputFormat::Json => render_json(result),
  }
}

pub fn render_json(result: &AnalysisResult) -> Result<String> {
  Ok(serde_json::to_string_pretty(result)? + "\n")
}

/// The classification breakdown, followed by the complexity section when the
/// scan collected one
pub fn render_pretty(result: &AnalysisResult) -> String {
  let mut out = String::new();
  write_basic(&mut out, result);
  if let Some(summary) = &result.complexity {
    write_complexity(&mut out, result.options_count, summary);
  }
  out
}

fn write_basic(out: &mut String, result: &AnalysisResult) {
  out.push_str("\nSFC Analysis\n");
  out.push_str(&format!("{}\n", banner_line(12, '=')));
  out.push_str(&format!("Total SFCs: {}\n", result.total));

  for class in [
    Classification::Options,
    Classification::Composition,
    Classification::TemplateOnly,
    Classification::Unclassified,
  ] {
    let count = result.count(class);
    out.push_str(&format!("{} SFCs: {} ({}%)\n", class.label(), count, percent(count, result.total)));
  }

  if let Some(example) = result.unclassified_example.as_deref().filter(|_| result.unclassified_count > 0) {
    out.push_str(&format!("Example unclassified SFC: {example}\n"));
  }
}

fn write_complexity(out: &mut String, options_count: usize, summary: &ComplexitySummary) {
  out.push_str("\nComplexity Analysis\n");
  out.push_str(&format!("{}\n", banner_line(18, '=')));
  out.push_str("\nBreakdown:\n");

  for tier in Tier::ALL {
    let tier_total = summary.tier_total(tier);
    out.push_str(&format!(
      "\n{} Complexity: {} ({}%)\n",
      tier.label(),
      tier_total,
      percent(tier_total, options_count)
    ));
    for (module, count) in summary.modules.get(tier) {
      out.push_str(&format!("    {module}: {count} ({}%)\n", percent(*count, tier_total)));
    }
  }

  out.push_str("\nDetailed Component List\n");
  out.push_str(&format!("{}\n", banner_line(21, '=')));

  for tier in Tier::ALL {
    out.push_str(&format!("\n{} Complexity Components:\n", tier.label().to_uppercase()));
    out.push_str(&format!("{}\n", banner_line(25, '=')));

    for (module, records) in group_by_module(summary.details.get(tier)) {
      out.push_str(&format!("\nModule: {module}\n"));
      for record in records {
        write_record(out, record, tier == Tier::High);
      }
    }
  }
}

fn group_by_module(records: &[ComplexityRecord]) -> IndexMap<&str, Vec<&ComplexityRecord>> {
  let mut groups: IndexMap<&str, Vec<&ComplexityRecord>> = IndexMap::new();
  for record in records {
    groups.entry(record.module_name.as_str()).or_default().push(record);
  }
  groups
}

fn write_record(out: &mut String, record: &ComplexityRecord, with_factors: bool) {
  out.push_str(&format!("\nFile: {}\n", record.file_name));
  out.push_str(&format!("Path: {}\n", record.path));
  if !with_factors {
    return;
  }

  out.push_str("Complexity Factors:\n");
  out.push_str(&format!(" - Lifecycle Hooks: {}\n", record.lifecycle_hooks));
  out.push_str(&format!(" - Computed Properties: {}\n", record.computed_count));
  out.push_str(&format!(" - Methods: {}\n", record.methods_count));
  if record.has_mixins {
    out.push_str(" - Uses mixins\n");
  }
  if record.has_filters {
    out.push_str(" - Uses filters\n");
  }
  if record.has_watchers {
    out.push_str(" - Has watchers\n");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::census::Census;
  use crate::walker::SourceUnit;

  fn sample(analyze_complexity: bool) -> AnalysisResult {
    let mut census = Census::new(analyze_complexity);
    census.record(&SourceUnit::new(
      "src/components/forms/Form.vue",
      "<script>\nexport default {\n  mixins: [a],\n  watch: { v: { deep: true } }\n}\n</script>",
    ));
    census.record(&SourceUnit::new("src/views/Home.vue", "<script>\nexport default { data() { return {} } }\n</script>"));
    census.record(&SourceUnit::new("src/components/nav/Nav.vue", "<script setup>\n</script>"));
    census.record(&SourceUnit::new("src/Plain.vue", "<template><p/></template>"));
    census.finish()
  }

  #[test]
  fn test_percent() {
    assert_eq!(percent(1, 4), "25.00");
    assert_eq!(percent(1, 3), "33.33");
    assert_eq!(percent(2, 3), "66.67");
    assert_eq!(percent(0, 0), "0.00");
  }

  #[test]
  fn test_basic_report() {
    let text = render_pretty(&sample(false));
    assert!(text.contains("Total SFCs: 4"));
    assert!(text.contains("Options API SFCs: 2 (50.00%)"));
    assert!(text.contains("Composition API SFCs: 1 (25.00%)"));
    assert!(text.contains("Template-only SFCs: 1 (25.00%)"));
    assert!(text.contains("Unclassified SFCs: 0 (0.00%)"));
    assert!(!text.contains("Example unclassified SFC"));
    assert!(!text.contains("Complexity Analysis"));
  }

  #[test]
  fn test_basic_report_layout() {
    let text = render_pretty(&sample(false));
    let expected = "\nSFC Analysis\n============\nTotal SFCs: 4\n\
      Options API SFCs: 2 (50.00%)\n\
      Composition API SFCs: 1 (25.00%)\n\
      Template-only SFCs: 1 (25.00%)\n\
      Unclassified SFCs: 0 (0.00%)\n";
    assert_eq!(text, expected);
  }

  #[test]
  fn test_unclassified_example_line() {
    let mut census = Census::new(false);
    census.record(&SourceUnit::new("odd/Odd.vue", "<script>\nconsole.log(1)\n</script>"));
    let text = render_pretty(&census.finish());
    assert!(text.contains("Unclassified SFCs: 1 (100.00%)"));
    assert!(text.contains("Example unclassified SFC: odd/Odd.vue"));
  }

  #[test]
  fn test_complexity_report() {
    let text = render_pretty(&sample(true));
    assert!(text.contains("Low Complexity: 1 (50.00%)"));
    assert!(text.contains("    views: 1 (100.00%)"));
    assert!(text.contains("Medium Complexity: 0 (0.00%)"));
    assert!(text.contains("High Complexity: 1 (50.00%)"));
    assert!(text.contains("    forms: 1 (100.00%)"));
    assert!(text.contains("HIGH Complexity Components:"));
    assert!(text.contains("Module: forms"));
    assert!(text.contains("File: Form.vue"));
    assert!(text.contains(" - Uses mixins"));
    assert!(text.contains(" - Has watchers"));
    assert!(!text.contains(" - Uses filters"));
  }

  #[test]
  fn test_factors_only_listed_for_high_tier() {
    let text = render_pretty(&sample(true));
    let low_section = text.split("LOW Complexity Components:").nth(1).unwrap();
    let low_section = low_section.split("MEDIUM Complexity Components:").next().unwrap();
    assert!(low_section.contains("File: Home.vue"));
    assert!(!low_section.contains("Complexity Factors:"));
    assert_eq!(text.matches("Complexity Factors:").count(), 1);
  }

  #[test]
  fn test_group_by_module_keeps_first_seen_order() {
    let result = sample(true);
    let mut records = result.complexity.unwrap().details.high;
    let mut other = records[0].clone();
    other.module_name = "alpha".to_string();
    records.push(other);
    records.push(records[0].clone());

    let groups = group_by_module(&records);
    let keys: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["forms", "alpha"]);
    assert_eq!(groups["forms"].len(), 2);
  }

  #[test]
  fn test_json_report() {
    let json = render(&sample(true), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["options_count"], 2);
    assert_eq!(value["complexity"]["modules"]["high"]["forms"], 1);
    assert_eq!(value["complexity"]["details"]["high"][0]["tier"], "high");
    assert_eq!(value["unclassified_example"], serde_json::Value::Null);
  }
}
