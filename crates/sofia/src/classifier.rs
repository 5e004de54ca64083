//! Component style classification
//!
//! Decides from raw file text which authoring style a single-file component
//! uses. Detection is plain pattern matching over the source, no parsing, so
//! false positives and negatives are possible and accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Authoring style of a single-file component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
  TemplateOnly,
  Composition,
  Options,
  Unclassified,
}

impl Classification {
  pub fn label(&self) -> &'static str {
    match self {
      Classification::TemplateOnly => "Template-only",
      Classification::Composition => "Composition API",
      Classification::Options => "Options API",
      Classification::Unclassified => "Unclassified",
    }
  }
}

fn compile(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
  patterns.iter().map(|p| compile(p)).collect()
}

static TEMPLATE_TAG: Lazy<Regex> = Lazy::new(|| compile(r"(?i)<template[^>]*>"));
static SCRIPT_TAG: Lazy<Regex> = Lazy::new(|| compile(r"(?i)<script[^>]*>"));
static SCRIPT_REGION: Lazy<Regex> =
  Lazy::new(|| compile(r"(?is)<script[^>]*>(.*?)</script>"));

static COMPOSITION_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
  compile_all(&[
    r"(?i)<script\s+setup\s*>",
    r#"(?i)<script\s+lang="[^"]+"\s+setup\s*>"#,
    r"(?i)(?-u:\b)defineComponent\s*\(",
    r"(?i)(?-u:\b)setup\s*\([^)]*\)\s*\{",
    r"(?i)(?-u:\b)ref\s*\(",
    r"(?i)(?-u:\b)reactive\s*\(",
    r"(?i)(?-u:\b)toRef\s*\(",
    r"(?i)(?-u:\b)defineProps\s*[<(]",
    r"(?i)(?-u:\b)defineEmits\s*[<(]",
    r"(?i)(?-u:\b)withDefaults\s*\(",
  ])
});

static COMPUTED_CALL: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(?-u:\b)computed\s*\("));
// Case-sensitive on purpose: only the literal options form suppresses a call match.
static COMPUTED_OBJECT: Lazy<Regex> = Lazy::new(|| compile(r"computed\s*:\s*\{"));

static OPTIONS_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
  compile_all(&[
    r"(?i)data\s*\(\s*\)\s*\{",
    r"(?i)data\s*:\s*\(?function\s*\(\s*\)\s*\{",
    r"(?i)data\s*:\s*\{",
    r"(?i)methods\s*:\s*\{",
    r"(?i)computed\s*:\s*\{",
    r"(?i)watch\s*:\s*\{",
    r"(?i)props\s*:\s*\{",
    r"(?i)props\s*:\s*\[",
    r"(?i)components\s*:\s*\{",
    r"(?i)filters\s*:\s*\{",
    r"(?i)mixins\s*:\s*\[",
    r"(?i)created\s*\(\s*\)\s*\{",
    r"(?i)mounted\s*\(\s*\)\s*\{",
    r"(?i)beforeMount\s*\(\s*\)\s*\{",
    r"(?i)beforeCreate\s*\(\s*\)\s*\{",
    r#"(?i)name\s*:\s*['"]"#,
    r"(?i)export\s+default\s*\{",
  ])
});

pub fn has_template(content: &str) -> bool {
  TEMPLATE_TAG.is_match(content)
}

pub fn has_script(content: &str) -> bool {
  SCRIPT_TAG.is_match(content)
}

fn is_template_only(content: &str) -> bool {
  has_template(content) && !has_script(content)
}

fn uses_composition_api(content: &str) -> bool {
  COMPOSITION_SIGNALS.iter().any(|re| re.is_match(content))
    || (COMPUTED_CALL.is_match(content) && !COMPUTED_OBJECT.is_match(content))
}

fn uses_options_api(content: &str) -> bool {
  OPTIONS_SIGNALS.iter().any(|re| re.is_match(content))
}

type Rule = (fn(&str) -> bool, Classification);

/// Evaluated top to bottom, the first matching predicate decides.
const RULES: [Rule; 4] = [
  (is_template_only, Classification::TemplateOnly),
  (uses_composition_api, Classification::Composition),
  (uses_options_api, Classification::Options),
  (has_script, Classification::Unclassified),
];

/// Classify a component by its source text.
///
/// Returns `None` for files with no template, no script and no recognised
/// signal. Those still count toward the scan total but land in no category.
pub fn classify(content: &str) -> Option<Classification> {
  RULES.iter().find(|(matches, _)| matches(content)).map(|(_, class)| *class)
}

/// Inner text of the first `<script>` region, trimmed
pub fn script_content(content: &str) -> Option<&str> {
  SCRIPT_REGION.captures(content).and_then(|caps| caps.get(1)).map(|m| m.as_str().trim())
}
