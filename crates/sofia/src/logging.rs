//! Operator-facing stderr logging
//!
//! Every message goes to stderr so that the report on stdout stays clean.
//! Multi-line messages get the level prefix repeated on each line.

use colored::*;

/// Write each line of a message to stderr
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 7 - prefix.len() - 2)
}

fn log_with_prefix(color: Color, prefix: &str, message: &str) {
  let prefix = format_prefix(color, prefix);
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Something needs attention, but the scan carries on
pub fn warn(message: &str) {
  log_with_prefix(Color::Yellow, "warn", message);
}

pub fn error(message: &str) {
  log_with_prefix(Color::Red, "error", message);
}

/// A line of `length` copies of `ch`
pub fn banner_line(length: usize, ch: char) -> String {
  ch.to_string().repeat(length)
}

/// Dump the script region of a component nobody could classify.
///
/// The block is meant for a human refining the heuristics, so the script
/// text is printed verbatim without a level prefix.
pub fn unclassified_block(path: &str, script: &str) {
  warn(&format!("Unclassified SFC ({path}):"));
  log(&banner_line(40, '-'));
  if script.is_empty() {
    log(&"(empty script)".dimmed().to_string());
  } else {
    log(script);
  }
  log(&banner_line(40, '-'));
}
