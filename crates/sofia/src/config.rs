//! Configuration management for sofia
//!
//! Loads optional scan defaults from a JSON file. Command-line flags are
//! layered on top in [`Config::scan_options`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::census::ScanOptions;
use crate::error::{Result, SofiaError};
use crate::walker::DEFAULT_EXTENSION;

/// File names tried, in order, when no config path is given
pub const CONFIG_FILE_NAMES: [&str; 3] = [".sofia.json", "sofia.json", ".sofia/config.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Directory names to skip on top of `node_modules`
  #[serde(default)]
  pub blacklist: Vec<String>,
  /// Run the complexity pass even without `--complexity`
  #[serde(default)]
  pub complexity: bool,
  /// Suffix of the files to classify
  #[serde(default = "default_extension")]
  pub extension: String,
}

fn default_extension() -> String {
  DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self { blacklist: Vec::new(), complexity: false, extension: default_extension() }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let config_error = |message: String| SofiaError::Config { path: path.to_path_buf(), message };

    let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))
  }

  /// Load the first config file found in `dir`, or defaults
  pub fn load_from_dir(dir: &Path) -> Result<Self> {
    match Self::find_in(dir) {
      Some(path) => Self::load_from_file(path),
      None => Ok(Config::default()),
    }
  }

  /// Load configuration from the current directory or defaults
  pub fn load() -> Result<Self> {
    Self::load_from_dir(Path::new("."))
  }

  fn find_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
  }

  /// Merge command-line flags into scan settings.
  ///
  /// Blacklists are unioned; complexity is on if either side asks for it.
  pub fn scan_options(&self, extra_blacklist: &[String], complexity: bool) -> ScanOptions {
    let mut blacklist = self.blacklist.clone();
    for name in extra_blacklist {
      if !name.is_empty() && !blacklist.contains(name) {
        blacklist.push(name.clone());
      }
    }

    ScanOptions {
      blacklist,
      analyze_complexity: self.complexity || complexity,
      extension: self.extension.clone(),
    }
  }
}
