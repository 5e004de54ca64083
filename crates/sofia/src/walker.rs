//! Filesystem traversal
//!
//! Walks a directory tree depth first and yields every component file as a
//! [`SourceUnit`]. Entries come back in the order the OS lists each
//! directory, which depends on the platform and filesystem and is not sorted.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SofiaError};
use crate::logging;

/// Directory names that are never scanned
pub const DEFAULT_BLACKLIST: &[&str] = &["node_modules"];

/// Extension of single-file components
pub const DEFAULT_EXTENSION: &str = ".vue";

/// One component file read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
  pub path: PathBuf,
  pub content: String,
}

impl SourceUnit {
  pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
    Self { path: path.into(), content: content.into() }
  }
}

/// Directory base names to skip, matched exactly and case-sensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
  names: HashSet<String>,
}

impl Blacklist {
  /// The built-in names plus `extra`
  pub fn with_defaults<S: AsRef<str>>(extra: &[S]) -> Self {
    let names = DEFAULT_BLACKLIST
      .iter()
      .map(|name| name.to_string())
      .chain(extra.iter().map(|name| name.as_ref().to_string()))
      .collect();
    Self { names }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(name)
  }

  /// Whether the base name of `path` is blacklisted
  pub fn skips(&self, path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| self.contains(name))
  }
}

fn is_component(entry: &DirEntry, extension: &str) -> bool {
  entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(extension)
}

fn read_unit(path: &Path) -> Result<SourceUnit> {
  fs::read_to_string(path)
    .map(|content| SourceUnit::new(path, content))
    .map_err(|source| SofiaError::FileRead { path: path.to_path_buf(), source })
}

/// Stream the component files under `root`.
///
/// Fails up front with [`SofiaError::RootInaccessible`] when `root` cannot
/// be listed. A blacklisted root yields nothing. Below the root, directories
/// that cannot be listed are logged and skipped, and files that cannot be
/// read come through as [`SofiaError::FileRead`] items.
pub fn source_units<'a>(
  root: &Path,
  blacklist: &'a Blacklist,
  extension: &'a str,
) -> Result<impl Iterator<Item = Result<SourceUnit>> + 'a> {
  if !blacklist.skips(root) {
    fs::read_dir(root)
      .map_err(|source| SofiaError::RootInaccessible { path: root.to_path_buf(), source })?;
  }

  let units = WalkDir::new(root)
    .follow_links(true)
    .into_iter()
    .filter_entry(move |entry| {
      let skip = entry.file_type().is_dir() && blacklist.skips(entry.path());
      if skip {
        debug!(dir = %entry.path().display(), "skipping blacklisted directory");
      }
      !skip
    })
    .filter_map(|entry| match entry {
      Ok(entry) => Some(entry),
      Err(err) => {
        logging::warn(&format!("Skipping unreadable entry: {err}"));
        None
      }
    })
    .filter(move |entry| is_component(entry, extension))
    .map(|entry| {
      debug!(path = %entry.path().display(), "visiting component");
      read_unit(entry.path())
    });

  Ok(units)
}
