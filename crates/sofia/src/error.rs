//! Error types for sofia

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SofiaError {
  #[error("Cannot scan root '{}': {source}", .path.display())]
  RootInaccessible {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Error reading file {}: {source}", .path.display())]
  FileRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid configuration in '{}': {message}", .path.display())]
  Config { path: PathBuf, message: String },

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SofiaError>;
