//! Census of Vue single-file components by authoring style
//!
//! Classifies each component as Options API, Composition API, template-only
//! or unclassified from its raw text, and scores the complexity of Options API
//! components to size a migration.

pub mod census;
pub mod classifier;
pub mod complexity;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod walker;

pub use census::{scan, AnalysisResult, Census, ScanOptions};
pub use classifier::{classify, Classification};
pub use complexity::{score, ComplexityRecord, Tier};
pub use config::Config;
pub use error::{Result, SofiaError};
pub use walker::SourceUnit;
