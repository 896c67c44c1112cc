//! swift-dependency-submission - SwiftPM dependency graphs for GitHub
//!
//! This library turns the tree printed by
//! `swift package show-dependencies --format json` into a GitHub dependency
//! submission snapshot: one record per distinct package URL, each listing its
//! own dependencies, with top-level packages marked `direct`.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_submission`): package URLs, the flattened graph and the flattening algorithm
//! - **Application Layer** (`application`): the conversion use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): run settings from the environment or a YAML file
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use swift_dependency_submission::prelude::*;
//! use swift_dependency_submission::config::SubmissionConfig;
//!
//! # fn main() -> Result<()> {
//! let config = SubmissionConfig::from_env(None)?;
//!
//! let use_case = ConvertDependencyGraphUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ConversionRequest::new(InputSource::Stdin, config))?;
//!
//! let output = GithubSnapshotFormatter::new().format(&response.snapshot)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_submission;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::GithubSnapshotFormatter;
    pub use crate::application::dto::{ConversionRequest, ConversionResponse};
    pub use crate::application::use_cases::ConvertDependencyGraphUseCase;
    pub use crate::dependency_submission::domain::{
        DependencyNode, DependencySnapshot, Detector, Manifest, PackageUrl, Relationship,
        ResolvedGraph, ResolvedPackage, SnapshotMetadata,
    };
    pub use crate::dependency_submission::services::{GraphFlattener, SnapshotMetadataGenerator};
    pub use crate::ports::outbound::{
        DependencyTreeReader, InputSource, OutputPresenter, ProgressReporter, SnapshotFormatter,
    };
    pub use crate::shared::error::SubmissionError;
    pub use crate::shared::Result;
}
