//! Service layer for site generation and delivery
//!
//! This module orchestrates rendering, checking, writing and serving,
//! separating those concerns from the CLI layer in main.rs.

pub mod archive;
pub mod build;
pub mod serve;
pub mod site;

pub use build::{BuildConfig, BuildResult, BuildService};
pub use site::{Artifact, Site};
