//! Build service for writing a generated site to disk
//!
//! Handles the output directory, the artifact files, and the optional archive.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{archive::create_archive, site::Site};
use crate::constants::artifact;

/// Configuration for a build operation
pub struct BuildConfig {
    pub out_dir: PathBuf,
    pub archive: bool,
}

/// Result of a build operation
pub struct BuildResult {
    pub out_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Service for writing generated sites
pub struct BuildService;

impl BuildService {
    /// Write every artifact of `site` into the configured directory
    pub async fn build(site: &Site, config: &BuildConfig) -> Result<BuildResult> {
        tokio::fs::create_dir_all(&config.out_dir)
            .await
            .with_context(|| format!("Failed to create output directory {:?}", config.out_dir))?;

        let mut written = Vec::new();
        for artifact in &site.artifacts {
            let path = config.out_dir.join(&artifact.path);
            debug!("Writing {:?} ({} bytes)", path, artifact.bytes.len());
            tokio::fs::write(&path, &artifact.bytes)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            written.push(path);
        }

        if config.archive {
            let data = create_archive(&site.artifacts)?;
            let path = config.out_dir.join(artifact::ARCHIVE);
            tokio::fs::write(&path, &data)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            info!("Packed {} artifact(s) into {:?}", site.artifacts.len(), path);
            written.push(path);
        }

        info!(
            "Wrote {} file(s) to {:?}",
            written.len(),
            config.out_dir
        );

        Ok(BuildResult {
            out_dir: config.out_dir.clone(),
            written,
        })
    }
}
