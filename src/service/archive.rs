//! Gzipped tarball of a generated site

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tar::Builder;
use tracing::debug;

use super::site::Artifact;

/// Pack `artifacts` into a `.tar.gz`. Entries carry a zero mtime so the
/// same site always produces the same bytes.
pub fn create_archive(artifacts: &[Artifact]) -> Result<Vec<u8>> {
    let mut tar_data = Vec::new();
    {
        let mut tar = Builder::new(&mut tar_data);
        for artifact in artifacts {
            debug!("Adding {} to archive", artifact.path);
            let mut header = tar::Header::new_gnu();
            header
                .set_path(&artifact.path)
                .with_context(|| format!("Invalid archive path: {}", artifact.path))?;
            header.set_size(artifact.bytes.len() as u64);
            header.set_mode(0o644);
            header.set_mtime(0);
            header.set_cksum();
            tar.append(&header, artifact.bytes.as_slice())?;
        }
        tar.finish()?;
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&tar_data)?;
    let compressed = encoder.finish()?;
    Ok(compressed)
}
