//! In-memory site generation
//!
//! Renders every artifact, runs the consistency checks, and records the
//! digest manifest. Nothing touches the filesystem here.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    check::check_page,
    constants::{artifact, media},
    content::Catalog,
    discovery::{robots_txt, sitemap_xml},
    manifest::{content_digest, Descriptor, SiteManifest},
    profile::BusinessProfile,
    render::{render_document, RenderOptions},
};

/// A generated file, held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
    pub digest: String,
}

impl Artifact {
    pub fn new(path: &str, media_type: &'static str, bytes: Vec<u8>) -> Self {
        let digest = content_digest(&bytes);
        Self {
            path: path.to_string(),
            media_type,
            bytes,
            digest,
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            path: self.path.clone(),
            media_type: self.media_type.to_string(),
            size: self.bytes.len() as i64,
            digest: self.digest.clone(),
        }
    }
}

/// Every artifact of one build, manifest last
#[derive(Debug, Clone)]
pub struct Site {
    pub artifacts: Vec<Artifact>,
    pub manifest: SiteManifest,
}

impl Site {
    /// Render the page and its discovery files. Fails if the structured
    /// data disagrees with the visible page.
    pub fn generate(
        profile: &BusinessProfile,
        catalog: &Catalog,
        options: &RenderOptions,
        lastmod: Option<NaiveDate>,
    ) -> Result<Self> {
        info!("Rendering site for {}", profile.name);

        let html = render_document(profile, catalog, options)?;
        let drifts = check_page(profile, catalog, options, &html);
        if !drifts.is_empty() {
            for drift in &drifts {
                warn!("{}", drift);
            }
            anyhow::bail!(
                "Structured data does not match the page ({} problem(s)); refusing to write the site",
                drifts.len()
            );
        }

        let mut artifacts = vec![
            Artifact::new(artifact::INDEX, media::HTML, html.into_bytes()),
            Artifact::new(
                artifact::ROBOTS,
                media::TEXT,
                robots_txt(&options.site_url)?.into_bytes(),
            ),
            Artifact::new(
                artifact::SITEMAP,
                media::XML,
                sitemap_xml(&options.site_url, lastmod).into_bytes(),
            ),
        ];

        let manifest = SiteManifest::new(artifacts.iter().map(Artifact::descriptor).collect());
        let manifest_json =
            serde_json::to_vec_pretty(&manifest).context("Failed to serialize site manifest")?;
        artifacts.push(Artifact::new(artifact::MANIFEST, media::JSON, manifest_json));

        Ok(Self {
            artifacts,
            manifest,
        })
    }

    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn options() -> RenderOptions {
        RenderOptions {
            site_url: Url::parse("https://www.example.com/").unwrap(),
            og_image: "https://img.example.com/og.jpg".to_string(),
            hero_image: "https://img.example.com/hero.jpg".to_string(),
            year: 2026,
        }
    }

    #[test]
    fn test_generate_sample_site() {
        let profile = BusinessProfile::sample().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18);
        let site = Site::generate(&profile, &Catalog::standard(), &options(), date).unwrap();

        let paths: Vec<&str> = site.artifacts.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["index.html", "robots.txt", "sitemap.xml", "manifest.json"]
        );
        assert_eq!(site.manifest.artifacts.len(), 3);
        assert_eq!(site.manifest.generator.name, "brochure");

        let sitemap = site.get("sitemap.xml").unwrap();
        assert!(String::from_utf8_lossy(&sitemap.bytes).contains("<lastmod>2026-10-18</lastmod>"));
    }

    #[test]
    fn test_manifest_digests_match_bytes() {
        let profile = BusinessProfile::sample().unwrap();
        let site = Site::generate(&profile, &Catalog::standard(), &options(), None).unwrap();

        for descriptor in &site.manifest.artifacts {
            let artifact = site.get(&descriptor.path).unwrap();
            assert_eq!(descriptor.size, artifact.bytes.len() as i64);
            assert_eq!(
                descriptor.digest,
                format!("sha256:{}", sha256::digest(&artifact.bytes))
            );
        }

        let written: SiteManifest =
            serde_json::from_slice(&site.get("manifest.json").unwrap().bytes).unwrap();
        assert_eq!(written, site.manifest);
    }

    #[test]
    fn test_generate_refuses_drift() {
        let profile = BusinessProfile::sample().unwrap();
        let mut catalog = Catalog::standard();
        let first = catalog.faq[0].clone();
        catalog.faq.push(first);

        let result = Site::generate(&profile, &catalog, &options(), None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("refusing to write"));
    }
}
