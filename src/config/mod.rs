use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::constants::defaults;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Canonical URL the site is published at
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Directory `brochure build` writes into
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Business profile file; the built-in sample is used when unset
    pub profile: Option<PathBuf>,

    /// Open Graph and structured-data image
    #[serde(default = "default_og_image")]
    pub og_image: String,

    /// Hero banner image
    #[serde(default = "default_hero_image")]
    pub hero_image: String,

    /// Build output settings
    #[serde(default)]
    pub build: BuildSettings,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Also write a gzipped tarball of the site
    #[serde(default)]
    pub archive: bool,

    /// Stamp sitemap entries with the build date
    #[serde(default = "default_true")]
    pub sitemap_lastmod: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeSettings {
    #[serde(default = "default_serve_addr")]
    pub addr: String,
}

fn default_site_url() -> String {
    defaults::SITE_URL.to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(defaults::OUT_DIR)
}

fn default_og_image() -> String {
    defaults::OG_IMAGE.to_string()
}

fn default_hero_image() -> String {
    defaults::HERO_IMAGE.to_string()
}

fn default_serve_addr() -> String {
    defaults::SERVE_ADDR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            archive: false,
            sitemap_lastmod: true,
        }
    }
}

impl Default for ServeSettings {
    fn default() -> Self {
        Self {
            addr: default_serve_addr(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            out_dir: default_out_dir(),
            profile: None,
            og_image: default_og_image(),
            hero_image: default_hero_image(),
            build: BuildSettings::default(),
            serve: ServeSettings::default(),
        }
    }
}

impl Config {
    /// Load `path` if given, otherwise `<config dir>/brochure/config.toml`
    /// when it exists, otherwise defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("brochure").join("config.toml");
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }
        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.site_url()?;
        Ok(config)
    }

    /// The site URL, parsed and normalized to end with `/`
    pub fn site_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.site_url)
            .with_context(|| format!("Invalid site URL: {}", self.site_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Site URL must use http or https: {}", self.site_url);
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
