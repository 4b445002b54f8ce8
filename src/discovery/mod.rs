//! Crawler discovery files: `robots.txt` and `sitemap.xml`
//!
//! Sitemap entries are built from the same anchor list the renderer uses
//! for section ids.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use maud::{html, PreEscaped};
use url::Url;

use crate::constants::{anchor, artifact};


const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Allow-all crawler directives pointing at the sitemap
pub fn robots_txt(site_url: &Url) -> Result<String> {
    let sitemap = sitemap_url(site_url)?;
    Ok(format!("User-agent: *\nAllow: /\nSitemap: {}\n", sitemap))
}

pub fn sitemap_url(site_url: &Url) -> Result<Url> {
    site_url
        .join(artifact::SITEMAP)
        .with_context(|| format!("Failed to derive sitemap URL from {}", site_url))
}

/// The canonical URL followed by one fragment URL per section
pub fn sitemap_locations(site_url: &Url) -> Vec<String> {
    let mut locations = vec![site_url.to_string()];
    for id in anchor::ALL.iter().filter(|id| **id != anchor::HOME) {
        let mut url = site_url.clone();
        url.set_fragment(Some(id));
        locations.push(url.to_string());
    }
    locations
}

pub fn sitemap_xml(site_url: &Url, lastmod: Option<NaiveDate>) -> String {
    let lastmod = lastmod.map(|d| d.format("%Y-%m-%d").to_string());
    let body = html! {
        urlset xmlns=(SITEMAP_NS) {
            @for location in sitemap_locations(site_url) {
                url {
                    loc { (location) }
                    @if let Some(lastmod) = &lastmod {
                        lastmod { (lastmod) }
                    }
                }
            }
        }
    };
    html! {
        (PreEscaped(XML_DECLARATION))
        (body)
        "\n"
    }
    .into_string()
}
