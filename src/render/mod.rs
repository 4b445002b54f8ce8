//! HTML rendering of the brochure page
//!
//! One pure function turns a profile and a catalog into the complete
//! document, head metadata and JSON-LD included. Markup is written with
//! `maud`, so every interpolated value is escaped.

use anyhow::{Context, Result};
use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use url::Url;

use crate::config::Config;
use crate::constants::{anchor, schema as vocab};
use crate::content::Catalog;
use crate::profile::BusinessProfile;
use crate::schema::{script_json, BusinessListing, FaqPage};

pub mod sections;


/// Site-level values that are not part of the business profile
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Canonical page URL, also the sitemap root
    pub site_url: Url,
    pub og_image: String,
    pub hero_image: String,
    /// Year shown in the copyright line
    pub year: i32,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            site_url: config.site_url()?,
            og_image: config.og_image.clone(),
            hero_image: config.hero_image.clone(),
            year: chrono::Local::now().year(),
        })
    }
}

/// Navigation entries shown in the header, in document order
pub const NAV: [(&str, &str); 7] = [
    (anchor::SERVICES, "Services"),
    (anchor::PACKAGES, "Packages"),
    (anchor::GALLERY, "Gallery"),
    (anchor::REVIEWS, "Reviews"),
    (anchor::SERVICE_AREA, "Service Area"),
    (anchor::FAQ, "FAQ"),
    (anchor::CONTACT, "Contact"),
];

const STYLE: &str = r#"
html { scroll-behavior: smooth; }
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; line-height: 1.5; }
a { color: inherit; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
.top-bar { background: #000; color: #fff; font-size: .875rem; }
.top-bar .container, .site-nav { display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding-top: .5rem; padding-bottom: .5rem; }
.site-header { position: sticky; top: 0; background: rgba(255,255,255,.9); border-bottom: 1px solid #e5e7eb; }
.nav-links { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.hero { position: relative; }
.hero img { width: 100%; height: 65vh; object-fit: cover; display: block; }
.hero .overlay { position: absolute; inset: 0; display: flex; align-items: center; background: rgba(0,0,0,.4); color: #fff; }
.badges { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; list-style: none; padding: 1.5rem 1rem; margin: 0 auto; max-width: 72rem; }
.section { padding: 4rem 0; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.5rem; background: #fff; }
.pills, .tag-cloud, .keywords { display: flex; flex-wrap: wrap; gap: .5rem; list-style: none; padding: 0; }
.pill, .area-tag, .keyword { border: 1px solid #d1d5db; border-radius: 999px; padding: .25rem .75rem; font-size: .875rem; }
.price { font-size: 1.875rem; font-weight: 800; }
.button { display: inline-block; border: 1px solid #111827; border-radius: .75rem; padding: .75rem 1.25rem; font-weight: 600; text-decoration: none; }
.faq-item { border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1rem 1.5rem; }
.faq-item summary { cursor: pointer; font-weight: 600; font-size: 1.125rem; }
.hours { list-style: none; padding: 0; }
.hours-row { display: flex; justify-content: space-between; }
.site-footer { background: #000; color: #d1d5db; padding: 2.5rem 0; }
"#;

/// Page `<title>`
pub fn page_title(profile: &BusinessProfile) -> String {
    let area = &profile.service_area;
    match area.state() {
        Some(state) => format!(
            "{} | Professional Auto Detailing in {}, {}",
            profile.name,
            area.summary(),
            state
        ),
        None => format!(
            "{} | Professional Auto Detailing in {}",
            profile.name,
            area.summary()
        ),
    }
}

/// Meta and Open Graph description
pub fn page_description(profile: &BusinessProfile) -> String {
    format!(
        "{} offers premium interior & exterior detailing, paint correction, and ceramic coatings across {}. Mobile appointments. Call {}.",
        profile.name,
        profile.service_area.summary(),
        profile.phone.display()
    )
}

/// Render the full page
pub fn render_page(
    profile: &BusinessProfile,
    catalog: &Catalog,
    options: &RenderOptions,
) -> Result<Markup> {
    let listing = BusinessListing::build(profile, catalog, &options.site_url, &options.og_image);
    let faq_page = FaqPage::build(profile, catalog);
    let listing_json = script_json(&listing).context("Failed to serialize business listing")?;
    let faq_json = script_json(&faq_page).context("Failed to serialize FAQ page")?;

    let title = page_title(profile);
    let description = page_description(profile);

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                meta name="keywords" content=(profile.keywords.join(", "));
                meta name="robots" content="index, follow";
                link rel="canonical" href=(options.site_url.as_str());
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:image" content=(options.og_image);
                meta property="og:type" content="website";
                meta property="og:locale" content="en_US";
                meta property="og:url" content=(options.site_url.as_str());
                meta name="twitter:card" content="summary_large_image";
                style { (PreEscaped(STYLE)) }
                script type=(vocab::SCRIPT_TYPE) { (PreEscaped(listing_json)) }
                script type=(vocab::SCRIPT_TYPE) { (PreEscaped(faq_json)) }
            }
            body {
                (sections::top_bar(profile))
                (sections::site_header(profile))
                main {
                    (sections::hero(profile, options))
                    (sections::badges())
                    (sections::services(catalog))
                    (sections::packages(profile, catalog))
                    (sections::gallery(profile, catalog))
                    (sections::reviews(profile, catalog))
                    (sections::service_area(profile))
                    (sections::faq(profile, catalog))
                    (sections::contact(profile))
                }
                (sections::footer(profile, options))
            }
        }
    })
}

/// Render the full page to an HTML string
pub fn render_document(
    profile: &BusinessProfile,
    catalog: &Catalog,
    options: &RenderOptions,
) -> Result<String> {
    Ok(render_page(profile, catalog, options)?.into_string())
}
