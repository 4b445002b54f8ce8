//! Consistency checks between the visible page and its structured data
//!
//! Search engines distrust listings whose JSON-LD disagrees with what the
//! page shows. These checks read the JSON-LD back out of the rendered
//! document and compare it with the visible markup and the source values.

use maud::html;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::constants::{anchor, schema as vocab};
use crate::content::{slug, Catalog};
use crate::discovery::sitemap_locations;
use crate::profile::BusinessProfile;
use crate::render::sections::{area_tag, faq_item, hours_row};
use crate::render::RenderOptions;
use crate::schema::{BusinessListing, FaqPage, OpeningHoursSpecification};

#[cfg(test)]
mod tests;

/// Required keys of the business listing block
pub const REQUIRED_LISTING_KEYS: [&str; 5] = [
    "name",
    "address",
    "telephone",
    "areaServed",
    "openingHoursSpecification",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Drift {
    #[error("Section #{0} is missing from the page")]
    MissingSection(String),

    #[error("Sitemap entry {0} does not point at a rendered section")]
    SitemapMismatch(String),

    #[error("Duplicate {collection} key: {key}")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },

    #[error("Expected {expected} structured-data blocks, found {found}")]
    StructuredDataCount { expected: usize, found: usize },

    #[error("Structured-data block {index} is invalid: {reason}")]
    InvalidStructuredData { index: usize, reason: String },

    #[error("Service-area city {0:?} is missing from areaServed")]
    CityNotServed(String),

    #[error("areaServed entry {0:?} is not shown on the page")]
    UnlistedAreaServed(String),

    #[error("Service-area tag for {city:?} rendered {count} times")]
    TagCount { city: String, count: usize },

    #[error("Structured {field} {structured:?} does not match the page ({visible:?})")]
    FieldMismatch {
        field: &'static str,
        visible: String,
        structured: String,
    },

    #[error("Hours row {days} has no matching opening hours")]
    HoursMismatch { days: String },

    #[error("FAQ entry {index} ({question:?}) differs between page and FAQ schema")]
    FaqMismatch { index: usize, question: String },
}

/// Raw JSON text of every `application/ld+json` script in `html`, in order
pub fn extract_structured_data(html: &str) -> Vec<&str> {
    let open = format!("<script type=\"{}\">", vocab::SCRIPT_TYPE);
    let mut blocks = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        let Some(end) = after.find("</script>") else {
            break;
        };
        blocks.push(&after[..end]);
        rest = &after[end..];
    }
    blocks
}

/// Parse the two structured-data blocks into their typed documents
pub fn parse_structured_data(html: &str) -> Result<(BusinessListing, FaqPage), Drift> {
    let blocks = extract_structured_data(html);
    if blocks.len() != 2 {
        return Err(Drift::StructuredDataCount {
            expected: 2,
            found: blocks.len(),
        });
    }

    let invalid = |index: usize, reason: String| Drift::InvalidStructuredData { index, reason };

    let value: serde_json::Value =
        serde_json::from_str(blocks[0]).map_err(|e| invalid(0, e.to_string()))?;
    for key in REQUIRED_LISTING_KEYS {
        if value.get(key).is_none() {
            return Err(invalid(0, format!("missing key {}", key)));
        }
    }
    let listing: BusinessListing =
        serde_json::from_value(value).map_err(|e| invalid(0, e.to_string()))?;
    let faq: FaqPage = serde_json::from_str(blocks[1]).map_err(|e| invalid(1, e.to_string()))?;

    if listing.kind != vocab::BUSINESS_TYPE {
        return Err(invalid(0, format!("unexpected @type {}", listing.kind)));
    }
    if faq.kind != vocab::FAQ_TYPE {
        return Err(invalid(1, format!("unexpected @type {}", faq.kind)));
    }

    Ok((listing, faq))
}

/// Compare a rendered page against its sources. Returns every drift found.
pub fn check_page(
    profile: &BusinessProfile,
    catalog: &Catalog,
    options: &RenderOptions,
    html: &str,
) -> Vec<Drift> {
    let mut drifts = Vec::new();

    for id in anchor::ALL {
        if !html.contains(&format!("id=\"{}\"", id)) {
            drifts.push(Drift::MissingSection(id.to_string()));
        }
    }
    for location in sitemap_locations(&options.site_url) {
        if let Some((_, fragment)) = location.split_once('#') {
            if !anchor::ALL.contains(&fragment) {
                drifts.push(Drift::SitemapMismatch(location.clone()));
            }
        }
    }

    check_keys(profile, catalog, &mut drifts);

    match parse_structured_data(html) {
        Ok((listing, faq)) => {
            check_listing(
                profile,
                catalog,
                &options.site_url,
                &listing,
                html,
                &mut drifts,
            );
            check_faq(profile, catalog, &faq, html, &mut drifts);
        }
        Err(drift) => drifts.push(drift),
    }

    debug!("Consistency check found {} drift(s)", drifts.len());
    drifts
}

fn check_keys(profile: &BusinessProfile, catalog: &Catalog, drifts: &mut Vec<Drift>) {
    let mut unique = |collection: &'static str, keys: Vec<String>| {
        let mut seen = HashSet::new();
        for key in keys {
            if !seen.insert(key.clone()) {
                drifts.push(Drift::DuplicateKey { collection, key });
            }
        }
    };

    unique("service", catalog.services.iter().map(|s| slug(s.title)).collect());
    unique("package", catalog.packages.iter().map(|p| slug(p.title)).collect());
    unique(
        "review",
        catalog.testimonials.iter().map(|t| slug(t.author)).collect(),
    );
    unique("gallery", catalog.gallery.iter().map(|g| slug(&g.alt)).collect());
    unique("faq", catalog.faq.iter().map(|f| slug(f.question)).collect());
    unique("city", profile.service_area.cities().map(slug).collect());
    unique("hours", profile.hours.iter().map(|h| slug(h.label())).collect());
}

fn check_listing(
    profile: &BusinessProfile,
    catalog: &Catalog,
    site_url: &Url,
    listing: &BusinessListing,
    html: &str,
    drifts: &mut Vec<Drift>,
) {
    let area = &profile.service_area;
    let cities: Vec<&str> = area.cities().collect();
    let counties = area.county_labels();

    for city in &cities {
        if !listing.area_served.iter().any(|a| a == city) {
            drifts.push(Drift::CityNotServed(city.to_string()));
        }
        let count = html.matches(&area_tag(city).into_string()).count();
        if count != 1 {
            drifts.push(Drift::TagCount {
                city: city.to_string(),
                count,
            });
        }
    }
    for served in &listing.area_served {
        if !cities.contains(&served.as_str()) && !counties.contains(served) {
            drifts.push(Drift::UnlistedAreaServed(served.clone()));
        }
    }

    let mut mismatch = |field: &'static str, visible: String, structured: &str, shown: bool| {
        if !shown || visible != structured {
            drifts.push(Drift::FieldMismatch {
                field,
                visible,
                structured: structured.to_string(),
            });
        }
    };

    mismatch(
        "telephone",
        profile.phone.e164(),
        &listing.telephone,
        html.contains(&href_attr(&profile.phone.tel_uri())),
    );
    mismatch(
        "email",
        profile.email.to_string(),
        &listing.email,
        html.contains(&href_attr(&profile.email.mailto_uri())),
    );
    mismatch("name", profile.name.clone(), &listing.name, true);
    let canonical = format!("<link rel=\"canonical\" {}>", href_attr(&listing.url));
    mismatch(
        "url",
        site_url.to_string(),
        &listing.url,
        html.contains(&canonical),
    );
    let offers: Vec<&str> = listing
        .has_offer_catalog
        .item_list_element
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    let tiers: Vec<&str> = catalog.packages.iter().map(|p| p.title).collect();
    mismatch("offers", tiers.join(", "), &offers.join(", "), true);

    let specs = &listing.opening_hours_specification;
    for entry in &profile.hours {
        let expected = OpeningHoursSpecification::from_entry(entry);
        let visible = html.contains(&hours_row(entry).into_string());
        if !visible || !specs.contains(&expected) {
            drifts.push(Drift::HoursMismatch {
                days: entry.label().to_string(),
            });
        }
    }
    if specs.len() != profile.hours.len() {
        drifts.push(Drift::FieldMismatch {
            field: "openingHoursSpecification",
            visible: profile.hours.len().to_string(),
            structured: specs.len().to_string(),
        });
    }
}

/// `href="…"` attribute escaped the way the renderer writes it
fn href_attr(uri: &str) -> String {
    let link = html! { a href=(uri) {} }.into_string();
    link.trim_start_matches("<a ")
        .trim_end_matches("></a>")
        .to_string()
}

fn check_faq(
    profile: &BusinessProfile,
    catalog: &Catalog,
    faq: &FaqPage,
    html: &str,
    drifts: &mut Vec<Drift>,
) {
    for (index, entry) in catalog.faq.iter().enumerate() {
        let answer = entry.answer_for(profile);
        let structured = faq.main_entity.get(index);
        let matches = structured.is_some_and(|q| {
            q.name == entry.question && q.accepted_answer.text == answer
        });
        let visible = html.contains(&faq_item(entry.question, &answer).into_string());
        if !matches || !visible {
            drifts.push(Drift::FaqMismatch {
                index,
                question: entry.question.to_string(),
            });
        }
    }
    for (index, extra) in faq.main_entity.iter().enumerate().skip(catalog.faq.len()) {
        drifts.push(Drift::FaqMismatch {
            index,
            question: extra.name.clone(),
        });
    }
}
