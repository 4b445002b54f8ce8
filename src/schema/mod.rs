//! schema.org JSON-LD documents embedded in the page head
//!
//! Both documents are derived from the same profile and catalog values the
//! visible page is rendered from.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::schema;
use crate::content::{Catalog, PriceDisplay};
use crate::profile::{day_name, BusinessProfile, HoursEntry};


/// Opening/closing time schema.org uses to mark a day as closed
const CLOSED_TIME: &str = "00:00";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessListing {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub image: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub area_served: Vec<String>,
    pub opening_hours_specification: Vec<OpeningHoursSpecification>,
    pub same_as: Vec<String>,
    pub price_range: String,
    pub service_type: Vec<String>,
    pub has_offer_catalog: OfferCatalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub kind: String,
    pub day_of_week: Vec<String>,
    pub opens: String,
    pub closes: String,
}

impl OpeningHoursSpecification {
    pub fn from_entry(entry: &HoursEntry) -> Self {
        let (opens, closes) = match &entry.hours {
            Some(range) => (
                range.opens.format("%H:%M").to_string(),
                range.closes.format("%H:%M").to_string(),
            ),
            None => (CLOSED_TIME.to_string(), CLOSED_TIME.to_string()),
        };
        Self {
            kind: "OpeningHoursSpecification".to_string(),
            day_of_week: entry
                .days
                .weekdays()
                .into_iter()
                .map(|d| day_name(d).to_string())
                .collect(),
            opens,
            closes,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.opens == CLOSED_TIME && self.closes == CLOSED_TIME
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCatalog {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub item_list_element: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub price_specification: PriceSpecification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSpecification {
    #[serde(rename = "@type")]
    pub kind: String,
    pub min_price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    pub price_currency: String,
}

impl PriceSpecification {
    pub fn from_price(price: &PriceDisplay) -> Self {
        Self {
            kind: "PriceSpecification".to_string(),
            min_price: price.min(),
            max_price: price.max(),
            price_currency: schema::CURRENCY.to_string(),
        }
    }
}

impl BusinessListing {
    pub fn build(profile: &BusinessProfile, catalog: &Catalog, site_url: &Url, image: &str) -> Self {
        let area = &profile.service_area;
        let mut area_served = area.county_labels();
        area_served.extend(area.cities().map(str::to_string));

        Self {
            context: schema::CONTEXT.to_string(),
            kind: schema::BUSINESS_TYPE.to_string(),
            name: profile.name.clone(),
            url: site_url.to_string(),
            image: image.to_string(),
            telephone: profile.phone.e164(),
            email: profile.email.to_string(),
            address: PostalAddress {
                kind: "PostalAddress".to_string(),
                street_address: profile.address.street.clone(),
                address_locality: profile.address.locality.clone(),
                address_region: profile.address.region.clone(),
                postal_code: profile.address.postal_code.clone(),
                address_country: profile.address.country.clone(),
            },
            geo: GeoCoordinates {
                kind: "GeoCoordinates".to_string(),
                latitude: profile.geo.latitude,
                longitude: profile.geo.longitude,
            },
            area_served,
            opening_hours_specification: profile
                .hours
                .iter()
                .map(OpeningHoursSpecification::from_entry)
                .collect(),
            same_as: profile
                .social
                .named()
                .iter()
                .map(|(_, link)| link.to_string())
                .collect(),
            price_range: schema::PRICE_RANGE.to_string(),
            service_type: catalog.services.iter().map(|s| s.title.to_string()).collect(),
            has_offer_catalog: OfferCatalog {
                kind: "OfferCatalog".to_string(),
                name: "Detail Packages".to_string(),
                item_list_element: catalog
                    .packages
                    .iter()
                    .map(|tier| Offer {
                        kind: "Offer".to_string(),
                        name: tier.title.to_string(),
                        description: tier.features.join(", "),
                        price_specification: PriceSpecification::from_price(&tier.price),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub text: String,
}

impl FaqPage {
    pub fn build(profile: &BusinessProfile, catalog: &Catalog) -> Self {
        Self {
            context: schema::CONTEXT.to_string(),
            kind: schema::FAQ_TYPE.to_string(),
            main_entity: catalog
                .faq
                .iter()
                .map(|entry| Question {
                    kind: "Question".to_string(),
                    name: entry.question.to_string(),
                    accepted_answer: Answer {
                        kind: "Answer".to_string(),
                        text: entry.answer_for(profile),
                    },
                })
                .collect(),
        }
    }
}

/// Serialize a document for an inline `<script>` block.
///
/// `</` is written as `<\/` so no string value can close the script element.
pub fn script_json<T: Serialize>(document: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(document)?.replace("</", "<\\/"))
}
