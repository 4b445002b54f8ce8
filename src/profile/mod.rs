//! The business profile that drives every rendered surface
//!
//! A profile is built once, validated, and then only read. The built-in
//! sample describes the repository's demo business; other businesses are
//! described in a TOML file with the same shape.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::content::slug;

mod contact;
mod hours;


pub use contact::{EmailAddress, PhoneNumber};
pub use hours::{day_name, DayRange, HoursEntry, TimeRange};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Invalid phone number {value:?}: {reason}")]
    InvalidPhone { value: String, reason: String },

    #[error("Invalid email address {value:?}")]
    InvalidEmail { value: String },

    #[error("Coordinates out of range: latitude {latitude}, longitude {longitude}")]
    CoordinatesOutOfRange { latitude: f64, longitude: f64 },

    #[error("Invalid {field} URL {value:?}: {reason}")]
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid hours for {days}: opens {opens} is not before closes {closes}")]
    InvalidHours {
        days: String,
        opens: String,
        closes: String,
    },

    #[error("Duplicate service-area city: {0}")]
    DuplicateCity(String),

    #[error("Profile field {0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Left out for mobile-only businesses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn validate(&self) -> Result<(), ProfileError> {
        let plausible = self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude);
        if plausible {
            Ok(())
        } else {
            Err(ProfileError::CoordinatesOutOfRange {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Url,
    pub instagram: Url,
}

impl SocialLinks {
    /// Named links in display order
    pub fn named(&self) -> [(&'static str, &Url); 2] {
        [("Facebook", &self.facebook), ("Instagram", &self.instagram)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    pub name: String,
    pub state: String,
    pub cities: Vec<String>,
}

impl County {
    /// Label used in `areaServed`, e.g. `Westmoreland County, PA`
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub counties: Vec<County>,
}

impl ServiceArea {
    /// All cities, county by county, in configured order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.counties
            .iter()
            .flat_map(|c| c.cities.iter().map(String::as_str))
    }

    pub fn county_labels(&self) -> Vec<String> {
        self.counties.iter().map(County::label).collect()
    }

    /// Short prose form, e.g. `Westmoreland & Allegheny County`
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self
            .counties
            .iter()
            .map(|c| c.name.strip_suffix(" County").unwrap_or(&c.name))
            .collect();
        format!("{} County", names.join(" & "))
    }

    /// State shared by the counties, if there is exactly one
    pub fn state(&self) -> Option<&str> {
        let first = self.counties.first()?;
        self.counties
            .iter()
            .all(|c| c.state == first.state)
            .then_some(first.state.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub hours: Vec<HoursEntry>,
    pub social: SocialLinks,
    pub service_area: ServiceArea,
    pub keywords: Vec<String>,
}

impl BusinessProfile {
    /// The demo business this repository ships with
    pub fn sample() -> Result<Self, ProfileError> {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        let url = |field: &str, value: &str| {
            Url::parse(value).map_err(|e| ProfileError::InvalidUrl {
                field: field.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
        };
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let profile = Self {
            name: "CJ’s Auto Detailing".to_string(),
            phone: PhoneNumber::parse("724-972-3957")?,
            email: EmailAddress::parse("ckushnerautodetailing@gmail.com")?,
            address: PostalAddress {
                street: None,
                locality: "Greensburg".to_string(),
                region: "PA".to_string(),
                postal_code: "15601".to_string(),
                country: "US".to_string(),
            },
            geo: GeoCoordinates {
                latitude: 40.3015,
                longitude: -79.5389,
            },
            hours: vec![
                HoursEntry::open(DayRange::MonFri, time(8, 0), time(18, 0))?,
                HoursEntry::open(DayRange::Saturday, time(9, 0), time(15, 0))?,
                HoursEntry::closed(DayRange::Sunday),
            ],
            social: SocialLinks {
                facebook: url(
                    "facebook",
                    "https://www.facebook.com/profile.php?id=61579612289787",
                )?,
                instagram: url("instagram", "https://www.instagram.com/cjs_auto_detail_pa/")?,
            },
            service_area: ServiceArea {
                counties: vec![
                    County {
                        name: "Westmoreland County".to_string(),
                        state: "PA".to_string(),
                        cities: strings(&[
                            "Greensburg",
                            "Latrobe",
                            "Hempfield Township",
                            "Murrysville",
                            "Jeannette",
                            "Monessen",
                            "New Kensington",
                        ]),
                    },
                    County {
                        name: "Allegheny County".to_string(),
                        state: "PA".to_string(),
                        cities: strings(&[
                            "Pittsburgh",
                            "Monroeville",
                            "Penn Hills",
                            "Plum",
                            "Fox Chapel",
                            "Mt. Lebanon",
                            "Bethel Park",
                        ]),
                    },
                ],
            },
            keywords: strings(&[
                "auto detailing Westmoreland County",
                "auto detailing Allegheny County",
                "car detailing Greensburg PA",
                "mobile detailing Pittsburgh",
                "ceramic coating Westmoreland",
                "paint correction Pittsburgh",
                "interior shampoo Greensburg",
                "headlight restoration PA",
            ]),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Parse and validate a profile from TOML. Every field except the
    /// street address is required.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: BusinessProfile =
            toml::from_str(content).context("Failed to parse business profile")?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading business profile from {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read business profile {:?}", path))?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, otherwise use the built-in sample
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()?),
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Empty("name"));
        }
        if self.hours.is_empty() {
            return Err(ProfileError::Empty("hours"));
        }
        if self.service_area.counties.is_empty() {
            return Err(ProfileError::Empty("service_area.counties"));
        }
        if self.service_area.cities().next().is_none() {
            return Err(ProfileError::Empty("service_area.cities"));
        }

        self.geo.validate()?;
        for entry in &self.hours {
            entry.validate()?;
        }
        for (name, link) in self.social.named() {
            if !matches!(link.scheme(), "http" | "https") {
                return Err(ProfileError::InvalidUrl {
                    field: name.to_ascii_lowercase(),
                    value: link.to_string(),
                    reason: format!("unsupported scheme: {}", link.scheme()),
                });
            }
        }

        let mut seen = HashSet::new();
        for city in self.service_area.cities() {
            if city.trim().is_empty() {
                return Err(ProfileError::Empty("service_area.cities"));
            }
            if !seen.insert(slug(city)) {
                return Err(ProfileError::DuplicateCity(city.to_string()));
            }
        }

        Ok(())
    }
}
