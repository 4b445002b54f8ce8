//! Fixed page content: services, packages, gallery, reviews and FAQ
//!
//! These lists are authored in code. Array lengths pin the number of
//! services and package tiers so a missing entry fails to compile.

use std::fmt;

use crate::profile::BusinessProfile;

#[cfg(test)]
mod tests;

/// Placeholder in FAQ answers replaced with the business phone number
pub const PHONE_PLACEHOLDER: &str = "{phone}";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

/// Price shown on a package card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    Between { min: u32, max: u32 },
    From { min: u32 },
}

impl PriceDisplay {
    pub fn min(&self) -> u32 {
        match self {
            PriceDisplay::Between { min, .. } | PriceDisplay::From { min } => *min,
        }
    }

    pub fn max(&self) -> Option<u32> {
        match self {
            PriceDisplay::Between { max, .. } => Some(*max),
            PriceDisplay::From { .. } => None,
        }
    }
}

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceDisplay::Between { min, max } => write!(f, "${} – ${}", min, max),
            PriceDisplay::From { min } => write!(f, "From ${}", min),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageTier {
    pub title: &'static str,
    pub price: PriceDisplay,
    pub features: Vec<&'static str>,
    pub cta: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub alt: String,
    pub src: String,
}

/// Star rating between 1 and 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub const fn new(stars: u8) -> Option<Self> {
        if stars >= 1 && stars <= Self::MAX {
            Some(Self(stars))
        } else {
            None
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub text: &'static str,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    answer: &'static str,
}

impl FaqEntry {
    pub const fn new(question: &'static str, answer: &'static str) -> Self {
        Self { question, answer }
    }

    /// Answer text with the profile phone number filled in
    pub fn answer_for(&self, profile: &BusinessProfile) -> String {
        self.answer
            .replace(PHONE_PLACEHOLDER, &profile.phone.display())
    }
}

/// Everything the page shows besides the business profile
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub services: [ServiceOffering; 6],
    pub packages: [PackageTier; 3],
    pub gallery: Vec<GalleryImage>,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
}

const FIVE_STARS: Rating = match Rating::new(5) {
    Some(rating) => rating,
    None => panic!("five stars is a valid rating"),
};

impl Catalog {
    pub fn standard() -> Self {
        Self {
            services: [
                ServiceOffering {
                    title: "Exterior Detail",
                    description: "Foam wash, iron decon, clay, wheels & tires, machine-applied sealant.",
                    features: vec!["Bug & tar removal", "Door jambs", "Tire shine"],
                },
                ServiceOffering {
                    title: "Interior Detail",
                    description: "Vacuum, steam clean, fabric & leather care, streak-free glass.",
                    features: vec!["Carpet shampoo", "Odor neutralizer", "UV protectant"],
                },
                ServiceOffering {
                    title: "Paint Correction",
                    description: "Cut & polish to reduce swirls and oxidation for a deep glossy finish.",
                    features: vec!["Test spot included", "Gloss enhancement", "Safe methods"],
                },
                ServiceOffering {
                    title: "Ceramic Coatings",
                    description: "Durable hydrophobic protection; easier washes and long‑lasting gloss.",
                    features: vec!["1–5 year options", "Warranties available", "Pro application"],
                },
                ServiceOffering {
                    title: "Headlight Restoration",
                    description: "Clarity restored and UV sealed for safer night driving.",
                    features: vec!["UV sealant", "Improved output", "Fast service"],
                },
                ServiceOffering {
                    title: "Fleet & Commercial",
                    description: "Keep your vehicles clean and on-brand with flexible maintenance plans.",
                    features: vec!["Volume rates", "On-site service", "Scheduled visits"],
                },
            ],
            packages: [
                PackageTier {
                    title: "Express Refresh",
                    price: PriceDisplay::Between { min: 99, max: 149 },
                    features: vec!["Hand wash & protect", "Quick interior tidy", "Windows & wheels"],
                    cta: "Book Express",
                },
                PackageTier {
                    title: "Full Interior + Exterior",
                    price: PriceDisplay::Between { min: 199, max: 299 },
                    features: vec!["Deep interior clean", "Decon + sealant", "Wheel & tire detail"],
                    cta: "Book Full Detail",
                },
                PackageTier {
                    title: "Correction + Ceramic",
                    price: PriceDisplay::From { min: 699 },
                    features: vec!["1–2 stage correction", "Pro ceramic coating", "Maintenance guide"],
                    cta: "Get Coating Quote",
                },
            ],
            gallery: (1..=6)
                .map(|i| GalleryImage {
                    alt: format!("Auto detailing example {} in Western Pennsylvania", i),
                    src: format!(
                        "https://images.unsplash.com/photo-15{}466835-00a7907e9de1?q=80&w=900&auto=format&fit=crop",
                        60 + i
                    ),
                })
                .collect(),
            testimonials: vec![
                Testimonial {
                    author: "Emily R.",
                    text: "Booked a full detail in Greensburg—car looks brand new! Scheduling was easy and the quality is top tier.",
                    rating: FIVE_STARS,
                },
                Testimonial {
                    author: "Marcus P.",
                    text: "They removed heavy swirl marks and applied a ceramic—paint pops now. Worth every penny.",
                    rating: FIVE_STARS,
                },
                Testimonial {
                    author: "Dana K.",
                    text: "Interior shampoo in Monroeville. Pet hair gone and it smells amazing. Fast and professional.",
                    rating: FIVE_STARS,
                },
            ],
            faq: vec![
                FaqEntry::new(
                    "What areas do you serve?",
                    "Westmoreland County (Greensburg, Latrobe, Murrysville, and more) and Allegheny County (Pittsburgh, Monroeville, and nearby).",
                ),
                FaqEntry::new(
                    "Do you offer mobile detailing?",
                    "Yes. We are mobile-only and come to your home or office when weather and access to power/water allow.",
                ),
                FaqEntry::new(
                    "How long does a full detail take?",
                    "Most full details take 3–5 hours depending on vehicle size and condition.",
                ),
                FaqEntry::new(
                    "Are ceramic coatings worth it in PA winters?",
                    "Absolutely—coatings add durable protection and make winter cleanup faster and easier.",
                ),
                FaqEntry::new(
                    "How do I get a quote?",
                    "Call {phone} or message us on Instagram or Facebook with your vehicle make, model, and condition.",
                ),
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lowercase, hyphen-separated key derived from a title or name
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') && !matches!(c, '’' | '\'') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
