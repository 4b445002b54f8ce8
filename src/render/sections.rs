//! One function per page surface

use maud::{html, Markup};

use super::{RenderOptions, NAV};
use crate::constants::anchor;
use crate::content::{slug, Catalog, GalleryImage, PackageTier, ServiceOffering, Testimonial};
use crate::profile::{BusinessProfile, HoursEntry};

/// Footer quick links leave out the gallery
const QUICK_LINKS: [(&str, &str); 6] = [
    (anchor::SERVICES, "Services"),
    (anchor::PACKAGES, "Packages"),
    (anchor::REVIEWS, "Reviews"),
    (anchor::SERVICE_AREA, "Service Area"),
    (anchor::FAQ, "FAQ"),
    (anchor::CONTACT, "Contact"),
];

const FOOTER_KEYWORDS: usize = 6;

fn fragment(id: &str) -> String {
    format!("#{}", id)
}

/// Titled page section addressable by `id`
fn section(id: &str, title: &str, subtitle: Option<&str>, body: Markup) -> Markup {
    html! {
        section.section id=(id) {
            div.container {
                header.section-heading {
                    h2 { (title) }
                    @if let Some(subtitle) = subtitle {
                        p.subtitle { (subtitle) }
                    }
                }
                (body)
            }
        }
    }
}

pub fn top_bar(profile: &BusinessProfile) -> Markup {
    html! {
        div.top-bar {
            div.container {
                div {
                    a href=(fragment(anchor::CONTACT)) { "Get an Estimate" }
                    " "
                    a href=(fragment(anchor::SERVICE_AREA)) {
                        "Serving " (profile.service_area.summary())
                    }
                }
                div {
                    a href=(profile.phone.tel_uri()) { (profile.phone.display()) }
                    " "
                    a href=(profile.email.mailto_uri()) { (profile.email.as_str()) }
                }
            }
        }
    }
}

pub fn site_header(profile: &BusinessProfile) -> Markup {
    html! {
        header.site-header {
            nav.site-nav.container {
                a.brand href=(fragment(anchor::HOME)) { (profile.name) }
                ul.nav-links {
                    @for (id, label) in NAV {
                        li { a href=(fragment(id)) { (label) } }
                    }
                }
                a.button href=(profile.phone.tel_uri()) { "Call " (profile.phone.display()) }
            }
        }
    }
}

pub fn hero(profile: &BusinessProfile, options: &RenderOptions) -> Markup {
    html! {
        section.hero id=(anchor::HOME) {
            img src=(options.hero_image) alt="Freshly detailed car in the Pittsburgh area";
            div.overlay {
                div.container {
                    h1 { "Showroom Shine, Local Service" }
                    p.lead {
                        "Premium auto detailing, ceramic coatings, and paint correction serving "
                        (profile.service_area.summary()) "."
                    }
                    div.actions {
                        a.button href=(fragment(anchor::CONTACT)) { "Get an Estimate" }
                        " "
                        a.button href=(fragment(anchor::SERVICES)) { "View Services" }
                        " "
                        a.button href=(profile.phone.tel_uri()) { "Call " (profile.phone.display()) }
                    }
                    dl.stats {
                        div { dt { "Easy Scheduling" } dd { "Mobile & In‑Shop" } }
                        div { dt { "Turnaround" } dd { "Same‑Week Slots" } }
                        div { dt { "Protection" } dd { "Pro-Grade Products" } }
                    }
                }
            }
        }
    }
}

pub fn badges() -> Markup {
    html! {
        ul.badges {
            li { "★ 5-Star Local Service" }
            li { "Ceramic Coating Options" }
            li { "Paint Correction" }
            li { "Interior Deep Clean" }
            li { "Mobile Detailing Available" }
        }
    }
}

fn service_card(service: &ServiceOffering) -> Markup {
    html! {
        article.card.service id=(format!("service-{}", slug(service.title))) {
            h3 { (service.title) }
            p { (service.description) }
            ul.pills {
                @for feature in &service.features {
                    li.pill { (feature) }
                }
            }
        }
    }
}

pub fn services(catalog: &Catalog) -> Markup {
    section(
        anchor::SERVICES,
        "Auto Detailing Services",
        Some("Hand wash, interior restoration, paint decon, machine polish, ceramic coatings, and more."),
        html! {
            div.grid {
                @for service in &catalog.services {
                    (service_card(service))
                }
            }
        },
    )
}

pub fn package_card(profile: &BusinessProfile, tier: &PackageTier) -> Markup {
    html! {
        article.card.package id=(format!("package-{}", slug(tier.title))) {
            h3 { (tier.title) }
            p.price { (tier.price.to_string()) }
            ul.features {
                @for feature in &tier.features {
                    li { (feature) }
                }
            }
            a.button href=(profile.phone.tel_uri()) { (tier.cta) }
        }
    }
}

pub fn packages(profile: &BusinessProfile, catalog: &Catalog) -> Markup {
    section(
        anchor::PACKAGES,
        "Popular Packages",
        Some("Every vehicle is different—call for an exact quote."),
        html! {
            div.grid {
                @for tier in &catalog.packages {
                    (package_card(profile, tier))
                }
            }
            p.note { "Prices vary by size/condition. Ask about multi‑car and maintenance discounts." }
        },
    )
}

/// One gallery photo, keyed by its alt text
pub fn gallery_image(image: &GalleryImage) -> Markup {
    html! {
        img.gallery-image data-key=(slug(&image.alt)) loading="lazy" src=(image.src) alt=(image.alt);
    }
}

pub fn gallery(profile: &BusinessProfile, catalog: &Catalog) -> Markup {
    let subtitle = format!(
        "Real results from customers across {}.",
        profile.service_area.summary()
    );
    section(
        anchor::GALLERY,
        "Recent Work",
        Some(&subtitle),
        html! {
            div.grid.gallery {
                @for image in &catalog.gallery {
                    (gallery_image(image))
                }
            }
        },
    )
}

fn review_card(review: &Testimonial) -> Markup {
    let stars = review.rating.stars();
    html! {
        figure.card.review id=(format!("review-{}", slug(review.author))) {
            figcaption { (review.author) }
            div.stars aria-label=(format!("{} out of 5 stars", stars)) {
                @for _ in 0..stars { "★" }
            }
            blockquote { "“" (review.text) "”" }
        }
    }
}

pub fn reviews(profile: &BusinessProfile, catalog: &Catalog) -> Markup {
    let cities: Vec<&str> = profile.service_area.cities().take(2).collect();
    let subtitle = format!(
        "What drivers around {} are saying.",
        cities.join(" & ")
    );
    section(
        anchor::REVIEWS,
        "Customer Reviews",
        Some(&subtitle),
        html! {
            div.grid {
                @for review in &catalog.testimonials {
                    (review_card(review))
                }
            }
        },
    )
}

/// One tag in the service-area cloud
pub fn area_tag(city: &str) -> Markup {
    html! {
        li.area-tag data-key=(slug(city)) { (city) }
    }
}

pub fn service_area(profile: &BusinessProfile) -> Markup {
    let area = &profile.service_area;
    let subtitle = format!("Proudly serving {}.", area.summary());
    section(
        anchor::SERVICE_AREA,
        "Service Area",
        Some(&subtitle),
        html! {
            div.grid {
                div.card {
                    h3 { "Cities & Communities" }
                    ul.tag-cloud {
                        @for city in area.cities() {
                            (area_tag(city))
                        }
                    }
                    p.note {
                        "Don’t see your town? Call us—we often travel throughout the region for coatings and fleet work."
                    }
                }
                div.card {
                    h3 { "Counties" }
                    ul {
                        @for county in &area.counties {
                            li { (county.label()) }
                        }
                    }
                }
                div.card.why-local {
                    h3 { "Why Local Matters" }
                    ul {
                        li { "Optimized for Pittsburgh, Greensburg, and surrounding search queries." }
                        li { "Localized content and headings for better Google Maps & organic results." }
                        li { "Clear NAP (Name, Address, Phone) and service-area schema for local SEO." }
                    }
                }
            }
        },
    )
}

/// One independent disclosure widget.
///
/// No `name` attribute (that would group entries into an exclusive
/// accordion) and no `open` attribute, so every entry starts collapsed.
pub fn faq_item(question: &str, answer: &str) -> Markup {
    html! {
        details.faq-item id=(format!("faq-{}", slug(question))) {
            summary { (question) }
            p { (answer) }
        }
    }
}

pub fn faq(profile: &BusinessProfile, catalog: &Catalog) -> Markup {
    section(
        anchor::FAQ,
        "Frequently Asked Questions",
        None,
        html! {
            div.faq-list {
                @for entry in &catalog.faq {
                    (faq_item(entry.question, &entry.answer_for(profile)))
                }
            }
        },
    )
}

/// One row of the visible hours table
pub fn hours_row(entry: &HoursEntry) -> Markup {
    html! {
        li.hours-row data-key=(slug(entry.label())) {
            span.day { (entry.label()) }
            span.time { (entry.time_display()) }
        }
    }
}

pub fn contact(profile: &BusinessProfile) -> Markup {
    let area = &profile.service_area;
    let service_line = match area.state() {
        Some(state) => format!("Mobile service — {}, {}", area.summary(), state),
        None => format!("Mobile service — {}", area.summary()),
    };
    section(
        anchor::CONTACT,
        "Get an Estimate",
        Some("Tell us about your vehicle and the services you want."),
        html! {
            div.grid {
                div.card {
                    h3 { "Book Now" }
                    a.button href=(profile.phone.tel_uri()) { "Call " (profile.phone.display()) }
                    @for (name, link) in profile.social.named() {
                        " "
                        a.button href=(link.as_str()) { "Message on " (name) }
                    }
                    p.note { "We’re mobile-only: we come to you in " (area.summary()) "." }
                }
                div.card.contact-details {
                    h3 { "Contact & Hours" }
                    ul.contact-lines {
                        li.phone {
                            a href=(profile.phone.tel_uri()) aria-label=(format!("Call {}", profile.name)) {
                                (profile.phone.display())
                            }
                        }
                        li.email {
                            a href=(profile.email.mailto_uri()) { (profile.email.as_str()) }
                        }
                        li.area { (service_line) }
                    }
                    h4 { "Hours" }
                    ul.hours {
                        @for entry in &profile.hours {
                            (hours_row(entry))
                        }
                    }
                    div.social {
                        @for (name, link) in profile.social.named() {
                            a.button href=(link.as_str()) aria-label=(name) { (name) }
                            " "
                        }
                    }
                }
            }
        },
    )
}

pub fn footer(profile: &BusinessProfile, options: &RenderOptions) -> Markup {
    let area = &profile.service_area;
    let cities: Vec<&str> = area.cities().take(3).collect();
    html! {
        footer.site-footer {
            div.container.grid {
                div {
                    p.brand { (profile.name) }
                    p {
                        (profile.name) " provides professional car detailing across "
                        (area.summary()) "—" (cities.join(", ")) ", and beyond. "
                        "From deep interior cleaning to ceramic coatings, we protect your investment."
                    }
                }
                nav {
                    p { "Quick Links" }
                    ul {
                        @for (id, label) in QUICK_LINKS {
                            li { a href=(fragment(id)) { (label) } }
                        }
                    }
                }
                div {
                    p { "Contact" }
                    address { "Mobile service — " (area.summary()) }
                    p { a href=(profile.phone.tel_uri()) { (profile.phone.display()) } }
                    p { a href=(profile.email.mailto_uri()) { (profile.email.as_str()) } }
                }
            }
            div.container.legal {
                span { "© " (options.year.to_string()) " " (profile.name) ". All rights reserved." }
                ul.keywords {
                    @for keyword in profile.keywords.iter().take(FOOTER_KEYWORDS) {
                        li.keyword { (keyword) }
                    }
                }
            }
        }
    }
}
