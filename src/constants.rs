/// Page section anchors
pub mod anchor {
    /// Hero section at the top of the page
    pub const HOME: &str = "home";

    /// Service offerings grid
    pub const SERVICES: &str = "services";

    /// Package and pricing cards
    pub const PACKAGES: &str = "packages";

    /// Recent work gallery
    pub const GALLERY: &str = "gallery";

    /// Customer testimonials
    pub const REVIEWS: &str = "reviews";

    /// Service-area tag cloud
    pub const SERVICE_AREA: &str = "service-area";

    /// FAQ accordion
    pub const FAQ: &str = "faq";

    /// Contact and hours block
    pub const CONTACT: &str = "contact";

    /// Every anchor in document order
    pub const ALL: [&str; 8] = [
        HOME,
        SERVICES,
        PACKAGES,
        GALLERY,
        REVIEWS,
        SERVICE_AREA,
        FAQ,
        CONTACT,
    ];
}

/// schema.org vocabulary used by the JSON-LD blocks
pub mod schema {
    pub const CONTEXT: &str = "https://schema.org";
    pub const BUSINESS_TYPE: &str = "AutoDetailing";
    pub const FAQ_TYPE: &str = "FAQPage";
    pub const PRICE_RANGE: &str = "$$";
    pub const CURRENCY: &str = "USD";

    /// Media type of an embedded structured-data script
    pub const SCRIPT_TYPE: &str = "application/ld+json";
}

/// Artifact file names written by `brochure build`
pub mod artifact {
    pub const INDEX: &str = "index.html";
    pub const ROBOTS: &str = "robots.txt";
    pub const SITEMAP: &str = "sitemap.xml";
    pub const MANIFEST: &str = "manifest.json";
    pub const ARCHIVE: &str = "site.tar.gz";
}

/// Media types served and recorded in the manifest
pub mod media {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const TEXT: &str = "text/plain; charset=utf-8";
    pub const XML: &str = "application/xml";
    pub const JSON: &str = "application/json";
    pub const GZIP: &str = "application/gzip";
}

/// Defaults applied when no configuration file overrides them
pub mod defaults {
    pub const SITE_URL: &str = "https://www.example.com/";
    pub const OUT_DIR: &str = "dist";
    pub const SERVE_ADDR: &str = "127.0.0.1:8080";
    pub const OG_IMAGE: &str =
        "https://images.unsplash.com/photo-1520341280432-4749d4d7bcf9?q=80&w=1400&auto=format&fit=crop";
    pub const HERO_IMAGE: &str =
        "https://images.unsplash.com/photo-1543466835-00a7907e9de1?q=80&w=1600&auto=format&fit=crop";
}
