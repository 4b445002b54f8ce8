#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::content::FaqEntry;
    use crate::profile::{DayRange, EmailAddress, HoursEntry};
    use crate::render::render_document;
    use chrono::NaiveTime;
    use url::Url;

    fn options() -> RenderOptions {
        RenderOptions {
            site_url: Url::parse("https://www.example.com/").unwrap(),
            og_image: "https://img.example.com/og.jpg".to_string(),
            hero_image: "https://img.example.com/hero.jpg".to_string(),
            year: 2026,
        }
    }

    fn render_sample() -> (BusinessProfile, Catalog, String) {
        let profile = BusinessProfile::sample().unwrap();
        let catalog = Catalog::standard();
        let html = render_document(&profile, &catalog, &options()).unwrap();
        (profile, catalog, html)
    }

    #[test]
    fn test_rendered_sample_is_consistent() {
        let (profile, catalog, html) = render_sample();
        let drifts = check_page(&profile, &catalog, &options(), &html);
        assert!(drifts.is_empty(), "unexpected drift: {:?}", drifts);
    }

    #[test]
    fn test_extract_structured_data() {
        let (_, _, html) = render_sample();
        let blocks = extract_structured_data(&html);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("\"@type\":\"AutoDetailing\""));
        assert!(blocks[1].contains("\"@type\":\"FAQPage\""));

        let (listing, faq) = parse_structured_data(&html).unwrap();
        assert_eq!(listing.telephone, "+17249723957");
        assert_eq!(faq.main_entity.len(), 5);
    }

    #[test]
    fn test_telephone_drift() {
        let (profile, catalog, html) = render_sample();
        let tampered = html.replace(
            "\"telephone\":\"+17249723957\"",
            "\"telephone\":\"+17245550100\"",
        );
        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(
            drifts,
            vec![Drift::FieldMismatch {
                field: "telephone",
                visible: "+17249723957".to_string(),
                structured: "+17245550100".to_string(),
            }]
        );
    }

    #[test]
    fn test_city_missing_from_area_served() {
        let (profile, catalog, html) = render_sample();
        let tampered = html.replace(",\"Plum\"", "");
        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(drifts, vec![Drift::CityNotServed("Plum".to_string())]);
    }

    #[test]
    fn test_area_served_entry_not_shown() {
        let (profile, catalog, html) = render_sample();
        let tampered = html.replace(",\"Plum\"", ",\"Plum\",\"Erie\"");
        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(drifts, vec![Drift::UnlistedAreaServed("Erie".to_string())]);
    }

    #[test]
    fn test_missing_area_tag() {
        let (profile, catalog, html) = render_sample();
        let tag = area_tag("Latrobe").into_string();
        let tampered = html.replace(&tag, "");
        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(
            drifts,
            vec![Drift::TagCount {
                city: "Latrobe".to_string(),
                count: 0,
            }]
        );
    }

    #[test]
    fn test_hours_drift() {
        let (mut profile, catalog, html) = render_sample();
        let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        profile.hours[1] = HoursEntry::open(DayRange::Saturday, time(10), time(15)).unwrap();

        let drifts = check_page(&profile, &catalog, &options(), &html);
        assert_eq!(
            drifts,
            vec![Drift::HoursMismatch {
                days: "Saturday".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_section() {
        let (profile, catalog, html) = render_sample();
        let tampered = html.replace("id=\"faq\"", "id=\"questions\"");
        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert!(drifts.contains(&Drift::MissingSection("faq".to_string())));
    }

    #[test]
    fn test_duplicate_faq_key() {
        let profile = BusinessProfile::sample().unwrap();
        let mut catalog = Catalog::standard();
        catalog.faq.push(FaqEntry::new(
            "Do you offer mobile detailing?",
            "Yes, anywhere in the service area.",
        ));
        let html = render_document(&profile, &catalog, &options()).unwrap();

        let drifts = check_page(&profile, &catalog, &options(), &html);
        assert!(drifts.contains(&Drift::DuplicateKey {
            collection: "faq",
            key: "do-you-offer-mobile-detailing".to_string(),
        }));
    }

    #[test]
    fn test_faq_answer_drift() {
        let (profile, catalog, html) = render_sample();
        let first = catalog.faq[0].answer_for(&profile);
        let json_answer = serde_json::to_string(&first).unwrap();
        let tampered = html.replacen(&json_answer, "\"Different answer\"", 1);

        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(
            drifts,
            vec![Drift::FaqMismatch {
                index: 0,
                question: catalog.faq[0].question.to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_structured_data_block() {
        let (profile, catalog, html) = render_sample();
        let start = html.rfind("<script type=\"application/ld+json\">").unwrap();
        let end = start + html[start..].find("</script>").unwrap() + "</script>".len();
        let tampered = format!("{}{}", &html[..start], &html[end..]);

        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(
            drifts,
            vec![Drift::StructuredDataCount {
                expected: 2,
                found: 1,
            }]
        );
    }

    #[test]
    fn test_required_key_missing() {
        let (_, _, html) = render_sample();
        let tampered = html.replace("\"telephone\":", "\"phone\":");
        match parse_structured_data(&tampered) {
            Err(Drift::InvalidStructuredData { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("telephone"));
            }
            other => panic!("expected invalid structured data, got {:?}", other),
        }
    }

    #[test]
    fn test_ampersands_in_links_are_consistent() {
        let mut profile = BusinessProfile::sample().unwrap();
        profile.email = EmailAddress::parse("sales&service@example.com").unwrap();
        let catalog = Catalog::standard();
        let mut options = options();
        options.site_url =
            Url::parse("https://www.example.com/?utm_source=gbp&utm_medium=organic").unwrap();

        let html = render_document(&profile, &catalog, &options).unwrap();
        assert!(html.contains("href=\"mailto:sales&amp;service@example.com\""));
        assert!(html.contains("utm_source=gbp&amp;utm_medium=organic"));

        let drifts = check_page(&profile, &catalog, &options, &html);
        assert!(drifts.is_empty(), "unexpected drift: {:?}", drifts);
    }

    #[test]
    fn test_canonical_link_drift() {
        let (profile, catalog, html) = render_sample();
        let tampered = html.replace(
            "<link rel=\"canonical\" href=\"https://www.example.com/\">",
            "<link rel=\"canonical\" href=\"https://www.example.com/old/\">",
        );
        let drifts = check_page(&profile, &catalog, &options(), &tampered);
        assert_eq!(
            drifts,
            vec![Drift::FieldMismatch {
                field: "url",
                visible: "https://www.example.com/".to_string(),
                structured: "https://www.example.com/".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_gallery_key() {
        let profile = BusinessProfile::sample().unwrap();
        let mut catalog = Catalog::standard();
        let first = catalog.gallery[0].clone();
        catalog.gallery.push(first);
        let html = render_document(&profile, &catalog, &options()).unwrap();

        let drifts = check_page(&profile, &catalog, &options(), &html);
        assert_eq!(
            drifts,
            vec![Drift::DuplicateKey {
                collection: "gallery",
                key: "auto-detailing-example-1-in-western-pennsylvania".to_string(),
            }]
        );
    }
}
