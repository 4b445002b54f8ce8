#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(
            PriceDisplay::Between { min: 99, max: 149 }.to_string(),
            "$99 – $149"
        );
        assert_eq!(PriceDisplay::From { min: 699 }.to_string(), "From $699");
        assert_eq!(PriceDisplay::From { min: 699 }.max(), None);
    }

    #[test]
    fn test_standard_packages() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.packages.len(), 3);
        for tier in &catalog.packages {
            assert!(!tier.price.to_string().is_empty());
            assert!(!tier.cta.is_empty());
        }
        assert_eq!(catalog.packages[2].price.to_string(), "From $699");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(1).map(|r| r.stars()), Some(1));
        assert_eq!(Rating::new(5).map(|r| r.stars()), Some(5));
    }

    #[test]
    fn test_faq_answer_interpolates_phone() {
        let profile = BusinessProfile::sample().unwrap();
        let catalog = Catalog::standard();
        let quote = catalog
            .faq
            .iter()
            .find(|f| f.question == "How do I get a quote?")
            .unwrap();
        let answer = quote.answer_for(&profile);
        assert!(answer.starts_with("Call 724-972-3957 "));
        assert!(!answer.contains(PHONE_PLACEHOLDER));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Fleet & Commercial"), "fleet-commercial");
        assert_eq!(slug("What areas do you serve?"), "what-areas-do-you-serve");
        assert_eq!(slug("CJ’s Auto Detailing"), "cjs-auto-detailing");
        assert_eq!(slug("Mt. Lebanon"), "mt-lebanon");
        assert_eq!(slug("Emily R."), "emily-r");
    }

    #[test]
    fn test_standard_keys_are_unique() {
        let catalog = Catalog::standard();
        let mut keys: Vec<String> = catalog.services.iter().map(|s| slug(s.title)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), catalog.services.len());

        let mut questions: Vec<String> = catalog.faq.iter().map(|f| slug(f.question)).collect();
        questions.sort();
        questions.dedup();
        assert_eq!(questions.len(), catalog.faq.len());
    }
}
