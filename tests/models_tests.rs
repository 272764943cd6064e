#[cfg(test)]
pub mod models_tests {
    use nebula_landing::common::SubscriptionError;
    use nebula_landing::models::*;

    #[test]
    fn test_merge_empty_overrides_keeps_defaults() {
        assert_eq!(
            HeroConfig::with_overrides(HeroOverrides::default()),
            HeroConfig::default()
        );
        assert_eq!(
            FooterConfig::with_overrides(FooterOverrides::default()),
            FooterConfig::default()
        );
    }

    #[test]
    fn test_merge_single_field_leaves_others() {
        let config = HeroConfig::with_overrides(HeroOverrides {
            title: Some("Ship faster".into()),
            ..Default::default()
        });
        let defaults = HeroConfig::default();

        assert_eq!(config.title, "Ship faster");
        assert_eq!(config.subtitle, defaults.subtitle);
        assert_eq!(config.primary_href, "/get-started");
        assert_eq!(config.features, defaults.features);
    }

    #[test]
    fn test_merge_list_replaces_whole_list() {
        let config = NavbarConfig::with_overrides(NavbarOverrides {
            nav_items: Some(vec![LinkItem::new("Pricing", "#pricing")]),
            ..Default::default()
        });

        assert_eq!(config.nav_items, vec![LinkItem::new("Pricing", "#pricing")]);
        assert_eq!(config.cta_href, "/get-started");
    }

    #[test]
    fn test_merge_nested_record_is_shallow() {
        let newsletter = NewsletterConfig {
            title: "Weekly digest".into(),
            ..Default::default()
        };
        let config = FooterConfig::with_overrides(FooterOverrides {
            newsletter: Some(newsletter.clone()),
            ..Default::default()
        });

        assert_eq!(config.newsletter, newsletter);
        assert_eq!(config.newsletter.button_text, "Subscribe");
    }

    #[test]
    fn test_merge_onto_existing_config() {
        let base = CtaConfig::with_overrides(CtaOverrides {
            badge: Some("Free forever".into()),
            ..Default::default()
        });
        let merged = base.merge(CtaOverrides {
            primary_href: Some("https://app.nebula.ai".into()),
            ..Default::default()
        });

        assert_eq!(merged.badge, "Free forever");
        assert_eq!(merged.primary_href, "https://app.nebula.ai");
    }

    #[test]
    fn test_overrides_deserialize_from_partial_json() {
        let overrides: PricingOverrides =
            serde_json::from_str(r#"{ "title": "Plans" }"#).unwrap();
        let config = PricingConfig::with_overrides(overrides);

        assert_eq!(config.title, "Plans");
        assert_eq!(config.plans.len(), 3);
    }

    #[test]
    fn test_overrides_serialize_skips_unset_fields() {
        let overrides = NavbarOverrides {
            brand_name: Some("Orbit".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(json, serde_json::json!({ "brand_name": "Orbit" }));
    }

    #[test]
    fn test_default_destinations_match_template() {
        let navbar = NavbarConfig::default();
        let hrefs: Vec<&str> = navbar.nav_items.iter().map(|i| i.href.as_str()).collect();
        assert_eq!(hrefs, ["#features", "#about", "#contact"]);

        let pricing = PricingConfig::default();
        let plan_hrefs: Vec<&str> = pricing.plans.iter().map(|p| p.cta_href.as_str()).collect();
        assert_eq!(plan_hrefs, ["/signup/starter", "/signup/pro", "/contact/enterprise"]);

        let footer = FooterConfig::default();
        assert!(footer.social.iter().all(|l| l.href.starts_with("https://")));
        assert!(footer.company.iter().all(|l| l.href.starts_with('/')));
    }

    #[test]
    fn test_default_features_have_badges_only_in_features_section() {
        assert!(FeaturesConfig::default().features.iter().all(FeatureItem::has_badge));
        assert!(!HeroConfig::default().features.iter().any(FeatureItem::has_badge));
    }

    #[test]
    fn test_social_glyph_known_and_fallback() {
        assert_eq!(social_glyph("GitHub"), "🐙");
        assert_eq!(social_glyph(" twitter "), "🐦");
        assert_eq!(social_glyph("Mastodon"), "🔗");
    }

    #[test]
    fn test_validate_email_success() {
        assert_eq!(
            validate_email("  ada@nebula.ai "),
            Ok("ada@nebula.ai".to_string())
        );
    }

    #[test]
    fn test_validate_email_fails_on_empty() {
        assert_eq!(validate_email("   "), Err(SubscriptionError::Empty));
    }

    #[test]
    fn test_validate_email_fails_on_invalid() {
        for input in [
            "plainaddress",
            "@nebula.ai",
            "ada@",
            "ada@nebula",
            "ada@@nebula.ai",
            "ada@nebula..ai",
            "ada lovelace@nebula.ai",
        ] {
            assert_eq!(
                validate_email(input),
                Err(SubscriptionError::InvalidEmail(input.to_string())),
                "{input}"
            );
        }
    }
}
