mod common;

#[cfg(test)]
pub mod navigation_tests {
    use super::common::*;

    use nebula_landing::common::NavigationError;
    use nebula_landing::navigation::*;

    #[test]
    fn test_classify_fragment_success() {
        assert_eq!(
            classify("#features"),
            Ok(Destination::Fragment("features".into()))
        );
    }

    #[test]
    fn test_classify_trims_whitespace() {
        assert_eq!(
            classify("  /get-started \n"),
            Ok(Destination::Path("/get-started".into()))
        );
    }

    #[test]
    fn test_classify_fails_on_empty() {
        assert_eq!(classify(""), Err(NavigationError::Empty));
        assert_eq!(classify("   "), Err(NavigationError::Empty));
    }

    #[test]
    fn test_classify_fails_on_bare_hash() {
        assert_eq!(classify("#"), Err(NavigationError::EmptyFragment));
    }

    #[test]
    fn test_classify_protocol_relative_is_external() {
        assert_eq!(
            classify("//cdn.example.com/app.js"),
            Ok(Destination::External("//cdn.example.com/app.js".into()))
        );
    }

    #[test]
    fn test_classify_absolute_schemes_are_external() {
        for url in [
            "http://example.com",
            "https://github.com",
            "mailto:hello@nebula.ai",
            "tel:+15555550100",
        ] {
            assert_eq!(classify(url), Ok(Destination::External(url.into())), "{url}");
        }
    }

    #[test]
    fn test_classify_fails_on_missing_authority() {
        for dest in ["https:", "https://", "http:/", "//", "http:example.com", "https:///x", "//?q=1"] {
            assert_eq!(
                classify(dest),
                Err(NavigationError::Malformed(dest.into())),
                "{dest}"
            );
            assert!(resolve(dest).is_none(), "{dest}");
        }
    }

    #[test]
    fn test_navigate_missing_authority_is_noop() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate("https://");
        navigation.navigate_in("//", LinkTarget::NewContext);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_classify_fragment_is_percent_decoded() {
        assert_eq!(
            classify("#caf%C3%A9"),
            Ok(Destination::Fragment("café".into()))
        );
        assert_eq!(
            resolve("#pricing%20plans"),
            NavigationAction::ScrollTo { id: "pricing plans".into() }
        );
    }

    #[test]
    fn test_classify_fails_on_fragment_with_invalid_utf8() {
        assert!(matches!(
            classify("#%FF%FE"),
            Err(NavigationError::Malformed(_))
        ));
    }

    #[test]
    fn test_classify_fails_on_unsafe_scheme() {
        assert_eq!(
            classify("javascript:alert(1)"),
            Err(NavigationError::UnsafeScheme("javascript".into()))
        );
        assert_eq!(
            classify("DATA:text/html,hi"),
            Err(NavigationError::UnsafeScheme("data".into()))
        );
    }

    #[test]
    fn test_classify_fails_on_relative_reference() {
        for dest in ["about", "./pricing", "?plan=pro", "../up"] {
            assert_eq!(
                classify(dest),
                Err(NavigationError::Malformed(dest.into())),
                "{dest}"
            );
        }
    }

    #[test]
    fn test_classify_fails_on_control_characters() {
        assert!(matches!(
            classify("/demo\u{0}x"),
            Err(NavigationError::Malformed(_))
        ));
    }

    #[test]
    fn test_destination_parse_and_display() {
        let dest: Destination = "#pricing".parse().unwrap();
        assert_eq!(dest.to_string(), "#pricing");
        assert_eq!(dest.as_str(), "pricing");
    }

    #[test]
    fn test_resolve_fragment_scrolls() {
        assert_eq!(
            resolve("#features"),
            NavigationAction::ScrollTo { id: "features".into() }
        );
    }

    #[test]
    fn test_resolve_path_routes_exactly() {
        assert_eq!(
            resolve("/signup/pro?ref=pricing#top"),
            NavigationAction::Route {
                path: "/signup/pro?ref=pricing#top".into()
            }
        );
    }

    #[test]
    fn test_resolve_external_defaults_to_same_context() {
        assert_eq!(
            resolve("https://github.com"),
            NavigationAction::External {
                url: "https://github.com".into(),
                target: LinkTarget::SameContext,
            }
        );
    }

    #[test]
    fn test_resolve_with_new_context_for_web_urls() {
        assert_eq!(
            resolve_with("https://twitter.com", LinkTarget::NewContext),
            NavigationAction::External {
                url: "https://twitter.com".into(),
                target: LinkTarget::NewContext,
            }
        );
    }

    #[test]
    fn test_resolve_with_new_context_downgraded_for_mailto() {
        assert_eq!(
            resolve_with("mailto:sales@nebula.ai", LinkTarget::NewContext),
            NavigationAction::External {
                url: "mailto:sales@nebula.ai".into(),
                target: LinkTarget::SameContext,
            }
        );
    }

    #[test]
    fn test_resolve_with_new_context_ignored_for_paths() {
        assert_eq!(
            resolve_with("/about", LinkTarget::NewContext),
            NavigationAction::Route { path: "/about".into() }
        );
    }

    #[test]
    fn test_resolve_unresolvable_is_none() {
        for dest in ["", "#", "nonsense", "javascript:void(0)"] {
            assert!(resolve(dest).is_none(), "{dest}");
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for dest in ["#cta", "/demo", "https://github.com", ""] {
            assert_eq!(resolve(dest), resolve(dest));
        }
    }

    #[test]
    fn test_navigate_fragment_present_scrolls_without_route() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate("#features");
        assert_eq!(recorder.calls(), vec![Call::Scroll("features".into())]);
    }

    #[test]
    fn test_navigate_fragment_missing_is_silent() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate("#about");
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_navigate_path_pushes_route() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate("/get-started");
        assert_eq!(recorder.calls(), vec![Call::Route("/get-started".into())]);
    }

    #[test]
    fn test_navigate_external_never_routes() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate("http://example.com");
        navigation.navigate("https://github.com");
        navigation.navigate("mailto:hi@nebula.ai");

        let calls = recorder.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| matches!(c, Call::External(_, _))));
    }

    #[test]
    fn test_navigate_in_new_context() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate_in("https://github.com", LinkTarget::NewContext);
        assert_eq!(
            recorder.calls(),
            vec![Call::External("https://github.com".into(), LinkTarget::NewContext)]
        );
    }

    #[test]
    fn test_navigate_empty_is_noop() {
        let (navigation, recorder) = page_navigation();
        navigation.navigate("");
        navigation.navigate("   ");
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_navigate_swallows_browser_errors() {
        let recorder = RecordingNavigator::failing_external();
        let navigation = SmartNavigation::new(recorder.clone());
        navigation.navigate("https://github.com");
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_navigation_handle_clones_share_navigator() {
        let (navigation, recorder) = page_navigation();
        let other = navigation.clone();
        navigation.navigate("/demo");
        other.navigate("#cta");
        assert_eq!(
            recorder.calls(),
            vec![Call::Route("/demo".into()), Call::Scroll("cta".into())]
        );
    }
}
