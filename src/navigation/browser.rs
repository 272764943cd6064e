use std::sync::Arc;

use leptos_router::hooks::use_navigate;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::action::LinkTarget;
use super::navigator::{Navigator, SmartNavigation};
use crate::common::NavigationError;

type RouteFn = Arc<dyn Fn(&str) + Send + Sync>;

const NEW_CONTEXT_TARGET: &str = "_blank";
const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";

fn scroll_options() -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options
}

/// [`Navigator`] backed by the DOM and the Leptos router.
#[derive(Clone)]
pub struct BrowserNavigator {
    route: RouteFn,
}

impl BrowserNavigator {
    /// Must be called inside a `<Router>`.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            route: Arc::new(move |path: &str| navigate(path, Default::default())),
        }
    }

    pub fn into_navigation(self) -> SmartNavigation {
        SmartNavigation::new(self)
    }
}

impl Navigator for BrowserNavigator {
    fn scroll_into_view(&self, id: &str) -> Result<(), NavigationError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(NavigationError::Unavailable("document"))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| NavigationError::ElementNotFound(id.to_string()))?;

        element.scroll_into_view_with_scroll_into_view_options(&scroll_options());
        Ok(())
    }

    fn push_route(&self, path: &str) {
        (self.route)(path);
    }

    fn open_external(&self, url: &str, target: LinkTarget) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::Unavailable("window"))?;
        match target {
            LinkTarget::SameContext => window
                .location()
                .set_href(url)
                .map_err(|e| NavigationError::Browser(format!("{e:?}"))),
            LinkTarget::NewContext => window
                .open_with_url_and_target_and_features(url, NEW_CONTEXT_TARGET, NEW_CONTEXT_FEATURES)
                .map(|_| ())
                .map_err(|e| NavigationError::Browser(format!("{e:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_isolated_blank_window() {
        assert_eq!(NEW_CONTEXT_TARGET, "_blank");
        assert!(NEW_CONTEXT_FEATURES.split(',').any(|f| f == "noopener"));
        assert!(NEW_CONTEXT_FEATURES.split(',').any(|f| f == "noreferrer"));
    }
}
