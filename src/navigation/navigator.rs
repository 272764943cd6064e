use std::sync::Arc;

use super::action::{resolve_with, LinkTarget, NavigationAction};
use crate::common::NavigationError;

/// Environment capability the resolver dispatches into.
pub trait Navigator {
    /// Scrolls the element with `id` into view.
    fn scroll_into_view(&self, id: &str) -> Result<(), NavigationError>;

    /// Transitions to `path` without reloading the document.
    fn push_route(&self, path: &str);

    /// Performs a full navigation to `url`.
    fn open_external(&self, url: &str, target: LinkTarget) -> Result<(), NavigationError>;
}

/// Shared navigation handle passed to every section.
///
/// Cloning is cheap. Calls never fail from the caller's point of view:
/// unresolvable destinations and environment errors are logged and dropped.
#[derive(Clone)]
pub struct SmartNavigation {
    navigator: Arc<dyn Navigator + Send + Sync>,
}

impl SmartNavigation {
    pub fn new<N>(navigator: N) -> Self
    where
        N: Navigator + Send + Sync + 'static,
    {
        Self {
            navigator: Arc::new(navigator),
        }
    }

    pub fn navigate(&self, destination: &str) {
        self.navigate_in(destination, LinkTarget::SameContext);
    }

    /// Like [`navigate`](Self::navigate), opening web URLs in `target`.
    pub fn navigate_in(&self, destination: &str, target: LinkTarget) {
        let action = resolve_with(destination, target);
        self.dispatch(&action);
    }

    pub fn dispatch(&self, action: &NavigationAction) {
        let result = match action {
            NavigationAction::ScrollTo { id } => self.navigator.scroll_into_view(id),
            NavigationAction::Route { path } => {
                self.navigator.push_route(path);
                Ok(())
            }
            NavigationAction::External { url, target } => {
                self.navigator.open_external(url, *target)
            }
            NavigationAction::None => Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(e @ NavigationError::ElementNotFound(_)) => {
                tracing::debug!(error = %e, "scroll target missing");
            }
            Err(e) => {
                tracing::warn!(?action, error = %e, "navigation failed");
            }
        }
    }
}

impl std::fmt::Debug for SmartNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartNavigation").finish_non_exhaustive()
    }
}
