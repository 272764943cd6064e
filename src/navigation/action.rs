use super::destination::{classify, Destination};

/// Browsing context an external destination opens in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkTarget {
    #[default]
    SameContext,
    NewContext,
}

/// What a click on a destination should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Smooth-scroll the element with this id into view.
    ScrollTo { id: String },
    /// Client-side route transition.
    Route { path: String },
    /// Full browser navigation.
    External { url: String, target: LinkTarget },
    /// Unresolvable destination; nothing happens.
    None,
}

impl NavigationAction {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Resolves a destination opening external links in the current context.
pub fn resolve(destination: &str) -> NavigationAction {
    resolve_with(destination, LinkTarget::SameContext)
}

/// Resolves a destination with the requested context for external links.
///
/// A [`LinkTarget::NewContext`] request only applies to web URLs; other
/// schemes such as `mailto:` always use the current context.
pub fn resolve_with(destination: &str, target: LinkTarget) -> NavigationAction {
    match classify(destination) {
        Ok(Destination::Fragment(id)) => NavigationAction::ScrollTo { id },
        Ok(Destination::Path(path)) => NavigationAction::Route { path },
        Ok(dest @ Destination::External(_)) => {
            let target = if dest.supports_new_context() {
                target
            } else {
                LinkTarget::SameContext
            };
            NavigationAction::External {
                url: dest.as_str().to_string(),
                target,
            }
        }
        Err(e) => {
            tracing::debug!(destination, error = %e, "ignoring unresolvable destination");
            NavigationAction::None
        }
    }
}
