//! Smart navigation: classify a destination string, then scroll, route or
//! leave the application.

mod action;
mod browser;
mod destination;
mod navigator;

pub use action::{resolve, resolve_with, LinkTarget, NavigationAction};
pub use browser::BrowserNavigator;
pub use destination::{classify, Destination};
pub use navigator::{Navigator, SmartNavigation};
