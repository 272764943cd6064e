use super::items::{links, LinkItem};
use crate::section_config;

pub const BRAND_NAME: &str = "Nebula AI";

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

section_config! {
    /// Top navigation bar.
    pub struct NavbarConfig / NavbarOverrides {
        brand_name: String = BRAND_NAME.into(),
        cta_text: String = "Get Started".into(),
        cta_href: String = "/get-started".into(),
        nav_items: Vec<LinkItem> = links(NAV_ITEMS),
    }
}
