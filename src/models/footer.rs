use super::items::{links, LinkItem};
use super::navbar::BRAND_NAME;
use crate::section_config;

const COMPANY: &[(&str, &str)] = &[
    ("About", "/about"),
    ("Careers", "/careers"),
    ("Contact", "/contact"),
];

const LEGAL: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
];

const SOCIAL: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("Twitter", "https://twitter.com"),
];

section_config! {
    pub struct NewsletterConfig / NewsletterOverrides {
        title: String = "Stay ahead of the AI revolution".into(),
        description: String = "Get exclusive insights and early access to breakthrough features".into(),
        placeholder: String = "Enter your email".into(),
        button_text: String = "Subscribe".into(),
        success_message: String = "Thanks for subscribing! Check your inbox soon.".into(),
    }
}

section_config! {
    pub struct FooterConfig / FooterOverrides {
        brand_name: String = BRAND_NAME.into(),
        tagline: String = "Next-generation AI that transforms imagination into reality".into(),
        copyright: String = "© 2024 Nebula AI. All rights reserved.".into(),
        newsletter: NewsletterConfig = NewsletterConfig::default(),
        company: Vec<LinkItem> = links(COMPANY),
        legal: Vec<LinkItem> = links(LEGAL),
        /// Opened in a new browsing context.
        social: Vec<LinkItem> = links(SOCIAL),
    }
}

/// Glyph shown for a social link, chosen by its label.
pub fn social_glyph(label: &str) -> &'static str {
    match label.trim().to_ascii_lowercase().as_str() {
        "github" => "🐙",
        "twitter" | "x" => "🐦",
        "linkedin" => "💼",
        "email" | "mail" => "✉️",
        _ => "🔗",
    }
}
