use super::items::FeatureItem;
use crate::section_config;

const CTA_FEATURES: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Instant Generation",
        "Create stunning content in seconds with our breakthrough AI technology",
    ),
    (
        "✨",
        "Limitless Possibilities",
        "Transform any idea into reality with precision and intelligent automation",
    ),
    (
        "🚀",
        "Future-Ready",
        "Evolve with cutting-edge technology that scales with your ambitions",
    ),
];

section_config! {
    /// Closing call-to-action section.
    pub struct CtaConfig / CtaOverrides {
        title: String = "Ready to Transform Your Vision into Reality?".into(),
        subtitle: String = "Join thousands of innovators already using Nebula AI to revolutionize their creative process".into(),
        primary_cta: String = "Start Creating Now".into(),
        primary_href: String = "/signup".into(),
        secondary_cta: String = "Watch Demo".into(),
        secondary_href: String = "/demo".into(),
        features: Vec<FeatureItem> = CTA_FEATURES
            .iter()
            .map(|(icon, title, desc)| FeatureItem::new(*icon, *title, *desc))
            .collect(),
        badge: String = "No Credit Card Required".into(),
    }
}
