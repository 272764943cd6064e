use super::items::FeatureItem;
use crate::section_config;

const FEATURES: &[(&str, &str, &str, &str)] = &[
    (
        "🧠",
        "Neural Generation Engine",
        "Advanced neural networks that create unprecedented content with human-like creativity and precision",
        "Core Technology",
    ),
    (
        "⚡",
        "Lightning Processing",
        "Seamless real-time generation with cutting-edge optimization for instant creative workflows",
        "Performance",
    ),
    (
        "♾️",
        "Limitless Evolution",
        "Future-ready architecture that continuously learns and adapts to exceed your creative ambitions",
        "Scalability",
    ),
];

section_config! {
    pub struct FeaturesConfig / FeaturesOverrides {
        title: String = "Revolutionary AI Capabilities".into(),
        subtitle: String = "Breakthrough technology that transforms imagination into reality".into(),
        features: Vec<FeatureItem> = FEATURES
            .iter()
            .map(|(icon, title, desc, badge)| FeatureItem::new(*icon, *title, *desc).with_badge(*badge))
            .collect(),
        footnote: String = "Powered by next-generation neural architecture".into(),
    }
}
