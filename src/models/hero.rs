use super::items::FeatureItem;
use crate::section_config;

const HERO_FEATURES: &[(&str, &str, &str)] = &[
    (
        "🧠",
        "Intelligent Generation",
        "Advanced AI that creates with precision and creativity beyond conventional limits",
    ),
    (
        "⚡",
        "Seamless Integration",
        "Intuitive interface makes cutting-edge AI accessible to all skill levels",
    ),
    (
        "✨",
        "Future-Ready Evolution",
        "Technology that evolves with your needs and scales with your ambitions",
    ),
];

section_config! {
    /// Above-the-fold hero section.
    pub struct HeroConfig / HeroOverrides {
        badge: String = "Revolutionary AI Technology".into(),
        title: String = "Transform Imagination into Reality".into(),
        subtitle: String = "Nebula AI delivers unprecedented generative capabilities that exceed current market standards. Experience the future of intelligent automation with seamless integration and limitless creative potential.".into(),
        primary_cta: String = "Get Started".into(),
        primary_href: String = "/get-started".into(),
        secondary_cta: String = "Watch Demo".into(),
        secondary_href: String = "/demo".into(),
        features: Vec<FeatureItem> = HERO_FEATURES
            .iter()
            .map(|(icon, title, desc)| FeatureItem::new(*icon, *title, *desc))
            .collect(),
    }
}

/// Interval between glow ticks, in milliseconds.
pub const GLOW_TICK_MS: u64 = 50;
/// Number of ticks in one glow cycle.
pub const GLOW_CYCLE: u32 = 100;

pub fn next_glow_tick(tick: u32) -> u32 {
    (tick + 1) % GLOW_CYCLE
}

/// Opacities of the two background glows for a tick in `0..GLOW_CYCLE`.
/// The first brightens while the second dims.
pub fn glow_opacity(tick: u32) -> (f64, f64) {
    let tick = f64::from(tick % GLOW_CYCLE);
    let cycle = f64::from(GLOW_CYCLE);
    (0.3 + tick / 300.0, 0.3 + (cycle - tick) / 300.0)
}
