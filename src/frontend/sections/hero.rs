use std::time::Duration;

use leptos::prelude::*;

use crate::frontend::components::{ButtonVariant, CardTone, FeatureCard, NavButton};
use crate::models::{glow_opacity, next_glow_tick, HeroConfig, HeroOverrides, Merge, GLOW_TICK_MS};
use crate::navigation::SmartNavigation;

fn reveal(visible: bool, delay: &str) -> String {
    let state = if visible {
        "opacity-100 translate-y-0 scale-100"
    } else {
        "opacity-0 translate-y-8 scale-95"
    };
    format!("transition-all duration-1200 ease-out {delay} {state}")
}

#[component]
pub fn Hero(
    navigation: SmartNavigation,
    #[prop(optional)] overrides: HeroOverrides,
) -> impl IntoView {
    let config = HeroConfig::with_overrides(overrides);
    let (visible, set_visible) = signal(false);
    let (glow, set_glow) = signal(0u32);

    // Effects only run in the browser, so the timer never starts during SSR.
    Effect::new(move |_| {
        set_visible.set(true);
        match set_interval_with_handle(
            move || set_glow.update(|tick| *tick = next_glow_tick(*tick)),
            Duration::from_millis(GLOW_TICK_MS),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => tracing::warn!(error = ?e, "hero glow timer unavailable"),
        }
    });

    let features = config
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| view! { <FeatureCard feature=feature tone=CardTone::Glass index=index /> })
        .collect_view();

    view! {
        <section id="hero" class="relative min-h-screen bg-slate-900 overflow-hidden flex items-center pt-24">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-900/20 via-slate-900 to-cyan-900/20"></div>
            <div
                class="absolute top-1/4 left-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl animate-pulse"
                style=move || format!("opacity: {:.3}", glow_opacity(glow.get()).0)
            ></div>
            <div
                class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl animate-pulse"
                style=move || format!("opacity: {:.3}", glow_opacity(glow.get()).1)
            ></div>
            <div class="absolute top-1/3 right-1/3 w-32 h-32 bg-purple-400/5 rounded-full blur-xl animate-float"></div>
            <div class="absolute bottom-1/3 left-1/3 w-24 h-24 bg-cyan-400/5 rounded-full blur-xl animate-float-delayed"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div class=move || format!("mb-8 {}", reveal(visible.get(), ""))>
                        <span class="inline-flex items-center gap-2 bg-slate-800/50 border border-purple-500/30 text-purple-300 px-4 py-2 rounded-full text-sm font-medium backdrop-blur-sm animate-pulse-subtle">
                            <span class="animate-spin-slow">"✨"</span>
                            {config.badge}
                        </span>
                    </div>

                    <div class=move || format!("mb-6 {}", reveal(visible.get(), "delay-300"))>
                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-black leading-tight animate-float-gentle">
                            <span class="bg-gradient-to-r from-purple-400 via-cyan-400 to-purple-400 bg-clip-text text-transparent animate-gradient-x">
                                {config.title}
                            </span>
                        </h1>
                    </div>

                    <div class=move || format!("mb-12 {}", reveal(visible.get(), "delay-500"))>
                        <p class="text-xl sm:text-2xl text-slate-300 max-w-3xl mx-auto leading-relaxed">
                            {config.subtitle}
                        </p>
                    </div>

                    <div class=move || format!("mb-20 {}", reveal(visible.get(), "delay-700"))>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                            <NavButton
                                href=config.primary_href
                                navigation=navigation.clone()
                                class="px-8 py-4 text-lg shadow-2xl shadow-purple-500/25 hover:scale-105 animate-pulse-glow"
                            >
                                {config.primary_cta}
                                <span class="transition-transform">"→"</span>
                            </NavButton>
                            <NavButton
                                href=config.secondary_href
                                navigation=navigation
                                variant=ButtonVariant::Outline
                                class="px-8 py-4 text-lg hover:scale-105"
                            >
                                {config.secondary_cta}
                            </NavButton>
                        </div>
                    </div>

                    <div class=move || reveal(visible.get(), "delay-900")>
                        <div class="grid gap-8 md:grid-cols-3 max-w-5xl mx-auto">{features}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_switches_state_classes() {
        assert!(reveal(false, "delay-300").contains("opacity-0"));
        assert!(reveal(true, "delay-300").contains("opacity-100"));
        assert!(reveal(true, "delay-300").contains("delay-300"));
    }

    #[test]
    fn test_reveal_uses_slow_entrance() {
        assert!(reveal(true, "").contains("duration-1200"));
        assert!(reveal(false, "delay-900").contains("duration-1200 ease-out delay-900"));
    }
}
