use leptos::prelude::*;

use crate::frontend::components::{ButtonVariant, CardTone, FeatureCard, NavButton};
use crate::models::{CtaConfig, CtaOverrides, Merge};
use crate::navigation::SmartNavigation;

#[component]
pub fn Cta(
    navigation: SmartNavigation,
    #[prop(optional)] overrides: CtaOverrides,
) -> impl IntoView {
    let config = CtaConfig::with_overrides(overrides);
    let (hovered, set_hovered) = signal(false);

    let cards = config
        .features
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature tone=CardTone::Compact /> })
        .collect_view();

    view! {
        <section id="cta" class="relative bg-slate-900 py-24 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-900/20 via-slate-900 to-cyan-900/20"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl"></div>
            <div class="absolute top-1/4 right-1/4 w-64 h-64 bg-cyan-500/10 rounded-full blur-3xl"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-purple-500/10 border border-purple-500/20 mb-8">
                        <span class="text-purple-400">"✨"</span>
                        <span class="text-sm text-purple-300">{config.badge}</span>
                    </div>

                    <h2 class="text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-purple-400 via-white to-cyan-400 bg-clip-text text-transparent leading-tight">
                        {config.title}
                    </h2>
                    <p class="text-xl text-slate-300 mb-12 max-w-2xl mx-auto leading-relaxed">{config.subtitle}</p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                        <div
                            on:mouseenter=move |_| set_hovered.set(true)
                            on:mouseleave=move |_| set_hovered.set(false)
                        >
                            <NavButton
                                href=config.primary_href
                                navigation=navigation.clone()
                                class="px-8 py-4 text-lg"
                            >
                                {config.primary_cta}
                                <span class=move || {
                                    if hovered.get() {
                                        "transition-transform duration-300 translate-x-1"
                                    } else {
                                        "transition-transform duration-300"
                                    }
                                }>"→"</span>
                            </NavButton>
                        </div>
                        <NavButton
                            href=config.secondary_href
                            navigation=navigation
                            variant=ButtonVariant::Outline
                            class="px-8 py-4 text-lg bg-transparent hover:border-purple-400 hover:text-purple-300"
                        >
                            {config.secondary_cta}
                        </NavButton>
                    </div>

                    <div class="grid gap-6 md:grid-cols-3 max-w-5xl mx-auto">{cards}</div>
                </div>
            </div>
        </section>
    }
}
