use leptos::prelude::*;

use crate::frontend::components::{CardTone, FeatureCard};
use crate::models::{FeaturesConfig, FeaturesOverrides, Merge};

/// Static capability grid. Has no destinations of its own.
#[component]
pub fn Features(#[prop(optional)] overrides: FeaturesOverrides) -> impl IntoView {
    let config = FeaturesConfig::with_overrides(overrides);

    let cards = config
        .features
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature tone=CardTone::Glow /> })
        .collect_view();

    view! {
        <section id="features" class="relative bg-slate-950 py-24 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-500/5 via-transparent to-cyan-500/5"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-purple-400 via-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            {config.title}
                        </span>
                    </h2>
                    <p class="text-xl text-slate-400 max-w-3xl mx-auto leading-relaxed">{config.subtitle}</p>
                </div>

                <div class="grid gap-8 md:grid-cols-3 max-w-6xl mx-auto">{cards}</div>

                <div class="mt-20 text-center">
                    <div class="inline-flex items-center gap-2 px-6 py-3 rounded-full bg-cyan-500/10 border border-cyan-500/20">
                        <div class="w-2 h-2 bg-cyan-400 rounded-full animate-pulse"></div>
                        <span class="text-sm font-medium text-cyan-400">{config.footnote}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
