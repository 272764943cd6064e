use leptos::prelude::*;

use crate::models::FeatureItem;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum CardTone {
    /// Frosted card used under the hero.
    #[default]
    Glass,
    /// Larger card with a glowing icon and badge.
    Glow,
    /// Centered compact card used in the call-to-action.
    Compact,
}

#[component]
pub fn FeatureCard(
    feature: FeatureItem,
    #[prop(optional)] tone: CardTone,
    #[prop(optional)] index: usize,
) -> impl IntoView {
    let has_badge = feature.has_badge();
    let FeatureItem {
        icon,
        title,
        description,
        badge,
    } = feature;

    match tone {
        CardTone::Glass => view! {
            <div
                class="group relative bg-slate-800/30 backdrop-blur-sm border border-slate-700/50 rounded-2xl p-8
                       hover:border-purple-500/50 hover:bg-slate-800/50 transition-all duration-500
                       hover:shadow-2xl hover:shadow-purple-500/10 hover:scale-105 animate-fade-in-up"
                style=format!("animation-delay: {}ms; animation-duration: 800ms", 1100 + index * 200)
            >
                <div class="absolute inset-0 bg-gradient-to-r from-purple-500/5 to-cyan-500/5 rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                <div class="relative z-10">
                    <span class="block mb-6 text-4xl animate-float-icon">{icon}</span>
                    <h3 class="text-xl font-bold text-white mb-4 group-hover:text-purple-100 transition-colors">{title}</h3>
                    <p class="text-slate-400 leading-relaxed group-hover:text-slate-300 transition-colors">{description}</p>
                </div>
            </div>
        }
        .into_any(),
        CardTone::Glow => view! {
            <div class="group relative rounded-lg bg-slate-900/50 backdrop-blur-sm border border-slate-800
                        hover:border-cyan-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-cyan-500/20">
                <div class="absolute inset-0 bg-gradient-to-br from-purple-500/10 to-cyan-500/10 rounded-lg opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                <div class="relative p-8">
                    <div class="mb-6 relative">
                        <div class="absolute inset-0 w-16 h-16 bg-cyan-500/20 rounded-full blur-xl group-hover:blur-2xl transition-all duration-500"></div>
                        <div class="relative w-16 h-16 bg-gradient-to-br from-purple-500 to-cyan-500 rounded-full flex items-center justify-center text-3xl">
                            {icon}
                        </div>
                    </div>
                    {has_badge.then(|| view! {
                        <span class="inline-block mb-4 px-3 py-1 rounded-full text-xs font-medium bg-cyan-500/10 text-cyan-400 border border-cyan-500/20">
                            {badge}
                        </span>
                    })}
                    <h3 class="text-2xl font-bold text-white mb-4 group-hover:text-cyan-400 transition-colors duration-300">{title}</h3>
                    <p class="text-slate-400 leading-relaxed group-hover:text-slate-200 transition-colors duration-300">{description}</p>
                </div>
            </div>
        }
        .into_any(),
        CardTone::Compact => view! {
            <div class="group p-6 text-center rounded-lg bg-slate-800/50 border border-slate-700/50
                        hover:border-purple-500/30 hover:bg-slate-800/70 transition-all duration-300 backdrop-blur-sm">
                <div class="mb-4 flex justify-center">
                    <span class="p-3 rounded-xl text-3xl bg-gradient-to-br from-purple-500/20 to-cyan-500/20
                                 group-hover:from-purple-500/30 group-hover:to-cyan-500/30 transition-all duration-300">
                        {icon}
                    </span>
                </div>
                <h3 class="text-xl font-semibold text-white mb-3 group-hover:text-purple-300 transition-colors duration-300">{title}</h3>
                <p class="text-slate-400 leading-relaxed">{description}</p>
            </div>
        }
        .into_any(),
    }
}
