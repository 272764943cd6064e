use leptos::prelude::*;

use crate::frontend::components::{ButtonVariant, NavButton};
use crate::models::{plan_icon, Merge, Plan, PricingConfig, PricingOverrides};
use crate::navigation::SmartNavigation;

#[component]
fn PlanCard(
    plan: Plan,
    index: usize,
    navigation: SmartNavigation,
    hovered: ReadSignal<Option<usize>>,
    set_hovered: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let popular = plan.popular;
    let has_badge = plan.has_badge();

    let card_class = move || {
        let emphasis = if popular {
            "ring-2 ring-cyan-500/50 shadow-2xl shadow-cyan-500/20"
        } else {
            "hover:border-cyan-500/30"
        };
        let hover = if hovered.get() == Some(index) {
            "shadow-2xl shadow-cyan-500/30 border-cyan-500/50"
        } else {
            ""
        };
        format!(
            "relative rounded-lg bg-slate-900/50 backdrop-blur-sm border border-slate-800 transition-all duration-500 hover:scale-105 {emphasis} {hover}"
        )
    };

    let badge_class = if popular {
        "px-4 py-1 rounded-full text-sm font-medium bg-cyan-500 text-slate-950"
    } else {
        "px-4 py-1 rounded-full text-sm font-medium bg-purple-500 text-white"
    };
    let icon_class = if popular {
        "p-3 rounded-full text-2xl bg-cyan-500/20"
    } else {
        "p-3 rounded-full text-2xl bg-purple-500/20"
    };
    let cta_variant = if popular {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    let features = plan
        .features
        .into_iter()
        .map(|feature| {
            view! {
                <div class="flex items-start gap-3">
                    <span class="flex-shrink-0 mt-0.5 text-cyan-400">"✓"</span>
                    <span class="text-slate-200">{feature}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class=card_class
            on:mouseenter=move |_| set_hovered.set(Some(index))
            on:mouseleave=move |_| set_hovered.set(None)
        >
            {has_badge.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2">
                    <span class=badge_class>{plan.badge}</span>
                </div>
            })}

            <div class="relative p-8">
                <div class="text-center mb-8">
                    <div class="flex items-center justify-center mb-4">
                        <span class=icon_class>{plan_icon(index)}</span>
                    </div>
                    <h3 class="text-2xl font-bold text-white mb-2">{plan.name}</h3>
                    <p class="text-slate-400 mb-4">{plan.description}</p>
                    <div class="flex items-baseline justify-center mb-6">
                        <span class="text-5xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                            {plan.price}
                        </span>
                        <span class="text-slate-400 ml-2">{plan.period}</span>
                    </div>
                </div>

                <div class="space-y-4 mb-8">{features}</div>

                <NavButton
                    href=plan.cta_href
                    navigation=navigation
                    variant=cta_variant
                    class="w-full py-4 text-lg"
                >
                    {plan.cta_text}
                </NavButton>
            </div>
        </div>
    }
}

#[component]
pub fn Pricing(
    navigation: SmartNavigation,
    #[prop(optional)] overrides: PricingOverrides,
) -> impl IntoView {
    let config = PricingConfig::with_overrides(overrides);
    let (hovered, set_hovered) = signal(None::<usize>);

    let cards = config
        .plans
        .into_iter()
        .enumerate()
        .map(|(index, plan)| {
            view! {
                <PlanCard
                    plan=plan
                    index=index
                    navigation=navigation.clone()
                    hovered=hovered
                    set_hovered=set_hovered
                />
            }
        })
        .collect_view();

    view! {
        <section id="pricing" class="relative bg-slate-950 py-20 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-500/5 via-slate-950 to-cyan-500/5"></div>

            <div class="relative container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                        {config.title}
                    </h2>
                    <p class="text-xl text-slate-400 max-w-3xl mx-auto">{config.subtitle}</p>
                </div>

                <div class="grid gap-8 md:grid-cols-3 max-w-7xl mx-auto">{cards}</div>

                <div class="text-center mt-16">
                    <p class="text-slate-400">{config.footnote}</p>
                </div>
            </div>
        </section>
    }
}
