use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::SubmitButton;
use crate::models::{social_glyph, validate_email, FooterConfig, FooterOverrides, LinkItem, Merge};
use crate::navigation::{LinkTarget, SmartNavigation};

#[derive(Clone, Debug, PartialEq)]
enum NewsletterStatus {
    Idle,
    Subscribed(String),
    Rejected(String),
}

#[component]
fn LinkColumn(
    #[prop(into)] heading: String,
    links: Vec<LinkItem>,
    navigation: SmartNavigation,
) -> impl IntoView {
    let items = links
        .into_iter()
        .map(|link| {
            let navigation = navigation.clone();
            let href = link.href.clone();
            view! {
                <li>
                    <button
                        type="button"
                        class="text-slate-400 hover:text-cyan-400 transition-colors duration-200 text-left"
                        data-href=link.href
                        on:click=move |_| navigation.navigate(&href)
                    >
                        {link.label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div>
            <h4 class="font-semibold text-white mb-4">{heading}</h4>
            <ul class="space-y-3">{items}</ul>
        </div>
    }
}

#[component]
pub fn Footer(
    navigation: SmartNavigation,
    #[prop(optional)] overrides: FooterOverrides,
) -> impl IntoView {
    let FooterConfig {
        brand_name,
        tagline,
        copyright,
        newsletter,
        company,
        legal,
        social,
    } = FooterConfig::with_overrides(overrides);

    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(NewsletterStatus::Idle);

    let success_message = newsletter.success_message.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get_untracked()) {
            Ok(_) => {
                set_email.set(String::new());
                set_status.set(NewsletterStatus::Subscribed(success_message.clone()));
            }
            Err(e) => set_status.set(NewsletterStatus::Rejected(e.to_string())),
        }
    };

    let social_buttons = social
        .into_iter()
        .map(|link| {
            let navigation = navigation.clone();
            let href = link.href.clone();
            view! {
                <button
                    type="button"
                    class="p-3 bg-slate-800/50 hover:bg-slate-700/50 border border-slate-700/50 rounded-lg text-slate-400 hover:text-cyan-400 transition-all duration-200"
                    aria-label=link.label.clone()
                    data-href=link.href
                    on:click=move |_| navigation.navigate_in(&href, LinkTarget::NewContext)
                >
                    {social_glyph(&link.label)}
                </button>
            }
        })
        .collect_view();

    view! {
        <footer id="footer" class="bg-slate-900 border-t border-slate-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="py-16 lg:py-20 grid gap-12 lg:grid-cols-12 lg:gap-16">
                    <div class="lg:col-span-6">
                        <div class="flex items-center gap-3 mb-6">
                            <span class="text-3xl">"⚡"</span>
                            <span class="font-bold text-2xl bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                                {brand_name}
                            </span>
                        </div>
                        <p class="text-slate-400 text-lg mb-8 max-w-md">{tagline}</p>

                        <div class="space-y-4">
                            <h3 class="text-xl font-semibold text-white">{newsletter.title}</h3>
                            <p class="text-slate-400">{newsletter.description}</p>
                            <form class="flex gap-3 max-w-md" novalidate=true on:submit=on_submit>
                                <input
                                    type="email"
                                    name="email"
                                    placeholder=newsletter.placeholder
                                    required=true
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    class="flex-1 px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-lg text-white placeholder-slate-500
                                           focus:outline-none focus:ring-2 focus:ring-cyan-500/50 focus:border-cyan-500/50"
                                />
                                <SubmitButton>{newsletter.button_text}" →"</SubmitButton>
                            </form>
                            {move || match status.get() {
                                NewsletterStatus::Idle => None,
                                NewsletterStatus::Subscribed(message) => Some(view! {
                                    <p class="text-sm text-emerald-400">"✓ "{message}</p>
                                }.into_any()),
                                NewsletterStatus::Rejected(message) => Some(view! {
                                    <p class="text-sm text-red-400">"✕ "{message}</p>
                                }.into_any()),
                            }}
                        </div>
                    </div>

                    <div class="lg:col-span-6 grid gap-8 sm:grid-cols-3">
                        <LinkColumn heading="Company" links=company navigation=navigation.clone() />
                        <LinkColumn heading="Legal" links=legal navigation=navigation.clone() />
                        <div>
                            <h4 class="font-semibold text-white mb-4">"Connect"</h4>
                            <div class="flex gap-4">{social_buttons}</div>
                        </div>
                    </div>
                </div>

                <div class="h-px bg-slate-800"></div>
                <div class="py-8 flex flex-col sm:flex-row justify-between items-center gap-4">
                    <p class="text-slate-500 text-sm">{copyright}</p>
                    <div class="flex items-center gap-6 text-sm text-slate-500">
                        <span>"Built with revolutionary AI technology"</span>
                        <div class="flex items-center gap-2">
                            <div class="w-2 h-2 bg-cyan-400 rounded-full animate-pulse"></div>
                            <span class="text-cyan-400 font-medium">"Live"</span>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
