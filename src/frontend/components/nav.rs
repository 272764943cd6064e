use leptos::prelude::*;

use super::{ButtonVariant, NavButton};
use crate::models::{Merge, NavbarConfig, NavbarOverrides};
use crate::navigation::SmartNavigation;

#[component]
pub fn Nav(
    navigation: SmartNavigation,
    #[prop(optional)] overrides: NavbarOverrides,
) -> impl IntoView {
    let config = NavbarConfig::with_overrides(overrides);
    let (menu_open, set_menu_open) = signal(false);

    let home = navigation.clone();
    let NavbarConfig {
        brand_name: brand,
        cta_text,
        cta_href,
        nav_items,
    } = config;

    let desktop_cta = cta_text.clone();

    let desktop_links = nav_items
        .iter()
        .cloned()
        .map(|item| {
            let navigation = navigation.clone();
            let href = item.href.clone();
            view! {
                <button
                    type="button"
                    class="text-slate-300 hover:text-cyan-400 transition-colors duration-300 font-medium relative group"
                    data-href=item.href
                    on:click=move |_| {
                        navigation.navigate(&href);
                        set_menu_open.set(false);
                    }
                >
                    <span>{item.label}</span>
                    <div class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-purple-400 to-cyan-400 group-hover:w-full transition-all duration-300"></div>
                </button>
            }
        })
        .collect_view();

    let mobile_links = nav_items
        .into_iter()
        .map(|item| {
            let navigation = navigation.clone();
            let href = item.href.clone();
            view! {
                <button
                    type="button"
                    class="text-slate-300 hover:text-cyan-400 transition-colors duration-300 font-medium text-left py-2 px-4 rounded-lg hover:bg-slate-800/50"
                    data-href=item.href
                    on:click=move |_| {
                        navigation.navigate(&href);
                        set_menu_open.set(false);
                    }
                >
                    {item.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-slate-900/95 backdrop-blur-md border-b border-slate-800/50">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        type="button"
                        class="flex items-center gap-2 cursor-pointer group"
                        on:click=move |_| home.navigate("/")
                    >
                        <span class="text-3xl group-hover:animate-bounce">"⚡"</span>
                        <span class="font-bold text-xl bg-gradient-to-r from-purple-400 via-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            {brand.clone()}
                        </span>
                    </button>

                    <div class="hidden md:flex items-center gap-8">
                        <div class="flex items-center gap-6">{desktop_links}</div>
                        <NavButton
                            href=cta_href.clone()
                            navigation=navigation.clone()
                            class="px-6 py-2"
                        >
                            {desktop_cta}
                        </NavButton>
                    </div>

                    <button
                        type="button"
                        class="md:hidden text-slate-300 hover:text-cyan-400 p-2 rounded-lg hover:bg-slate-800/50"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                        <span class="sr-only">"Toggle menu"</span>
                    </button>
                </div>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "md:hidden border-t border-slate-800 bg-slate-900 px-4 pb-6"
                } else {
                    "hidden"
                }
            }>
                <div class="flex items-center gap-2 py-4 border-b border-slate-800">
                    <span class="text-2xl">"⚡"</span>
                    <span class="font-bold text-lg bg-gradient-to-r from-purple-400 via-cyan-400 to-purple-400 bg-clip-text text-transparent">
                        {brand}
                    </span>
                </div>
                <div class="flex flex-col gap-4 mt-4">{mobile_links}</div>
                <NavButton
                    href=cta_href
                    navigation=navigation
                    variant=ButtonVariant::Primary
                    class="mt-4 w-full py-2"
                >
                    {cta_text}
                </NavButton>
            </div>
        </nav>
    }
}
