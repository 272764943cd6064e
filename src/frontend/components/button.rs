use leptos::prelude::*;

use crate::navigation::{LinkTarget, SmartNavigation};

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-purple-600 to-cyan-600 hover:from-purple-500 hover:to-cyan-500 text-white border-0 shadow-lg hover:shadow-purple-500/25 focus:ring-purple-500",
            Self::Outline => "border-2 border-slate-600 bg-slate-800/50 text-slate-200 hover:bg-slate-700/50 hover:border-purple-500/50 backdrop-blur-sm focus:ring-slate-500",
            Self::Ghost => "text-slate-300 hover:text-cyan-400 hover:bg-slate-800/50 focus:ring-slate-500",
        }
    }
}

const BASE_CLASSES: &str = "relative inline-flex items-center justify-center gap-2 font-semibold rounded-xl transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-900";

/// Button that hands its `href` to the smart navigation on click.
#[component]
pub fn NavButton(
    children: Children,
    #[prop(into)] href: String,
    navigation: SmartNavigation,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] target: LinkTarget,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let classes = format!("{} {} {}", BASE_CLASSES, variant.classes(), class);
    let data_href = href.clone();

    view! {
        <button
            type="button"
            class=classes
            data-href=data_href
            aria-label=label
            on:click=move |_| navigation.navigate_in(&href, target)
        >
            {children()}
        </button>
    }
}

#[component]
pub fn SubmitButton(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let classes = format!(
        "{} {} px-6 py-3 {}",
        BASE_CLASSES,
        ButtonVariant::Primary.classes(),
        class
    );

    view! {
        <button type="submit" class=classes>
            {children()}
        </button>
    }
}
