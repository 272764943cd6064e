use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav};
use crate::frontend::sections::{Cta, Features, Hero, Pricing};
use crate::navigation::BrowserNavigator;

/// Single landing page. Builds the navigation service once and hands it to
/// every section that has destinations.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigation = BrowserNavigator::from_router().into_navigation();

    view! {
        <div class="min-h-screen flex flex-col bg-slate-950 text-slate-100">
            <Nav navigation=navigation.clone() />
            <main class="flex-grow">
                <Hero navigation=navigation.clone() />
                <Features />
                <Pricing navigation=navigation.clone() />
                <Cta navigation=navigation.clone() />
            </main>
            <Footer navigation=navigation />
        </div>
    }
}
