//! Landing page with the site search.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Minimal landing route. The search box in the top bar is the entry point;
/// everything else on the portal home page is server rendered.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <TopBar/>
            <main class="home-page__intro">
                <p class="home-page__tagline">
                    "Search for a gene, transcript, or protein to browse its annotations."
                </p>
            </main>
        </div>
    }
}
