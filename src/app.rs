//! Application shell and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app mounts into the portal's feature page, so the router only needs
//! two routes: the feature view itself and a landing fallback. The heavy
//! lifting lives in `pages` and `components`.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::feature::FeaturePage;
use crate::pages::home::HomePage;

/// Root component wiring metadata and routes.
///
/// The feature route mirrors the portal URL scheme, where the displayed
/// feature arrives as the `feature_id` query parameter rather than a path
/// segment.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Feature annotations"/>
        <Router>
            <Routes fallback=|| view! { <HomePage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/feature") view=FeaturePage/>
            </Routes>
        </Router>
    }
}
