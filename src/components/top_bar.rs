//! Top navigation bar.

use leptos::prelude::*;

use super::search_box::SearchBox;
use crate::util::page;

/// Site-wide top bar with the brand link and the search box.
#[component]
pub fn TopBar() -> impl IntoView {
    let home = page::base_url();
    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href=home>"Genome annotation"</a>
            <SearchBox />
        </header>
    }
}
