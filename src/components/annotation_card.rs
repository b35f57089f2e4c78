//! Collapsible card shell shared by every annotation panel.
//!
//! DESIGN
//! ======
//! The body is created once and kept in the DOM across collapse; collapsing
//! only toggles a visibility class, so an in-flight fetch still lands in its
//! slot. `on_expand` fires on every open and the owning panel decides
//! whether that starts a fetch.

use leptos::prelude::*;

/// Collapsible card with a heading button and a lazy content slot.
#[component]
pub fn AnnotationCard(
    /// Card heading text.
    title: &'static str,
    /// Fired each time the card opens.
    on_expand: Callback<()>,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <section class="annotation-card" class:annotation-card--open=move || open.get()>
            <button
                type="button"
                class="annotation-card__header"
                on:click=move |_| {
                    let next = !open.get_untracked();
                    open.set(next);
                    if next {
                        on_expand.run(());
                    }
                }
            >
                <span class="annotation-card__caret" aria-hidden="true">"\u{25b8}"</span>
                <span class="annotation-card__title">{title}</span>
            </button>
            <div class="annotation-card__body">{children()}</div>
        </section>
    }
}
