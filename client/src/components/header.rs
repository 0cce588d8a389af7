//! Site header with navigation and the favorites shortcut.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown on every page. The directory page renders the full header with the
//! favorites count; the search pages pass `compact` and get a back link
//! instead.

use leptos::prelude::*;

use crate::state::selection::SelectionState;
use crate::state::ui::UiState;

/// Top navigation bar.
#[component]
pub fn Header(#[prop(optional)] compact: bool) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let favorite_count = move || selection.get().favorites.len();
    let on_open_favorites = move |_| ui.update(|u| u.favorites_open = true);

    view! {
        <header class="site-header" class:site-header--compact=compact>
            <Show when=move || compact>
                <a href="/" class="site-header__back" title="Back to all universities">
                    "←"
                </a>
            </Show>
            <a href="/" class="site-header__brand">
                "CampusFinder"
            </a>
            <nav class="site-header__nav">
                <a href="/">"Universities"</a>
                <a href="/disciplines">"By Discipline"</a>
                <a href="/rankings">"Rankings"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <Show when=move || !compact>
                <button class="btn site-header__favorites" on:click=on_open_favorites title="Saved universities">
                    "♥ Favorites"
                    <span class="badge">{favorite_count}</span>
                </button>
            </Show>
        </header>
    }
}
