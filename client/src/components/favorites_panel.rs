//! Slide-over listing saved universities.

use catalog::format::{format_fee_pkr, format_merit};
use catalog::selection::resolve;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::catalog::CatalogState;
use crate::state::selection::SelectionState;
use crate::state::ui::UiState;

/// Favorites panel; opening a record's details closes the panel.
#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let saved = move || {
        let ids = selection.with(|s| s.favorites.ids().to_vec());
        catalog.with(|c| resolve(&c.catalog, &ids).into_iter().cloned().collect::<Vec<_>>())
    };
    let on_close = move |_| ui.update(|u| u.favorites_open = false);

    let list = move || {
        let saved = saved();
        if saved.is_empty() {
            return view! {
                <div class="favorites__empty">
                    <p>"No favorites yet"</p>
                    <p class="favorites__hint">"Tap the heart on a university card to save it here."</p>
                </div>
            }
            .into_any();
        }
        let items = saved
            .into_iter()
            .map(|u| {
                let view_id = u.id.clone();
                let remove_id = u.id.clone();
                view! {
                    <li class="favorites__item">
                        <div class="favorites__info">
                            <span class="favorites__name">{u.name.clone()}</span>
                            <span class="favorites__meta">
                                {u.city.clone()} " · " {format_merit(u.merit)} " · " {format_fee_pkr(u.fee)}
                            </span>
                        </div>
                        <button class="btn btn--ghost" on:click=move |_| ui.update(|s| s.view_favorite(&view_id))>
                            "Details"
                        </button>
                        <button
                            class="btn btn--ghost"
                            title="Remove from favorites"
                            on:click=move |_| {
                                selection.update(|s| {
                                    s.favorites.remove(&remove_id);
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! { <ul class="favorites__list">{items}</ul> }.into_any()
    };

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <aside class="favorites" on:click=move |ev| ev.stop_propagation()>
                <div class="favorites__header">
                    <h3>"Saved Universities"</h3>
                    <span class="badge">{move || selection.with(|s| s.favorites.len())}</span>
                    <button class="btn btn--ghost" on:click=on_close>"Close"</button>
                </div>
                {list}
            </aside>
        </div>
    }
}
