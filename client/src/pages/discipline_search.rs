//! Discipline search page: every university offering one discipline,
//! best rank first, with a four-slot compare tray.
//!
//! SYSTEM CONTEXT
//! ==============
//! The compare tray here is page-local and independent of the directory
//! page's three-slot tray. Favorites are shared with the rest of the app.

#[cfg(test)]
#[path = "discipline_search_test.rs"]
mod discipline_search_test;

use catalog::University;
use catalog::ranking::by_discipline;
use catalog::selection::{DISCIPLINE_COMPARE_LIMIT, resolve};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::compare_panel::ComparePanel;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::university_card::UniversityCard;
use crate::state::catalog::CatalogState;
use crate::state::selection::SelectionState;

/// Heading above the results, or `None` before a discipline is chosen.
fn discipline_heading(discipline: &str, count: usize) -> Option<String> {
    if discipline.trim().is_empty() {
        return None;
    }
    Some(match count {
        0 => format!("No universities offer {discipline}"),
        1 => format!("1 university offers {discipline}"),
        n => format!("{n} universities offer {discipline}"),
    })
}

#[component]
pub fn DisciplineSearchPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let local = RwSignal::new(SelectionState::with_compare_limit(DISCIPLINE_COMPARE_LIMIT));
    let discipline = RwSignal::new(String::new());

    let disciplines = move || catalog.with(|c| c.catalog.disciplines());
    let matching = Memo::new(move |_| {
        let selected = discipline.get();
        catalog.with(|c| {
            by_discipline(c.catalog.universities(), &selected)
                .into_iter()
                .cloned()
                .collect::<Vec<University>>()
        })
    });
    let heading = move || discipline_heading(&discipline.get(), matching.with(Vec::len));
    let compared = Signal::derive(move || {
        let ids = local.with(|s| s.compare.ids().to_vec());
        catalog.with(|c| resolve(&c.catalog, &ids).into_iter().cloned().collect::<Vec<_>>())
    });
    let notice = Signal::derive(move || local.with(|s| s.notice.clone()));

    let on_toggle_favorite = Callback::new(move |id: String| {
        selection.update(|s| {
            s.toggle_favorite(&id);
        });
    });
    let on_toggle_compare = Callback::new(move |id: String| {
        local.update(|s| {
            let _ = s.toggle_compare(&id);
        });
    });
    let on_remove_compare = Callback::new(move |id: String| {
        local.update(|s| {
            s.compare.remove(&id);
            s.clear_notice();
        });
    });
    let on_clear_compare = Callback::new(move |()| {
        local.update(|s| {
            s.compare.clear();
            s.clear_notice();
        });
    });

    let results = move || {
        if discipline.with(String::is_empty) {
            return view! { <p class="grid__status">"Choose a discipline to see which universities offer it."</p> }
                .into_any();
        }
        let cards = matching
            .get()
            .into_iter()
            .map(|u| {
                let favorite_id = u.id.clone();
                let compare_id = u.id.clone();
                let is_favorite = Signal::derive(move || selection.with(|s| s.favorites.contains(&favorite_id)));
                let is_selected = Signal::derive(move || local.with(|s| s.compare.contains(&compare_id)));
                view! {
                    <UniversityCard
                        university=u
                        is_favorite=is_favorite
                        is_selected=is_selected
                        on_toggle_favorite=on_toggle_favorite
                        on_toggle_compare=on_toggle_compare
                    />
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="grid">{cards}</div> }.into_any()
    };

    view! {
        <div class="page page--disciplines">
            <Header compact=true/>
            <main class="page__main">
                <section class="discipline-search">
                    <h1>"Search by Discipline"</h1>
                    <label class="field">
                        <span class="field__label">"Discipline"</span>
                        <select
                            prop:value=move || discipline.get()
                            on:change=move |ev| {
                                discipline.set(event_target_value(&ev));
                                on_clear_compare.run(());
                            }
                        >
                            <option value="">"Select a discipline"</option>
                            {move || {
                                disciplines()
                                    .into_iter()
                                    .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    {move || heading().map(|text| view! { <h2 class="discipline-search__heading">{text}</h2> })}
                </section>
                <section class="results">{results}</section>
            </main>

            <Show when=move || !local.with(|s| s.compare.is_empty()) || notice.with(Option::is_some)>
                <ComparePanel
                    universities=compared
                    limit=DISCIPLINE_COMPARE_LIMIT
                    notice=notice
                    on_remove=on_remove_compare
                    on_close=on_clear_compare
                />
            </Show>

            <Footer/>
        </div>
    }
}
