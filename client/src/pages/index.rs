//! Directory page: search, eligibility, filters, card grid, and the
//! compare/favorites/detail overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. The visible grid is a memo over the loaded
//! catalog and the shared filter criteria, so every criteria change
//! recomputes the full filter-then-sort pass.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use catalog::selection::resolve;
use catalog::{FilterCriteria, Toggle, University};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::compare_panel::ComparePanel;
use crate::components::eligibility_checker::EligibilityChecker;
use crate::components::favorites_panel::FavoritesPanel;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero_section::HeroSection;
use crate::components::university_card::UniversityCard;
use crate::components::university_detail_modal::UniversityDetailModal;
use crate::components::university_filters::UniversityFilters;
use crate::state::catalog::CatalogState;
use crate::state::selection::SelectionState;
use crate::state::ui::UiState;
use crate::util::dom::RESULTS_SECTION_ID;

/// What the results section should render.
#[derive(Clone, Debug, PartialEq, Eq)]
enum GridStatus {
    Loading,
    Failed(String),
    /// Catalog loaded but nothing matches the criteria.
    Empty,
    Results,
}

fn grid_status(state: &CatalogState, visible: usize) -> GridStatus {
    if state.loading {
        GridStatus::Loading
    } else if let Some(error) = &state.error {
        GridStatus::Failed(error.clone())
    } else if visible == 0 {
        GridStatus::Empty
    } else {
        GridStatus::Results
    }
}

/// Directory page.
#[component]
pub fn IndexPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let criteria = expect_context::<RwSignal<FilterCriteria>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visible = Memo::new(move |_| {
        catalog.with(|c| {
            criteria.with(|f| {
                f.apply(c.catalog.universities())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<University>>()
            })
        })
    });
    let result_count = Signal::derive(move || visible.with(Vec::len));
    let compared = Signal::derive(move || {
        let ids = selection.with(|s| s.compare.ids().to_vec());
        catalog.with(|c| resolve(&c.catalog, &ids).into_iter().cloned().collect::<Vec<_>>())
    });
    let compare_count = move || selection.with(|s| s.compare.len());
    let notice = Signal::derive(move || selection.with(|s| s.notice.clone()));

    let on_toggle_favorite = Callback::new(move |id: String| {
        selection.update(|s| {
            s.toggle_favorite(&id);
        });
    });
    // Adding opens the tray; a refused add also opens it so the notice is seen.
    let on_toggle_compare = Callback::new(move |id: String| {
        match selection.try_update(|s| s.toggle_compare(&id)) {
            Some(Ok(Toggle::Added) | Err(_)) => ui.update(|u| u.compare_open = true),
            Some(Ok(Toggle::Removed)) | None => {}
        }
    });
    let on_view_details = Callback::new(move |id: String| ui.update(|u| u.show_details(&id)));
    let on_remove_compare = Callback::new(move |id: String| {
        selection.update(|s| {
            s.compare.remove(&id);
            s.clear_notice();
        });
    });
    let on_close_compare = Callback::new(move |()| ui.update(|u| u.compare_open = false));
    let on_close_details = Callback::new(move |()| ui.update(UiState::close_details));
    let on_reset = move |_| criteria.update(FilterCriteria::reset);

    let grid = move || match catalog.with(|c| grid_status(c, result_count.get())) {
        GridStatus::Loading => view! { <p class="grid__status">"Loading universities…"</p> }.into_any(),
        GridStatus::Failed(error) => view! {
            <div class="grid__status grid__status--error">
                <p>"Could not load the university list."</p>
                <p class="grid__error-detail">{error}</p>
            </div>
        }
        .into_any(),
        GridStatus::Empty => view! {
            <div class="grid__empty">
                <h3>"No universities found matching your criteria"</h3>
                <p>"Try widening the merit or fee range, or clearing a filter."</p>
                <button class="btn" on:click=on_reset>"Reset Filters"</button>
            </div>
        }
        .into_any(),
        GridStatus::Results => {
            let cards = visible
                .get()
                .into_iter()
                .map(|u| {
                    let favorite_id = u.id.clone();
                    let compare_id = u.id.clone();
                    let is_favorite = Signal::derive(move || selection.with(|s| s.favorites.contains(&favorite_id)));
                    let is_selected = Signal::derive(move || selection.with(|s| s.compare.contains(&compare_id)));
                    view! {
                        <UniversityCard
                            university=u
                            is_favorite=is_favorite
                            is_selected=is_selected
                            on_toggle_favorite=on_toggle_favorite
                            on_toggle_compare=on_toggle_compare
                            on_view_details=on_view_details
                        />
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="grid">{cards}</div> }.into_any()
        }
    };

    let detail = move || {
        let id = ui.with(|u| u.detail_id.clone())?;
        let university = catalog.with(|c| c.catalog.get(&id).cloned())?;
        let is_favorite = Signal::derive(move || selection.with(|s| s.favorites.contains(&id)));
        Some(view! {
            <UniversityDetailModal
                university=university
                is_favorite=is_favorite
                on_toggle_favorite=on_toggle_favorite
                on_close=on_close_details
            />
        })
    };

    view! {
        <div class="page page--index">
            <Header/>
            <HeroSection/>
            <main class="page__main">
                <EligibilityChecker/>
                <UniversityFilters result_count=result_count/>
                <section id=RESULTS_SECTION_ID class="results">{grid}</section>
            </main>

            <Show when=move || { compare_count() > 0 && !ui.get().compare_open }>
                <button class="btn btn--primary compare-launcher" on:click=move |_| ui.update(|u| u.compare_open = true)>
                    {move || format!("Compare ({})", compare_count())}
                </button>
            </Show>
            <Show when=move || ui.get().compare_open>
                <ComparePanel
                    universities=compared
                    limit=selection.with_untracked(|s| s.compare.limit())
                    notice=notice
                    on_remove=on_remove_compare
                    on_close=on_close_compare
                />
            </Show>
            <Show when=move || ui.get().favorites_open>
                <FavoritesPanel/>
            </Show>
            {detail}

            <Footer/>
        </div>
    }
}
