//! Hero banner with the directory search box and headline figures.

#[cfg(test)]
#[path = "hero_section_test.rs"]
mod hero_section_test;

use catalog::FilterCriteria;
use catalog::stats::CatalogStats;
use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::util::dom::{RESULTS_SECTION_ID, scroll_to_section};

/// Headline figures in display order as `(value, caption)` pairs.
fn stat_items(stats: &CatalogStats) -> Vec<(String, &'static str)> {
    vec![
        (stats.total.to_string(), "Universities"),
        (stats.programs.to_string(), "Programs"),
        (stats.cities.to_string(), "Cities"),
        (format!("{}%", stats.average_merit), "Average Merit"),
        (stats.open_admissions.to_string(), "Open Admissions"),
    ]
}

/// Search box bound to the shared filter query, plus catalog stats.
#[component]
pub fn HeroSection() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let criteria = expect_context::<RwSignal<FilterCriteria>>();

    let stats = Memo::new(move |_| catalog.with(|c| CatalogStats::from_universities(c.catalog.universities())));

    let on_query = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        criteria.update(|c| c.query = value);
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        scroll_to_section(RESULTS_SECTION_ID);
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">"Find Your Perfect University"</h1>
            <p class="hero__subtitle">
                "Compare merit, fees, and programs across Pakistan's universities in one place."
            </p>
            <form class="hero__search" on:submit=on_submit>
                <input
                    class="hero__search-input"
                    type="search"
                    placeholder="Search by university, city, degree, or discipline"
                    prop:value=move || criteria.get().query
                    on:input=on_query
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>
            <ul class="hero__stats">
                {move || {
                    stat_items(&stats.get())
                        .into_iter()
                        .map(|(value, caption)| {
                            view! {
                                <li class="hero__stat">
                                    <span class="hero__stat-value">{value}</span>
                                    <span class="hero__stat-caption">{caption}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
