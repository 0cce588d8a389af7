//! Collapsible filter panel: facets, ranges, sort order, and reset.

#[cfg(test)]
#[path = "university_filters_test.rs"]
mod university_filters_test;

use catalog::FilterCriteria;
use catalog::SortKey;
use catalog::filter::{ALL_OPTION, FEE_CEILING, FEE_FLOOR, FEE_STEP, MERIT_CEILING, MERIT_FLOOR, parse_facet};
use catalog::format::format_fee_pkr;
use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;

/// Parse a merit bound, keeping `fallback` when the field is not a number.
fn parse_merit_input(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Parse a fee bound, keeping `fallback` when the field is not a whole number.
fn parse_fee_input(raw: &str, fallback: u64) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(fallback)
}

fn results_label(count: usize) -> String {
    if count == 1 {
        "1 university found".to_owned()
    } else {
        format!("{count} universities found")
    }
}

fn facet_value(selected: Option<&str>) -> String {
    selected.unwrap_or(ALL_OPTION).to_owned()
}

/// Render a facet `<select>` over `options`, bound to one criteria field.
fn facet_select(
    label: &'static str,
    all_label: &'static str,
    options: impl Fn() -> Vec<String> + Send + Sync + 'static,
    selected: impl Fn() -> String + Send + Sync + 'static,
    on_select: impl Fn(Option<String>) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select prop:value=selected on:change=move |ev| on_select(parse_facet(&event_target_value(&ev)))>
                <option value=ALL_OPTION>{all_label}</option>
                {move || {
                    options()
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Filter panel bound to the shared criteria. `result_count` is the size of
/// the currently visible grid.
#[component]
pub fn UniversityFilters(result_count: Signal<usize>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let criteria = expect_context::<RwSignal<FilterCriteria>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let expanded = move || ui.get().filters_expanded;
    let active_count = move || criteria.with(FilterCriteria::active_count);

    let on_toggle = move |_| ui.update(|u| u.filters_expanded = !u.filters_expanded);
    let on_reset = move |_| criteria.update(FilterCriteria::reset);

    let on_min_merit = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        criteria.update(|c| {
            let min = parse_merit_input(&raw, c.min_merit);
            c.set_merit_range(min, c.max_merit);
        });
    };
    let on_max_merit = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        criteria.update(|c| {
            let max = parse_merit_input(&raw, c.max_merit);
            c.set_merit_range(c.min_merit, max);
        });
    };
    let on_min_fee = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        criteria.update(|c| {
            let min = parse_fee_input(&raw, c.min_fee);
            c.set_fee_range(min, c.max_fee);
        });
    };
    let on_max_fee = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        criteria.update(|c| {
            let max = parse_fee_input(&raw, c.max_fee);
            c.set_fee_range(c.min_fee, max);
        });
    };
    let on_sort = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if let Ok(key) = raw.parse::<SortKey>() {
            criteria.update(|c| c.sort = key);
        }
    };

    view! {
        <section class="filters">
            <div class="filters__bar">
                <button class="btn filters__toggle" on:click=on_toggle>
                    "Filters"
                    <Show when=move || { active_count() > 0 }>
                        <span class="badge badge--accent">{active_count}</span>
                    </Show>
                </button>
                <span class="filters__results">{move || results_label(result_count.get())}</span>
                <label class="filters__sort">
                    <span class="field__label">"Sort by"</span>
                    <select prop:value=move || criteria.get().sort.as_str().to_owned() on:change=on_sort>
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <Show when=expanded>
                <div class="filters__panel">
                    {facet_select(
                        "City",
                        "All Cities",
                        move || catalog.with(|c| c.catalog.cities()),
                        move || facet_value(criteria.get().city.as_deref()),
                        move |value| criteria.update(|c| c.city = value),
                    )}
                    {facet_select(
                        "Discipline",
                        "All Disciplines",
                        move || catalog.with(|c| c.catalog.disciplines()),
                        move || facet_value(criteria.get().discipline.as_deref()),
                        move |value| criteria.update(|c| c.discipline = value),
                    )}
                    {facet_select(
                        "Province",
                        "All Provinces",
                        move || catalog.with(|c| c.catalog.provinces()),
                        move || facet_value(criteria.get().province.as_deref()),
                        move |value| criteria.update(|c| c.province = value),
                    )}
                    <fieldset class="field field--range">
                        <legend class="field__label">"Merit (%)"</legend>
                        <input
                            type="number"
                            min=MERIT_FLOOR.to_string()
                            max=MERIT_CEILING.to_string()
                            step="0.5"
                            prop:value=move || criteria.get().min_merit.to_string()
                            on:change=on_min_merit
                        />
                        <span>"to"</span>
                        <input
                            type="number"
                            min=MERIT_FLOOR.to_string()
                            max=MERIT_CEILING.to_string()
                            step="0.5"
                            prop:value=move || criteria.get().max_merit.to_string()
                            on:change=on_max_merit
                        />
                    </fieldset>
                    <fieldset class="field field--range">
                        <legend class="field__label">
                            "Annual Fee: "
                            {move || format_fee_pkr(criteria.get().min_fee)}
                            " – "
                            {move || format_fee_pkr(criteria.get().max_fee)}
                        </legend>
                        <input
                            type="range"
                            min=FEE_FLOOR.to_string()
                            max=FEE_CEILING.to_string()
                            step=FEE_STEP.to_string()
                            prop:value=move || criteria.get().min_fee.to_string()
                            on:input=on_min_fee
                        />
                        <input
                            type="range"
                            min=FEE_FLOOR.to_string()
                            max=FEE_CEILING.to_string()
                            step=FEE_STEP.to_string()
                            prop:value=move || criteria.get().max_fee.to_string()
                            on:input=on_max_fee
                        />
                    </fieldset>
                    <button class="btn btn--ghost filters__reset" on:click=on_reset>"Reset Filters"</button>
                </div>
            </Show>
        </section>
    }
}
