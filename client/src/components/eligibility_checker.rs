//! Collapsible eligibility form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting the form rewrites the shared filter criteria so the grid shows
//! only universities whose merit the student meets and whose fee fits the
//! budget. The form keeps its own draft strings until submit.

#[cfg(test)]
#[path = "eligibility_checker_test.rs"]
mod eligibility_checker_test;

use catalog::FilterCriteria;
use catalog::eligibility::EligibilityInput;
use catalog::filter::ALL_OPTION;
use catalog::format::{format_fee_pkr, format_merit};
use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;
use crate::util::dom::{RESULTS_SECTION_ID, scroll_to_section};

/// One-line description of what a submitted form filters for.
fn eligibility_summary(input: &EligibilityInput) -> String {
    let mut summary = format!("Merit up to {}", format_merit(input.marks));
    if let Some(fee) = input.max_fee {
        summary.push_str(&format!(", fee up to {}", format_fee_pkr(fee)));
    }
    if let Some(city) = &input.city {
        summary.push_str(&format!(", in {city}"));
    }
    if let Some(discipline) = &input.discipline {
        summary.push_str(&format!(", {discipline}"));
    }
    summary
}

#[component]
pub fn EligibilityChecker() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let criteria = expect_context::<RwSignal<FilterCriteria>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let marks = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let city = RwSignal::new(ALL_OPTION.to_owned());
    let discipline = RwSignal::new(ALL_OPTION.to_owned());
    let applied = RwSignal::new(None::<String>);

    let cities = move || catalog.with(|c| c.catalog.cities());
    let disciplines = move || catalog.with(|c| c.catalog.disciplines());
    let expanded = move || ui.get().eligibility_expanded;

    let on_toggle = move |_| ui.update(|u| u.eligibility_expanded = !u.eligibility_expanded);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = EligibilityInput::from_form(&marks.get(), &budget.get(), &city.get(), &discipline.get());
        criteria.update(|c| input.apply_to(c));
        applied.set(Some(eligibility_summary(&input)));
        scroll_to_section(RESULTS_SECTION_ID);
    };

    view! {
        <section class="eligibility">
            <button class="eligibility__toggle" on:click=on_toggle>
                <span>"Check Your Eligibility"</span>
                <span class="eligibility__chevron">{move || if expanded() { "▲" } else { "▼" }}</span>
            </button>
            <Show when=expanded>
                <form class="eligibility__form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Your Marks (%)"</span>
                        <input
                            type="number"
                            min="0"
                            max="100"
                            step="0.01"
                            placeholder="e.g. 85"
                            prop:value=move || marks.get()
                            on:input=move |ev| marks.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Annual Budget (PKR)"</span>
                        <input
                            type="number"
                            min="0"
                            step="1000"
                            placeholder="No limit"
                            prop:value=move || budget.get()
                            on:input=move |ev| budget.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Preferred City"</span>
                        <select
                            prop:value=move || city.get()
                            on:change=move |ev| city.set(event_target_value(&ev))
                        >
                            <option value=ALL_OPTION>"All Cities"</option>
                            {move || {
                                cities()
                                    .into_iter()
                                    .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Discipline"</span>
                        <select
                            prop:value=move || discipline.get()
                            on:change=move |ev| discipline.set(event_target_value(&ev))
                        >
                            <option value=ALL_OPTION>"All Disciplines"</option>
                            {move || {
                                disciplines()
                                    .into_iter()
                                    .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit">"Find Eligible Universities"</button>
                </form>
                {move || applied.get().map(|summary| view! { <p class="eligibility__summary">{summary}</p> })}
            </Show>
        </section>
    }
}
