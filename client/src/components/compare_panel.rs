//! Side-by-side comparison tray.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever records the owning page resolved from its compare set:
//! one column per record, a merit trend table once two or more records with
//! history are selected, and a prompt for the remaining free slots. A
//! refused add surfaces here as `notice`.

#[cfg(test)]
#[path = "compare_panel_test.rs"]
mod compare_panel_test;

use catalog::University;
use catalog::compare::{TrendRow, merit_trend, placeholder_text, shows_trend, short_name};
use catalog::format::{format_fee_pkr, format_merit, status_label};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

const LEGEND_NAME_CHARS: usize = 18;

fn trend_cell(merit: Option<f64>) -> String {
    merit.map_or_else(|| "–".to_owned(), format_merit)
}

/// Trend rows for the selection, or `None` when the table should be hidden.
fn trend_rows(selected: &[University]) -> Option<Vec<TrendRow>> {
    let refs: Vec<&University> = selected.iter().collect();
    shows_trend(&refs).then(|| merit_trend(&refs))
}

#[component]
pub fn ComparePanel(
    universities: Signal<Vec<University>>,
    limit: usize,
    notice: Signal<Option<String>>,
    on_remove: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let placeholder = move || placeholder_text(universities.with(Vec::len), limit);

    let columns = move || {
        universities
            .get()
            .into_iter()
            .map(|u| {
                let id = u.id.clone();
                view! {
                    <div class="compare__column">
                        <button class="compare__remove" title="Remove from comparison" on:click=move |_| on_remove.run(id.clone())>
                            "×"
                        </button>
                        <h4 class="compare__name">{u.name.clone()}</h4>
                        <p class="compare__place">{u.place()}</p>
                        <dl class="compare__facts">
                            <dt>"Ranking"</dt>
                            <dd>{format!("#{}", u.ranking)}</dd>
                            <dt>"Merit"</dt>
                            <dd>{format_merit(u.merit)}</dd>
                            <dt>"Annual Fee"</dt>
                            <dd>{format_fee_pkr(u.fee)}</dd>
                            <dt>"Degree"</dt>
                            <dd>{u.degree.clone()}</dd>
                            <dt>"Admission"</dt>
                            <dd>{u.admission.label().to_owned()}</dd>
                            <dt>"Status"</dt>
                            <dd>{status_label(u.active)}</dd>
                        </dl>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let trend = move || {
        let selected = universities.get();
        let Some(rows) = trend_rows(&selected) else {
            return ().into_any();
        };
        let headers = selected
            .iter()
            .map(|u| view! { <th title=u.name.clone()>{short_name(&u.name, LEGEND_NAME_CHARS)}</th> })
            .collect::<Vec<_>>();
        let body = rows
            .into_iter()
            .map(|row| {
                let cells = row
                    .merits
                    .into_iter()
                    .map(|m| view! { <td>{trend_cell(m)}</td> })
                    .collect::<Vec<_>>();
                view! {
                    <tr>
                        <th scope="row">{row.year}</th>
                        {cells}
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="compare__trend">
                <h4>"Merit Trend"</h4>
                <table class="compare__trend-table">
                    <thead>
                        <tr>
                            <th>"Year"</th>
                            {headers}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <aside class="compare">
            <div class="compare__header">
                <h3>"Compare Universities"</h3>
                <span class="compare__count">{move || format!("{}/{limit}", universities.with(Vec::len))}</span>
                <button class="btn btn--ghost" on:click=move |_| on_close.run(())>"Close"</button>
            </div>
            {move || notice.get().map(|text| view! { <p class="compare__notice" role="alert">{text}</p> })}
            <div class="compare__columns">
                {columns}
                {move || placeholder().map(|text| view! { <div class="compare__placeholder">{text}</div> })}
            </div>
            {trend}
        </aside>
    }
}
