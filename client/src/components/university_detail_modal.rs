//! Modal with the full record for one university.

#[cfg(test)]
#[path = "university_detail_modal_test.rs"]
mod university_detail_modal_test;

use catalog::University;
use catalog::format::{deadline_or_tba, format_fee_pkr, format_merit, or_na, status_label};
use leptos::prelude::*;

use crate::util::dom::swap_to_fallback_image;

/// Labelled fields shown in the modal body, in display order.
fn detail_rows(u: &University) -> Vec<(&'static str, String)> {
    vec![
        ("City", or_na(Some(&u.city)).to_owned()),
        ("Province", or_na(Some(&u.province)).to_owned()),
        ("Degree", or_na(Some(&u.degree)).to_owned()),
        ("Discipline", or_na(Some(&u.discipline)).to_owned()),
        ("Merit", format_merit(u.merit)),
        ("Annual Fee", format_fee_pkr(u.fee)),
        ("Ranking", format!("#{}", u.ranking)),
        ("Admission", u.admission.label().to_owned()),
        ("Deadline", deadline_or_tba(u.deadline.as_deref()).to_owned()),
        ("Status", status_label(u.active).to_owned()),
        ("Phone", or_na(u.phone.as_deref()).to_owned()),
        ("Email", or_na(u.email.as_deref()).to_owned()),
        ("Website", or_na(u.website.as_deref()).to_owned()),
        ("Address", or_na(Some(&u.location.address)).to_owned()),
    ]
}

/// Merit history as `(year, merit)` display pairs, oldest first as stored.
fn history_rows(u: &University) -> Vec<(u16, String)> {
    u.merit_history
        .iter()
        .map(|point| (point.year, format_merit(point.merit)))
        .collect()
}

/// Detail dialog. Clicking the backdrop or pressing Escape closes it.
#[component]
pub fn UniversityDetailModal(
    university: University,
    is_favorite: Signal<bool>,
    on_toggle_favorite: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = university.id.clone();
    let rows = detail_rows(&university)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="dialog__detail-row">
                    <span class="dialog__detail-label">{label}</span>
                    <span class="dialog__detail-value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let history = history_rows(&university);
    let trend = (!history.is_empty()).then(|| {
        let body = history
            .into_iter()
            .map(|(year, merit)| {
                view! {
                    <tr>
                        <th scope="row">{year}</th>
                        <td>{merit}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="dialog__trend">
                <h3>"Merit Trend"</h3>
                <table class="compare__trend-table">
                    <thead>
                        <tr>
                            <th>"Year"</th>
                            <th>"Merit"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
    });
    let website = university.website.clone().filter(|w| !w.trim().is_empty());

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--detail"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <img
                    class="dialog__hero-image"
                    src=university.image_or_fallback().to_owned()
                    alt=university.name.clone()
                    on:error=move |ev| swap_to_fallback_image(&ev)
                />
                <div class="dialog__title-row">
                    {university
                        .logo_url
                        .clone()
                        .map(|logo| view! { <img class="dialog__logo" src=logo alt=""/> })}
                    <h2>{university.name.clone()}</h2>
                </div>

                <div class="dialog__details">{rows}</div>
                {trend}

                <div class="dialog__actions">
                    {website.map(|href| {
                        view! {
                            <a class="btn" href=href target="_blank" rel="noopener noreferrer">
                                "Visit Website"
                            </a>
                        }
                    })}
                    <button class="btn" on:click=move |_| on_toggle_favorite.run(id.clone())>
                        {move || if is_favorite.get() { "♥ Saved" } else { "♡ Save" }}
                    </button>
                    <button class="btn btn--primary" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
