//! Directory card for one university.
//!
//! DESIGN
//! ======
//! The card holds no selection state of its own. Membership flags arrive as
//! signals and toggles go back out as callbacks carrying the record id, so
//! the same card serves the directory grid (3-slot compare) and the
//! discipline page (4-slot compare).

#[cfg(test)]
#[path = "university_card_test.rs"]
mod university_card_test;

use catalog::University;
use catalog::format::{format_fee_pkr, format_merit};
use catalog::ranking::RankBadge;
use leptos::prelude::*;

use crate::util::dom::swap_to_fallback_image;

fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite { "♥" } else { "♡" }
}

fn compare_label(is_selected: bool) -> &'static str {
    if is_selected { "✓ Comparing" } else { "+ Compare" }
}

fn rank_badge_class(rank: u32) -> String {
    format!("badge badge--{}", RankBadge::for_rank(rank).css_modifier())
}

#[component]
pub fn UniversityCard(
    university: University,
    is_favorite: Signal<bool>,
    is_selected: Signal<bool>,
    on_toggle_favorite: Callback<String>,
    on_toggle_compare: Callback<String>,
    #[prop(optional)] on_view_details: Option<Callback<String>>,
) -> impl IntoView {
    let id = university.id.clone();
    let favorite_id = id.clone();
    let compare_id = id.clone();
    let badge_class = rank_badge_class(university.ranking);
    let badge_label = RankBadge::for_rank(university.ranking).label();
    let status_class = if university.admission.is_open() {
        "card__admission card__admission--open"
    } else {
        "card__admission card__admission--closed"
    };

    view! {
        <article class="card" class:card--selected=move || is_selected.get()>
            <div class="card__media">
                <img
                    class="card__image"
                    src=university.image_or_fallback().to_owned()
                    alt=university.name.clone()
                    loading="lazy"
                    on:error=move |ev| swap_to_fallback_image(&ev)
                />
                <span class=badge_class>{badge_label}</span>
                <button
                    class="card__favorite"
                    class:card__favorite--active=move || is_favorite.get()
                    title="Save to favorites"
                    on:click=move |_| on_toggle_favorite.run(favorite_id.clone())
                >
                    {move || favorite_label(is_favorite.get())}
                </button>
            </div>
            <div class="card__body">
                <h3 class="card__title">{university.name.clone()}</h3>
                <p class="card__place">{university.place()}</p>
                <p class="card__degree">{university.degree.clone()}</p>
                <dl class="card__facts">
                    <div>
                        <dt>"Merit"</dt>
                        <dd>{format_merit(university.merit)}</dd>
                    </div>
                    <div>
                        <dt>"Fee"</dt>
                        <dd>{format_fee_pkr(university.fee)}</dd>
                    </div>
                    <div>
                        <dt>"Admission"</dt>
                        <dd class=status_class>{university.admission.label().to_owned()}</dd>
                    </div>
                </dl>
            </div>
            <div class="card__actions">
                <button
                    class="btn"
                    class:btn--primary=move || is_selected.get()
                    on:click=move |_| on_toggle_compare.run(compare_id.clone())
                >
                    {move || compare_label(is_selected.get())}
                </button>
                {on_view_details.map(|on_view| {
                    let id = id.clone();
                    view! {
                        <button class="btn btn--ghost" on:click=move |_| on_view.run(id.clone())>
                            "View Details"
                        </button>
                    }
                })}
            </div>
        </article>
    }
}
