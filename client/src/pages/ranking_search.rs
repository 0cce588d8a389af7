//! Ranking search page: look up one university's rank by name and show the
//! national top five.

#[cfg(test)]
#[path = "ranking_search_test.rs"]
mod ranking_search_test;

use catalog::University;
use catalog::format::{format_fee_pkr, format_merit};
use catalog::ranking::{Medal, find_by_name, top_ranked};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::catalog::CatalogState;

/// Size of the top-ranked list.
const TOP_LIST_SIZE: usize = 5;

fn medal_class(rank: u32) -> String {
    match Medal::for_rank(rank) {
        Some(medal) => format!("rank-medal rank-medal--{}", medal.css_modifier()),
        None => "rank-medal".to_owned(),
    }
}

fn not_found_message(query: &str) -> String {
    format!("No university found matching \"{}\"", query.trim())
}

fn ranked_row(u: &University) -> impl IntoView + use<> {
    view! {
        <li class="ranking__row">
            <span class=medal_class(u.ranking)>{format!("#{}", u.ranking)}</span>
            <div class="ranking__info">
                <span class="ranking__name">{u.name.clone()}</span>
                <span class="ranking__meta">{u.place()}</span>
            </div>
            <span class="ranking__merit">{format_merit(u.merit)}</span>
            <span class="ranking__fee">{format_fee_pkr(u.fee)}</span>
        </li>
    }
}

#[component]
pub fn RankingSearchPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let query = RwSignal::new(String::new());
    let submitted = RwSignal::new(None::<String>);

    let top = Memo::new(move |_| {
        catalog.with(|c| {
            top_ranked(c.catalog.universities(), TOP_LIST_SIZE)
                .into_iter()
                .cloned()
                .collect::<Vec<University>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get();
        submitted.set((!text.trim().is_empty()).then_some(text));
    };

    let result = move || {
        let searched = submitted.get()?;
        let found = catalog.with(|c| find_by_name(c.catalog.universities(), &searched).cloned());
        Some(match found {
            Some(u) => view! {
                <div class="ranking__result">
                    <h2>{u.name.clone()}</h2>
                    <ul class="ranking__list">{ranked_row(&u)}</ul>
                    <p class="ranking__degree">{u.degree.clone()}</p>
                </div>
            }
            .into_any(),
            None => view! { <p class="ranking__not-found">{not_found_message(&searched)}</p> }.into_any(),
        })
    };

    view! {
        <div class="page page--rankings">
            <Header compact=true/>
            <main class="page__main">
                <section class="ranking-search">
                    <h1>"Search by Ranking"</h1>
                    <form class="ranking-search__form" on:submit=on_submit>
                        <input
                            type="search"
                            placeholder="Enter a university name"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">"Find Rank"</button>
                    </form>
                    {result}
                </section>
                <section class="ranking-top">
                    <h2>"Top Ranked Universities"</h2>
                    <ol class="ranking__list">
                        {move || top.get().iter().map(ranked_row).collect::<Vec<_>>()}
                    </ol>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
