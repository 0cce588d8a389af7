//! Root application component with routing and context providers.

use catalog::FilterCriteria;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{discipline_search::DisciplineSearchPage, index::IndexPage, ranking_search::RankingSearchPage};
use crate::state::{catalog::CatalogState, selection::SelectionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, starts the one-shot catalog fetch,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogState::loading());
    let criteria = RwSignal::new(FilterCriteria::default());
    let selection = RwSignal::new(SelectionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(catalog);
    provide_context(criteria);
    provide_context(selection);
    provide_context(ui);

    // The dataset is fetched once in the browser; SSR renders the loading state.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_catalog().await;
        catalog.set(CatalogState::from_result(result));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-finder.css"/>
        <Title text="CampusFinder"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("disciplines") view=DisciplineSearchPage/>
                <Route path=StaticSegment("rankings") view=RankingSearchPage/>
            </Routes>
        </Router>
    }
}
