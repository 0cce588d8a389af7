//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <strong>"CampusFinder"</strong>
                <p>"Helping students discover universities, merit requirements, and fees across Pakistan."</p>
            </div>
            <nav class="site-footer__links">
                <a href="/">"All Universities"</a>
                <a href="/disciplines">"Search by Discipline"</a>
                <a href="/rankings">"Search by Ranking"</a>
            </nav>
            <p class="site-footer__note">
                "Merit and fee figures are indicative. Confirm with each university before applying."
            </p>
        </footer>
    }
}
