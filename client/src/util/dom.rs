//! Small DOM helpers for image fallbacks and in-page navigation.
//!
//! All browser access is gated on the `hydrate` feature; SSR builds no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use catalog::format::FALLBACK_IMAGE_URL;

/// Anchor id of the results grid on the index page.
pub const RESULTS_SECTION_ID: &str = "universities";

/// Whether an image whose load failed should be pointed at the fallback.
///
/// The fallback itself never swaps again, so a broken fallback cannot loop.
pub fn needs_fallback(current_src: &str) -> bool {
    current_src != FALLBACK_IMAGE_URL
}

/// `on:error` handler for record images: replace the broken source with the
/// placeholder campus photo.
pub fn swap_to_fallback_image(ev: &leptos::ev::Event) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if needs_fallback(&img.src()) {
            img.set_src(FALLBACK_IMAGE_URL);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}

/// Scroll the element with `id` into view, if present.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
