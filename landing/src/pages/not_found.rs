// Fallback for slugs that resolve to nothing

use hero_core::content::{HOME_PATH, NOT_FOUND_BACK_LABEL, NOT_FOUND_HEADING};
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-inner">
                <h1 class="not-found-heading">{NOT_FOUND_HEADING}</h1>
                <a href=HOME_PATH class="not-found-link">
                    {NOT_FOUND_BACK_LABEL}
                </a>
            </div>
        </div>
    }
}
