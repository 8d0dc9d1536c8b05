// /{slug} - one resolved vertical, or the not-found fallback

use hero_core::content::{HOME_PATH, find_record};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::NotFound;
use crate::sections::HeroSection;

#[component]
pub fn IndustryPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        <div class="stage">
            {move || {
                let slug = params.read().get("industry").unwrap_or_default();
                match find_record(&slug) {
                    Some(record) => view! {
                        <HeroSection record=record />
                        <div class="stage-controls">
                            <a href=HOME_PATH class="round-control" aria-label="トップページに戻る">
                                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M10 19l-7-7m0 0l7-7m-7 7h18"
                                    />
                                </svg>
                            </a>
                        </div>
                    }
                        .into_any(),
                    None => view! { <NotFound /> }.into_any(),
                }
            }}
        </div>
    }
}
