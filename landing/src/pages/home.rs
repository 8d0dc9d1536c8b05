// Home page - carousel over every vertical

use hero_core::carousel::Carousel;
use hero_core::content::HERO_RECORDS;
use leptos::ev;
use leptos::prelude::*;

use crate::sections::HeroSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(HERO_RECORDS.len()));

    // Keyboard navigation: arrows step, digits jump. The listener lives
    // exactly as long as this view does.
    let listener = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let mut next = carousel.get_untracked();
        if next.handle_key(&ev.key()) {
            carousel.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    let step_back = move |_| {
        let mut next = carousel.get_untracked();
        next.previous();
        carousel.set(next);
    };

    view! {
        <div class="stage">
            {move || {
                let record = &HERO_RECORDS[carousel.get().index()];
                view! { <HeroSection record=record /> }
            }}
            <div class="stage-controls">
                <button class="round-control" on:click=step_back aria-label="前のヒーローへ">
                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M15 19l-7-7 7-7"
                        />
                    </svg>
                </button>
            </div>
        </div>
    }
}
