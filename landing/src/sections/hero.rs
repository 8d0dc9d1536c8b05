//! The full-viewport hero section.
//!
//! Pure rendering: the record and its derived directives in, a painted
//! view out. All class/timing decisions happen in `hero-core`.

use hero_core::content::HeroRecord;
use hero_core::presentation::{
    Presentation, REVEAL_BUTTON, REVEAL_FOOTER, REVEAL_HEADING, REVEAL_LOGO, REVEAL_SUBHEADING,
};
use leptos::prelude::*;

#[component]
pub fn HeroSection(record: &'static HeroRecord) -> impl IntoView {
    let style = Presentation::of(record);
    let type_set = style.typography;

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img
                    class="hero-image"
                    src=record.background_image
                    alt=format!("{} background", record.company_name)
                />
                <div class=format!("hero-overlay {}", style.overlay)></div>
            </div>

            <div class="hero-body">
                <header class="hero-header">
                    <div
                        class=format!(
                            "hero-logo reveal rise {} {} {}",
                            type_set.logo, type_set.shadow, style.text,
                        )
                        style=REVEAL_LOGO.style()
                    >
                        {record.logo_text}
                    </div>
                </header>

                <div class=format!("hero-content {}", style.alignment)>
                    <div class="hero-copy">
                        <h1
                            class=format!(
                                "hero-heading reveal rise {} {} {}",
                                type_set.heading, type_set.shadow, style.text,
                            )
                            style=REVEAL_HEADING.style()
                        >
                            {record.main_copy}
                        </h1>
                        <p
                            class=format!(
                                "hero-subheading reveal rise {} {}",
                                type_set.subheading, style.text,
                            )
                            style=REVEAL_SUBHEADING.style()
                        >
                            {record.sub_copy}
                        </p>
                        <button
                            class=format!(
                                "btn reveal rise {} {}",
                                style.button, type_set.button_accent,
                            )
                            style=REVEAL_BUTTON.style()
                        >
                            {record.cta_text}
                            <svg class="btn-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M17 8l4 4m0 0l-4 4m4-4H3"
                                />
                            </svg>
                        </button>
                    </div>
                </div>

                <div class="hero-footer">
                    <div
                        class=format!("hero-industry reveal fade {}", style.text)
                        style=REVEAL_FOOTER.style()
                    >
                        {record.industry}
                    </div>
                </div>
            </div>
        </section>
    }
}
