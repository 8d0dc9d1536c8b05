// herofolio landing — Leptos 0.8 Edition

mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{HomePage, IndustryPage, NotFound};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/:industry") view=IndustryPage />
                </Routes>
            </main>
        </Router>
    }
}
