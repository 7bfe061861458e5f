// ЭЛИТ СТРОЙ landing page — Leptos 0.8, client-side rendered

mod catalog;
mod filter;
mod format;
mod mortgage;
mod quiz;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBranding />
        <Nav />
        <main>
            <Hero />
            <Projects />
            <About />
            <Calculator />
            <Reviews />
            <Quiz />
            <Contact />
        </main>
        <Footer />
    }
}
