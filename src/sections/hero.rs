use leptos::prelude::*;

const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/2dd7ce01-b58b-46b6-84ad-badad62b7ea9/files/d574fffb-caa9-4dbe-9aae-f0340e6dd461.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    let backdrop = format!("background-image: url('{HERO_IMAGE}')");
    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop" style=backdrop>
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <h2 class="hero-title">
                    "Элитное строительство"
                    <br />
                    <span class="hero-title-accent">"вашей мечты"</span>
                </h2>
                <p class="hero-description">
                    "Создаём уникальные резиденции премиум-класса с безупречным "
                    "качеством и вниманием к деталям"
                </p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-accent">"Смотреть проекты"</a>
                    <a href="#quiz" class="btn btn-outline">"Консультация"</a>
                </div>
            </div>
        </section>
    }
}
