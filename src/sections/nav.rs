use super::COMPANY;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#home" class="nav-brand">{COMPANY}</a>
                <nav class="nav-links">
                    <a href="#home" class="nav-link">"Главная"</a>
                    <a href="#projects" class="nav-link">"Проекты"</a>
                    <a href="#about" class="nav-link">"О компании"</a>
                    <a href="#calculator" class="nav-link">"Калькулятор"</a>
                    <a href="#reviews" class="nav-link">"Отзывы"</a>
                    <a href="#contact" class="nav-link">"Контакты"</a>
                </nav>
                <a href="#quiz" class="btn btn-accent nav-cta">"Оставить заявку"</a>
            </div>
        </header>
    }
}
