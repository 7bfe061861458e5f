use leptos::prelude::*;

use super::COMPANY;
use crate::catalog::{EMAIL, PHONE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{COMPANY}</h3>
                        <p class="footer-muted">"Элитное загородное строительство премиум-класса"</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Компания"</h4>
                        <div class="footer-muted">
                            <p><a href="#about">"О нас"</a></p>
                            <p><a href="#projects">"Проекты"</a></p>
                            <p><a href="#reviews">"Отзывы"</a></p>
                        </div>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Услуги"</h4>
                        <div class="footer-muted">
                            <p>"Строительство"</p>
                            <p>"Проектирование"</p>
                            <p>"Дизайн интерьера"</p>
                        </div>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Контакты"</h4>
                        <div class="footer-muted">
                            <p>{PHONE}</p>
                            <p>{EMAIL}</p>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© 2024 {COMPANY}. Все права защищены.")}</p>
                </div>
            </div>
        </footer>
    }
}
