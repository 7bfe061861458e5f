use leptos::prelude::*;

use super::icons::{ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, Icon};
use crate::catalog::{ADDRESS, EMAIL, PHONE};

#[component]
pub fn Contact() -> impl IntoView {
    let cards = [
        (ICON_PHONE, "Телефон", PHONE),
        (ICON_MAIL, "Email", EMAIL),
        (ICON_MAP_PIN, "Адрес", ADDRESS),
    ];

    view! {
        <section id="contact" class="section section-muted">
            <div class="container">
                <h2 class="section-title">"Контакты"</h2>
                <p class="section-subtitle">"Свяжитесь с нами любым удобным способом"</p>

                <div class="contact-grid">
                    {cards
                        .into_iter()
                        .map(|(icon, label, value)| {
                            view! {
                                <div class="contact-card">
                                    <Icon path=icon size="48" class="contact-icon" />
                                    <h3 class="contact-label">{label}</h3>
                                    <p class="contact-value">{value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
