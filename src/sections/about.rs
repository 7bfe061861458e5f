use leptos::prelude::*;

use super::COMPANY;
use super::icons::{ICON_AWARD, ICON_SHIELD, ICON_TREND_UP, ICON_USERS, Icon};

const STATS: [(&str, &str); 4] = [
    ("150+", "Реализованных проектов"),
    ("15", "Лет на рынке"),
    ("98%", "Довольных клиентов"),
    ("50+", "Специалистов в команде"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section-muted">
            <div class="container about-grid">
                <div>
                    <h2 class="section-title left">"О компании"</h2>
                    <p class="about-text">
                        {COMPANY}
                        " — лидер в сфере элитного загородного строительства "
                        "с 15-летним опытом создания уникальных резиденций премиум-класса."
                    </p>
                    <div class="stats-grid">
                        {STATS
                            .into_iter()
                            .map(|(figure, caption)| {
                                view! {
                                    <div class="stat-tile">
                                        <div class="stat-figure">{figure}</div>
                                        <div class="stat-caption">{caption}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about-icons">
                    <Icon path=ICON_AWARD size="64" class="about-icon" />
                    <Icon path=ICON_SHIELD size="64" class="about-icon" />
                    <Icon path=ICON_USERS size="64" class="about-icon" />
                    <Icon path=ICON_TREND_UP size="64" class="about-icon" />
                </div>
            </div>
        </section>
    }
}
