//! Project gallery with the filter panel.
//!
//! Criteria live in one signal; the visible list is recomputed from the
//! static catalog on every change. No caching, the catalog is six cards.

use leptos::prelude::*;

use super::icons::{ICON_BATH, ICON_BED, ICON_HOUSE, Icon};
use crate::catalog::{CATALOG, Property, Style};
use crate::filter::{AREA_MAX, AREA_MIN, AREA_STEP, FilterCriteria, filter_catalog};
use crate::format::millions;

const BEDROOM_OPTIONS: [(Option<u32>, &str); 4] = [
    (None, "Все"),
    (Some(3), "3 спальни"),
    (Some(4), "4 спальни"),
    (Some(5), "5+ спален"),
];

#[component]
pub fn Projects() -> impl IntoView {
    let (criteria, set_criteria) = signal(FilterCriteria::default());

    let on_area_min = move |ev| {
        let value = event_target_value(&ev).parse().unwrap_or(AREA_MIN);
        set_criteria.update(|c| c.area.0 = value);
    };
    let on_area_max = move |ev| {
        let value = event_target_value(&ev).parse().unwrap_or(AREA_MAX);
        set_criteria.update(|c| c.area.1 = value);
    };

    view! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class="section-title">"Наши проекты"</h2>
                <p class="section-subtitle">"Эксклюзивные резиденции премиум-класса"</p>

                <div class="filter-panel">
                    <h3 class="filter-title">"Фильтры"</h3>
                    <div class="filter-grid">
                        <div class="filter-group">
                            <label class="filter-label">
                                {move || {
                                    let (lo, hi) = criteria.get().area;
                                    format!("Площадь: {lo} - {hi} м²")
                                }}
                            </label>
                            <input
                                type="range"
                                class="range-slider"
                                min=AREA_MIN
                                max=AREA_MAX
                                step=AREA_STEP
                                prop:value=move || criteria.get().area.0.to_string()
                                on:input=on_area_min
                            />
                            <input
                                type="range"
                                class="range-slider"
                                min=AREA_MIN
                                max=AREA_MAX
                                step=AREA_STEP
                                prop:value=move || criteria.get().area.1.to_string()
                                on:input=on_area_max
                            />
                        </div>

                        <div class="filter-group">
                            <label class="filter-label">"Количество спален"</label>
                            {BEDROOM_OPTIONS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <label class="radio-option">
                                            <input
                                                type="radio"
                                                name="bedrooms"
                                                prop:checked=move || criteria.get().bedrooms == value
                                                on:change=move |_| set_criteria.update(|c| c.bedrooms = value)
                                            />
                                            {label}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="filter-group">
                            <label class="filter-label">"Стиль"</label>
                            <label class="radio-option">
                                <input
                                    type="radio"
                                    name="style"
                                    prop:checked=move || criteria.get().style.is_none()
                                    on:change=move |_| set_criteria.update(|c| c.style = None)
                                />
                                "Все стили"
                            </label>
                            {Style::ALL
                                .into_iter()
                                .map(|style| {
                                    view! {
                                        <label class="radio-option">
                                            <input
                                                type="radio"
                                                name="style"
                                                prop:checked=move || criteria.get().style == Some(style)
                                                on:change=move |_| set_criteria.update(|c| c.style = Some(style))
                                            />
                                            {style.label()}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="projects-grid">
                    {move || {
                        let visible = filter_catalog(&CATALOG, &criteria.get());
                        if visible.is_empty() {
                            view! {
                                <div class="projects-empty">
                                    "По выбранным фильтрам ничего не найдено"
                                </div>
                            }
                            .into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|property| view! { <ProjectCard property=property /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(property: &'static Property) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-image">
                <img src=property.image alt=property.title />
                <span class="project-badge">{property.style.label()}</span>
            </div>
            <div class="project-body">
                <h3 class="project-title">{property.title}</h3>
                <ul class="project-specs">
                    <li>
                        <Icon path=ICON_HOUSE size="18" />
                        {format!("{} м²", property.area)}
                    </li>
                    <li>
                        <Icon path=ICON_BED size="18" />
                        {format!("{} спален", property.bedrooms)}
                    </li>
                    <li>
                        <Icon path=ICON_BATH size="18" />
                        {format!("{} санузла", property.bathrooms)}
                    </li>
                </ul>
                <div class="project-footer">
                    <span class="project-price">{format!("{} млн ₽", millions(property.price))}</span>
                    <a href="#quiz" class="btn btn-outline-dark">"Подробнее"</a>
                </div>
            </div>
        </article>
    }
}
