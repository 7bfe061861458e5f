use leptos::prelude::*;

use super::icons::{ICON_STAR, Icon};
use crate::catalog::REVIEWS;

#[component]
pub fn Reviews() -> impl IntoView {
    view! {
        <section id="reviews" class="section section-muted">
            <div class="container">
                <h2 class="section-title">"Отзывы клиентов"</h2>
                <p class="section-subtitle">"Что говорят о нас наши клиенты"</p>

                <div class="reviews-grid">
                    {REVIEWS
                        .iter()
                        .map(|review| {
                            view! {
                                <div class="review-card">
                                    <div class="review-stars">
                                        {(0..5)
                                            .map(|_| view! { <Icon path=ICON_STAR size="20" class="star" /> })
                                            .collect_view()}
                                    </div>
                                    <p class="review-quote">{format!("\u{201C}{}\u{201D}", review.quote)}</p>
                                    <div class="review-author">{review.author}</div>
                                    <div class="review-project">{review.project}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
