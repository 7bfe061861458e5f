//! Lead-capture quiz section. The state machine lives in [`crate::quiz`];
//! this component only renders the current step and feeds events back.

use leptos::prelude::*;

use crate::quiz::{CONTACT_STEP, QuizState};

const THANK_YOU: &str = "Спасибо! Мы свяжемся с вами в ближайшее время.";

#[component]
pub fn Quiz() -> impl IntoView {
    let (state, set_state) = signal(QuizState::default());

    let on_submit = move |_| {
        let mut accepted = false;
        set_state.update(|s| accepted = s.submit());
        if accepted {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(THANK_YOU);
            }
        }
    };

    view! {
        <section id="quiz" class="section">
            <div class="container narrow">
                <h2 class="section-title">"Получить консультацию"</h2>
                <p class="section-subtitle">"Ответьте на несколько вопросов"</p>

                <div class="quiz-card">
                    <div class="quiz-progress">
                        {(0..=CONTACT_STEP)
                            .map(|index| {
                                view! {
                                    <div class=move || {
                                        if index <= state.get().step {
                                            "progress-segment filled"
                                        } else {
                                            "progress-segment"
                                        }
                                    }></div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="quiz-step-caption">
                        {move || {
                            let step = state.get().step;
                            if step < CONTACT_STEP {
                                format!("Шаг {} из {}", step + 1, CONTACT_STEP + 1)
                            } else {
                                "Последний шаг".to_string()
                            }
                        }}
                    </p>

                    {move || {
                        let current = state.get();
                        match current.current_question() {
                            Some(question) => {
                                let field = question.field;
                                let chosen = current.answers.get(field).to_string();
                                view! {
                                    <div class="quiz-step">
                                        <h3 class="quiz-question">{question.prompt}</h3>
                                        {question
                                            .options
                                            .iter()
                                            .map(|&option| {
                                                let chosen = chosen.clone();
                                                view! {
                                                    <label class="quiz-option">
                                                        <input
                                                            type="radio"
                                                            name="quiz-option"
                                                            prop:checked=move || chosen == option
                                                            on:change=move |_| {
                                                                set_state.update(|s| {
                                                                    s.answers.set(field, option.to_string())
                                                                })
                                                            }
                                                        />
                                                        {option}
                                                    </label>
                                                }
                                            })
                                            .collect_view()}
                                        <div class="quiz-actions">
                                            <Show when=move || { state.get().step > 0 }>
                                                <button
                                                    class="btn btn-outline-dark"
                                                    on:click=move |_| set_state.update(|s| s.retreat())
                                                >
                                                    "Назад"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn btn-accent"
                                                disabled=move || !state.get().can_advance()
                                                on:click=move |_| set_state.update(|s| s.advance())
                                            >
                                                "Далее"
                                            </button>
                                        </div>
                                    </div>
                                }
                                .into_any()
                            }
                            None => view! {
                                <div class="quiz-step">
                                    <h3 class="quiz-question">"Оставьте ваши контакты"</h3>
                                    <div class="quiz-form">
                                        <label class="filter-label" for="quiz-name">"Имя"</label>
                                        <input
                                            id="quiz-name"
                                            class="number-input"
                                            type="text"
                                            placeholder="Ваше имя"
                                            prop:value=move || state.get().answers.name.clone()
                                            on:input=move |ev| {
                                                set_state.update(|s| s.answers.name = event_target_value(&ev))
                                            }
                                        />
                                        <label class="filter-label" for="quiz-phone">"Телефон"</label>
                                        <input
                                            id="quiz-phone"
                                            class="number-input"
                                            type="tel"
                                            placeholder="+7 (___) ___-__-__"
                                            prop:value=move || state.get().answers.phone.clone()
                                            on:input=move |ev| {
                                                set_state.update(|s| s.answers.phone = event_target_value(&ev))
                                            }
                                        />
                                        <label class="filter-label" for="quiz-email">"Email"</label>
                                        <input
                                            id="quiz-email"
                                            class="number-input"
                                            type="email"
                                            placeholder="your@email.com"
                                            prop:value=move || state.get().answers.email.clone()
                                            on:input=move |ev| {
                                                set_state.update(|s| s.answers.email = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div class="quiz-actions">
                                        <button
                                            class="btn btn-outline-dark"
                                            on:click=move |_| set_state.update(|s| s.retreat())
                                        >
                                            "Назад"
                                        </button>
                                        <button
                                            class="btn btn-accent"
                                            disabled=move || !state.get().can_submit()
                                            on:click=on_submit
                                        >
                                            "Отправить заявку"
                                        </button>
                                    </div>
                                </div>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
