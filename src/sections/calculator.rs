//! Mortgage calculator section: four input+slider pairs on the left,
//! recomputed figures on the right.
//!
//! Sliders clamp to their bounds, the numeric fields do not; a zero term
//! typed by hand renders placeholders instead of a payment.

use leptos::prelude::*;

use crate::format::format_thousands;
use crate::mortgage::{
    AMOUNT_MAX, AMOUNT_MIN, AMOUNT_STEP, DOWN_PAYMENT_STEP, LoanInput, MortgageQuote, RATE_MAX,
    RATE_MIN, RATE_STEP, TERM_MAX, TERM_MIN, quote,
};

/// Placeholder shown when the input is degenerate (zero term).
const INVALID: &str = "—";

#[component]
pub fn Calculator() -> impl IntoView {
    let (input, set_input) = signal(LoanInput::default());
    let figures = Memo::new(move |_| quote(&input.get()));

    let ruble_figure = move |pick: fn(&MortgageQuote) -> f64| {
        move || match figures.get() {
            Ok(q) => format!("{} ₽", format_thousands(pick(&q))),
            Err(_) => INVALID.to_string(),
        }
    };

    let on_amount = move |ev| {
        let value = event_target_value(&ev).parse().unwrap_or(0.0);
        set_input.update(|i| i.amount = value);
    };
    let on_down_payment = move |ev| {
        let value = event_target_value(&ev).parse().unwrap_or(0.0);
        set_input.update(|i| i.down_payment = value);
    };
    let on_rate = move |ev| {
        let value = event_target_value(&ev).parse().unwrap_or(0.0);
        set_input.update(|i| i.annual_rate = value);
    };
    let on_term = move |ev| {
        let value = event_target_value(&ev).parse().unwrap_or(0);
        set_input.update(|i| i.term_years = value);
    };

    view! {
        <section id="calculator" class="section">
            <div class="container narrow">
                <h2 class="section-title">"Калькулятор ипотеки"</h2>
                <p class="section-subtitle">"Рассчитайте ежемесячный платёж"</p>

                <div class="calculator-card">
                    <div class="calculator-inputs">
                        <div class="input-group">
                            <label class="filter-label">"Стоимость недвижимости"</label>
                            <input
                                type="number"
                                class="number-input"
                                prop:value=move || input.get().amount.to_string()
                                on:input=on_amount
                            />
                            <input
                                type="range"
                                class="range-slider"
                                min=AMOUNT_MIN
                                max=AMOUNT_MAX
                                step=AMOUNT_STEP
                                prop:value=move || input.get().amount.to_string()
                                on:input=on_amount
                            />
                        </div>

                        <div class="input-group">
                            <label class="filter-label">"Первоначальный взнос"</label>
                            <input
                                type="number"
                                class="number-input"
                                prop:value=move || input.get().down_payment.to_string()
                                on:input=on_down_payment
                            />
                            <input
                                type="range"
                                class="range-slider"
                                min=0
                                max=move || input.get().amount.to_string()
                                step=DOWN_PAYMENT_STEP
                                prop:value=move || input.get().down_payment.to_string()
                                on:input=on_down_payment
                            />
                        </div>

                        <div class="input-group">
                            <label class="filter-label">"Процентная ставка (%)"</label>
                            <input
                                type="number"
                                class="number-input"
                                step=RATE_STEP
                                prop:value=move || input.get().annual_rate.to_string()
                                on:input=on_rate
                            />
                            <input
                                type="range"
                                class="range-slider"
                                min=RATE_MIN
                                max=RATE_MAX
                                step=RATE_STEP
                                prop:value=move || input.get().annual_rate.to_string()
                                on:input=on_rate
                            />
                        </div>

                        <div class="input-group">
                            <label class="filter-label">"Срок кредита (лет)"</label>
                            <input
                                type="number"
                                class="number-input"
                                prop:value=move || input.get().term_years.to_string()
                                on:input=on_term
                            />
                            <input
                                type="range"
                                class="range-slider"
                                min=TERM_MIN
                                max=TERM_MAX
                                step=1
                                prop:value=move || input.get().term_years.to_string()
                                on:input=on_term
                            />
                        </div>
                    </div>

                    <div class="calculator-results">
                        <h3 class="results-title">"Результаты расчёта"</h3>
                        <div class="result-row result-primary">
                            <div class="result-caption">"Ежемесячный платёж"</div>
                            <div class="result-figure accent">
                                {ruble_figure(|q| q.monthly_payment)}
                            </div>
                        </div>
                        <div class="result-row">
                            <div class="result-caption">"Сумма кредита"</div>
                            <div class="result-figure">{ruble_figure(|q| q.principal)}</div>
                        </div>
                        <div class="result-row">
                            <div class="result-caption">"Переплата по кредиту"</div>
                            <div class="result-figure">{ruble_figure(|q| q.total_interest)}</div>
                        </div>
                        <div class="result-row">
                            <div class="result-caption">"Общая сумма выплат"</div>
                            <div class="result-figure">{ruble_figure(|q| q.total_payment)}</div>
                        </div>
                        <a href="#quiz" class="btn btn-accent wide">"Оформить заявку"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
