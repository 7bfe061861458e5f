//! Console greeting for visitors who open the devtools.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::catalog::{EMAIL, PHONE};

fn banner() -> String {
    format!(
        r#"
  ЭЛИТ СТРОЙ
  Элитное загородное строительство

  {PHONE} | {EMAIL}
"#
    )
}

#[component]
pub fn ConsoleBranding() -> impl IntoView {
    Effect::new(move || print_banner());
    view! {}
}

fn print_banner() {
    if web_sys::window().is_some() {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", banner())),
            &JsValue::from_str("color: #c9a227; font-family: monospace; font-size: 12px;"),
        );
        web_sys::console::log_2(
            &JsValue::from_str("%cИщете работу в строительстве? Напишите нам."),
            &JsValue::from_str("color: #888;"),
        );
    }
}
