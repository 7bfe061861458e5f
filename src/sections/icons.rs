//! Inline SVG icons for the page.
//!
//! Hand-drawn single-path glyphs on a 256×256 viewBox, same rendering
//! contract everywhere: the section passes a path constant, the icon
//! renders it in `currentColor`.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// House silhouette (card area row)
pub const ICON_HOUSE: &str =
    "M128,28L20,124H48V228H108V164H148V228H208V124H236Z";

/// Bed with headboard (card bedrooms row)
pub const ICON_BED: &str =
    "M24,64V208H48V184H208V208H232V128a32,32,0,0,0-32-32H80V64ZM80,112h120a16,16,0,0,1,16,16v32H48V112Z";

/// Water drop (card bathrooms row)
pub const ICON_BATH: &str =
    "M128,24C128,24,56,114,56,164a72,72,0,0,0,144,0C200,114,128,24,128,24Zm0,196a56,56,0,0,1-56-56c0-33,38-90,56-113,18,23,56,80,56,113A56,56,0,0,1,128,220Z";

/// Five-point star (review ratings)
pub const ICON_STAR: &str =
    "M128,20l28,72,76,5-59,48,20,75-65-42-65,42,20-75L24,97l76-5Z";

/// Phone handset (contact card)
pub const ICON_PHONE: &str =
    "M82,32A26,26,0,0,0,56,58C56,156,100,200,198,200a26,26,0,0,0,26-26V140l-56-18-18,28c-26-10-44-28-54-54l28-18L106,22Z";

/// Envelope (contact card)
pub const ICON_MAIL: &str =
    "M24,52V204H232V52ZM128,140,52,76H204ZM44,92l84,72,84-72V184H44Z";

/// Map pin (contact card)
pub const ICON_MAP_PIN: &str =
    "M128,16A76,76,0,0,0,52,92c0,58,76,148,76,148s76-90,76-148A76,76,0,0,0,128,16Zm0,104a28,28,0,1,1,28-28A28,28,0,0,1,128,120Z";

/// Medal (about section)
pub const ICON_AWARD: &str =
    "M128,16A68,68,0,1,0,196,84,68,68,0,0,0,128,16Zm-42,118L62,240l66-34,66,34-24-106a84,84,0,0,1-84,0Z";

/// Shield (about section)
pub const ICON_SHIELD: &str =
    "M128,16,32,48v76c0,66,42,102,96,116,54-14,96-50,96-116V48Z";

/// Two people (about section)
pub const ICON_USERS: &str =
    "M92,116a38,38,0,1,0-38-38A38,38,0,0,0,92,116Zm76,0a38,38,0,1,0-38-38A38,38,0,0,0,168,116ZM92,132c-32,0-68,18-68,48v40H160V180C160,150,124,132,92,132Zm76,0a94,94,0,0,0-22,3c20,12,30,28,30,45v40h56V180C232,150,200,132,168,132Z";

/// Rising trend arrow (about section)
pub const ICON_TREND_UP: &str =
    "M232,56H164V80h27l-55,55-40-40-80,80,17,17,63-63,40,40,72-72v27h24Z";
