//! Static marketing data: the project catalog, client reviews and contacts.
//!
//! Everything here is fixed at startup. Nothing is added, removed or mutated
//! at runtime; the filter only ever borrows from [`CATALOG`].

/// Architectural style of a catalog entry.
///
/// Closed enumeration at the core boundary; the display layer only ever
/// sees the label string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Modern,
    Minimalist,
    Classical,
}

impl Style {
    /// All selectable styles, in filter-panel order.
    pub const ALL: [Style; 3] = [Style::Modern, Style::Minimalist, Style::Classical];

    /// Display label as it appears in the filter panel and on card badges.
    pub fn label(self) -> &'static str {
        match self {
            Style::Modern => "Современный",
            Style::Minimalist => "Минимализм",
            Style::Classical => "Классический",
        }
    }
}

/// A single catalog entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Property {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    /// Square meters.
    pub area: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Whole rubles.
    pub price: u64,
    pub style: Style,
    pub floors: u32,
}

const IMG_AURORA: &str = "https://cdn.poehali.dev/projects/2dd7ce01-b58b-46b6-84ad-badad62b7ea9/files/d574fffb-caa9-4dbe-9aae-f0340e6dd461.jpg";
const IMG_HARMONY: &str = "https://cdn.poehali.dev/projects/2dd7ce01-b58b-46b6-84ad-badad62b7ea9/files/d8dd041d-f8a8-4a78-88df-6967a32ab18d.jpg";
const IMG_ELEGY: &str = "https://cdn.poehali.dev/projects/2dd7ce01-b58b-46b6-84ad-badad62b7ea9/files/912a5066-3f98-42b6-83cb-ae62f6d42834.jpg";

/// The full project catalog shown in the gallery.
pub static CATALOG: [Property; 6] = [
    Property {
        id: 1,
        title: "Резиденция Аврора",
        image: IMG_AURORA,
        area: 450,
        bedrooms: 5,
        bathrooms: 4,
        price: 85_000_000,
        style: Style::Modern,
        floors: 2,
    },
    Property {
        id: 2,
        title: "Вилла Гармония",
        image: IMG_HARMONY,
        area: 380,
        bedrooms: 4,
        bathrooms: 3,
        price: 72_000_000,
        style: Style::Minimalist,
        floors: 2,
    },
    Property {
        id: 3,
        title: "Особняк Элегия",
        image: IMG_ELEGY,
        area: 520,
        bedrooms: 6,
        bathrooms: 5,
        price: 95_000_000,
        style: Style::Classical,
        floors: 3,
    },
    Property {
        id: 4,
        title: "Резиденция Престиж",
        image: IMG_AURORA,
        area: 420,
        bedrooms: 4,
        bathrooms: 4,
        price: 78_000_000,
        style: Style::Modern,
        floors: 2,
    },
    Property {
        id: 5,
        title: "Вилла Магнат",
        image: IMG_HARMONY,
        area: 600,
        bedrooms: 7,
        bathrooms: 6,
        price: 120_000_000,
        style: Style::Modern,
        floors: 3,
    },
    Property {
        id: 6,
        title: "Особняк Тихая Гавань",
        image: IMG_ELEGY,
        area: 350,
        bedrooms: 3,
        bathrooms: 3,
        price: 65_000_000,
        style: Style::Minimalist,
        floors: 2,
    },
];

/// A client review card.
pub struct Review {
    pub quote: &'static str,
    pub author: &'static str,
    pub project: &'static str,
}

pub static REVIEWS: [Review; 3] = [
    Review {
        quote: "Профессиональная команда, которая воплотила все наши пожелания. \
                Качество строительства на высшем уровне!",
        author: "Александр К.",
        project: "Резиденция Аврора",
    },
    Review {
        quote: "Благодарим за индивидуальный подход и внимание к деталям. \
                Наш дом превзошёл все ожидания!",
        author: "Мария С.",
        project: "Вилла Гармония",
    },
    Review {
        quote: "Надёжная компания с безупречной репутацией. \
                Рекомендуем всем, кто ценит качество и стиль!",
        author: "Дмитрий В.",
        project: "Особняк Элегия",
    },
];

pub const PHONE: &str = "+7 (495) 123-45-67";
pub const EMAIL: &str = "info@elitstroi.ru";
pub const ADDRESS: &str = "Москва, Кутузовский пр-т, 32";
