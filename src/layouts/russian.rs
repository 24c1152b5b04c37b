//! Russian. The fourth column carries the letters that don't fit the core.

use super::{build_layout, row};
use crate::models::{Direction as D, Layer, Layout, Locale};

/// The Russian letter grid, also the fallback for Ukrainian.
pub(super) fn main_layer() -> Layer {
    Layer::new(vec![
        row(&[
            &[(D::Center, "о")],
            &[(D::Center, "е")],
            &[(D::Center, "а")],
            &[
                (D::Center, "ь"),
                (D::TopLeft, "г"),
                (D::Top, "з"),
                (D::TopRight, "б"),
                (D::Left, "ч"),
                (D::Right, "й"),
                (D::BottomLeft, "х"),
                (D::Bottom, "ж"),
                (D::BottomRight, "ш"),
            ],
        ]),
        row(&[
            &[(D::Center, "и")],
            &[
                (D::Center, "н"),
                (D::TopLeft, "л"),
                (D::Top, "к"),
                (D::TopRight, "м"),
                (D::Left, "д"),
                (D::Right, "п"),
                (D::BottomLeft, "у"),
                (D::Bottom, "я"),
                (D::BottomRight, "ы"),
            ],
            &[(D::Center, "т")],
            &[
                (D::Center, "ю"),
                (D::TopLeft, "ц"),
                (D::Top, "щ"),
                (D::TopRight, "э"),
                (D::Left, "ф"),
                (D::Right, "ъ"),
            ],
        ]),
        row(&[
            &[(D::Center, "с")],
            &[(D::Center, "р")],
            &[(D::Center, "в")],
            &[(D::Center, "ё")],
        ]),
    ])
}

pub(super) fn layout() -> Layout {
    build_layout("ru", "Русский", Locale::RUSSIAN, main_layer())
}
