//! Arabic: right to left, Arabic-Indic digits.

use super::{build_layout, row};
use crate::models::{Direction as D, Layer, Layout, Locale, TextDirection};

const ARABIC_INDIC_DIGITS: &str = "٠١٢٣٤٥٦٧٨٩";

pub(super) fn layout() -> Layout {
    let main = Layer::new(vec![
        row(&[
            &[(D::Center, "ا")],
            &[(D::Center, "ل")],
            &[(D::Center, "ي")],
            &[
                (D::Center, "ج"),
                (D::TopLeft, "خ"),
                (D::Top, "ث"),
                (D::TopRight, "ش"),
                (D::Left, "ص"),
                (D::Right, "ض"),
                (D::BottomLeft, "ط"),
                (D::Bottom, "ظ"),
                (D::BottomRight, "غ"),
            ],
        ]),
        row(&[
            &[(D::Center, "م")],
            &[
                (D::Center, "و"),
                (D::TopLeft, "ت"),
                (D::Top, "ع"),
                (D::TopRight, "د"),
                (D::Left, "س"),
                (D::Right, "ف"),
                (D::BottomLeft, "ق"),
                (D::Bottom, "ك"),
                (D::BottomRight, "ح"),
            ],
            &[(D::Center, "ن")],
            &[(D::Center, "ذ"), (D::Top, "ز")],
        ]),
        row(&[
            &[(D::Center, "ه")],
            &[(D::Center, "ر")],
            &[(D::Center, "ب")],
            &[(D::Center, "ة"), (D::Top, "ء"), (D::Right, "ى")],
        ]),
    ]);

    build_layout("ar", "العربية", Locale::ARABIC, main)
        .with_digits(ARABIC_INDIC_DIGITS)
        .with_text_direction(TextDirection::Rtl)
}
