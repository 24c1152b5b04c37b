//! English, MessagEase-style.

use super::{build_layout, row};
use crate::models::{Direction as D, Layer, Layout, Locale, Position};

pub(super) fn layout() -> Layout {
    let main = Layer::new(vec![
        row(&[
            &[(D::Center, "a"), (D::BottomRight, "v")],
            &[(D::Center, "n"), (D::Bottom, "l")],
            &[(D::Center, "i"), (D::BottomLeft, "x")],
        ]),
        row(&[
            &[(D::Center, "h"), (D::Right, "k")],
            &[
                (D::Center, "o"),
                (D::TopLeft, "q"),
                (D::Top, "u"),
                (D::TopRight, "p"),
                (D::Left, "c"),
                (D::Right, "b"),
                (D::BottomLeft, "g"),
                (D::Bottom, "d"),
                (D::BottomRight, "j"),
            ],
            &[(D::Center, "r"), (D::Left, "m")],
        ]),
        row(&[
            &[(D::Center, "t"), (D::TopRight, "y")],
            &[(D::Center, "e"), (D::Top, "w")],
            &[(D::Center, "s"), (D::TopLeft, "f"), (D::Left, "z")],
        ]),
    ]);

    build_layout("en", "English", Locale::ENGLISH, main)
        .with_symbol_override(Position::new(2, 2), D::Left)
}
