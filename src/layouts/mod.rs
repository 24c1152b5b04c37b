//! Built-in layouts and the language-independent layers.
//!
//! Every letter layer has three rows so it can be chained with the symbol,
//! numeric and control layers. Columns past the third have no symbol
//! fallback and hold the letters that don't fit around the 3×3 core.

mod arabic;
mod english;
mod russian;
mod ukrainian;

use crate::models::{
    Action, Direction as D, KeyM, Layer, Layout, Locale, PassthroughKey, SearchDirection,
    TextBoundary,
};

/// Number of rows shared by every built-in layer.
pub const LAYER_ROWS: usize = 3;

/// Ids of the built-in layouts, in display order.
pub const BUILTIN_IDS: [&str; 4] = ["en", "ru", "uk", "ar"];

/// All built-in layouts, in display order.
#[must_use]
pub fn builtin_layouts() -> Vec<Layout> {
    BUILTIN_IDS.iter().filter_map(|id| builtin_layout(id)).collect()
}

/// Looks up a built-in layout by id.
#[must_use]
pub fn builtin_layout(id: &str) -> Option<Layout> {
    match id {
        "en" => Some(english::layout()),
        "ru" => Some(russian::layout()),
        "uk" => Some(ukrainian::layout()),
        "ar" => Some(arabic::layout()),
        _ => None,
    }
}

/// Builds a layout from static tables.
fn build_layout(id: &str, name: &str, locale: Locale, main_layer: Layer) -> Layout {
    Layout {
        id: id.to_string(),
        name: name.to_string(),
        locale,
        main_layer,
        shift_layer: None,
        numeric_layer: None,
        digits: crate::models::ASCII_DIGITS.to_string(),
        text_direction: crate::models::TextDirection::Ltr,
        symbol_overrides: Vec::new(),
    }
}

/// Shorthand for a row of text keys.
fn row(keys: &[&[(D, &str)]]) -> Vec<KeyM> {
    keys.iter().map(|bindings| KeyM::text(bindings)).collect()
}

/// Punctuation and brackets around the 3×3 letter core.
///
/// Zones are picked to stay clear of the letters of every built-in layout.
/// The English `z` deliberately covers `&`.
#[must_use]
pub fn symbols_layer() -> Layer {
    Layer::new(vec![
        row(&[
            &[(D::Right, "-"), (D::Bottom, "$")],
            &[
                (D::Left, "+"),
                (D::Right, "!"),
                (D::BottomLeft, "/"),
                (D::BottomRight, "\\"),
            ],
            &[(D::Left, "?"), (D::Right, "^"), (D::Bottom, "=")],
        ]),
        row(&[
            &[
                (D::Left, "("),
                (D::Top, "{"),
                (D::TopRight, "["),
                (D::Bottom, "%"),
                (D::BottomRight, "_"),
            ],
            &[],
            &[
                (D::Right, ")"),
                (D::Top, "}"),
                (D::TopLeft, "]"),
                (D::Bottom, "@"),
            ],
        ]),
        row(&[
            &[(D::Top, "<"), (D::Right, "*"), (D::Bottom, ",")],
            &[
                (D::Left, "\""),
                (D::Right, "'"),
                (D::Bottom, "."),
                (D::BottomLeft, ":"),
                (D::BottomRight, ";"),
            ],
            &[
                (D::Top, ">"),
                (D::Left, "&"),
                (D::Right, "#"),
                (D::Bottom, "~"),
            ],
        ]),
    ])
}

/// Digit pad in the layout's script, with arithmetic around the center key.
#[must_use]
pub fn numeric_layer(layout: &Layout) -> Layer {
    let digit = |n: usize| layout.digit(n).map(String::from).unwrap_or_default();
    let pad = |n: usize| KeyM::new([(D::Center, Action::text(digit(n)))]);

    let center = KeyM::new([
        (D::Center, Action::text(digit(5))),
        (D::TopLeft, Action::text("*")),
        (D::TopRight, Action::text("/")),
        (D::Left, Action::text("-")),
        (D::Right, Action::text("+")),
    ]);
    let eight = KeyM::new([
        (D::Center, Action::text(digit(8))),
        (D::Bottom, Action::text(digit(0))),
    ]);

    Layer::new(vec![
        vec![pad(1), pad(2), pad(3)],
        vec![pad(4), center, pad(6)],
        vec![
            pad(7).merge_fallback(&KeyM::text(&[(D::Bottom, ",")]), false),
            eight,
            pad(9).merge_fallback(&KeyM::text(&[(D::Bottom, ".")]), false),
        ],
    ])
}

/// Editing column: delete, space and enter keys with their commands.
#[must_use]
pub fn control_layer() -> Layer {
    let backspace = Action::backspace();
    let forward_delete = Action::Delete {
        direction: SearchDirection::Forwards,
        boundary: TextBoundary::Letter,
    };

    let delete_key = KeyM::new([
        (D::Center, backspace.clone()),
        (D::Right, forward_delete.clone()),
        (
            D::Left,
            Action::Delete {
                direction: SearchDirection::Backwards,
                boundary: TextBoundary::Word,
            },
        ),
        (D::Top, Action::Undo),
        (D::Bottom, Action::Redo),
    ])
    .with_fast_actions([(D::Left, backspace), (D::Right, forward_delete)]);

    let space_key = KeyM::new([
        (D::Center, Action::text(" ")),
        (D::Top, Action::ToggleShift),
        (D::Bottom, Action::ToggleSelect),
        (D::TopLeft, Action::Copy),
        (D::TopRight, Action::Paste),
        (D::BottomLeft, Action::Cut),
        (D::BottomRight, Action::SelectAll),
        (
            D::Left,
            Action::jump(SearchDirection::Backwards, TextBoundary::Word),
        ),
        (
            D::Right,
            Action::jump(SearchDirection::Forwards, TextBoundary::Word),
        ),
    ])
    .with_fast_actions([
        (
            D::Left,
            Action::jump(SearchDirection::Backwards, TextBoundary::Letter),
        ),
        (
            D::Right,
            Action::jump(SearchDirection::Forwards, TextBoundary::Letter),
        ),
    ]);

    let enter_key = KeyM::new([
        (D::Center, Action::Enter),
        (D::Top, Action::Settings),
        (D::Bottom, Action::SwitchKeyboard),
        (D::Left, Action::ToggleCtrl),
        (D::Right, Action::ToggleAlt),
        (D::TopLeft, Action::ToggleEmojiMode),
        (D::TopRight, Action::ToggleZalgo),
        (
            D::BottomLeft,
            Action::Key {
                key: PassthroughKey::Tab,
            },
        ),
        (
            D::BottomRight,
            Action::Key {
                key: PassthroughKey::Escape,
            },
        ),
    ])
    .with_hold(Action::Key {
        key: PassthroughKey::Escape,
    });

    Layer::new(vec![vec![delete_key], vec![space_key], vec![enter_key]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_resolves() {
        for id in BUILTIN_IDS {
            let layout = builtin_layout(id).unwrap();
            assert_eq!(layout.id, id);
            layout.validate().unwrap();
        }
        assert!(builtin_layout("xx").is_none());
        assert_eq!(builtin_layouts().len(), BUILTIN_IDS.len());
    }

    #[test]
    fn test_global_layers_share_row_count() {
        assert_eq!(symbols_layer().row_count(), LAYER_ROWS);
        assert_eq!(control_layer().row_count(), LAYER_ROWS);
        for layout in builtin_layouts() {
            assert_eq!(layout.main_layer.row_count(), LAYER_ROWS, "{}", layout.id);
            assert_eq!(numeric_layer(&layout).row_count(), LAYER_ROWS);
        }
    }

    #[test]
    fn test_numeric_layer_uses_layout_digits() {
        let arabic = builtin_layout("ar").unwrap();
        let numeric = numeric_layer(&arabic);
        let one = numeric.get_key(crate::models::Position::new(0, 0)).unwrap();
        assert_eq!(one.action(D::Center), Some(&Action::text("\u{661}")));
        let eight = numeric.get_key(crate::models::Position::new(2, 1)).unwrap();
        assert_eq!(eight.action(D::Bottom), Some(&Action::text("\u{660}")));
    }

    #[test]
    fn test_control_keys_have_fast_deletes() {
        let control = control_layer();
        let delete = control.get_key(crate::models::Position::new(0, 0)).unwrap();
        assert_eq!(delete.fast_actions.get(&D::Left), Some(&Action::backspace()));
    }
}
