//! Ukrainian, stored as the differences from Russian.

use super::{build_layout, row, russian};
use crate::models::{Direction as D, Layer, Layout, Locale};

/// Only the zones where Ukrainian differs; everything else falls back.
fn sparse_layer() -> Layer {
    Layer::new(vec![
        row(&[&[], &[], &[], &[]]),
        row(&[
            &[],
            &[(D::BottomRight, "і")],
            &[],
            &[(D::TopRight, "є"), (D::Right, "ї")],
        ]),
        row(&[&[], &[], &[], &[(D::Center, "ґ")]]),
    ])
}

pub(super) fn layout() -> Layout {
    let main = sparse_layer().merge_fallback(&russian::main_layer(), false);
    build_layout("uk", "Українська", Locale::UKRAINIAN, main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Position};

    #[test]
    fn test_ukrainian_overrides_russian() {
        let main = layout().main_layer;
        let key = main.get_key(Position::new(1, 1)).unwrap();
        assert_eq!(key.action(D::BottomRight), Some(&Action::text("і")));
        // Shared letters come from the Russian grid
        assert_eq!(key.action(D::Center), Some(&Action::text("н")));
        let last = main.get_key(Position::new(2, 3)).unwrap();
        assert_eq!(last.action(D::Center), Some(&Action::text("ґ")));
    }
}
