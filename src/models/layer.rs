//! Layer grid and the layer-level composition operators.

use crate::models::action::ActionClass;
use crate::models::key::KeyM;
use crate::models::locale::Locale;
use serde::{Deserialize, Serialize};

/// Position of a key in a layer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row (0-based, top to bottom)
    pub row: u8,
    /// Column (0-based, left to right)
    pub col: u8,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// One keyboard mode: a grid of keys.
///
/// All operators return new layers; inputs are never modified.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer {
    /// Rows of keys, top to bottom
    pub rows: Vec<Vec<KeyM>>,
}

impl Layer {
    /// Creates a layer from rows of keys.
    #[must_use]
    pub fn new(rows: Vec<Vec<KeyM>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the widest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns true if every row has the same number of keys.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|pair| pair[0].len() == pair[1].len())
    }

    /// Returns true if both layers have the same number of keys in every row.
    #[must_use]
    pub fn same_shape(&self, other: &Layer) -> bool {
        self.rows.len() == other.rows.len()
            && self.rows.iter().zip(&other.rows).all(|(a, b)| a.len() == b.len())
    }

    /// Key at `position`, if the grid has one there.
    #[must_use]
    pub fn get_key(&self, position: Position) -> Option<&KeyM> {
        self.rows
            .get(usize::from(position.row))?
            .get(usize::from(position.col))
    }

    /// Iterates over all keys with their positions.
    pub fn keys(&self) -> impl Iterator<Item = (Position, &KeyM)> {
        self.rows.iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .map(move |(col, key)| (Position::new(row as u8, col as u8), key))
        })
    }

    fn map_keys(&self, f: impl Fn(&KeyM) -> KeyM) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&f).collect())
                .collect(),
        }
    }

    /// Per-key [`KeyM::merge_fallback`].
    ///
    /// Positions present in only one of the two layers are taken as-is, so
    /// a sparse primary layer can omit trailing keys entirely.
    #[must_use]
    pub fn merge_fallback(&self, fallback: &Layer, hold_for_fallback: bool) -> Self {
        let row_count = self.rows.len().max(fallback.rows.len());
        let rows = (0..row_count)
            .map(|r| {
                let own = self.rows.get(r).map_or(&[][..], Vec::as_slice);
                let other = fallback.rows.get(r).map_or(&[][..], Vec::as_slice);
                let col_count = own.len().max(other.len());
                (0..col_count)
                    .map(|c| match (own.get(c), other.get(c)) {
                        (Some(a), Some(b)) => a.merge_fallback(b, hold_for_fallback),
                        (Some(a), None) => a.clone(),
                        (None, Some(b)) => b.clone(),
                        (None, None) => KeyM::empty(),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Attaches each key of `shift_layer` as the shift variant of the key at
    /// the same position. Keys with no counterpart are left unchanged.
    #[must_use]
    pub fn set_shift(&self, shift_layer: &Layer) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(r, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(c, key)| {
                            shift_layer
                                .rows
                                .get(r)
                                .and_then(|shift_row| shift_row.get(c))
                                .map_or_else(|| key.clone(), |shift| key.set_shift(shift.clone()))
                        })
                        .collect()
                })
                .collect(),
        }
    }

    /// Concatenates `other`'s rows onto the right of this layer's rows.
    ///
    /// # Panics
    ///
    /// Panics if the layers have different row counts. Layer tables are
    /// static, so a mismatch is a defect in the table, not a runtime state.
    #[must_use]
    pub fn chain(&self, other: &Layer) -> Self {
        assert_eq!(
            self.rows.len(),
            other.rows.len(),
            "cannot chain layers with different row counts ({} vs {})",
            self.rows.len(),
            other.rows.len()
        );
        Self {
            rows: self
                .rows
                .iter()
                .zip(&other.rows)
                .map(|(left, right)| left.iter().chain(right).cloned().collect())
                .collect(),
        }
    }

    /// Per-key [`KeyM::auto_shift`].
    #[must_use]
    pub fn auto_shift(&self, locale: &Locale) -> Self {
        self.map_keys(|key| key.auto_shift(locale))
    }

    /// Per-key [`KeyM::filter_actions`].
    #[must_use]
    pub fn filter_actions(&self, shown: &[ActionClass], enable_hidden_actions: bool) -> Self {
        self.map_keys(|key| key.filter_actions(shown, enable_hidden_actions))
    }

    /// Per-key [`KeyM::flip_brackets`].
    #[must_use]
    pub fn flip_brackets(&self) -> Self {
        self.map_keys(KeyM::flip_brackets)
    }
}
