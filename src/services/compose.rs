//! Assembles the layer a keyboard actually shows.

use crate::config::{EnabledLayers, Handedness, LayoutOptions};
use crate::layouts::{control_layer, numeric_layer, symbols_layer};
use crate::models::{Layer, Layout, TextDirection};
use tracing::debug;

/// Composes `layout` with the built-in symbol and control layers.
#[must_use]
pub fn compose(layout: &Layout, options: &LayoutOptions) -> Layer {
    compose_with(layout, options, &symbols_layer(), &control_layer())
}

/// Composes `layout` with explicit symbol and control layers.
///
/// The letters are merged over `symbols`, shift variants are attached and
/// derived, then the numeric layer and the control column (with its own
/// derived shift variants) are placed beside them. Labels are filtered last so hidden actions keep their gestures.
///
/// # Panics
///
/// Panics if the layers chained side by side have different row counts.
#[must_use]
pub fn compose_with(
    layout: &Layout,
    options: &LayoutOptions,
    symbols: &Layer,
    control: &Layer,
) -> Layer {
    let letters = letter_layer(layout, options, symbols);
    let numeric = layout
        .numeric_layer
        .clone()
        .unwrap_or_else(|| numeric_layer(layout))
        .auto_shift(&layout.locale);

    let body = match options.enabled_layers {
        EnabledLayers::Letters => letters,
        EnabledLayers::Numbers => numeric,
        EnabledLayers::All => letters.chain(&numeric),
    };

    // No letters here: shift widens deletes and jumps, turns undo into redo
    let control = control.auto_shift(&layout.locale);
    let composed = match options.handedness {
        Handedness::RightThumb => body.chain(&control),
        Handedness::LeftThumb => control.chain(&body),
    };

    debug!(
        layout = %layout.id,
        rows = composed.row_count(),
        columns = composed.column_count(),
        "Composed layer"
    );

    composed.filter_actions(&options.shown_classes(), options.enable_hidden_actions)
}

/// Letters over symbols, with shift variants and script direction applied.
#[must_use]
pub fn letter_layer(layout: &Layout, options: &LayoutOptions, symbols: &Layer) -> Layer {
    let merged = layout
        .main_layer
        .merge_fallback(symbols, options.hold_for_fallback);

    let with_explicit = match &layout.shift_layer {
        Some(shift) => merged.set_shift(shift),
        None => merged,
    };
    let shifted = with_explicit.auto_shift(&layout.locale);

    match layout.text_direction {
        TextDirection::Ltr => shifted,
        TextDirection::Rtl => shifted.flip_brackets(),
    }
}
