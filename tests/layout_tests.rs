//! Composition, resolution and consistency over the shipped layouts.

use flickgrid::config::{EnabledLayers, LayoutOptions};
use flickgrid::gesture::{Flick, Gesture, ReplaySource};
use flickgrid::layouts::{builtin_layouts, control_layer, symbols_layer, BUILTIN_IDS};
use flickgrid::models::{
    Action, ActionClass, Direction, KeyM, Layer, Locale, Position, SearchDirection, TextBoundary,
};
use flickgrid::services::{compose, process_contact, resolve, LayoutService, LayoutValidator};

mod fixtures;
use fixtures::*;

#[test]
fn test_letters_never_shadow_symbols_unless_allowed() {
    let symbols = symbols_layer();
    for layout in builtin_layouts() {
        for (position, key) in layout.main_layer.keys() {
            let Some(symbol_key) = symbols.get_key(position) else {
                continue;
            };
            for direction in key.actions.keys() {
                if symbol_key.action(*direction).is_some() {
                    assert!(
                        layout.allows_override(position, *direction),
                        "{}: letter at {:?} {} covers a symbol",
                        layout.id,
                        position,
                        direction
                    );
                }
            }
        }

        let report = LayoutValidator::new(&layout, &symbols).validate();
        assert!(report.is_valid(), "{}: {}", layout.id, report.format_message());
    }
}

#[test]
fn test_every_builtin_composes_in_every_arrangement() {
    for id in BUILTIN_IDS {
        let layout = builtin(id);
        for enabled_layers in [EnabledLayers::Letters, EnabledLayers::Numbers, EnabledLayers::All] {
            let options = LayoutOptions {
                enabled_layers,
                ..LayoutOptions::default()
            };
            let layer = compose(&layout, &options);
            assert_eq!(layer.row_count(), 3, "{id} {enabled_layers:?}");
        }
    }
}

#[test]
fn test_merge_fallback_prefers_primary() {
    let primary = KeyM::text(&[(Direction::Center, "a"), (Direction::Top, "b")]);
    let fallback = KeyM::text(&[(Direction::Top, "x"), (Direction::Left, "y")]);
    let merged = primary.merge_fallback(&fallback, false);

    for direction in Direction::ALL {
        let expected = primary.action(direction).or_else(|| fallback.action(direction));
        assert_eq!(merged.action(direction), expected, "{direction}");
    }
    assert_eq!(primary.merge_fallback(&primary, false), primary);
}

#[test]
fn test_auto_shift_upper_cases_english() {
    let key = KeyM::text(&[(Direction::Center, "g")]).auto_shift(&Locale::ENGLISH);
    let shift = key.shift.as_deref().expect("shift variant");
    assert_eq!(shift.action(Direction::Center), Some(&Action::text("G")));
}

#[test]
fn test_transient_shift_wins_on_shift_flick() {
    let key = KeyM::text(&[(Direction::Center, "a")])
        .with_shift(KeyM::text(&[(Direction::Center, "A")]))
        .with_transient_shift(KeyM::text(&[(Direction::Center, "Á")]));
    let flick = Flick::swipe(Direction::Center, true);
    assert_eq!(resolve(&flick, &key), Some(&Action::text("Á")));
}

#[test]
fn test_u_turn_on_composed_key_types_capital() {
    let layer = compose(&builtin("en"), &LayoutOptions::default());
    // 'o' key: bottom-left is 'g'
    let key = layer.get_key(Position::new(1, 1)).expect("o key");

    let mut typed = Vec::new();
    let mut source = ReplaySource::new(u_turn_trail(-60.0, 60.0));
    let gesture = process_contact(&mut source, key, &test_gesture_config(), |a| {
        typed.push(a.clone());
    });

    assert_eq!(
        gesture,
        Some(Gesture::Flick(Flick::swipe(Direction::BottomLeft, true)))
    );
    assert_eq!(typed, vec![Action::text("G")]);
}

#[test]
fn test_circle_on_composed_key_types_capital_center() {
    let layer = compose(&builtin("ru"), &LayoutOptions::default());
    let key = layer.get_key(Position::new(0, 0)).expect("first key");

    let mut typed = Vec::new();
    let mut source = ReplaySource::new(clockwise_circle());
    process_contact(&mut source, key, &test_gesture_config(), |a| {
        typed.push(a.clone());
    });
    assert_eq!(typed, vec![Action::text("\u{41e}")]);
}

#[test]
fn test_fast_delete_on_control_column() {
    let layer = compose(&builtin("en"), &LayoutOptions::default());
    let delete = layer.get_key(Position::new(0, 3)).expect("delete key");

    let mut emitted = Vec::new();
    let mut source = ReplaySource::new(swipe_trail(-95.0, 0.0, 10));
    let gesture = process_contact(&mut source, delete, &test_gesture_config(), |a| {
        emitted.push(a.clone());
    });

    assert_eq!(gesture, None);
    assert_eq!(emitted, vec![Action::backspace(); 3]);
}

#[test]
fn test_hidden_symbols_still_type() {
    let options = LayoutOptions {
        show_symbols: false,
        ..LayoutOptions::default()
    };
    let layer = compose(&builtin("en"), &options);
    let key = layer.get_key(Position::new(0, 0)).expect("a key");

    let dash = key.action(Direction::Right).expect("dash binding");
    assert!(dash.is_hidden());
    assert_eq!(dash.class(), ActionClass::Symbol);
    assert_eq!(
        resolve(&Flick::swipe(Direction::Right, false), key),
        Some(dash)
    );
}

#[test]
fn test_layout_file_roundtrip_keeps_composition() {
    let layout = builtin("uk");
    let (path, _temp_dir) = create_temp_layout_file(&layout);
    let loaded = LayoutService::load(&path).expect("load layout");

    let options = LayoutOptions::default();
    assert_eq!(compose(&loaded, &options), compose(&layout, &options));
}

#[test]
fn test_control_layer_mirrors_with_handedness() {
    let options = LayoutOptions {
        handedness: flickgrid::config::Handedness::LeftThumb,
        ..LayoutOptions::default()
    };
    let layer = compose(&builtin("ar"), &options);
    let first_column: Layer = Layer::new(
        layer
            .rows
            .iter()
            .map(|row| vec![row[0].clone()])
            .collect(),
    );
    assert_eq!(first_column, control_layer().auto_shift(&Locale::ARABIC));
}

#[test]
fn test_shifted_control_flicks_widen_and_redo() {
    let layer = compose(&builtin("en"), &LayoutOptions::default());

    let space = layer.get_key(Position::new(1, 3)).expect("space key");
    assert_eq!(
        resolve(&Flick::swipe(Direction::Left, true), space),
        Some(&Action::jump(SearchDirection::Backwards, TextBoundary::Line))
    );

    let delete = layer.get_key(Position::new(0, 3)).expect("delete key");
    let mut emitted = Vec::new();
    let mut source = ReplaySource::new(u_turn_trail(0.0, -60.0));
    let gesture = process_contact(&mut source, delete, &test_gesture_config(), |a| {
        emitted.push(a.clone());
    });
    assert_eq!(
        gesture,
        Some(Gesture::Flick(Flick::swipe(Direction::Top, true)))
    );
    assert_eq!(emitted, vec![Action::Redo]);
}
