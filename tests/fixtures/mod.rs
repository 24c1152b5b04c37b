//! Shared test fixtures for library and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use flickgrid::config::{Config, GestureConfig};
use flickgrid::gesture::PointerEvent;
use flickgrid::layouts::builtin_layout;
use flickgrid::models::Layout;
use flickgrid::services::LayoutService;
use std::f64::consts::TAU;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Gesture thresholds with round numbers for hand-written trails.
pub fn test_gesture_config() -> GestureConfig {
    GestureConfig {
        swipe_threshold: 10.0,
        fast_swipe_threshold: 30.0,
        long_press_timeout_millis: 300,
        ..GestureConfig::default()
    }
}

/// A quick tap at `(x, y)`.
pub fn tap_trail(x: f64, y: f64) -> Vec<PointerEvent> {
    vec![
        PointerEvent::down(x, y, 0),
        PointerEvent::moved(x + 2.0, y + 1.0, 30),
        PointerEvent::up(x + 2.0, y + 1.0, 60),
    ]
}

/// A stationary press held for `millis`.
pub fn hold_trail(millis: u64) -> Vec<PointerEvent> {
    vec![
        PointerEvent::down(0.0, 0.0, 0),
        PointerEvent::up(1.0, 0.0, millis),
    ]
}

/// A straight swipe from the origin to `(dx, dy)` in `steps` moves.
pub fn swipe_trail(dx: f64, dy: f64, steps: u32) -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::down(0.0, 0.0, 0)];
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        events.push(PointerEvent::moved(dx * t, dy * t, u64::from(i) * 10));
    }
    events.push(PointerEvent::up(dx, dy, u64::from(steps + 1) * 10));
    events
}

/// Out along `(dx, dy)` and most of the way back.
pub fn u_turn_trail(dx: f64, dy: f64) -> Vec<PointerEvent> {
    vec![
        PointerEvent::down(0.0, 0.0, 0),
        PointerEvent::moved(dx / 3.0, dy / 3.0, 10),
        PointerEvent::moved(dx * 2.0 / 3.0, dy * 2.0 / 3.0, 20),
        PointerEvent::moved(dx, dy, 30),
        PointerEvent::moved(dx * 2.0 / 3.0, dy * 2.0 / 3.0, 40),
        PointerEvent::up(dx / 3.0, dy / 3.0, 50),
    ]
}

/// `count` samples on a circle of `radius`, stepping `step` radians.
///
/// A positive step runs clockwise on screen.
pub fn circle_trail(radius: f64, count: u32, step: f64) -> Vec<PointerEvent> {
    (0..count)
        .map(|i| {
            let angle = step * f64::from(i);
            let (x, y) = (radius * angle.cos(), radius * angle.sin());
            let time = u64::from(i) * 10;
            if i == 0 {
                PointerEvent::down(x, y, time)
            } else if i == count - 1 {
                PointerEvent::up(x, y, time)
            } else {
                PointerEvent::moved(x, y, time)
            }
        })
        .collect()
}

/// A full clockwise circle of twelve samples.
pub fn clockwise_circle() -> Vec<PointerEvent> {
    circle_trail(50.0, 12, TAU / 12.0)
}

/// Built-in layout by id.
pub fn builtin(id: &str) -> Layout {
    builtin_layout(id).unwrap_or_else(|| panic!("missing built-in layout {id}"))
}

/// Writes a pointer trail as JSON in a fresh temp directory.
pub fn create_temp_trail_file(events: &[PointerEvent]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("trail.json");
    let json = serde_json::to_string_pretty(events).expect("Failed to serialize trail");
    fs::write(&path, json).expect("Failed to write trail file");
    (path, temp_dir)
}

/// Writes a layout as JSON in a fresh temp directory.
pub fn create_temp_layout_file(layout: &Layout) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.json");
    LayoutService::save(layout, &path).expect("Failed to save layout");
    (path, temp_dir)
}

/// Writes a configuration file in a fresh temp directory.
pub fn create_temp_config_file(config: &Config) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    config.save_to(&path).expect("Failed to save config");
    (path, temp_dir)
}
