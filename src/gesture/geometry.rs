//! Direction quantization and circle detection.
//!
//! All coordinates are screen coordinates: X grows to the right and Y grows
//! downward.

use crate::gesture::CircleDirection;
use crate::models::Direction;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// A 2D point or displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal component
    pub x: f64,
    /// Vertical component (positive is down)
    pub y: f64,
}

impl Offset {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new offset.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared length.
    #[must_use]
    pub fn distance_squared(self) -> f64 {
        self.x.mul_add(self.x, self.y * self.y)
    }

    /// Length.
    #[must_use]
    pub fn distance(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Offset {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Offset {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Offset {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Quantizes an angle (radians, `atan2` convention) into one of eight
/// 45° slices, numbered clockwise from `Right`.
///
/// Rounding is half away from zero, so +22.5° lands in slice 1 and
/// -22.5° in slice 7.
#[must_use]
pub fn angle_slice(angle: f64) -> u8 {
    ((angle * 4.0 / PI).round() as i64).rem_euclid(8) as u8
}

/// Compass direction of a displacement. Never returns `Center`.
#[must_use]
pub fn direction(vector: Offset) -> Direction {
    Direction::from_slice(angle_slice(vector.y.atan2(vector.x)))
}

/// Wraps an angle difference into `(-π, π]`.
fn wrap_angle(delta: f64) -> f64 {
    let delta = delta % TAU;
    if delta > PI {
        delta - TAU
    } else if delta <= -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Minimum mean squared radius (px²) of a stroke worth treating as a circle.
const MIN_MEAN_RADIUS_SQUARED: f64 = 10.0;

/// Minimum number of samples before circle detection is attempted.
const MIN_ROUND_POINTS: usize = 5;

/// Decides whether a point trail is a (near-)closed circular stroke.
///
/// Returns the rotation direction when it is. A positive total swept angle
/// in screen coordinates is clockwise as seen on screen.
#[must_use]
pub fn looks_round(
    points: &[Offset],
    jaggedness_threshold: f64,
    discontinuity_threshold: f64,
    angle_threshold: f64,
) -> Option<CircleDirection> {
    if points.len() < MIN_ROUND_POINTS {
        return None;
    }

    let count = points.len() as f64;
    let centroid = points.iter().fold(Offset::ZERO, |acc, p| acc + *p) / count;

    let radii: Vec<f64> = points
        .iter()
        .map(|p| (*p - centroid).distance_squared())
        .collect();
    let mean_radius = radii.iter().sum::<f64>() / count;
    if mean_radius < MIN_MEAN_RADIUS_SQUARED {
        return None;
    }

    let variance = radii
        .iter()
        .map(|r| (r - mean_radius) * (r - mean_radius))
        .sum::<f64>()
        / count;
    let jaggedness = variance / (mean_radius * mean_radius);
    if jaggedness > jaggedness_threshold {
        return None;
    }

    let angles: Vec<f64> = points
        .iter()
        .map(|p| {
            let rel = *p - centroid;
            rel.y.atan2(rel.x)
        })
        .collect();
    let deltas: Vec<f64> = angles
        .windows(2)
        .map(|pair| wrap_angle(pair[1] - pair[0]))
        .collect();
    let total: f64 = deltas.iter().sum();

    if total.abs() < angle_threshold {
        return None;
    }
    if deltas.iter().any(|d| d * total < 0.0) {
        return None;
    }
    if deltas.iter().any(|d| d.abs() > discontinuity_threshold) {
        return None;
    }

    Some(if total > 0.0 {
        CircleDirection::Clockwise
    } else {
        CircleDirection::CounterClockwise
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAGGEDNESS: f64 = 0.15;
    const DISCONTINUITY: f64 = PI / 2.0;
    const ANGLE: f64 = 1.5 * PI;

    /// Points on a circle, starting at angle 0 and stepping by `step` radians.
    fn arc(center: Offset, radius: f64, count: usize, step: f64) -> Vec<Offset> {
        (0..count)
            .map(|i| {
                let a = step * i as f64;
                center + Offset::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_compass_bearings() {
        let cases = [
            (Offset::new(10.0, 0.0), Direction::Right),
            (Offset::new(10.0, 10.0), Direction::BottomRight),
            (Offset::new(0.0, 10.0), Direction::Bottom),
            (Offset::new(-10.0, 10.0), Direction::BottomLeft),
            (Offset::new(-10.0, 0.0), Direction::Left),
            (Offset::new(-10.0, -10.0), Direction::TopLeft),
            (Offset::new(0.0, -10.0), Direction::Top),
            (Offset::new(10.0, -10.0), Direction::TopRight),
        ];
        for (vector, expected) in cases {
            assert_eq!(direction(vector), expected, "vector {vector:?}");
        }
    }

    #[test]
    fn test_near_bearings_stay_in_sector() {
        let slightly_off = Offset::new(10.0, 3.0);
        assert_eq!(direction(slightly_off), Direction::Right);
        let steep = Offset::new(3.0, -10.0);
        assert_eq!(direction(steep), Direction::Top);
    }

    #[test]
    fn test_sector_boundaries_round_away_from_zero() {
        assert_eq!(angle_slice(PI / 8.0), 1);
        assert_eq!(angle_slice(-PI / 8.0), 7);
        assert_eq!(angle_slice(PI), 4);
        assert_eq!(angle_slice(-PI), 4);
    }

    #[test]
    fn test_direction_never_center() {
        for i in 0..64 {
            let a = TAU * f64::from(i) / 64.0;
            assert_ne!(direction(Offset::new(a.cos(), a.sin())), Direction::Center);
        }
    }

    #[test]
    fn test_full_circle_is_round() {
        let points = arc(Offset::new(100.0, 100.0), 50.0, 12, TAU / 12.0);
        // 12 points cover 330 degrees
        assert!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE).is_some());
    }

    #[test]
    fn test_rotation_sign_convention() {
        // Increasing atan2 angle in Y-down coordinates moves right -> down ->
        // left, which is clockwise on screen.
        let clockwise = arc(Offset::ZERO, 50.0, 12, TAU / 12.0);
        assert_eq!(
            looks_round(&clockwise, JAGGEDNESS, DISCONTINUITY, ANGLE),
            Some(CircleDirection::Clockwise)
        );

        let counter = arc(Offset::ZERO, 50.0, 12, -TAU / 12.0);
        assert_eq!(
            looks_round(&counter, JAGGEDNESS, DISCONTINUITY, ANGLE),
            Some(CircleDirection::CounterClockwise)
        );
    }

    #[test]
    fn test_reversal_is_not_round() {
        let mut points = arc(Offset::ZERO, 50.0, 12, TAU / 12.0);
        // Go back over part of the path
        points.swap(5, 7);
        assert_eq!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE), None);
    }

    #[test]
    fn test_too_few_points() {
        let points = arc(Offset::ZERO, 50.0, 4, TAU / 4.0);
        assert_eq!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE), None);
    }

    #[test]
    fn test_tiny_circle_rejected() {
        let points = arc(Offset::ZERO, 2.0, 12, TAU / 12.0);
        assert_eq!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE), None);
    }

    #[test]
    fn test_short_arc_rejected() {
        let points = arc(Offset::ZERO, 50.0, 6, PI / 8.0);
        assert_eq!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE), None);
    }

    #[test]
    fn test_straight_line_rejected() {
        let points: Vec<_> = (0..10)
            .map(|i| Offset::new(f64::from(i) * 10.0, 0.0))
            .collect();
        assert_eq!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE), None);
    }

    #[test]
    fn test_sparse_circle_hits_discontinuity() {
        // 6 points over 300 degrees: each step is 60 degrees
        let points = arc(Offset::ZERO, 50.0, 6, TAU / 6.0);
        assert!(looks_round(&points, JAGGEDNESS, DISCONTINUITY, ANGLE).is_some());
        assert_eq!(looks_round(&points, JAGGEDNESS, PI / 6.0, ANGLE), None);
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-9);
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-9);
        assert!((wrap_angle(PI) - PI).abs() < 1e-9);
    }
}
