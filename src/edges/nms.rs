//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! The continuous gradient direction is folded into `[0, 180)` degrees and
//! bucketed into four sectors. Each sector names the two neighbours that lie
//! along the gradient:
//!
//! | sector | angle range                 | neighbours            |
//! |--------|-----------------------------|-----------------------|
//! | 0°     | `[0, 22.5) ∪ [157.5, 180)`  | left, right           |
//! | 45°    | `[22.5, 67.5)`              | up-right, down-left   |
//! | 90°    | `[67.5, 112.5)`             | up, down              |
//! | 135°   | `[112.5, 157.5)`            | up-left, down-right   |
//!
//! A pixel survives when its magnitude is `>=` both neighbours, so plateaus
//! along the gradient are kept whole. Only interior pixels are considered.
use super::grad::GradientField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionSector {
    Horizontal,
    Diagonal45,
    Vertical,
    Diagonal135,
}

/// Fold a direction in radians into `[0, 180)` degrees.
#[inline]
pub fn quantize_degrees(direction: f32) -> f64 {
    (direction as f64 * 180.0 / std::f64::consts::PI + 180.0) % 180.0
}

impl DirectionSector {
    pub fn from_degrees(angle: f64) -> Self {
        if angle < 22.5 || angle >= 157.5 {
            DirectionSector::Horizontal
        } else if angle < 67.5 {
            DirectionSector::Diagonal45
        } else if angle < 112.5 {
            DirectionSector::Vertical
        } else {
            DirectionSector::Diagonal135
        }
    }

    #[inline]
    pub fn from_direction(direction: f32) -> Self {
        Self::from_degrees(quantize_degrees(direction))
    }

    /// Coordinates of the two compared neighbours of an interior `(x, y)`.
    #[inline]
    pub fn neighbors(self, x: usize, y: usize) -> [(usize, usize); 2] {
        match self {
            DirectionSector::Horizontal => [(x - 1, y), (x + 1, y)],
            DirectionSector::Diagonal45 => [(x + 1, y - 1), (x - 1, y + 1)],
            DirectionSector::Vertical => [(x, y - 1), (x, y + 1)],
            DirectionSector::Diagonal135 => [(x - 1, y - 1), (x + 1, y + 1)],
        }
    }
}

/// True when `(x, y)` is a local maximum along its gradient direction.
///
/// Border pixels are never maxima.
pub fn is_local_maximum(field: &GradientField, x: usize, y: usize) -> bool {
    let (w, h) = (field.width as usize, field.height as usize);
    if x == 0 || y == 0 || x + 1 >= w || y + 1 >= h {
        return false;
    }
    let mag = field.magnitude_at(x, y);
    let sector = DirectionSector::from_direction(field.direction_at(x, y));
    let [(ax, ay), (bx, by)] = sector.neighbors(x, y);
    mag >= field.magnitude_at(ax, ay) && mag >= field.magnitude_at(bx, by)
}
