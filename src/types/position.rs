//! Integer pixel coordinates.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A pixel coordinate, also usable as an offset vector.
///
/// Ordering is x-major, then y. Area discovery relies on this order to pick
/// the same seed pixel on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    /// The four axis-aligned unit offsets.
    pub const UNIT_OFFSETS: [PixelPosition; 4] = [
        PixelPosition::new(-1, 0),
        PixelPosition::new(0, -1),
        PixelPosition::new(0, 1),
        PixelPosition::new(1, 0),
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute components.
    pub fn magnitude_manhattan(self) -> u32 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }

    /// Euclidean length.
    pub fn magnitude_geometric(self) -> f64 {
        f64::from(self.x).hypot(f64::from(self.y))
    }

    /// The 4-connected neighbours of this position (diagonals excluded).
    ///
    /// Neighbours that would overflow `i32` are skipped.
    pub fn neighbours(self) -> impl Iterator<Item = PixelPosition> {
        Self::UNIT_OFFSETS.into_iter().filter_map(move |offset| {
            Some(Self::new(
                self.x.checked_add(offset.x)?,
                self.y.checked_add(offset.y)?,
            ))
        })
    }

    /// Convert to unsigned raster indices, if both components are non-negative.
    pub fn to_index(self) -> Option<(u32, u32)> {
        Some((u32::try_from(self.x).ok()?, u32::try_from(self.y).ok()?))
    }
}

impl Add for PixelPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for PixelPosition {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for PixelPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for PixelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_x_major() {
        let a = PixelPosition::new(0, 5);
        let b = PixelPosition::new(1, 0);
        let c = PixelPosition::new(1, 2);
        assert!(a < b);
        assert!(b < c);

        let mut positions = vec![c, a, b];
        positions.sort();
        assert_eq!(positions, vec![a, b, c]);
    }

    #[test]
    fn test_arithmetic() {
        let a = PixelPosition::new(3, -2);
        let b = PixelPosition::new(1, 4);
        assert_eq!(a + b, PixelPosition::new(4, 2));
        assert_eq!(a - b, PixelPosition::new(2, -6));
        assert_eq!(-a, PixelPosition::new(-3, 2));
    }

    #[test]
    fn test_magnitudes() {
        let v = PixelPosition::new(3, -4);
        assert_eq!(v.magnitude_manhattan(), 7);
        assert_eq!(v.magnitude_geometric(), 5.0);
        assert_eq!(PixelPosition::default().magnitude_manhattan(), 0);
    }

    #[test]
    fn test_neighbours_are_orthogonal() {
        let origin = PixelPosition::new(5, 5);
        let neighbours: Vec<_> = origin.neighbours().collect();

        assert_eq!(neighbours.len(), 4);
        for n in &neighbours {
            assert_eq!((*n - origin).magnitude_manhattan(), 1);
        }
        assert!(!neighbours.contains(&PixelPosition::new(6, 6)));
    }

    #[test]
    fn test_neighbours_at_the_edge_of_i32() {
        let corner = PixelPosition::new(i32::MAX, i32::MIN);
        assert_eq!(corner.neighbours().count(), 2);
    }

    #[test]
    fn test_to_index() {
        assert_eq!(PixelPosition::new(2, 3).to_index(), Some((2, 3)));
        assert_eq!(PixelPosition::new(-1, 3).to_index(), None);
        assert_eq!(PixelPosition::new(0, -1).to_index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelPosition::new(1, -2).to_string(), "(1, -2)");
    }
}
