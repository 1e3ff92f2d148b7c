//! Area finder.
//!
//! Clusters marked pixels into 4-connected areas. Work is proportional to the
//! number of marked pixels, not to the size of the image they came from.

use std::iter::FusedIterator;

use crate::types::PixelPosition;

/// A contiguous group of marked pixels (one display segment).
///
/// Positions are sorted and unique, and every position is reachable from
/// every other through orthogonal steps that stay inside the area.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Area {
    positions: Vec<PixelPosition>,
}

impl Area {
    /// Number of pixels in the area.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Areas produced by [`find_areas`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The area's pixels in ascending order.
    pub fn positions(&self) -> &[PixelPosition] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PixelPosition> {
        self.positions.iter()
    }

    pub fn contains(&self, position: PixelPosition) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// Smallest enclosing rectangle as (min corner, max corner), inclusive.
    pub fn bounds(&self) -> Option<(PixelPosition, PixelPosition)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(min, max), p| {
            (
                PixelPosition::new(min.x.min(p.x), min.y.min(p.y)),
                PixelPosition::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

impl<'a> IntoIterator for &'a Area {
    type Item = &'a PixelPosition;
    type IntoIter = std::slice::Iter<'a, PixelPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// Lazy iterator over the areas of a pixel set. See [`find_areas`].
#[derive(Debug, Clone)]
pub struct Areas {
    /// Sorted, de-duplicated working list.
    pixels: Vec<PixelPosition>,
    /// `claimed[i]` is set once `pixels[i]` belongs to a yielded area.
    claimed: Vec<bool>,
    /// Every index below the cursor is claimed.
    cursor: usize,
    remaining: usize,
}

/// Partition `pixels` into 4-connected areas.
///
/// Areas are yielded one at a time. Each new area is seeded from the smallest
/// unclaimed pixel (x-major order), so discovery order is the same on every
/// run. Duplicate input positions are collapsed.
pub fn find_areas<I>(pixels: I) -> Areas
where
    I: IntoIterator<Item = PixelPosition>,
{
    let mut pixels: Vec<PixelPosition> = pixels.into_iter().collect();
    pixels.sort_unstable();
    pixels.dedup();

    let remaining = pixels.len();
    Areas {
        claimed: vec![false; remaining],
        pixels,
        cursor: 0,
        remaining,
    }
}

impl Areas {
    fn claim(&mut self, position: PixelPosition) -> Option<usize> {
        let index = self.pixels.binary_search(&position).ok()?;
        if self.claimed[index] {
            return None;
        }
        self.claimed[index] = true;
        Some(index)
    }
}

impl Iterator for Areas {
    type Item = Area;

    fn next(&mut self) -> Option<Area> {
        while self.cursor < self.pixels.len() && self.claimed[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor == self.pixels.len() {
            return None;
        }

        let seed = self.cursor;
        self.claimed[seed] = true;
        let mut members = vec![seed];

        // Grow until a pass over the new members finds nothing.
        let mut scanned = 0;
        while scanned < members.len() {
            let position = self.pixels[members[scanned]];
            scanned += 1;
            for neighbour in position.neighbours() {
                if let Some(index) = self.claim(neighbour) {
                    members.push(index);
                }
            }
        }

        // Indices into a sorted list, so sorting them sorts the positions.
        members.sort_unstable();
        self.remaining -= members.len();

        Some(Area {
            positions: members.into_iter().map(|i| self.pixels[i]).collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.min(1), Some(self.remaining))
    }
}

impl FusedIterator for Areas {}
