use crate::core::math::{LengthMode, Vertex};
use crate::core::traits::Real;
use crate::geom::{BoundingBox, Ring};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of rings with a parallel hole flag per ring.
///
/// For polygon geometry a hole is a ring with negative signed area. The ring
/// list and hole flag list always have equal length; a [MultiShape] with
/// zero rings represents "excluded/empty" after clipping.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiShape<T = f64> {
    rings: Vec<Ring<T>>,
    holes: Vec<bool>,
}

impl<T> MultiShape<T>
where
    T: Real,
{
    /// Create a new empty [MultiShape].
    #[inline]
    pub fn new() -> Self {
        MultiShape {
            rings: Vec::new(),
            holes: Vec::new(),
        }
    }

    /// Create a shape from `(ring, is_hole)` pairs.
    pub fn from_rings<I>(rings: I) -> Self
    where
        I: IntoIterator<Item = (Ring<T>, bool)>,
    {
        let mut result = Self::new();
        for (ring, is_hole) in rings {
            result.add_ring(ring, is_hole);
        }
        result
    }

    /// Create a point shape: one single-vertex ring.
    pub fn point(v: Vertex<T>) -> Self {
        let mut result = Self::new();
        result.add_ring(Ring::from_vertices([v]), false);
        result
    }

    /// Append a ring with an explicit hole flag.
    pub fn add_ring(&mut self, ring: Ring<T>, is_hole: bool) {
        self.rings.push(ring);
        self.holes.push(is_hole);
    }

    /// Append a polygon ring, deriving the hole flag from the sign of its
    /// area (negative area means hole).
    pub fn add_polygon_ring(&mut self, ring: Ring<T>) {
        let is_hole = ring.signed_area() < T::zero();
        self.add_ring(ring, is_hole);
    }

    #[inline]
    pub fn ring_count(&self) -> usize {
        debug_assert_eq!(
            self.rings.len(),
            self.holes.len(),
            "ring list and hole flag list must stay parallel"
        );
        self.rings.len()
    }

    /// Returns true when the shape holds no rings (an excluded/empty clip
    /// result).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Get the ring at `index`. Returns `None` if out of bounds.
    #[inline]
    pub fn ring(&self, index: usize) -> Option<&Ring<T>> {
        self.rings.get(index)
    }

    /// Hole flag for the ring at `index`. Returns `None` if out of bounds.
    #[inline]
    pub fn is_hole(&self, index: usize) -> Option<bool> {
        self.holes.get(index).copied()
    }

    /// Iterate over the rings.
    #[inline]
    pub fn rings(&self) -> impl Iterator<Item = &Ring<T>> {
        self.rings.iter()
    }

    /// Iterate over `(ring, is_hole)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Ring<T>, bool)> {
        self.rings.iter().zip(self.holes.iter().copied())
    }

    /// Total vertex count across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(|r| r.vertex_count()).sum()
    }

    /// Bounding box covering all rings, or `None` when the shape is empty.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::from_vertices(self.rings.iter().flat_map(|r| r.vertices.iter().copied()))
    }

    /// Net flat-plane area: outer rings contribute positive area and hole
    /// rings negative, so the sum is the covered area.
    pub fn area(&self) -> T {
        self.rings
            .iter()
            .fold(T::zero(), |acc, r| acc + r.signed_area())
    }

    /// Total length of all rings (no closing segments).
    pub fn length(&self, mode: LengthMode) -> T {
        self.rings
            .iter()
            .fold(T::zero(), |acc, r| acc + r.length(mode))
    }
}
