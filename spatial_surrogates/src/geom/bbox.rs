use crate::core::math::Vertex;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. Boxes are recomputed
/// bottom-up from a layer's shapes whenever shapes are inserted; an empty
/// shape set has no box (`Option<BoundingBox>` at the call sites).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> BoundingBox<T>
where
    T: Real,
{
    /// Create a new box from extents.
    ///
    /// Debug asserts the min/max invariant.
    #[inline]
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        debug_assert!(min_x <= max_x, "bounding box min_x exceeds max_x");
        debug_assert!(min_y <= max_y, "bounding box min_y exceeds max_y");
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a degenerate box covering a single point.
    #[inline]
    pub fn from_point(v: Vertex<T>) -> Self {
        Self::new(v.x, v.y, v.x, v.y)
    }

    /// Compute the box covering all vertices yielded, or `None` when the
    /// iterator is empty.
    pub fn from_vertices<I>(vertices: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vertex<T>>,
    {
        let mut iter = vertices.into_iter();
        let first = iter.next()?;
        let mut result = Self::from_point(first);
        for v in iter {
            result.expand_to(v);
        }
        Some(result)
    }

    /// Grow the box (in place) to cover `v`.
    pub fn expand_to(&mut self, v: Vertex<T>) {
        if v.x < self.min_x {
            self.min_x = v.x;
        }
        if v.x > self.max_x {
            self.max_x = v.x;
        }
        if v.y < self.min_y {
            self.min_y = v.y;
        }
        if v.y > self.max_y {
            self.max_y = v.y;
        }
    }

    /// Smallest box covering both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Inclusive overlap test (touching boxes overlap).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Inclusive point containment test.
    pub fn contains_point(&self, v: Vertex<T>) -> bool {
        v.x >= self.min_x && v.x <= self.max_x && v.y >= self.min_y && v.y <= self.max_y
    }

    /// Whether `other` lies entirely within this box (inclusive).
    pub fn contains_box(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vertex;

    #[test]
    fn overlap_is_inclusive() {
        let b1 = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b2 = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
        let b3 = BoundingBox::new(1.1, 1.1, 2.0, 2.0);
        assert!(b1.overlaps(&b2));
        assert!(b2.overlaps(&b1));
        assert!(!b1.overlaps(&b3));
    }

    #[test]
    fn from_vertices_and_containment() {
        let bb = BoundingBox::from_vertices([
            vertex(2.0, -1.0),
            vertex(0.0, 3.0),
            vertex(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(bb, BoundingBox::new(0.0, -1.0, 2.0, 3.0));
        assert!(bb.contains_point(vertex(1.0, 0.0)));
        assert!(bb.contains_box(&BoundingBox::new(0.5, 0.0, 1.5, 2.0)));
        assert!(BoundingBox::<f64>::from_vertices([]).is_none());
    }
}
