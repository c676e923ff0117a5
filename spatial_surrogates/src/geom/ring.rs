use crate::core::math::{polyline_length, signed_area, LengthMode, Vertex};
use crate::core::traits::Real;
use crate::geom::BoundingBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertex loop of a shape.
///
/// A ring is an ordered vertex sequence: implicitly closed for polygon
/// geometry (the last vertex connects back to the first, no duplicate
/// closing vertex is stored), open for line geometry, and a single vertex
/// for point geometry. Rings are mutable-append during construction and
/// discretization, read-only once inserted into a layer.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring<T = f64> {
    /// Contiguous sequence of vertexes.
    pub vertices: Vec<Vertex<T>>,
}

impl<T> Ring<T>
where
    T: Real,
{
    /// Create a new empty [Ring].
    #[inline]
    pub fn new() -> Self {
        Ring {
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Ring {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Create a ring from a vertex sequence.
    #[inline]
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex<T>>,
    {
        Ring {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Total number of vertexes.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if vertex count is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the vertex at given `index` position. Returns `None` if `index`
    /// out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vertex<T>> {
        self.vertices.get(index).copied()
    }

    /// Same as [Ring::get] but panics if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Vertex<T> {
        self.vertices[index]
    }

    #[inline]
    pub fn first(&self) -> Option<Vertex<T>> {
        self.vertices.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vertex<T>> {
        self.vertices.last().copied()
    }

    /// Append a vertex.
    #[inline]
    pub fn add_vertex(&mut self, vertex: Vertex<T>) {
        self.vertices.push(vertex);
    }

    /// Append a sequence of vertexes.
    #[inline]
    pub fn extend_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex<T>>,
    {
        self.vertices.extend(vertices);
    }

    /// Signed shoelace area of the ring treated as implicitly closed.
    ///
    /// Negative area marks a hole ring. Only flat-plane area is defined.
    #[inline]
    pub fn signed_area(&self) -> T {
        signed_area(&self.vertices)
    }

    /// Sum of consecutive-vertex distances (no closing segment).
    #[inline]
    pub fn length(&self, mode: LengthMode) -> T {
        polyline_length(&self.vertices, mode)
    }

    /// Bounding box of the ring, or `None` when empty.
    #[inline]
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::from_vertices(self.vertices.iter().copied())
    }

    /// Returns a copy of the ring with extra vertexes inserted so that no
    /// segment is longer than `max_seg_len` (flat distance).
    ///
    /// Segments at least `max_seg_len` long are split into
    /// `ceil(len / max_seg_len)` even pieces; original vertexes are
    /// preserved. Readers discretize long segments this way before
    /// great-circle measurement so the chord approximation stays tight.
    pub fn densified(&self, max_seg_len: T) -> Self {
        debug_assert!(max_seg_len > T::zero(), "max_seg_len must be positive");

        let mut out = Ring::with_capacity(self.vertices.len());
        let mut iter = self.vertices.iter().copied();
        let first = match iter.next() {
            Some(v) => v,
            None => return out,
        };
        out.add_vertex(first);

        let mut prev = first;
        for v in iter {
            let len = prev.distance_to(v);
            if len >= max_seg_len {
                let pieces = (len / max_seg_len).ceil();
                let new_points = pieces.to_usize().unwrap_or(1) - 1;
                let delta = (v - prev).scale(T::one() / pieces);
                let mut next = prev;
                out.extend_vertices((0..new_points).map(|_| {
                    next = next + delta;
                    next
                }));
            }
            out.add_vertex(v);
            prev = v;
        }

        out
    }
}
