//! Core/common math functions for working with 2D coordinates, segment
//! intersections, point/ring classification, and ring measures.
mod measures;
mod point_in_ring;
mod seg_seg_intersect;
mod vertex;

pub use measures::{polyline_length, signed_area, LengthMode, EARTH_RADIUS_M};
pub use point_in_ring::{point_in_ring, PointInRing};
pub use seg_seg_intersect::{seg_seg_intr, OverlapKind, SegSegIntr};
pub use vertex::{vertex, Vertex};
