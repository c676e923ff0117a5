use crate::core::math::{point_in_ring, PointInRing};
use crate::error::GeometryError;
use crate::geom::{MultiShape, Ring};

/// Clips point geometry against a polygon's rings, returning the points
/// that fall within the polygon.
///
/// A point is included iff it classifies `Inside` some polygon ring (each
/// point enters the result at most once, however many rings contain it). A
/// point coinciding with a polygon vertex is an ambiguous match: it is
/// reported with a warning and excluded, signalling the caller to decide
/// disambiguation policy. Points on an edge or outside are excluded.
pub fn point_clip(points: &MultiShape, polygon: &MultiShape, pos_equal_eps: f64) -> MultiShape {
    let mut out = MultiShape::new();

    for ring in points.rings() {
        'points: for &pt in &ring.vertices {
            let mut inside = false;
            for poly_ring in polygon.rings() {
                match point_in_ring(pt, &poly_ring.vertices, pos_equal_eps) {
                    PointInRing::OnVertex => {
                        tracing::warn!(
                            "{}; excluded from clip result",
                            GeometryError::AmbiguousPointOnVertex { x: pt.x, y: pt.y }
                        );
                        continue 'points;
                    }
                    PointInRing::Inside => inside = true,
                    PointInRing::OnEdge | PointInRing::Outside => {}
                }
            }

            if inside {
                out.add_ring(Ring::from_vertices([pt]), false);
            }
        }
    }

    out
}
