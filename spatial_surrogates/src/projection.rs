//! Map-projection seam.
//!
//! Projection math itself is a collaborator concern; the core only consumes
//! a single-point forward/inverse projector through [PointProjection] and
//! offers helpers that push whole rings, shapes, and layers through it.

use crate::geom::{MultiShape, Ring};
use crate::layer::Layer;

/// Single-point forward/inverse map projection supplied externally.
pub trait PointProjection {
    /// Project a point from source to target coordinates.
    fn forward(&self, x: f64, y: f64) -> (f64, f64);

    /// Project a point from target back to source coordinates.
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);
}

/// The no-op projection; useful when both layers already share coordinates.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdentityProjection;

impl PointProjection for IdentityProjection {
    #[inline]
    fn forward(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    #[inline]
    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}

/// Ring with every vertex pushed through the forward projection.
pub fn reproject_ring(ring: &Ring, projection: &dyn PointProjection) -> Ring {
    Ring::from_vertices(ring.vertices.iter().map(|v| {
        let (x, y) = projection.forward(v.x, v.y);
        crate::core::math::vertex(x, y)
    }))
}

/// Shape with every ring reprojected; hole flags are preserved.
pub fn reproject_shape(shape: &MultiShape, projection: &dyn PointProjection) -> MultiShape {
    MultiShape::from_rings(
        shape
            .iter()
            .map(|(ring, is_hole)| (reproject_ring(ring, projection), is_hole)),
    )
}

/// Layer with every shape reprojected and the bounding box recomputed.
///
/// Kind, provenance, parent references, and the attribute table carry over
/// unchanged.
pub fn reproject_layer(layer: &Layer, projection: &dyn PointProjection) -> Layer {
    let mut output = Layer::new(layer.kind());
    if let Some((weight, reference)) = layer.parents() {
        output.set_parents(weight, reference);
    }

    for entry in layer.shapes() {
        output.push_shape(reproject_shape(&entry.geometry, projection), entry.provenance);
    }

    if let Some(table) = layer.attributes() {
        output
            .attach(table.clone())
            .expect("reprojected layer keeps the source row count");
    }
    output
}
