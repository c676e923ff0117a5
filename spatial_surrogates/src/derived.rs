//! Derived-geometry helpers built on the layer model.

use crate::core::math::{vertex, Vertex};
use crate::geom::{BoundingBox, MultiShape, Ring};
use crate::layer::{GeometryKind, Layer, LayerId, LayerRegistry, Provenance};

/// Unweighted average of all ring vertices across all rings of a shape
/// (not an area centroid). `None` for a shape with no vertices.
fn shape_centroid(shape: &MultiShape) -> Option<Vertex> {
    let count = shape.vertex_count();
    if count == 0 {
        return None;
    }

    let mut sum = vertex(0.0, 0.0);
    for ring in shape.rings() {
        for &v in &ring.vertices {
            sum = sum + v;
        }
    }
    Some(sum.scale(1.0 / count as f64))
}

/// Emits a Point-kind layer holding the centroid of every shape in
/// `source`.
///
/// The output has equal shape count and shares provenance 1:1 with the
/// source shape index, so downstream consumers can re-derive attributes by
/// nearest-site lookup. A source shape with no vertices yields an empty
/// shape, keeping the 1:1 pairing.
pub fn centroid_layer(registry: &mut LayerRegistry, source: LayerId) -> LayerId {
    let output = {
        let layer = registry.layer(source);
        let mut output = Layer::new(GeometryKind::Point);
        output.set_parents(source, source);

        for (i, entry) in layer.shapes().enumerate() {
            let geometry = match shape_centroid(&entry.geometry) {
                Some(c) => MultiShape::point(c),
                None => MultiShape::new(),
            };
            output.push_shape(geometry, Some(Provenance::new(i, i)));
        }
        output
    };

    registry.insert(output)
}

/// Builds a Polygon-kind layer holding the single 4-corner ring of `bbox`,
/// counter-clockwise.
///
/// Used to overlay against a plain rectangular region of interest instead
/// of a read polygon layer.
pub fn bounding_box_layer(registry: &mut LayerRegistry, bbox: BoundingBox) -> LayerId {
    let ring = Ring::from_vertices([
        vertex(bbox.min_x, bbox.min_y),
        vertex(bbox.max_x, bbox.min_y),
        vertex(bbox.max_x, bbox.max_y),
        vertex(bbox.min_x, bbox.max_y),
    ]);

    let mut shape = MultiShape::new();
    shape.add_ring(ring, false);
    registry.insert(Layer::from_shapes(GeometryKind::Polygon, [shape]))
}
