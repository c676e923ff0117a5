use crate::error::GeometryError;
use crate::geom::{BoundingBox, MultiShape};
use crate::layer::{GeometryKind, Layer, LayerId, LayerRegistry, Provenance};
use crate::overlay::line_clip::line_clip;
use crate::overlay::point_clip::point_clip;

/// External polygon-clip collaborator.
///
/// Polygon-against-polygon clipping is delegated: given two ring sets the
/// implementation returns the intersection ring set with hole flags (an
/// empty [MultiShape] when the shapes do not intersect). The engine only
/// orchestrates the calls; line and point clipping are handled internally.
pub trait PolygonClip {
    /// Intersection of `subject` with `clip`.
    fn intersection(&self, subject: &MultiShape, clip: &MultiShape) -> MultiShape;
}

/// Options parameters passed when performing an overlay.
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Fuzzy comparison epsilon used for determining if two positions are
    /// equal.
    pub pos_equal_eps: f64,
}

impl OverlayOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: 1e-5,
        }
    }
}

impl Default for OverlayOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an overlay run.
#[derive(Debug, Copy, Clone)]
pub struct OverlayOutcome {
    /// The output layer, owned by the registry the overlay ran in.
    pub layer: LayerId,
    /// Whether any weight/reference shape pair produced a non-empty clip.
    ///
    /// Disjoint inputs are a normal outcome reported as `false`, not an
    /// error.
    pub matched: bool,
}

/// Overlays the weight layer onto the reference polygon layer.
///
/// For every pair of shapes whose bounding boxes overlap, dispatches by the
/// weight layer's geometry kind (polygon clipping via `clipper`, line and
/// point clipping internally). Every non-empty clip result becomes one
/// output shape tagged with the [Provenance] of its two source shapes; the
/// output layer's parents are `(weight, reference)` and its bounding box is
/// recomputed from its shapes.
///
/// The scan is a bounding-box-pruned pairwise loop; no spatial index beyond
/// the boxes is built.
///
/// # Errors
///
/// [GeometryError::UnsupportedGeometry] when the reference layer is not
/// polygon geometry.
pub fn overlay(
    registry: &mut LayerRegistry,
    weight: LayerId,
    reference: LayerId,
    clipper: &dyn PolygonClip,
    options: &OverlayOptions,
) -> Result<OverlayOutcome, GeometryError> {
    let eps = options.pos_equal_eps;

    let output = {
        let weight_layer = registry.layer(weight);
        let reference_layer = registry.layer(reference);

        if reference_layer.kind() != GeometryKind::Polygon {
            return Err(GeometryError::UnsupportedGeometry {
                kind: reference_layer.kind(),
            });
        }

        let mut output = Layer::new(weight_layer.kind());
        output.set_parents(weight, reference);

        let layer_boxes = (weight_layer.bounding_box(), reference_layer.bounding_box());
        match layer_boxes {
            (Some(weight_bb), Some(reference_bb)) if weight_bb.overlaps(&reference_bb) => {
                // per-shape boxes for the weight side are reused across
                // every reference shape
                let weight_boxes: Vec<Option<BoundingBox>> = weight_layer
                    .shapes()
                    .map(|s| s.geometry.bounding_box())
                    .collect();

                for (j, reference_entry) in reference_layer.shapes().enumerate() {
                    let reference_shape_bb = match reference_entry.geometry.bounding_box() {
                        Some(bb) => bb,
                        None => continue,
                    };
                    if !weight_bb.overlaps(&reference_shape_bb) {
                        continue;
                    }

                    for (i, weight_entry) in weight_layer.shapes().enumerate() {
                        let overlap = weight_boxes[i]
                            .map(|bb| bb.overlaps(&reference_shape_bb))
                            .unwrap_or(false);
                        if !overlap {
                            continue;
                        }

                        let clipped = match weight_layer.kind() {
                            GeometryKind::Polygon => clipper
                                .intersection(&weight_entry.geometry, &reference_entry.geometry),
                            GeometryKind::Line => {
                                line_clip(&weight_entry.geometry, &reference_entry.geometry, eps)
                            }
                            GeometryKind::Point => {
                                point_clip(&weight_entry.geometry, &reference_entry.geometry, eps)
                            }
                        };

                        if !clipped.is_empty() {
                            output.push_shape(clipped, Some(Provenance::new(i, j)));
                        }
                    }
                }

                tracing::debug!(
                    weight_shapes = weight_layer.shape_count(),
                    reference_shapes = reference_layer.shape_count(),
                    output_shapes = output.shape_count(),
                    "overlay join complete"
                );
            }
            _ => {
                tracing::warn!("no overlap between weight and reference layer bounding boxes");
            }
        }

        output.recompute_bounding_box();
        output
    };

    let matched = !output.is_empty();
    let layer = registry.insert(output);
    Ok(OverlayOutcome { layer, matched })
}
