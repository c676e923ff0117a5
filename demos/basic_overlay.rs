//! Overlays a small line layer onto a 2x2 reference grid and prints the
//! clipped pieces with their provenance.

use spatial_surrogates::core::math::{vertex, LengthMode};
use spatial_surrogates::geom::{MultiShape, Ring};
use spatial_surrogates::{
    overlay, GeometryKind, Layer, LayerRegistry, OverlayOptions, PolygonClip,
};

/// Stand-in for a real polygon clipper; line weights never reach it.
struct NoPolygons;

impl PolygonClip for NoPolygons {
    fn intersection(&self, _subject: &MultiShape, _clip: &MultiShape) -> MultiShape {
        MultiShape::new()
    }
}

fn cell(x0: f64, y0: f64) -> MultiShape {
    let mut shape = MultiShape::new();
    shape.add_ring(
        Ring::from_vertices([
            vertex(x0, y0),
            vertex(x0 + 1.0, y0),
            vertex(x0 + 1.0, y0 + 1.0),
            vertex(x0, y0 + 1.0),
        ]),
        false,
    );
    shape
}

fn main() {
    tracing_subscriber::fmt().init();

    let mut registry = LayerRegistry::new();

    let grid = registry.insert(Layer::from_shapes(
        GeometryKind::Polygon,
        [cell(0.0, 0.0), cell(1.0, 0.0), cell(0.0, 1.0), cell(1.0, 1.0)],
    ));

    let road = MultiShape::from_rings([(
        Ring::from_vertices([vertex(-0.5, 0.25), vertex(2.5, 1.75)]),
        false,
    )]);
    let roads = registry.insert(Layer::from_shapes(GeometryKind::Line, [road]));

    let outcome = overlay(
        &mut registry,
        roads,
        grid,
        &NoPolygons,
        &OverlayOptions::default(),
    )
    .expect("reference layer is polygon geometry");

    println!("matched: {}", outcome.matched);
    let output = registry.layer(outcome.layer);
    for i in 0..output.shape_count() {
        let shape = output.shape(i).unwrap();
        let provenance = output.provenance(i).unwrap();
        println!(
            "piece {}: weight shape {} in cell {}, length {:.3}",
            i,
            provenance.weight,
            provenance.reference,
            shape.length(LengthMode::Flat)
        );
    }
}
