use spatial_surrogates::core::math::vertex;
use spatial_surrogates::derived::{bounding_box_layer, centroid_layer};
use spatial_surrogates::geom::{BoundingBox, MultiShape, Ring};
use spatial_surrogates::layer::{AttrField, AttrType, AttrValue, AttributeTable};
use spatial_surrogates::{GeometryKind, Layer, LayerRegistry};

fn square_shape(x0: f64, y0: f64, size: f64) -> MultiShape {
    let mut shape = MultiShape::new();
    shape.add_ring(
        Ring::from_vertices([
            vertex(x0, y0),
            vertex(x0 + size, y0),
            vertex(x0 + size, y0 + size),
            vertex(x0, y0 + size),
        ]),
        false,
    );
    shape
}

#[test]
fn centroid_layer_averages_all_ring_vertices() {
    let mut registry = LayerRegistry::new();
    let mut source_layer = Layer::from_shapes(
        GeometryKind::Polygon,
        [square_shape(0.0, 0.0, 2.0), square_shape(4.0, 4.0, 1.0)],
    );
    source_layer
        .attach(
            AttributeTable::new(
                vec![AttrField::new("NAME", AttrType::String)],
                vec![
                    vec![AttrValue::String("big".into())],
                    vec![AttrValue::String("small".into())],
                ],
            )
            .unwrap(),
        )
        .unwrap();
    let source = registry.insert(source_layer);

    let centroids = centroid_layer(&mut registry, source);
    let output = registry.layer(centroids);

    assert_eq!(output.kind(), GeometryKind::Point);
    assert_eq!(output.shape_count(), 2);
    assert_eq!(
        output.shape(0).unwrap().ring(0).unwrap().at(0),
        vertex(1.0, 1.0)
    );
    assert_eq!(
        output.shape(1).unwrap().ring(0).unwrap().at(0),
        vertex(4.5, 4.5)
    );

    // provenance is 1:1 with the source shape index on both sides
    let p = output.provenance(1).unwrap();
    assert_eq!((p.weight, p.reference), (1, 1));
    assert_eq!(output.parents(), Some((source, source)));

    assert_eq!(
        registry.weight_attribute(centroids, 1, 0),
        Some(&AttrValue::String("small".into()))
    );
    assert_eq!(
        registry.reference_attribute(centroids, 0, 0),
        Some(&AttrValue::String("big".into()))
    );
}

#[test]
fn bounding_box_layer_is_one_ccw_rectangle() {
    let mut registry = LayerRegistry::new();
    let bbox = BoundingBox::new(-2.0, 1.0, 3.0, 4.0);
    let id = bounding_box_layer(&mut registry, bbox);
    let layer = registry.layer(id);

    assert_eq!(layer.kind(), GeometryKind::Polygon);
    assert_eq!(layer.shape_count(), 1);
    assert_eq!(layer.bounding_box(), Some(bbox));

    let shape = layer.shape(0).unwrap();
    assert_eq!(shape.ring_count(), 1);
    assert_eq!(shape.is_hole(0), Some(false));

    let ring = shape.ring(0).unwrap();
    assert_eq!(ring.vertex_count(), 4);
    // counter-clockwise: positive area equal to the box extent
    assert_eq!(ring.signed_area(), 5.0 * 3.0);
}
