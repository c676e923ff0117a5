use spatial_surrogates::core::math::vertex;
use spatial_surrogates::filter::{filter_layer, matches, record_matches, FilterSpec};
use spatial_surrogates::layer::{AttrField, AttrType, AttrValue, AttributeTable};
use spatial_surrogates::{AttributeError, Error, GeometryKind, Layer, LayerRegistry, MultiShape};

fn area_table(values: &[f64]) -> AttributeTable {
    AttributeTable::new(
        vec![AttrField::new("AREA", AttrType::Double)],
        values
            .iter()
            .map(|&v| vec![AttrValue::Double(v)])
            .collect(),
    )
    .unwrap()
}

#[test]
fn continuous_include_truth_table() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=AREA\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=10-20,30-40\n",
    )
    .unwrap();
    let table = area_table(&[5.0, 15.0, 25.0, 35.0, 45.0]);

    let results: Vec<bool> = (0..5).map(|row| matches(&spec, &table, row, "AREA")).collect();
    assert_eq!(results, vec![false, true, false, true, false]);
}

#[test]
fn exclude_only_inverts() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=AREA\nATTRIBUTE_TYPE=CONTINUOUS\nEXCLUDE_VALUES=>=100\n",
    )
    .unwrap();
    let table = area_table(&[50.0, 150.0]);

    assert!(matches(&spec, &table, 0, "AREA"));
    assert!(!matches(&spec, &table, 1, "AREA"));
}

#[test]
fn include_and_exclude_combine() {
    // keep 0-100 but drop 40-60 within it
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=AREA\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=0-100\nEXCLUDE_VALUES=40-60\n",
    )
    .unwrap();
    let table = area_table(&[10.0, 50.0, 90.0, 200.0]);

    let results: Vec<bool> = (0..4).map(|row| matches(&spec, &table, row, "AREA")).collect();
    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn discrete_patterns_match_case_insensitively() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=ROAD_TYPE\nATTRIBUTE_TYPE=DISCRETE\nINCLUDE_VALUES=PRIMARY,SEC.*\n",
    )
    .unwrap();
    let table = AttributeTable::new(
        vec![AttrField::new("ROAD_TYPE", AttrType::String)],
        vec![
            vec![AttrValue::String("primary".into())],
            vec![AttrValue::String("Secondary".into())],
            vec![AttrValue::String("tertiary".into())],
            // whole-value match: a prefix alone does not qualify
            vec![AttrValue::String("primaries".into())],
        ],
    )
    .unwrap();

    let results: Vec<bool> = (0..4)
        .map(|row| matches(&spec, &table, row, "ROAD_TYPE"))
        .collect();
    assert_eq!(results, vec![true, true, false, false]);
}

#[test]
fn integer_values_filter_continuously() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=LANES\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=>2\n",
    )
    .unwrap();
    let table = AttributeTable::new(
        vec![AttrField::new("LANES", AttrType::Integer)],
        vec![
            vec![AttrValue::Integer(2)],
            vec![AttrValue::Integer(4)],
        ],
    )
    .unwrap();

    assert!(!matches(&spec, &table, 0, "LANES"));
    assert!(matches(&spec, &table, 1, "LANES"));
}

#[test]
fn unfiltered_attributes_pass_through() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=AREA\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=10-20\n",
    )
    .unwrap();
    let table = area_table(&[999.0]);

    // OTHER is not named by the filter
    assert!(matches(&spec, &table, 0, "OTHER"));
}

#[test]
fn record_matches_requires_every_filtered_attribute() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=AREA\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=10-20\n\
         ATTRIBUTE_NAME=NAME\nATTRIBUTE_TYPE=DISCRETE\nINCLUDE_VALUES=KEEP.*\n",
    )
    .unwrap();
    let table = AttributeTable::new(
        vec![
            AttrField::new("AREA", AttrType::Double),
            AttrField::new("NAME", AttrType::String),
        ],
        vec![
            vec![AttrValue::Double(15.0), AttrValue::String("keep-a".into())],
            vec![AttrValue::Double(15.0), AttrValue::String("drop-b".into())],
            vec![AttrValue::Double(99.0), AttrValue::String("keep-c".into())],
        ],
    )
    .unwrap();

    assert!(record_matches(&spec, &table, 0));
    assert!(!record_matches(&spec, &table, 1));
    assert!(!record_matches(&spec, &table, 2));
}

#[test]
fn filter_layer_keeps_matching_records_with_their_attributes() {
    let mut registry = LayerRegistry::new();

    let mut layer = Layer::from_shapes(
        GeometryKind::Point,
        [
            MultiShape::point(vertex(0.0, 0.0)),
            MultiShape::point(vertex(1.0, 0.0)),
            MultiShape::point(vertex(2.0, 0.0)),
        ],
    );
    layer.attach(area_table(&[15.0, 25.0, 35.0])).unwrap();
    let source = registry.insert(layer);

    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=AREA\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=10-20,30-40\n",
    )
    .unwrap();

    let filtered = filter_layer(&mut registry, source, &spec).unwrap();
    let output = registry.layer(filtered);

    assert_eq!(output.shape_count(), 2);
    assert_eq!(output.kind(), GeometryKind::Point);
    assert_eq!(
        output.shape(0).unwrap().ring(0).unwrap().at(0),
        vertex(0.0, 0.0)
    );
    assert_eq!(
        output.shape(1).unwrap().ring(0).unwrap().at(0),
        vertex(2.0, 0.0)
    );
    assert_eq!(output.attribute(0, 0), Some(&AttrValue::Double(15.0)));
    assert_eq!(output.attribute(1, 0), Some(&AttrValue::Double(35.0)));
}

#[test]
fn filter_layer_rejects_unknown_attributes() {
    let mut registry = LayerRegistry::new();
    let mut layer = Layer::from_shapes(GeometryKind::Point, [MultiShape::point(vertex(0.0, 0.0))]);
    layer.attach(area_table(&[1.0])).unwrap();
    let source = registry.insert(layer);

    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=MISSING\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=>0\n",
    )
    .unwrap();

    match filter_layer(&mut registry, source, &spec) {
        Err(Error::Attribute(AttributeError::UnknownField { name })) => {
            assert_eq!(name, "MISSING");
        }
        other => panic!("expected UnknownField error, got {:?}", other),
    }
}
