//! Parses a weight filter specification and evaluates records against it.

use spatial_surrogates::filter::{matches, FilterSpec};
use spatial_surrogates::layer::{AttrField, AttrType, AttrValue, AttributeTable};

fn main() {
    tracing_subscriber::fmt().init();

    let spec = FilterSpec::parse(
        "\
# keep mid-sized primary roads
ATTRIBUTE_NAME=ROAD_TYPE
ATTRIBUTE_TYPE=DISCRETE
INCLUDE_VALUES=PRIMARY,SEC.*

ATTRIBUTE_NAME=AREA
ATTRIBUTE_TYPE=CONTINUOUS
INCLUDE_VALUES=10-20,30-40
",
    )
    .expect("filter spec is valid");

    let table = AttributeTable::new(
        vec![
            AttrField::new("ROAD_TYPE", AttrType::String),
            AttrField::new("AREA", AttrType::Double),
        ],
        vec![
            vec![AttrValue::String("primary".into()), AttrValue::Double(15.0)],
            vec![AttrValue::String("tertiary".into()), AttrValue::Double(15.0)],
            vec![
                AttrValue::String("secondary".into()),
                AttrValue::Double(25.0),
            ],
        ],
    )
    .expect("schema is valid");

    for row in 0..table.row_count() {
        println!(
            "record {}: road_type {} area {}",
            row,
            matches(&spec, &table, row, "ROAD_TYPE"),
            matches(&spec, &table, row, "AREA"),
        );
    }
}
