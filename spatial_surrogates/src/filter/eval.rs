use crate::error::{AttributeError, Result};
use crate::filter::model::{FilterList, FilterSpec};
use crate::layer::{AttrValue, AttributeTable, Layer, LayerId, LayerRegistry};

fn list_matches(list: &FilterList, value: &AttrValue) -> bool {
    match list {
        FilterList::Discrete(patterns) => {
            let field = value.to_field_string().to_ascii_uppercase();
            patterns.iter().any(|p| p.is_match(&field))
        }
        FilterList::Continuous(ranges) => match value.numeric_value() {
            Some(v) => ranges.iter().any(|r| r.matches(v)),
            None => false,
        },
    }
}

/// Evaluates one attribute of one record against the filter specification.
///
/// The result is `include_matches && !exclude_matches`. An attribute the
/// specification does not name always matches (pass-through); an empty
/// include list includes everything and an empty exclude list excludes
/// nothing. A record whose attribute is missing from the table never
/// matches.
pub fn matches(spec: &FilterSpec, table: &AttributeTable, row: usize, attr_name: &str) -> bool {
    let filter = match spec.get(attr_name) {
        None => return true,
        Some(f) => f,
    };
    let col = match table.field_index(attr_name) {
        None => return false,
        Some(c) => c,
    };
    let value = match table.value(row, col) {
        None => return false,
        Some(v) => v,
    };

    let include = filter
        .include
        .as_ref()
        .map_or(true, |list| list.is_empty() || list_matches(list, value));
    let exclude = filter
        .exclude
        .as_ref()
        .is_some_and(|list| !list.is_empty() && list_matches(list, value));

    include && !exclude
}

/// A record is kept iff every attribute the specification filters on
/// matches.
pub fn record_matches(spec: &FilterSpec, table: &AttributeTable, row: usize) -> bool {
    spec.filters()
        .iter()
        .all(|f| matches(spec, table, row, &f.name))
}

/// Builds a derived layer keeping exactly the records that pass the filter
/// specification.
///
/// Geometry and attribute rows are kept together; the output layer carries
/// the same kind and a subset attribute table. Warns when nothing matched
/// and when nothing was filtered out.
///
/// # Errors
///
/// [AttributeError::UnknownField] when the specification filters an
/// attribute the layer does not carry.
pub fn filter_layer(
    registry: &mut LayerRegistry,
    layer_id: LayerId,
    spec: &FilterSpec,
) -> Result<LayerId> {
    let (mut output, subset) = {
        let layer = registry.layer(layer_id);

        for filter in spec.filters() {
            let known = layer
                .attributes()
                .map_or(false, |t| t.field_index(&filter.name).is_some());
            if !known {
                return Err(AttributeError::UnknownField {
                    name: filter.name.clone(),
                }
                .into());
            }
        }

        let keep: Vec<usize> = (0..layer.shape_count())
            .filter(|&row| {
                layer
                    .attributes()
                    .map_or(true, |table| record_matches(spec, table, row))
            })
            .collect();

        if keep.is_empty() {
            tracing::warn!("no records matched the filter specification");
        } else if keep.len() == layer.shape_count() {
            tracing::warn!("no records were filtered; output matches input");
        }

        let mut output = Layer::new(layer.kind());
        for &row in &keep {
            if let Some(shape) = layer.shape(row) {
                output.push_shape(shape.clone(), None);
            }
        }

        let subset = layer
            .attributes()
            .map(|table| table.subset(keep.iter().copied()));
        (output, subset)
    };

    if let Some(table) = subset {
        output.attach(table)?;
    }
    Ok(registry.insert(output))
}
