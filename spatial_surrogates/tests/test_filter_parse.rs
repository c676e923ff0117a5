use spatial_surrogates::filter::{AttributeKind, FilterList, FilterSpec, RangeOp, RangePredicate};
use spatial_surrogates::ParseError;

#[test]
fn parses_mixed_spec_with_comments_and_case_insensitive_keywords() {
    let text = "\
# road network weights
attribute_name=ROAD_TYPE
attribute_type=DISCRETE
include_values=PRIMARY,SEC.*

ATTRIBUTE_NAME=length
ATTRIBUTE_TYPE=continuous
EXCLUDE_VALUES=<0
";
    let spec = FilterSpec::parse(text).unwrap();
    assert_eq!(spec.len(), 2);

    let road = spec.get("road_type").unwrap();
    assert_eq!(road.kind, AttributeKind::Discrete);
    assert!(road.exclude.is_none());
    match road.include.as_ref().unwrap() {
        FilterList::Discrete(patterns) => {
            assert_eq!(patterns.len(), 2);
            assert_eq!(patterns[0].pattern(), "PRIMARY");
        }
        other => panic!("expected discrete list, got {:?}", other),
    }

    let length = spec.get("LENGTH").unwrap();
    assert_eq!(length.kind, AttributeKind::Continuous);
    match length.exclude.as_ref().unwrap() {
        FilterList::Continuous(ranges) => {
            assert_eq!(
                ranges[0],
                RangePredicate {
                    op: RangeOp::Less,
                    left: RangePredicate::OPEN_LEFT,
                    right: 0.0,
                }
            );
        }
        other => panic!("expected continuous list, got {:?}", other),
    }
}

#[test]
fn single_sided_range_forms_carry_open_operands() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=POP\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=>=100\n",
    )
    .unwrap();

    match spec.get("POP").unwrap().include.as_ref().unwrap() {
        FilterList::Continuous(ranges) => {
            assert_eq!(ranges.len(), 1);
            assert_eq!(ranges[0].op, RangeOp::GreaterEqual);
            assert_eq!(ranges[0].left, 100.0);
            assert_eq!(ranges[0].right, RangePredicate::OPEN_RIGHT);
        }
        other => panic!("expected continuous list, got {:?}", other),
    }
}

#[test]
fn between_range_accepts_negative_bounds() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=ELEV\nATTRIBUTE_TYPE=CONTINUOUS\nINCLUDE_VALUES=-5-10\n",
    )
    .unwrap();

    match spec.get("ELEV").unwrap().include.as_ref().unwrap() {
        FilterList::Continuous(ranges) => {
            assert_eq!(ranges[0].op, RangeOp::Between);
            assert_eq!(ranges[0].left, -5.0);
            assert_eq!(ranges[0].right, 10.0);
            assert!(ranges[0].matches(-3.0));
            assert!(!ranges[0].matches(-6.0));
        }
        other => panic!("expected continuous list, got {:?}", other),
    }
}

#[test]
fn empty_value_lists_are_warnings_not_errors() {
    let spec = FilterSpec::parse(
        "ATTRIBUTE_NAME=NAME\nATTRIBUTE_TYPE=DISCRETE\nINCLUDE_VALUES=\n",
    )
    .unwrap();
    assert!(spec.get("NAME").unwrap().include.as_ref().unwrap().is_empty());
}

#[test]
fn empty_text_is_the_empty_spec() {
    let spec = FilterSpec::parse("").unwrap();
    assert!(spec.is_empty());
}

#[test]
fn missing_attribute_name() {
    assert_eq!(
        FilterSpec::parse("ATTRIBUTE_NAME=\n").unwrap_err(),
        ParseError::MissingAttributeName
    );
    // a directive with no block open
    assert_eq!(
        FilterSpec::parse("ATTRIBUTE_TYPE=DISCRETE\n").unwrap_err(),
        ParseError::MissingAttributeName
    );
}

#[test]
fn duplicate_attribute_name() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=DISCRETE
INCLUDE_VALUES=X
ATTRIBUTE_NAME=a
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::DuplicateAttributeName { name: "A".into() }
    );
}

#[test]
fn multiple_attribute_type() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=DISCRETE
ATTRIBUTE_TYPE=CONTINUOUS
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::MultipleAttributeType { name: "A".into() }
    );
}

#[test]
fn missing_attribute_type() {
    let text = "\
ATTRIBUTE_NAME=A
INCLUDE_VALUES=X
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::MissingAttributeType { name: "A".into() }
    );
}

#[test]
fn invalid_attribute_type() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=FANCY
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::InvalidAttributeType {
            name: "A".into(),
            value: "FANCY".into(),
        }
    );
}

#[test]
fn multiple_include_values() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=DISCRETE
INCLUDE_VALUES=X
INCLUDE_VALUES=Y
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::MultipleIncludeValues { name: "A".into() }
    );
}

#[test]
fn multiple_exclude_values() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=DISCRETE
EXCLUDE_VALUES=X
EXCLUDE_VALUES=Y
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::MultipleExcludeValues { name: "A".into() }
    );
}

#[test]
fn block_needs_include_or_exclude() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=DISCRETE
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::MissingIncludeExclude { name: "A".into() }
    );
}

#[test]
fn unknown_keyword() {
    let text = "\
ATTRIBUTE_NAME=A
FROBNICATE=1
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::UnknownKeyword {
            keyword: "FROBNICATE".into(),
        }
    );
}

#[test]
fn invalid_range_predicate() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=CONTINUOUS
INCLUDE_VALUES=lots
";
    assert_eq!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::InvalidRange {
            name: "A".into(),
            text: "lots".into(),
        }
    );
}

#[test]
fn invalid_discrete_pattern() {
    let text = "\
ATTRIBUTE_NAME=A
ATTRIBUTE_TYPE=DISCRETE
INCLUDE_VALUES=(
";
    assert!(matches!(
        FilterSpec::parse(text).unwrap_err(),
        ParseError::InvalidPattern { name, .. } if name == "A"
    ));
}

#[test]
fn overlapping_ranges_are_fatal_with_distinct_codes() {
    let include = "\
ATTRIBUTE_NAME=AREA
ATTRIBUTE_TYPE=CONTINUOUS
INCLUDE_VALUES=0-10,5-15
";
    assert_eq!(
        FilterSpec::parse(include).unwrap_err(),
        ParseError::IncludeOverlap {
            name: "AREA".into()
        }
    );

    let exclude = "\
ATTRIBUTE_NAME=AREA
ATTRIBUTE_TYPE=CONTINUOUS
EXCLUDE_VALUES=0-10,5-15
";
    assert_eq!(
        FilterSpec::parse(exclude).unwrap_err(),
        ParseError::ExcludeOverlap {
            name: "AREA".into()
        }
    );
}

#[test]
fn touching_but_disjoint_ranges_are_accepted() {
    let text = "\
ATTRIBUTE_NAME=AREA
ATTRIBUTE_TYPE=CONTINUOUS
INCLUDE_VALUES=10-20,30-40
";
    assert!(FilterSpec::parse(text).is_ok());
}
