//! Line-oriented parser for the weight filter mini-language.
//!
//! Grammar (case-insensitive keywords, `#` comments and blank lines
//! skipped):
//!
//! ```text
//! ATTRIBUTE_NAME=<name>
//! ATTRIBUTE_TYPE={DISCRETE|CONTINUOUS}
//! INCLUDE_VALUES=<comma separated list>
//! EXCLUDE_VALUES=<comma separated list>
//! ```
//!
//! `ATTRIBUTE_NAME` opens a block; each block needs exactly one
//! `ATTRIBUTE_TYPE` and at least one of the value lists. Discrete lists are
//! patterns, continuous lists are range predicates (`<v`, `<=v`, `>v`,
//! `>=v`, `a-b`). The first validation failure aborts the parse.

use crate::error::ParseError;
use crate::filter::model::{
    AttributeFilter, AttributeKind, DiscretePattern, FilterList, FilterSpec, RangeOp,
    RangePredicate,
};

/// Raw text of one attribute block before predicate compilation.
struct RawBlock {
    name: String,
    kind: Option<AttributeKind>,
    include: Option<String>,
    exclude: Option<String>,
}

impl RawBlock {
    fn new(name: String) -> Self {
        Self {
            name,
            kind: None,
            include: None,
            exclude: None,
        }
    }
}

/// Validates a closing block: include/exclude presence first, then type,
/// matching the original checking order.
fn finish_block(block: RawBlock, blocks: &mut Vec<RawBlock>) -> Result<(), ParseError> {
    if block.include.is_none() && block.exclude.is_none() {
        return Err(ParseError::MissingIncludeExclude { name: block.name });
    }
    if block.kind.is_none() {
        return Err(ParseError::MissingAttributeType { name: block.name });
    }
    blocks.push(block);
    Ok(())
}

pub(crate) fn parse_filter_spec(text: &str) -> Result<FilterSpec, ParseError> {
    let mut blocks: Vec<RawBlock> = Vec::new();
    let mut current: Option<RawBlock> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (keyword, value) = match line.split_once('=') {
            Some((k, v)) => (k.trim().to_ascii_uppercase(), v.trim()),
            None => (line.to_ascii_uppercase(), ""),
        };

        match keyword.as_str() {
            "ATTRIBUTE_NAME" => {
                if value.is_empty() {
                    return Err(ParseError::MissingAttributeName);
                }
                let name = value.to_ascii_uppercase();

                let duplicate = blocks
                    .iter()
                    .map(|b| &b.name)
                    .chain(current.as_ref().map(|b| &b.name))
                    .any(|existing| *existing == name);
                if duplicate {
                    return Err(ParseError::DuplicateAttributeName { name });
                }

                if let Some(done) = current.take() {
                    finish_block(done, &mut blocks)?;
                }
                current = Some(RawBlock::new(name));
            }
            "ATTRIBUTE_TYPE" => {
                let block = current.as_mut().ok_or(ParseError::MissingAttributeName)?;
                if block.kind.is_some() {
                    return Err(ParseError::MultipleAttributeType {
                        name: block.name.clone(),
                    });
                }
                if value.is_empty() {
                    return Err(ParseError::MissingAttributeType {
                        name: block.name.clone(),
                    });
                }
                block.kind = Some(match value.to_ascii_uppercase().as_str() {
                    "DISCRETE" => AttributeKind::Discrete,
                    "CONTINUOUS" => AttributeKind::Continuous,
                    _ => {
                        return Err(ParseError::InvalidAttributeType {
                            name: block.name.clone(),
                            value: value.to_string(),
                        })
                    }
                });
            }
            "INCLUDE_VALUES" => {
                let block = current.as_mut().ok_or(ParseError::MissingAttributeName)?;
                if block.include.is_some() {
                    return Err(ParseError::MultipleIncludeValues {
                        name: block.name.clone(),
                    });
                }
                if value.is_empty() {
                    tracing::warn!(
                        attribute = %block.name,
                        "INCLUDE_VALUES has an empty right hand side; treated as include-all"
                    );
                }
                block.include = Some(value.to_string());
            }
            "EXCLUDE_VALUES" => {
                let block = current.as_mut().ok_or(ParseError::MissingAttributeName)?;
                if block.exclude.is_some() {
                    return Err(ParseError::MultipleExcludeValues {
                        name: block.name.clone(),
                    });
                }
                if value.is_empty() {
                    tracing::warn!(
                        attribute = %block.name,
                        "EXCLUDE_VALUES has an empty right hand side; treated as exclude-none"
                    );
                }
                block.exclude = Some(value.to_string());
            }
            other => {
                return Err(ParseError::UnknownKeyword {
                    keyword: other.to_string(),
                });
            }
        }
    }

    if let Some(done) = current.take() {
        finish_block(done, &mut blocks)?;
    }

    let mut filters = Vec::with_capacity(blocks.len());
    for block in blocks {
        filters.push(compile_block(block)?);
    }

    let spec = FilterSpec::from_filters(filters);
    check_for_overlaps(&spec)?;
    Ok(spec)
}

fn compile_list(
    name: &str,
    kind: AttributeKind,
    raw: Option<String>,
) -> Result<Option<FilterList>, ParseError> {
    let raw = match raw {
        Some(r) => r,
        None => return Ok(None),
    };

    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty());

    let list = match kind {
        AttributeKind::Discrete => FilterList::Discrete(
            items
                .map(|item| DiscretePattern::compile(name, &item.to_ascii_uppercase()))
                .collect::<Result<_, _>>()?,
        ),
        AttributeKind::Continuous => FilterList::Continuous(
            items
                .map(|item| parse_range(name, item))
                .collect::<Result<_, _>>()?,
        ),
    };
    Ok(Some(list))
}

/// Compiles a validated raw block into predicate lists.
fn compile_block(block: RawBlock) -> Result<AttributeFilter, ParseError> {
    let kind = block
        .kind
        .expect("block type is validated before compilation");

    let include = compile_list(&block.name, kind, block.include)?;
    let exclude = compile_list(&block.name, kind, block.exclude)?;

    Ok(AttributeFilter {
        name: block.name,
        kind,
        include,
        exclude,
    })
}

fn parse_number(name: &str, text: &str) -> Result<f64, ParseError> {
    text.trim().parse().map_err(|_| ParseError::InvalidRange {
        name: name.to_string(),
        text: text.to_string(),
    })
}

/// Parses one continuous predicate of the forms `<v`, `<=v`, `>v`, `>=v`,
/// `a-b`.
fn parse_range(name: &str, text: &str) -> Result<RangePredicate, ParseError> {
    if let Some(rest) = text.strip_prefix("<=") {
        return Ok(RangePredicate {
            op: RangeOp::LessEqual,
            left: RangePredicate::OPEN_LEFT,
            right: parse_number(name, rest)?,
        });
    }
    if let Some(rest) = text.strip_prefix('<') {
        return Ok(RangePredicate {
            op: RangeOp::Less,
            left: RangePredicate::OPEN_LEFT,
            right: parse_number(name, rest)?,
        });
    }
    if let Some(rest) = text.strip_prefix(">=") {
        return Ok(RangePredicate {
            op: RangeOp::GreaterEqual,
            left: parse_number(name, rest)?,
            right: RangePredicate::OPEN_RIGHT,
        });
    }
    if let Some(rest) = text.strip_prefix('>') {
        return Ok(RangePredicate {
            op: RangeOp::Greater,
            left: parse_number(name, rest)?,
            right: RangePredicate::OPEN_RIGHT,
        });
    }

    // `a-b`: split on the first '-' that is not a leading sign and not part
    // of an exponent
    let bytes = text.as_bytes();
    for i in 1..bytes.len() {
        if bytes[i] == b'-' && !matches!(bytes[i - 1], b'e' | b'E') {
            let left = parse_number(name, &text[..i])?;
            let right = parse_number(name, &text[i + 1..])?;
            return Ok(RangePredicate {
                op: RangeOp::Between,
                left,
                right,
            });
        }
    }

    Err(ParseError::InvalidRange {
        name: name.to_string(),
        text: text.to_string(),
    })
}

/// Scans all pairwise continuous ranges within each include set and each
/// exclude set for overlap; any overlap is fatal with distinct error kinds
/// for the two sets.
fn check_for_overlaps(spec: &FilterSpec) -> Result<(), ParseError> {
    fn has_overlap(list: &Option<FilterList>) -> bool {
        if let Some(FilterList::Continuous(ranges)) = list {
            for i in 0..ranges.len() {
                for j in (i + 1)..ranges.len() {
                    if ranges[i].overlaps(&ranges[j]) {
                        return true;
                    }
                }
            }
        }
        false
    }

    for filter in spec.filters() {
        if has_overlap(&filter.include) {
            return Err(ParseError::IncludeOverlap {
                name: filter.name.clone(),
            });
        }
        if has_overlap(&filter.exclude) {
            return Err(ParseError::ExcludeOverlap {
                name: filter.name.clone(),
            });
        }
    }
    Ok(())
}
