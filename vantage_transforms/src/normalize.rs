// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw structure → normalized records.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use vantage_core::{Dataset, Key, Record};

use crate::raw::{RawData, RawNode};

/// Normalizes a raw fetched structure into a [`Dataset`].
///
/// `choice` selects the category/subset to extract: a column name for
/// [`RawData::Columns`], a row group for [`RawData::Rows`], and a top-level node name
/// for [`RawData::Tree`].
///
/// Fail-soft: if the requested choice is absent or matches nothing, the result is an
/// empty dataset; downstream layout maps that to an empty frame and the renderer to a
/// placeholder. Non-finite values are coerced to `0.0` at record construction, so `NaN`
/// never reaches layout.
pub fn normalize(raw: &RawData, choice: &str) -> Dataset {
    let records = match raw {
        RawData::Columns { axis, series } => {
            let chosen: Vec<_> = series.iter().filter(|c| c.name == choice).collect();
            if chosen.is_empty() {
                tracing::debug!(choice, "no matching column; yielding empty dataset");
            }
            let mut out = Vec::new();
            for column in chosen {
                for (i, &at) in axis.iter().enumerate() {
                    let value = column.values.get(i).copied().unwrap_or(0.0);
                    out.push(
                        Record::new(Key::series(column.name.clone(), axis_label(at)), [value])
                            .with_order(at),
                    );
                }
            }
            out
        }
        RawData::Rows(rows) => {
            let mut out = Vec::new();
            for row in rows.iter().filter(|r| r.group == choice) {
                let key = if row.series.is_empty() {
                    Key::name(row.category.clone())
                } else {
                    Key::series(row.series.clone(), row.category.clone())
                };
                let mut record = Record::new(key, [row.value]);
                if let Some(order) = row.order {
                    record = record.with_order(order);
                }
                out.push(record);
            }
            if out.is_empty() {
                tracing::debug!(choice, "no rows in group; yielding empty dataset");
            }
            out
        }
        RawData::Tree(forest) => match forest.iter().find(|n| n.name == choice) {
            Some(node) => flatten_tree(node),
            None => {
                tracing::debug!(choice, "no such tree node; yielding empty dataset");
                Vec::new()
            }
        },
    };
    Dataset::from_records(records)
}

/// Flattens the children of a chosen node: leaves become named records, interior
/// children become one series each, with deeper structure summed into their leaves.
fn flatten_tree(node: &RawNode) -> Vec<Record> {
    let mut out = Vec::new();
    for child in &node.children {
        if child.children.is_empty() {
            out.push(Record::new(Key::name(child.name.clone()), [child.value]));
        } else {
            for leaf in &child.children {
                out.push(Record::new(
                    Key::series(child.name.clone(), leaf.name.clone()),
                    [leaf.leaf_sum()],
                ));
            }
        }
    }
    out
}

fn axis_label(v: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "saturating cast; only used when the round-trip is exact"
    )]
    let w = v as i64;
    if v.abs() < 9.0e15 && (w as f64) == v {
        format!("{w}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use crate::raw::NamedColumn;

    use super::*;

    fn columns() -> RawData {
        RawData::Columns {
            axis: vec![2001.0, 2002.0],
            series: vec![
                NamedColumn {
                    name: "Bombing".to_string(),
                    values: vec![10.0, 30.0],
                },
                NamedColumn {
                    name: "Assault".to_string(),
                    values: vec![5.0],
                },
            ],
        }
    }

    #[test]
    fn column_choice_extracts_one_series_with_order_hints() {
        let ds = normalize(&columns(), "Bombing");
        assert_eq!(ds.len(), 2);
        let r = ds.get(&Key::series("Bombing", "2001")).unwrap();
        assert_eq!(r.value(), 10.0);
        assert_eq!(r.order(), Some(2001.0));
    }

    #[test]
    fn integral_axis_values_label_without_a_decimal_point() {
        let raw = RawData::Columns {
            axis: vec![2001.0, 2001.5],
            series: vec![NamedColumn {
                name: "Bombing".to_string(),
                values: vec![1.0, 2.0],
            }],
        };
        let ds = normalize(&raw, "Bombing");
        assert!(ds.contains_key(&Key::series("Bombing", "2001")));
        assert!(ds.contains_key(&Key::series("Bombing", "2001.5")));
    }

    #[test]
    fn short_columns_read_as_zero_past_their_end() {
        let ds = normalize(&columns(), "Assault");
        assert_eq!(ds.get(&Key::series("Assault", "2002")).unwrap().value(), 0.0);
    }

    #[test]
    fn empty_choice_yields_an_empty_dataset() {
        assert!(normalize(&columns(), "").is_empty());
    }

    #[test]
    fn missing_choice_yields_an_empty_dataset_not_an_error() {
        assert!(normalize(&columns(), "no-such-series").is_empty());
        assert!(normalize(&RawData::Rows(vec![]), "anything").is_empty());
        assert!(normalize(&RawData::Tree(vec![]), "anything").is_empty());
    }

    #[test]
    fn tree_choice_flattens_two_levels() {
        let raw = RawData::Tree(vec![RawNode::group(
            "attacks",
            vec![
                RawNode::leaf("Hijacking", 3.0),
                RawNode::group(
                    "Bombing",
                    vec![RawNode::leaf("Car", 7.0), RawNode::leaf("Letter", 2.0)],
                ),
            ],
        )]);
        let ds = normalize(&raw, "attacks");
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.get(&Key::name("Hijacking")).unwrap().value(), 3.0);
        assert_eq!(ds.get(&Key::series("Bombing", "Car")).unwrap().value(), 7.0);
    }
}
