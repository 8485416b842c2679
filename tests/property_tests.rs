//! Property tests for parsing bounds and classification invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use tabular_preview::{Ingestor, SampleSize, Table, Value, classify};

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z0-9 ]{0,80}".prop_map(Value::String),
    ]
}

fn table() -> impl Strategy<Value = Table> {
    // Short names over a small alphabet so duplicate headers come up often
    prop::collection::vec("[a-z_]{1,3}", 1..8)
        .prop_flat_map(|columns| {
            let width = columns.len();
            (
                Just(columns),
                prop::collection::vec(prop::collection::vec(cell(), width), 0..12),
            )
        })
        .prop_map(|(columns, rows)| {
            let mut table = Table::new(columns);
            for row in rows {
                table.push_row(row);
            }
            table
        })
}

proptest! {
    #[test]
    fn classification_partitions_columns(table in table()) {
        let classes = classify(&table);

        if table.is_empty() {
            prop_assert!(classes.is_empty());
        } else {
            let groups = [&classes.numeric, &classes.categorical, &classes.datetime, &classes.text];
            let mut seen = HashSet::new();
            for group in groups {
                for name in group {
                    prop_assert!(seen.insert(name.clone()), "{} classified twice", name);
                }
            }
            let distinct: HashSet<String> = table.columns().iter().cloned().collect();
            prop_assert_eq!(classes.len(), distinct.len());
            prop_assert_eq!(seen, distinct);
        }
    }

    #[test]
    fn classification_is_idempotent(table in table()) {
        prop_assert_eq!(classify(&table), classify(&table));
    }

    #[test]
    fn parsed_shape_matches_header_and_cap(
        width in 1usize..6,
        rows in 0usize..40,
        cap in 0usize..25,
    ) {
        let header: Vec<String> = (0..width).map(|i| format!("col{i}")).collect();
        let mut data = header.join(",");
        data.push('\n');
        for r in 0..rows {
            let line: Vec<String> = (0..width).map(|c| format!("v{r}_{c}")).collect();
            data.push_str(&line.join(","));
            data.push('\n');
        }

        let mut ingestor = Ingestor::new();
        ingestor.sample_size(SampleSize::Records(cap));
        let table = ingestor.parse_bytes("gen.csv", data.as_bytes()).unwrap();

        prop_assert_eq!(table.num_columns(), width);
        prop_assert_eq!(table.num_rows(), rows.min(cap));
    }

    #[test]
    fn numeric_strings_always_numeric(values in prop::collection::vec(-1_000_000i64..1_000_000, 1..20)) {
        let mut table = Table::new(vec!["amount".to_string()]);
        for v in &values {
            table.push_row(vec![Value::String(v.to_string())]);
        }
        prop_assert_eq!(classify(&table).numeric, vec!["amount".to_string()]);
    }
}
