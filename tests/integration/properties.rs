//! Property tests: arbitrary documents survive a trip through the store.

use crate::common::*;
use docstore::{Document, Filter, Value};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".{0,32}".prop_map(Value::String),
        any::<i32>().prop_map(Value::Int),
        any::<u64>().prop_map(|bits| Value::Float(f64::from_bits(bits))),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::btree_map(".{1,16}", value_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_insert_select_round_trip(fields in document_strategy()) {
        let db = ephemeral();
        let id = db.insert("docs", &fields).unwrap();
        let records = db.select("docs", &Filter::new()).unwrap();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].id, id);
        prop_assert_eq!(&records[0].fields, &fields);
    }

    #[test]
    fn prop_any_filter_on_own_field_finds_record(fields in document_strategy()) {
        prop_assume!(!fields.is_empty());
        let db = ephemeral();
        db.insert("docs", &fields).unwrap();
        db.insert("docs", &Document::new()).unwrap();

        let (name, value) = fields.iter().next().unwrap();
        let filter = Filter::new().eq(name.clone(), value.clone());
        let records = db.select("docs", &filter).unwrap();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(&records[0].fields, &fields);
    }
}
