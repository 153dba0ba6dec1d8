//! Property tests: encoding then decoding returns the original document.

use crate::common::doc;
use attrstore::{
    decode, encode, item_from_wire, item_to_wire, json_object_to_map, map_to_json_object,
    DocumentValue, ItemValue,
};
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::from),
        any::<u64>().prop_map(Number::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_filter_map("representable", Number::from_f64),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number().prop_map(Value::Number),
        "\\PC{0,20}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(6, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z0-9_]{0,8}", inner, 0..8)
                .prop_map(|fields| Value::Object(fields.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-zA-Z0-9_]{0,8}", arb_json(), 0..12)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// decode(encode(v)) == v for any document within the depth limit
    #[test]
    fn prop_document_round_trip(value in arb_json()) {
        let original = doc(value);
        let encoded = encode(&original).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), original);
    }

    /// Every unique object key becomes exactly one item attribute
    #[test]
    fn prop_object_keys_map_one_to_one(fields in arb_object()) {
        let original = doc(Value::Object(fields.clone()));
        let item = json_object_to_map(&original).unwrap();

        prop_assert_eq!(item.len(), fields.len());
        for key in fields.keys() {
            prop_assert!(item.contains_key(key));
        }
        prop_assert_eq!(map_to_json_object(&item).unwrap(), original);
    }

    /// Store wire form carries items through unchanged
    #[test]
    fn prop_wire_form_round_trip(fields in arb_object()) {
        let item = json_object_to_map(&doc(Value::Object(fields))).unwrap();
        let wire = item_to_wire(&item).unwrap();
        prop_assert_eq!(item_from_wire(&wire).unwrap(), item);
    }

    /// Floats keep their fractional form through the number text
    #[test]
    fn prop_floats_stay_floats(f in -1.0e12f64..1.0e12f64) {
        let original = DocumentValue::from(f);
        let decoded = decode(&encode(&original).unwrap()).unwrap();
        prop_assert!(decoded.is_f64());
        prop_assert_eq!(decoded.as_f64(), Some(f));
    }
}

#[test]
fn integer_and_float_text_stay_distinct() {
    let encoded = encode(&doc(serde_json::json!([3, 3.0, -7, 18446744073709551615u64]))).unwrap();
    assert_eq!(
        encoded,
        ItemValue::List(vec![
            ItemValue::number("3"),
            ItemValue::number("3.0"),
            ItemValue::number("-7"),
            ItemValue::number("18446744073709551615"),
        ])
    );

    let decoded = decode(&encoded).unwrap();
    let items = decoded.as_array().unwrap();
    assert!(items[0].is_i64());
    assert!(items[1].is_f64());
    assert!(items[3].is_u64());
}
