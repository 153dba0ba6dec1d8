//! Nesting ceiling at 50 levels, in every direction that recurses.

use crate::common::{doc, nested_arrays, nested_objects};
use attrstore::{
    decode, encode, item_from_wire, json_array_to_list, json_object_to_map, list_to_json_array,
    map_to_json_object, CodecError, Item, ItemValue, MAX_NESTING_DEPTH,
};
use serde_json::json;

fn too_deep(depth: usize) -> CodecError {
    CodecError::DepthExceeded {
        depth,
        max: MAX_NESTING_DEPTH,
    }
}

/// Map chain whose deepest node sits at `depth`.
fn nested_maps(depth: usize) -> ItemValue {
    let mut value = ItemValue::string("leaf");
    for _ in 0..depth {
        let mut fields = Item::new();
        fields.insert("child".to_string(), value);
        value = ItemValue::Map(fields);
    }
    value
}

#[test]
fn encode_accepts_deepest_node_at_limit() {
    for document in [nested_objects(50), nested_arrays(50)] {
        assert_eq!(document.depth(), 50);
        let encoded = encode(&document).unwrap();
        assert_eq!(decode(&encoded).unwrap(), document);
    }
}

#[test]
fn encode_rejects_one_level_past_limit() {
    assert_eq!(encode(&nested_objects(51)).unwrap_err(), too_deep(51));
    assert_eq!(encode(&nested_arrays(51)).unwrap_err(), too_deep(51));
}

#[test]
fn decode_boundary_matches_encode() {
    assert!(decode(&nested_maps(50)).is_ok());
    assert_eq!(decode(&nested_maps(51)).unwrap_err(), too_deep(51));
}

#[test]
fn typed_entry_points_count_from_root() {
    assert!(json_object_to_map(&nested_objects(50)).is_ok());
    assert_eq!(
        json_object_to_map(&nested_objects(51)).unwrap_err(),
        too_deep(51)
    );
    assert!(json_array_to_list(&nested_arrays(50)).is_ok());
    assert_eq!(
        json_array_to_list(&nested_arrays(51)).unwrap_err(),
        too_deep(51)
    );

    let ItemValue::Map(item) = nested_maps(51) else {
        unreachable!()
    };
    assert_eq!(map_to_json_object(&item).unwrap_err(), too_deep(51));

    let list = ItemValue::List(vec![nested_maps(50)]);
    assert_eq!(list_to_json_array(&list).unwrap_err(), too_deep(51));
}

#[test]
fn wire_parsing_is_depth_guarded() {
    let mut wire = json!({"S": "leaf"});
    for _ in 0..50 {
        wire = json!({"M": {"child": wire}});
    }
    // Attribute at depth 1 plus 50 nested maps puts the leaf at 51
    let item = json!({ "attr": wire.clone() });
    assert_eq!(item_from_wire(&item).unwrap_err(), too_deep(51));
    assert!(ItemValue::from_wire(&wire).is_ok());
}

#[test]
fn wide_documents_are_not_deep() {
    let fields: serde_json::Map<_, _> = (0..500)
        .map(|i| (format!("k{}", i), json!([i, {"n": i}])))
        .collect();
    let document = doc(serde_json::Value::Object(fields));
    assert_eq!(document.depth(), 3);
    assert_eq!(json_object_to_map(&document).unwrap().len(), 500);
}
