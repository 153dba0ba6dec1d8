//! End-to-end flows through the resource service.

use crate::common::{doc, fixed_service, nested_objects};
use attrstore::{
    decode, encode, CodecError, Error, ItemReader, ItemValue, PARTITION_KEY_ATTRIBUTE,
};
use serde_json::json;

#[test]
fn create_stamps_encodes_and_keys_the_resource() {
    let (service, store) = fixed_service();
    let stamped = service.create(r#"{"name":"widget"}"#, "widget").unwrap();

    assert_eq!(
        stamped.to_json_string(),
        r#"{"name":"widget","ResourceId":"r1","ResourceType":"widget","Version":1,"LastUpdatedTime":1000}"#
    );

    let item = store.get("r1-widget").unwrap().unwrap();
    assert_eq!(item.len(), 6);
    assert_eq!(item["name"], ItemValue::string("widget"));
    assert_eq!(item["ResourceId"], ItemValue::string("r1"));
    assert_eq!(item["ResourceType"], ItemValue::string("widget"));
    assert_eq!(item["Version"], ItemValue::number(1));
    assert_eq!(item["LastUpdatedTime"], ItemValue::number(1000));
    assert_eq!(item[PARTITION_KEY_ATTRIBUTE], ItemValue::string("r1-widget"));
}

#[test]
fn mixed_array_round_trips() {
    let document = doc(json!([1, "a", null, [2, 3]]));
    let encoded = encode(&document).unwrap();
    assert_eq!(
        encoded,
        ItemValue::List(vec![
            ItemValue::number(1),
            ItemValue::string("a"),
            ItemValue::Null,
            ItemValue::List(vec![ItemValue::number(2), ItemValue::number(3)]),
        ])
    );
    assert_eq!(decode(&encoded).unwrap(), document);
}

#[test]
fn too_deep_resource_is_never_saved() {
    let (service, store) = fixed_service();
    let err = service
        .create_document(nested_objects(60), "widget")
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Codec(CodecError::DepthExceeded { max: 50, .. })
    ));
    assert!(store.is_empty());
    assert!(service.list("widget").unwrap().as_array().unwrap().is_empty());
}

#[test]
fn created_resources_read_back() {
    let (service, _store) = fixed_service();
    let first = service
        .create(r#"{"name":"a","tags":["x","y"],"price":9.5}"#, "widget")
        .unwrap();
    let second = service.create(r#"{"name":"b"}"#, "widget").unwrap();
    service.create(r#"{"name":"c"}"#, "gadget").unwrap();

    assert_eq!(service.get("r1", "widget").unwrap(), Some(first.clone()));
    assert_eq!(service.list("widget").unwrap(), doc(json!([first, second])));
    assert_eq!(service.get("r3", "widget").unwrap(), None);
}

#[test]
fn resources_may_not_carry_a_non_object_root() {
    let (service, store) = fixed_service();
    for text in ["[1,2]", "\"widget\"", "42", "null", "true"] {
        let err = service.create(text, "widget").unwrap_err();
        assert!(
            matches!(err, Error::Codec(CodecError::NotAnObject { .. })),
            "{}: {:?}",
            text,
            err
        );
    }
    assert!(store.is_empty());
}

#[test]
fn oversized_integer_literal_is_refused_not_rounded() {
    let (service, store) = fixed_service();
    let err = service
        .create(r#"{"n":123456789012345678901234567890}"#, "widget")
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Codec(CodecError::NumericParse { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn reserved_partition_key_field_is_refused() {
    let (service, store) = fixed_service();
    let err = service
        .create(r#"{"PartitionKey":"mine","a":1}"#, "widget")
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(store.is_empty());

    let created = service.create(r#"{"a":1}"#, "widget").unwrap();
    assert_eq!(service.get("r1", "widget").unwrap(), Some(created));
}
