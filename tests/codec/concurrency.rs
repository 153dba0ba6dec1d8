//! The codec and the service are shared freely across threads.

use crate::common::{doc, fixed_service};
use attrstore::{decode, encode};
use serde_json::json;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn parallel_encode_decode() {
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..200 {
                    let document = doc(json!({
                        "thread": t,
                        "iteration": i,
                        "payload": [i, {"nested": [t, i, null]}],
                    }));
                    let encoded = encode(&document).unwrap();
                    assert_eq!(decode(&encoded).unwrap(), document);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn parallel_creates_get_distinct_keys() {
    let (service, store) = fixed_service();
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let service = service.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..25)
                    .map(|i| {
                        let text = json!({ "thread": t, "i": i }).to_string();
                        let created = service.create(&text, "widget").unwrap();
                        created["ResourceId"].as_str().unwrap().to_string()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<String> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(ids.len(), 100);
    assert_eq!(store.len(), 100);
    assert_eq!(service.list("widget").unwrap().as_array().unwrap().len(), 100);
}
