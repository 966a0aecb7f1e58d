#![cfg(feature = "json")]

use serde_derive::{Deserialize, Serialize};
use setmap_nostd::{Error, OrderedSet, Set};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct Endpoint {
    host: String,
    port: u16,
}

fn endpoint(host: &str, port: u16) -> Endpoint {
    Endpoint {
        host: host.to_string(),
        port,
    }
}

#[test]
fn ordered_set_encodes_in_insertion_order() {
    let set = OrderedSet::from([3, 1, 2]);
    assert_eq!(set.to_json().unwrap(), "[3,1,2]");
    assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,2]");

    let decoded = OrderedSet::<i32>::from_json("[3,1,2]").unwrap();
    assert_eq!(decoded.to_vec(), vec![3, 1, 2]);
    assert_eq!(decoded, set);
}

#[test]
fn empty_sets_encode_as_empty_arrays() {
    assert_eq!(OrderedSet::<u8>::new().to_json().unwrap(), "[]");
    assert_eq!(Set::<u8>::default().to_json().unwrap(), "[]");

    let decoded = OrderedSet::<u8>::from_json("[]").unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded, OrderedSet::new());
}

#[test]
fn decoding_duplicates_keeps_first_occurrence() {
    let set = OrderedSet::<u32>::from_json("[2, 1, 2, 3, 1]").unwrap();
    assert_eq!(set.to_vec(), vec![2, 1, 3]);
    assert_eq!(set.len(), 3);
    assert!(set.contains(&3));

    let set = Set::<u32>::from_json("[2, 2, 2]").unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn ordered_set_round_trips_struct_elements() {
    let mut set = OrderedSet::new();
    set.insert(endpoint("b.example", 443));
    set.insert(endpoint("a.example", 80));
    set.insert(endpoint("b.example", 443));

    let json = set.to_json().unwrap();
    let decoded: OrderedSet<Endpoint> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, set);
    assert_eq!(decoded.first(), Some(&endpoint("b.example", 443)));
}

#[test]
fn set_round_trips_regardless_of_order() {
    let set: Set<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
    let decoded = Set::<String>::from_json(&set.to_json().unwrap()).unwrap();
    assert_eq!(decoded, set);

    let reversed = Set::<String>::from_json(r#"["z", "y", "x"]"#).unwrap();
    assert_eq!(reversed, set);
}

#[test]
fn extend_from_json_routes_through_insert() {
    let mut set = OrderedSet::from([5, 1]);
    assert!(set.extend_from_json("[1, 7, 5]").unwrap());
    assert_eq!(set.to_vec(), vec![5, 1, 7]);
    assert!(!set.extend_from_json("[7]").unwrap());

    let mut set = Set::from([5]);
    set.extend_from_json("[5, 6]").unwrap();
    assert_eq!(set, Set::from([5, 6]));
}

#[test]
fn malformed_input_leaves_set_untouched() {
    let mut set = OrderedSet::from([1, 2]);
    let err = set.extend_from_json(r#"[3, "four"]"#).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(err.to_string().starts_with("malformed input"));
    assert_eq!(set.to_vec(), vec![1, 2]);
    assert!(!set.contains(&3));

    let mut set = Set::from([1]);
    assert!(set.extend_from_json("{\"a\": 1}").is_err());
    assert_eq!(set, Set::from([1]));

    assert!(OrderedSet::<u32>::from_json("[1, 2").is_err());
    assert!(Set::<u32>::from_json("3").is_err());
}

#[test]
fn unencodable_elements_report_encode_errors() {
    // a map with non-string keys has no JSON representation
    let mut element = BTreeMap::new();
    element.insert(vec![1_u8], 1_u8);
    let set = OrderedSet::from([element]);
    assert!(matches!(set.to_json(), Err(Error::Encode(_))));
}
