use super::*;
use crate::helpers::models::{create_test_dataset, create_test_dataset_json, create_test_indexed_dataset};
use serde_json::json;

#[test]
fn can_deserialize_dataset() {
    let dataset = Dataset::from_value(create_test_dataset_json()).expect("cannot deserialize");

    assert_eq!(dataset, create_test_dataset());
}

#[test]
fn can_deserialize_dataset_with_defaults() {
    let dataset = Dataset::from_value(json!({
        "customers": [{ "id": 7, "x": 1.5, "y": -2 }],
        "routes": []
    }))
    .expect("cannot deserialize");

    assert_eq!(dataset.customers, vec![Customer { id: 7, x: 1.5, y: -2., demand: 0. }]);
    assert!(dataset.pd_pairs.is_empty());
    assert!(dataset.depot_id_list.is_empty());
    assert!(dataset.vehicle_num_list.is_empty());
}

#[test]
fn can_reject_dataset_with_unexpected_shape() {
    assert!(Dataset::from_value(json!({ "customers": 1, "routes": [] })).is_err());
    assert!(Dataset::from_value(json!(["customers"])).is_err());
    assert!(Dataset::from_value(json!({ "routes": [] })).is_err());
}

parameterized_test! {can_classify_node_by_demand, (demand, expected), {
    assert_eq!(NodeKind::from_demand(demand), expected);
}}

can_classify_node_by_demand! {
    case_01: (3., NodeKind::Pickup),
    case_02: (0.5, NodeKind::Pickup),
    case_03: (-1., NodeKind::Delivery),
    case_04: (0., NodeKind::Depot),
    case_05: (-0., NodeKind::Depot),
}

#[test]
fn can_lookup_customers_by_id() {
    let dataset = create_test_indexed_dataset();

    assert_eq!(dataset.coord(2), Some((20., 0.)));
    assert_eq!(dataset.kind(0), Some(NodeKind::Depot));
    assert_eq!(dataset.kind(1), Some(NodeKind::Pickup));
    assert_eq!(dataset.kind(2), Some(NodeKind::Delivery));
    assert_eq!(dataset.customer(3), None);
    assert_eq!(dataset.partner(2), Some(1));
}

#[test]
fn can_select_node_with_partner() {
    let dataset = create_test_indexed_dataset();

    let selection = dataset.select(1).expect("cannot select");

    assert_eq!(
        selection,
        Selection { node_id: 1, coord: (10., 10.), partner_id: Some(2), partner_coord: Some((20., 0.)) }
    );
}

#[test]
fn can_return_no_selection_for_unknown_node() {
    let dataset = create_test_indexed_dataset();

    assert_eq!(dataset.select(42), None);
}

#[test]
fn can_detect_idle_route() {
    let dataset = create_test_indexed_dataset();

    assert!(dataset.is_idle_route(&vec![0, 0]));
    assert!(dataset.is_idle_route(&vec![]));
    assert!(!dataset.is_idle_route(&vec![0, 1, 2, 0]));
    assert!(!dataset.is_idle_route(&vec![0, 42, 0]));
}
