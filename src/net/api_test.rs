use super::*;

use serde_json::json;

use crate::net::types::Hotel;

// =============================================================
// Query strings
// =============================================================

#[test]
fn empty_params_produce_no_query() {
    assert_eq!(query_string(&[]), "");
}

#[test]
fn params_join_with_ampersands() {
    let qs = query_string(&[("city", "Marrakech"), ("page", "2")]);
    assert_eq!(qs, "?city=Marrakech&page=2");
}

#[test]
fn reserved_characters_are_escaped() {
    let qs = query_string(&[("q", "spa & hammam"), ("tag", "a=b")]);
    assert_eq!(qs, "?q=spa%20%26%20hammam&tag=a%3Db");
}

#[test]
fn percent_signs_are_escaped() {
    assert_eq!(query_string(&[("discount", "50%")]), "?discount=50%25");
}

#[test]
fn non_ascii_values_are_percent_encoded() {
    let qs = query_string(&[("city", "Méditerranée")]);
    assert_eq!(qs, "?city=M%C3%A9diterran%C3%A9e");
}

// =============================================================
// List decoding
// =============================================================

#[test]
fn bare_array_decodes_directly() {
    let value = json!([{"id": "h-1", "name": "Riad Zitoune"}]);
    let hotels: Vec<Hotel> = decode_list(value).unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].name, "Riad Zitoune");
}

#[test]
fn paged_wrapper_decodes_from_content() {
    let value = json!({"content": [{"id": "h-1", "name": "Riad Zitoune"}], "totalElements": 1});
    let hotels: Vec<Hotel> = decode_list(value).unwrap();
    assert_eq!(hotels.len(), 1);
}

#[test]
fn items_wrapper_decodes_too() {
    let value = json!({"items": [{"id": "h-1", "name": "Riad Zitoune"}]});
    let hotels: Vec<Hotel> = decode_list(value).unwrap();
    assert_eq!(hotels.len(), 1);
}

#[test]
fn unexpected_shape_decodes_to_an_empty_list() {
    let hotels: Vec<Hotel> = decode_list(json!(null)).unwrap();
    assert!(hotels.is_empty());
}

#[test]
fn malformed_records_surface_a_decode_error() {
    let value = json!([{"name": "missing id"}]);
    let err = decode_list::<Hotel>(value).unwrap_err();
    assert!(matches!(err, crate::net::http::ApiError::Decode(_)));
}
