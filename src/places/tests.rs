use crate::geo::models::Coordinate;
use crate::http::tests::test_server;
use crate::places::models::Place;
use crate::places::responses::{PlaceLookupError, PlaceResponse, PlacesResponse};
use crate::places::{PlaceCatalog, PlaceCatalogError};
use std::io::Cursor;

#[test]
fn test_catalog_from_ndjson() {
    let ndjson = "{\"id\": 1, \"name\": \"Alila Seminyak\", \"lat\": -8.6914, \"lng\": 115.1574}\n\
                  \n\
                  {\"id\": 2, \"name\": \"COMO Uma Canggu\", \"lat\": -8.6497, \"lng\": 115.1308}\n";

    let catalog = PlaceCatalog::from_ndjson(Cursor::new(ndjson)).expect("Failed to parse places.");

    assert_eq!(catalog.all().len(), 2);
    assert_eq!(
        catalog.get(2),
        Some(&Place {
            id: 2,
            name: String::from("COMO Uma Canggu"),
            coordinate: Coordinate::new(-8.6497, 115.1308),
        })
    );
    assert_eq!(catalog.get(3), None);
}

#[test]
fn test_catalog_rejects_malformed_line() {
    let ndjson = "{\"id\": 1, \"name\": \"Alila Seminyak\", \"lat\": -8.6914, \"lng\": 115.1574}\n\
                  {\"id\": 2, \"name\": \"No coordinates\"}\n";

    let result = PlaceCatalog::from_ndjson(Cursor::new(ndjson));

    assert!(matches!(
        result,
        Err(PlaceCatalogError::InvalidLine { line: 2, .. })
    ));
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let place = Place {
        id: 7,
        name: String::from("Twice"),
        coordinate: Coordinate::new(0.0, 0.0),
    };

    let result = PlaceCatalog::new(vec![place.clone(), place]);

    assert!(matches!(result, Err(PlaceCatalogError::DuplicateId(7))));
}

#[tokio::test]
async fn test_list_places() {
    let server = test_server();

    let response = server.get("/places").await;

    response.assert_status_ok();
    let body = response.json::<PlacesResponse>();
    assert!(!body.error);
    assert!(!body.places.is_empty());
}

#[tokio::test]
async fn test_get_missing_place() {
    let server = test_server();

    let response = server.get("/places/999999").await;

    response.assert_status_ok();
    response.assert_json(&PlaceResponse {
        error: true,
        error_code: Some(PlaceLookupError::PlaceNotFound),
        place: None,
    });
}
