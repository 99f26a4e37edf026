use crate::hoodmap::models::PinCategory;
use crate::hoodmap::pins::PINS;
use crate::hoodmap::requests::CategoryFilter;
use crate::hoodmap::responses::{PinStatsResponse, PinsResponse};
use crate::http::tests::test_server;

#[test]
fn test_screen_position() {
    let position = PINS[0].screen_position();

    assert!((position.left - 18.8).abs() < 1e-9);
    assert!((position.top - 5.12).abs() < 1e-9);
}

#[test]
fn test_screen_position_keeps_the_sign_of_the_offset() {
    // Brooklyn Bridge Park lies south of the map origin.
    let position = PINS[4].screen_position();

    assert!((position.left - 11.1).abs() < 1e-9);
    assert!((position.top + 4.32).abs() < 1e-9);
}

#[test]
fn test_category_filter() {
    assert!(CategoryFilter::All.matches(PinCategory::Avoid));
    assert!(CategoryFilter::Caution.matches(PinCategory::Caution));
    assert!(!CategoryFilter::Safe.matches(PinCategory::Recommend));
}

#[tokio::test]
async fn test_all_pins() {
    let server = test_server();

    let response = server.get("/hoodmap/pins").await;

    response.assert_status_ok();
    let body = response.json::<PinsResponse>();
    assert_eq!(body.pins.len(), 5);
}

#[tokio::test]
async fn test_pins_by_category() {
    let server = test_server();

    let response = server
        .get("/hoodmap/pins")
        .add_query_param("category", "safe")
        .await;

    response.assert_status_ok();
    let body = response.json::<PinsResponse>();
    let ids: Vec<u64> = body.pins.iter().map(|placed| placed.pin.id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert!(body
        .pins
        .iter()
        .all(|placed| placed.pin.category == PinCategory::Safe));
}

#[tokio::test]
async fn test_pins_by_empty_category() {
    let server = test_server();

    let response = server
        .get("/hoodmap/pins")
        .add_query_param("category", "avoid")
        .await;

    response.assert_status_ok();
    assert!(response.json::<PinsResponse>().pins.is_empty());
}

#[tokio::test]
async fn test_pins_by_unknown_category() {
    let server = test_server();

    let response = server
        .get("/hoodmap/pins")
        .add_query_param("category", "haunted")
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_stats() {
    let server = test_server();

    let response = server.get("/hoodmap/stats").await;

    response.assert_status_ok();
    response.assert_json(&PinStatsResponse {
        safe: 2,
        recommended: 2,
        caution: 1,
        avoid: 0,
        total_reports: 115,
    });
}
