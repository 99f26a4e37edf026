use crate::gate::responses::GateResponse;
use crate::http::tests::test_server;
use serde_json::json;

#[tokio::test]
async fn test_female_is_granted_access() {
    let server = test_server();

    let response = server
        .post("/gate/gender")
        .json(&json!({ "gender": "female" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&GateResponse {
        access_granted: true,
        message: String::from("Access Granted"),
    });
}

#[tokio::test]
async fn test_male_is_refused() {
    let server = test_server();

    let response = server
        .post("/gate/gender")
        .json(&json!({ "gender": "male" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&GateResponse {
        access_granted: false,
        message: String::from("No Access"),
    });
}

#[tokio::test]
async fn test_any_other_selection_is_refused() {
    let server = test_server();

    for gender in ["nonbinary", "", "FEMALE"] {
        let response = server
            .post("/gate/gender")
            .json(&json!({ "gender": gender }))
            .await;

        response.assert_status_ok();
        response.assert_json(&GateResponse {
            access_granted: false,
            message: String::from("No Access"),
        });
    }
}

#[tokio::test]
async fn test_missing_selection_is_rejected() {
    let server = test_server();

    let response = server
        .post("/gate/gender")
        .json(&json!({}))
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}
