use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::parking_spot::repository::mock::InMemoryParkingSpotRepository;
use tower::ServiceExt;
use uuid::Uuid;

use server::routes::{self, ServerState};

fn app() -> Router {
    let state = ServerState::new(Arc::new(InMemoryParkingSpotRepository::default()));
    routes::build_router(state, server::startup::build_cors())
}

fn spot(number: &str, plate: &str, apartment: &str, block: &str) -> Value {
    json!({
        "parkingSpotNumber": number,
        "licensePlateCar": plate,
        "brandCar": "Honda",
        "modelCar": "Civic",
        "colorCar": "Black",
        "responsibleName": "Ana Souza",
        "apartment": apartment,
        "block": block
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn health_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["status"], "ok");
}

#[tokio::test]
async fn create_returns_201_with_server_fields() {
    let app = app();
    let (status, body) = send(&app, "POST", "/parking-spot", Some(spot("12", "ABC-1234", "101", "A"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_body(&body);
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert!(created["registrationDate"].is_string());
    assert_eq!(created["licensePlateCar"], "ABC-1234");
    assert_eq!(created["parkingSpotNumber"], "12");
}

#[tokio::test]
async fn caller_cannot_choose_id_or_registration_date() {
    let app = app();
    let mut payload = spot("12", "ABC-1234", "101", "A");
    payload["id"] = json!("00000000-0000-0000-0000-000000000001");
    payload["registrationDate"] = json!("2000-01-01T00:00:00Z");
    let (status, body) = send(&app, "POST", "/parking-spot", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_body(&body);
    assert_ne!(created["id"], "00000000-0000-0000-0000-000000000001");
    assert!(!created["registrationDate"].as_str().unwrap().starts_with("2000-"));
}

#[tokio::test]
async fn conflicts_return_409_with_constraint_message() {
    let app = app();
    let (status, _) = send(&app, "POST", "/parking-spot", Some(spot("12", "ABC-1234", "101", "A"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/parking-spot", Some(spot("13", "ABC-1234", "102", "B"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(text(&body), "Conflict: License Plate Car is already in use!");

    let (status, body) = send(&app, "POST", "/parking-spot", Some(spot("12", "XYZ-9876", "102", "B"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(text(&body), "Conflict: Parking Spot is already in use!");

    let (status, body) = send(&app, "POST", "/parking-spot", Some(spot("13", "XYZ-9876", "101", "A"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(text(&body), "Conflict: Parking Spot already registered for this apartment/block!");
}

#[tokio::test]
async fn blank_field_returns_400() {
    let app = app();
    let (status, body) = send(&app, "POST", "/parking-spot", Some(spot("12", "  ", "101", "A"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text(&body).contains("licensePlateCar"));
}

#[tokio::test]
async fn list_get_update_delete_flow() {
    let app = app();
    let (_, body) = send(&app, "POST", "/parking-spot", Some(spot("12", "ABC-1234", "101", "A"))).await;
    let created = json_body(&body);
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/parking-spot/{id}");

    let (status, body) = send(&app, "GET", "/parking-spot", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body).as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), created);

    let mut change = spot("12", "ABC-1234", "101", "A");
    change["brandCar"] = json!("Toyota");
    change["colorCar"] = json!("Red");
    let (status, body) = send(&app, "PUT", &uri, Some(change)).await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_body(&body);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["registrationDate"], created["registrationDate"]);
    assert_eq!(updated["brandCar"], "Toyota");

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(json_body(&body)["colorCar"], "Red");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&body), "Parking Spot deleted successfully");

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Parking Spot not found");

    let (_, body) = send(&app, "GET", "/parking-spot", None).await;
    assert!(json_body(&body).as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_id_is_404_everywhere() {
    let app = app();
    let uri = format!("/parking-spot/{}", Uuid::new_v4());
    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(text(&body), "Parking Spot not found");
    }
    let (status, body) = send(&app, "PUT", &uri, Some(spot("1", "AAA-0001", "101", "A"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text(&body), "Parking Spot not found");
}

#[tokio::test]
async fn malformed_id_is_400() {
    let app = app();
    let (status, _) = send(&app, "GET", "/parking-spot/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json_body(&body)["paths"]["/parking-spot/{id}"].is_object());
}
