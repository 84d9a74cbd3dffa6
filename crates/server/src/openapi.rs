use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotInputDoc {
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotDoc {
    pub id: Uuid,
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    /// RFC 3339, assigned by the server at creation.
    pub registration_date: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::parking_spots::create,
        crate::routes::parking_spots::list,
        crate::routes::parking_spots::get,
        crate::routes::parking_spots::update,
        crate::routes::parking_spots::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ParkingSpotInputDoc,
            ParkingSpotDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "parking-spot")
    )
)]
pub struct ApiDoc;
