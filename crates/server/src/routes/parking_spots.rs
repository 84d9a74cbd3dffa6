use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;

use service::parking_spot::domain::{ParkingSpot, ParkingSpotInput};

use crate::errors::ApiError;
use crate::routes::ServerState;

pub const DELETED_MESSAGE: &str = "Parking Spot deleted successfully";

#[utoipa::path(
    post, path = "/parking-spot", tag = "parking-spot",
    request_body = crate::openapi::ParkingSpotInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ParkingSpotDoc),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "License plate, spot number or apartment/block already in use")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ParkingSpotInput>,
) -> Result<(StatusCode, Json<ParkingSpot>), ApiError> {
    info!(
        parking_spot_number = %input.parking_spot_number,
        apartment = %input.apartment,
        block = %input.block,
        "parking_spot_create_request"
    );
    let created = state.parking_spots.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/parking-spot", tag = "parking-spot",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ParkingSpotDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ParkingSpot>>, ApiError> {
    let list = state.parking_spots.list().await?;
    info!(count = list.len(), "list parking spots");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/parking-spot/{id}", tag = "parking-spot",
    params(("id" = Uuid, Path, description = "Parking spot ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ParkingSpotDoc),
        (status = 404, description = "Parking Spot not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<ParkingSpot>, ApiError> {
    Ok(Json(state.parking_spots.get(id).await?))
}

#[utoipa::path(
    put, path = "/parking-spot/{id}", tag = "parking-spot",
    params(("id" = Uuid, Path, description = "Parking spot ID")),
    request_body = crate::openapi::ParkingSpotInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ParkingSpotDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Parking Spot not found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ParkingSpotInput>,
) -> Result<Json<ParkingSpot>, ApiError> {
    Ok(Json(state.parking_spots.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/parking-spot/{id}", tag = "parking-spot",
    params(("id" = Uuid, Path, description = "Parking spot ID")),
    responses(
        (status = 200, description = "Parking Spot deleted successfully"),
        (status = 404, description = "Parking Spot not found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<(StatusCode, &'static str), ApiError> {
    state.parking_spots.delete(id).await?;
    Ok((StatusCode::OK, DELETED_MESSAGE))
}
