use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::parking_spot::{repository::ParkingSpotRepository, ParkingSpotService};

use crate::openapi::ApiDoc;

pub mod parking_spots;

/// Handler state; the service is injected at construction.
#[derive(Clone)]
pub struct ServerState {
    pub parking_spots: Arc<ParkingSpotService<dyn ParkingSpotRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ParkingSpotRepository>) -> Self {
        Self { parking_spots: Arc::new(ParkingSpotService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, parking spot CRUD and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let parking = Router::new()
        .route("/parking-spot", get(parking_spots::list).post(parking_spots::create))
        .route(
            "/parking-spot/:id",
            get(parking_spots::get)
                .put(parking_spots::update)
                .delete(parking_spots::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(parking)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
