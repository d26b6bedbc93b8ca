use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up; status is \"degraded\" when the database is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let status = match db.health_check().await {
        Ok(()) => "healthy",
        Err(e) => {
            log::error!("Health check failed to reach MongoDB: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: "userservice-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
