pub mod accounts;
pub mod addresses;
pub mod cart;
pub mod health;
pub mod orders;
pub mod swagger;

use actix_web::{HttpRequest, HttpResponse};

/// Catch-all for unmatched routes: 404 with a body naming the method and path.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::warn!("Unmatched route: {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": format!("Route {} {} not found", req.method(), req.path())
    }))
}
