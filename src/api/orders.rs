use actix_web::{web, HttpResponse, Responder};

use crate::{
    database::MongoDB,
    services::order_service::{self, CancelOrderRequest, PlaceOrderRequest},
    services::StatusResponse,
};

#[utoipa::path(
    post,
    path = "/Order",
    tag = "Orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Push result", body = StatusResponse)
    )
)]
pub async fn place_order(db: web::Data<MongoDB>, request: web::Json<PlaceOrderRequest>) -> impl Responder {
    log::info!(
        "POST /Order - user: {}, orderId: {}",
        request.username,
        request.order.order_id
    );

    match order_service::place_order(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error placing order: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/CancelOrder",
    tag = "Orders",
    request_body = CancelOrderRequest,
    responses(
        (status = 200, description = "Cancellation result", body = StatusResponse)
    )
)]
pub async fn cancel_order(db: web::Data<MongoDB>, request: web::Json<CancelOrderRequest>) -> impl Responder {
    log::info!(
        "POST /CancelOrder - user: {}, orderId: {}",
        request.username,
        request.order_id
    );

    match order_service::cancel_order(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error cancelling order: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

/// GET /Order/{Username} - the orders array. The system this replaces answered
/// with the cart here (a copy of the /CartPage handler); the cart is still
/// served by /CartPage/{Username}.
#[utoipa::path(
    get,
    path = "/Order/{Username}",
    tag = "Orders",
    responses(
        (status = 200, description = "Orders array", body = Vec<crate::models::Order>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_orders(db: web::Data<MongoDB>, username: web::Path<String>) -> impl Responder {
    log::info!("GET /Order/{}", username);

    match order_service::fetch_orders(&db, &username).await {
        Ok(Some(orders)) => HttpResponse::Ok().json(orders),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "User not found"
        })),
        Err(e) => {
            log::error!("Error fetching orders for {}: {}", username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}
