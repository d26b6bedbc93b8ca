use actix_web::{web, HttpResponse, Responder};

use crate::{
    database::MongoDB,
    services::cart_service::{
        self, AddToCartRequest, CheckoutRequest, EmptyCartRequest, RemoveFromCartRequest,
    },
    services::StatusResponse,
};

#[utoipa::path(
    post,
    path = "/add-To-Cart",
    tag = "Cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Push result", body = StatusResponse)
    )
)]
pub async fn add_to_cart(db: web::Data<MongoDB>, request: web::Json<AddToCartRequest>) -> impl Responder {
    log::info!(
        "POST /add-To-Cart - user: {}, productId: {}",
        request.username,
        request.item.product_id
    );

    match cart_service::add_to_cart(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error adding to cart: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

/// GET /CartPage/{Username} - the raw cart array, as the frontend renders it.
#[utoipa::path(
    get,
    path = "/CartPage/{Username}",
    tag = "Cart",
    responses(
        (status = 200, description = "Cart array", body = Vec<crate::models::CartItem>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_cart(db: web::Data<MongoDB>, username: web::Path<String>) -> impl Responder {
    log::info!("GET /CartPage/{}", username);

    match cart_service::fetch_cart(&db, &username).await {
        Ok(Some(cart)) => HttpResponse::Ok().json(cart),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "User not found"
        })),
        Err(e) => {
            log::error!("Error fetching cart for {}: {}", username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

pub async fn remove_from_cart(db: web::Data<MongoDB>, request: web::Json<RemoveFromCartRequest>) -> impl Responder {
    log::info!(
        "POST /remove-From-Cart - user: {}, productId: {}",
        request.username,
        request.product_id
    );

    match cart_service::remove_from_cart(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error removing from cart: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

pub async fn empty_cart(db: web::Data<MongoDB>, request: web::Json<EmptyCartRequest>) -> impl Responder {
    log::info!("POST /EmptyCart - user: {}", request.username);

    match cart_service::empty_cart(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error emptying cart: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

/// POST /checkout - per-item quantity sync; partial success still answers 200.
#[utoipa::path(
    post,
    path = "/checkout",
    tag = "Cart",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Quantities synced for every matching item", body = StatusResponse)
    )
)]
pub async fn checkout(db: web::Data<MongoDB>, request: web::Json<CheckoutRequest>) -> impl Responder {
    log::info!(
        "POST /checkout - user: {}, {} line items",
        request.username,
        request.cart.len()
    );

    match cart_service::checkout(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error during checkout: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}
