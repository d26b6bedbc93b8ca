use actix_web::{web, HttpResponse, Responder};

use crate::{
    database::MongoDB,
    models::Address,
    services::address_service,
    services::StatusResponse,
};

#[utoipa::path(
    post,
    path = "/AddAddress",
    tag = "Addresses",
    request_body = Address,
    responses(
        (status = 200, description = "Push result", body = StatusResponse)
    )
)]
pub async fn add_address(db: web::Data<MongoDB>, request: web::Json<Address>) -> impl Responder {
    log::info!("POST /AddAddress - email: {}", request.email);

    match address_service::add_address(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error adding address: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

/// DELETE /api/address/{id} - pulls the address out of whichever account holds it.
#[utoipa::path(
    delete,
    path = "/api/address/{id}",
    tag = "Addresses",
    responses(
        (status = 200, description = "Address deleted"),
        (status = 404, description = "No account holds an address with that id")
    )
)]
pub async fn delete_address(db: web::Data<MongoDB>, id: web::Path<String>) -> impl Responder {
    log::info!("DELETE /api/address/{}", id);

    match address_service::delete_address(&db, &id).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Address deleted successfully"
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Address not found"
        })),
        Err(e) => {
            log::error!("Error deleting address {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            }))
        }
    }
}

/// PUT /EditAddress/{id} - in-place replacement of the matching entry.
#[utoipa::path(
    put,
    path = "/EditAddress/{id}",
    tag = "Addresses",
    request_body = Address,
    responses(
        (status = 200, description = "Address updated"),
        (status = 404, description = "No account holds an address with that id")
    )
)]
pub async fn edit_address(
    db: web::Data<MongoDB>,
    id: web::Path<String>,
    request: web::Json<Address>,
) -> impl Responder {
    log::info!("PUT /EditAddress/{}", id);

    match address_service::edit_address(&db, &id, request.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Address updated successfully"
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Address not found"
        })),
        Err(e) => {
            log::error!("Error updating address {}: {}", id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Error updating address"
            }))
        }
    }
}
