use actix_web::{web, HttpResponse, Responder};

use crate::{
    database::MongoDB,
    services::account_service::{self, LoginRequest, LoginResponse, SignupRequest, UpdateProfileRequest},
    services::StatusResponse,
    utils::error::AppError,
};

/// GET /api/user/profile/{username} - fixed projection, never the password.
#[utoipa::path(
    get,
    path = "/api/user/profile/{username}",
    tag = "Accounts",
    responses(
        (status = 200, description = "Profile projection", body = crate::models::ProfileProjection),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_profile(db: web::Data<MongoDB>, username: web::Path<String>) -> impl Responder {
    log::info!("GET /api/user/profile/{}", username);

    match account_service::get_profile(&db, &username).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(AppError::NotFound(message)) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": message
        })),
        Err(e) => {
            log::error!("Error fetching profile for {}: {}", username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

/// GET / - every account document, verbatim. Admin/debug route.
pub async fn list_accounts(db: web::Data<MongoDB>) -> impl Responder {
    log::info!("GET / - listing all accounts");

    match account_service::list_accounts(&db).await {
        Ok(documents) => HttpResponse::Ok().json(documents),
        Err(e) => {
            log::error!("Error listing accounts: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

/// POST / - insert an arbitrary JSON body as a document. Admin/debug route.
pub async fn create_account(db: web::Data<MongoDB>, body: web::Json<serde_json::Value>) -> impl Responder {
    log::info!("POST / - raw account insert");

    match account_service::create_account_raw(&db, body.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "result": { "insertedId": result.inserted_id }
        })),
        Err(AppError::InvalidRequest(msg)) => {
            log::warn!("Raw insert rejected: {}", msg);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "message": "Request body must be a JSON object"
            }))
        }
        Err(e) => {
            log::error!("Error inserting document: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Accounts",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup result; success=false when the email is already registered", body = StatusResponse)
    )
)]
pub async fn signup(db: web::Data<MongoDB>, request: web::Json<SignupRequest>) -> impl Responder {
    log::info!("POST /signup - email: {}", request.email);

    match account_service::signup(&db, request.into_inner()).await {
        Ok(response) => {
            if response.success {
                log::info!("Signup successful");
            } else {
                log::warn!("Signup rejected: {}", response.message);
            }
            // Business failures (duplicate email) still answer 200; clients
            // read the success flag.
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("Error during signup: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal Server Error"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(db: web::Data<MongoDB>, request: web::Json<LoginRequest>) -> impl Responder {
    log::info!("POST /login - email: {}", request.email);

    match account_service::login(&db, &request).await {
        Ok(Some(user)) => {
            log::info!("Login successful: {}", request.email);
            HttpResponse::Ok().json(LoginResponse {
                success: true,
                user,
            })
        }
        Ok(None) => {
            log::warn!("Login failed: {}", request.email);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "message": "Invalid credentials"
            }))
        }
        Err(e) => {
            log::error!("Error during login: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal Server Error"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/updateprofile",
    tag = "Accounts",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Update result", body = StatusResponse)
    )
)]
pub async fn update_profile(db: web::Data<MongoDB>, request: web::Json<UpdateProfileRequest>) -> impl Responder {
    log::info!("POST /updateprofile - old email: {}", request.old_email);

    match account_service::update_profile(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Error updating profile: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "Internal server error"
            }))
        }
    }
}
