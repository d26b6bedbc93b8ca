mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::AppConfig::from_env();

    log::info!("Starting UserService API...");
    log::info!("Database: {}/{}", config.database_url, config.database_name);

    // Single connection handle for the whole process; abort on failure so the
    // server never comes up without its store.
    let db = database::MongoDB::new(&config.database_url, &config.database_name)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db);

    log::info!("MongoDB connected successfully");
    log::info!("Server starting on {}", config.bind_addr());
    log::info!(
        "Swagger UI available at: http://{}/swagger-ui/",
        config.bind_addr()
    );

    let bind_addr = config.bind_addr();

    // Start HTTP server
    HttpServer::new(move || {
        // The frontend is served from arbitrary tunnel hosts; the original
        // deployment allowed any origin.
        let cors = Cors::permissive();

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Accounts
            .route("/api/user/profile/{username}", web::get().to(api::accounts::get_profile))
            .route("/", web::get().to(api::accounts::list_accounts))
            .route("/", web::post().to(api::accounts::create_account))
            .route("/signup", web::post().to(api::accounts::signup))
            .route("/login", web::post().to(api::accounts::login))
            .route("/updateprofile", web::post().to(api::accounts::update_profile))
            // Cart
            .route("/add-To-Cart", web::post().to(api::cart::add_to_cart))
            .route("/CartPage/{Username}", web::get().to(api::cart::get_cart))
            .route("/remove-From-Cart", web::post().to(api::cart::remove_from_cart))
            .route("/EmptyCart", web::post().to(api::cart::empty_cart))
            .route("/checkout", web::post().to(api::cart::checkout))
            // Addresses
            .route("/AddAddress", web::post().to(api::addresses::add_address))
            .route("/api/address/{id}", web::delete().to(api::addresses::delete_address))
            .route("/EditAddress/{id}", web::put().to(api::addresses::edit_address))
            // Orders
            .route("/Order", web::post().to(api::orders::place_order))
            .route("/CancelOrder", web::post().to(api::orders::cancel_order))
            .route("/Order/{Username}", web::get().to(api::orders::get_orders))
            // Anything else: 404 echoing the method and path
            .default_service(web::route().to(api::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
