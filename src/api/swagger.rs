use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UserService API",
        version = "1.0.0",
        description = "E-commerce backend over a single MongoDB account collection. Each account document embeds its cart, saved addresses, and order history.\n\n**Conventions:** mutating routes answer `{ success, message }`; business failures such as a duplicate signup email come back as `success: false` with HTTP 200, and clients read the flag.",
    ),
    paths(
        // Accounts
        crate::api::accounts::get_profile,
        crate::api::accounts::signup,
        crate::api::accounts::login,
        crate::api::accounts::update_profile,

        // Cart
        crate::api::cart::add_to_cart,
        crate::api::cart::get_cart,
        crate::api::cart::checkout,

        // Addresses
        crate::api::addresses::add_address,
        crate::api::addresses::delete_address,
        crate::api::addresses::edit_address,

        // Orders
        crate::api::orders::place_order,
        crate::api::orders::cancel_order,
        crate::api::orders::get_orders,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::ProfileProjection,
            crate::models::Address,
            crate::models::CartItem,
            crate::models::Order,
            crate::services::StatusResponse,
            crate::services::account_service::SignupRequest,
            crate::services::account_service::LoginRequest,
            crate::services::account_service::LoginResponse,
            crate::services::account_service::UpdateProfileRequest,
            crate::services::cart_service::AddToCartRequest,
            crate::services::cart_service::RemoveFromCartRequest,
            crate::services::cart_service::EmptyCartRequest,
            crate::services::cart_service::CheckoutItem,
            crate::services::cart_service::CheckoutRequest,
            crate::services::order_service::PlaceOrderRequest,
            crate::services::order_service::CancelOrderRequest,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Accounts", description = "Signup, login, and profile endpoints. Passwords are stored as bcrypt hashes and never returned."),
        (name = "Cart", description = "Cart mutation endpoints. All state lives in the account document's addToCart array."),
        (name = "Addresses", description = "Saved address book endpoints, keyed by the frontend-assigned address id."),
        (name = "Orders", description = "Order placement and cancellation. The only status transition exposed is to Cancelled."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
