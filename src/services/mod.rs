pub mod account_service;
pub mod address_service;
pub mod cart_service;
pub mod order_service;

pub use account_service::*;
pub use address_service::*;
pub use cart_service::*;
pub use order_service::*;

use serde::Serialize;

/// The `{ success, message }` envelope every mutating route answers with.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
