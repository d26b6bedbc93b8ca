// ==================== CART MANAGEMENT ====================
// All cart state lives in the `addToCart` array of the account document.
// Mutations are single atomic array updates; checkout is a loop of independent
// per-item updates with no transaction around it.

use crate::{
    database::{MongoDB, USERDATA},
    models::{Account, CartItem},
    services::StatusResponse,
};
use mongodb::bson::{doc, to_bson};
use serde::Deserialize;

// ==================== REQUEST MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddToCartRequest {
    pub username: String,
    #[serde(flatten)]
    pub item: CartItem,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RemoveFromCartRequest {
    pub username: String,
    #[serde(rename = "productId")]
    pub product_id: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct EmptyCartRequest {
    pub username: String,
}

/// Checkout submissions may carry the full cart item; only the product id and
/// the new quantity are used.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CheckoutItem {
    #[serde(rename = "productId")]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CheckoutRequest {
    pub username: String,
    pub cart: Vec<CheckoutItem>,
}

// ==================== SERVICE FUNCTIONS ====================

/// Appends unconditionally: pushing the same product id twice leaves two
/// entries in the cart. That is the contract the frontend was built against.
pub async fn add_to_cart(db: &MongoDB, request: AddToCartRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    let item = to_bson(&request.item).map_err(|e| e.to_string())?;

    let result = collection
        .update_one(
            doc! { "Username": &request.username },
            doc! { "$push": { "addToCart": item } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Item added to cart"))
    } else {
        Ok(StatusResponse::fail("User not found"))
    }
}

pub async fn remove_from_cart(db: &MongoDB, request: RemoveFromCartRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    let result = collection
        .update_one(
            doc! { "Username": &request.username },
            doc! { "$pull": { "addToCart": { "productId": request.product_id } } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Item removed from cart"))
    } else {
        Ok(StatusResponse::fail("Item not found in cart"))
    }
}

pub async fn empty_cart(db: &MongoDB, request: EmptyCartRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    let result = collection
        .update_one(
            doc! { "Username": &request.username },
            doc! { "$set": { "addToCart": [] } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Cart Is Empty"))
    } else {
        Ok(StatusResponse::fail("Error during Emptying the Cart"))
    }
}

/// None when no account has that username.
pub async fn fetch_cart(db: &MongoDB, username: &str) -> Result<Option<Vec<CartItem>>, String> {
    let collection = db.collection::<Account>(USERDATA);

    let account = collection
        .find_one(doc! { "Username": username })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(account.map(|a| a.cart))
}

/// One positional update per submitted line item. An item whose product id is
/// not in the stored cart simply matches nothing; the loop carries on and the
/// call still reports success. A failure partway leaves earlier items updated.
pub async fn checkout(db: &MongoDB, request: CheckoutRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    for item in &request.cart {
        let result = collection
            .update_one(
                doc! {
                    "Username": &request.username,
                    "addToCart.productId": item.product_id,
                },
                doc! { "$set": { "addToCart.$.quantity": item.quantity } },
            )
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        log::debug!(
            "checkout productId={} quantity={} matched={} modified={}",
            item.product_id,
            item.quantity,
            result.matched_count,
            result.modified_count
        );
    }

    Ok(StatusResponse::ok("Cart updated successfully"))
}
