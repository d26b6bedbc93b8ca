// ==================== ORDER MANAGEMENT ====================
// Orders are appended to the account's `Orders` array at placement and only
// ever mutated by cancellation. The status lifecycle exposed here is one-way:
// whatever was placed -> "Cancelled".

use crate::{
    database::{MongoDB, USERDATA},
    models::{Account, Order, ORDER_STATUS_CANCELLED},
    services::StatusResponse,
};
use mongodb::bson::{doc, to_bson};
use serde::Deserialize;

// ==================== REQUEST MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PlaceOrderRequest {
    pub username: String,
    #[serde(flatten)]
    pub order: Order,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CancelOrderRequest {
    pub username: String,
    #[serde(rename = "OrderId")]
    pub order_id: String,
    #[serde(rename = "CancelDate", default)]
    pub cancel_date: String,
}

// ==================== SERVICE FUNCTIONS ====================

pub async fn place_order(db: &MongoDB, request: PlaceOrderRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    let order = to_bson(&request.order).map_err(|e| e.to_string())?;

    let result = collection
        .update_one(
            doc! { "Username": &request.username },
            doc! { "$push": { "Orders": order } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Order placed successfully"))
    } else {
        Ok(StatusResponse::fail("User not found"))
    }
}

/// The filter matches on username and order id only, with no guard on the
/// current status: cancelling an already-cancelled order matches again,
/// reports success, and re-sets the cancellation date. Callers relying on the
/// "already cancelled" message only ever see it when the order id is absent.
pub async fn cancel_order(db: &MongoDB, request: CancelOrderRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    let result = collection
        .update_one(
            doc! {
                "Username": &request.username,
                "Orders.OrderId": &request.order_id,
            },
            doc! { "$set": {
                "Orders.$.OrderStatus": ORDER_STATUS_CANCELLED,
                "Orders.$.CancelledDate": &request.cancel_date,
            } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Order cancelled successfully"))
    } else {
        Ok(StatusResponse::fail("Order not found or already cancelled"))
    }
}

/// None when no account has that username.
pub async fn fetch_orders(db: &MongoDB, username: &str) -> Result<Option<Vec<Order>>, String> {
    let collection = db.collection::<Account>(USERDATA);

    let account = collection
        .find_one(doc! { "Username": username })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(account.map(|a| a.orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;
    use crate::services::account_service::{signup, SignupRequest};
    use crate::services::cart_service::fetch_cart;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        MongoDB::new("mongodb://localhost:27017", "Ecommerce_test")
            .await
            .unwrap()
    }

    async fn fresh_account(db: &MongoDB) -> String {
        let username = format!("order-{}", uuid::Uuid::new_v4());
        let request = SignupRequest {
            username: username.clone(),
            name: "Order Tester".to_string(),
            email: format!("{}@example.com", username),
            password: "pw".to_string(),
            gender: String::new(),
            phone_number: "0".to_string(),
            external_id: String::new(),
            addresses: vec![],
            cart: vec![],
            orders: vec![],
        };
        assert!(signup(db, request).await.unwrap().success);
        username
    }

    fn order(order_id: &str) -> Order {
        Order {
            order_id: order_id.to_string(),
            address: "12 MG Road, Bengaluru".to_string(),
            total_amount: 1598.0,
            product_data: vec![CartItem {
                product_id: 42,
                name: "Wireless Mouse".to_string(),
                price: 499.0,
                product_img: String::new(),
                quantity: 2,
            }],
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            base_amount: 1498.0,
            cash_handling_charge: 0.0,
            delivery_charge: 100.0,
            tax: 0.0,
            delivered_date: String::new(),
            ordered_date: "2025-11-03".to_string(),
            cancelled_date: String::new(),
            order_status: "Placed".to_string(),
        }
    }

    #[test]
    fn place_request_flattens_order_fields() {
        let request: PlaceOrderRequest = serde_json::from_value(serde_json::json!({
            "username": "asha",
            "OrderId": "ORD-1",
            "TotalAmount": 100.0,
            "OrderStatus": "Placed"
        }))
        .unwrap();

        assert_eq!(request.username, "asha");
        assert_eq!(request.order.order_id, "ORD-1");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn place_then_fetch_returns_the_order_not_the_cart() {
        let db = test_db().await;
        let username = fresh_account(&db).await;

        let placed = place_order(
            &db,
            PlaceOrderRequest {
                username: username.clone(),
                order: order("ORD-1"),
            },
        )
        .await
        .unwrap();
        assert!(placed.success);

        // The order listing and the cart are distinct arrays: the cart stays
        // empty while the orders array holds the placed order.
        let orders = fetch_orders(&db, &username).await.unwrap().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, "ORD-1");

        let cart = fetch_cart(&db, &username).await.unwrap().unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn cancel_sets_status_and_date() {
        let db = test_db().await;
        let username = fresh_account(&db).await;

        place_order(
            &db,
            PlaceOrderRequest {
                username: username.clone(),
                order: order("ORD-2"),
            },
        )
        .await
        .unwrap();

        let cancelled = cancel_order(
            &db,
            CancelOrderRequest {
                username: username.clone(),
                order_id: "ORD-2".to_string(),
                cancel_date: "2025-11-04".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(cancelled.success);

        let orders = fetch_orders(&db, &username).await.unwrap().unwrap();
        assert_eq!(orders[0].order_status, ORDER_STATUS_CANCELLED);
        assert_eq!(orders[0].cancelled_date, "2025-11-04");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn cancel_of_cancelled_order_matches_again_and_resets_date() {
        let db = test_db().await;
        let username = fresh_account(&db).await;

        place_order(
            &db,
            PlaceOrderRequest {
                username: username.clone(),
                order: order("ORD-3"),
            },
        )
        .await
        .unwrap();

        for cancel_date in ["2025-11-04", "2025-11-05"] {
            let cancelled = cancel_order(
                &db,
                CancelOrderRequest {
                    username: username.clone(),
                    order_id: "ORD-3".to_string(),
                    cancel_date: cancel_date.to_string(),
                },
            )
            .await
            .unwrap();
            // The filter has no status guard, so the second cancel succeeds
            // too and overwrites the date.
            assert!(cancelled.success);

            let orders = fetch_orders(&db, &username).await.unwrap().unwrap();
            assert_eq!(orders[0].cancelled_date, cancel_date);
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn cancel_unknown_order_fails() {
        let db = test_db().await;
        let username = fresh_account(&db).await;

        let result = cancel_order(
            &db,
            CancelOrderRequest {
                username,
                order_id: "ORD-MISSING".to_string(),
                cancel_date: "2025-11-04".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "Order not found or already cancelled");
    }
}
