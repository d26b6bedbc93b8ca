// ==================== ADDRESS BOOK ====================
// Addresses live in the `Address` array of the account document, keyed by the
// frontend-assigned `id`. Delete and edit locate the owning account through
// the embedded id alone.

use crate::{
    database::{MongoDB, USERDATA},
    models::{Account, Address},
    services::StatusResponse,
};
use mongodb::bson::{doc, to_bson};

// ==================== SERVICE FUNCTIONS ====================

/// Pushes onto the account matched by the address's own Email field.
pub async fn add_address(db: &MongoDB, address: Address) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    let email = address.email.clone();
    let entry = to_bson(&address).map_err(|e| e.to_string())?;

    let result = collection
        .update_one(
            doc! { "Email": &email },
            doc! { "$push": { "Address": entry } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Address Added Successfully"))
    } else {
        Ok(StatusResponse::fail("Error Occured"))
    }
}

/// Pulls every address with the given id out of whichever account holds it.
/// True when something was removed.
pub async fn delete_address(db: &MongoDB, id: &str) -> Result<bool, String> {
    let collection = db.collection::<Account>(USERDATA);

    let result = collection
        .update_one(
            doc! { "Address.id": id },
            doc! { "$pull": { "Address": { "id": id } } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.modified_count > 0)
}

/// Replaces the matching address in place with the full submitted object.
/// Success is keyed on the filter matching, so re-submitting an identical
/// address still reports success.
pub async fn edit_address(db: &MongoDB, id: &str, replacement: Address) -> Result<bool, String> {
    let collection = db.collection::<Account>(USERDATA);

    let entry = to_bson(&replacement).map_err(|e| e.to_string())?;

    let result = collection
        .update_one(
            doc! { "Address.id": id },
            doc! { "$set": { "Address.$": entry } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.matched_count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::account_service::{get_profile, signup, SignupRequest};

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        MongoDB::new("mongodb://localhost:27017", "Ecommerce_test")
            .await
            .unwrap()
    }

    async fn fresh_account(db: &MongoDB) -> (String, String) {
        let username = format!("addr-{}", uuid::Uuid::new_v4());
        let email = format!("{}@example.com", username);
        let request = SignupRequest {
            username: username.clone(),
            name: "Address Tester".to_string(),
            email: email.clone(),
            password: "pw".to_string(),
            gender: String::new(),
            phone_number: "0".to_string(),
            external_id: String::new(),
            addresses: vec![],
            cart: vec![],
            orders: vec![],
        };
        assert!(signup(db, request).await.unwrap().success);
        (username, email)
    }

    fn address(id: &str, email: &str) -> Address {
        Address {
            id: id.to_string(),
            name: "Asha".to_string(),
            email: email.to_string(),
            phone_number: "9876543210".to_string(),
            pin_code: "560001".to_string(),
            locality: "Shivajinagar".to_string(),
            street: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            landmark: String::new(),
            alternate_phone_number: String::new(),
            address_type: "Home".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn add_edit_delete_address_lifecycle() {
        let db = test_db().await;
        let (username, email) = fresh_account(&db).await;
        let id = uuid::Uuid::new_v4().to_string();

        let added = add_address(&db, address(&id, &email)).await.unwrap();
        assert!(added.success);

        let mut replacement = address(&id, &email);
        replacement.city = "Mysuru".to_string();
        assert!(edit_address(&db, &id, replacement).await.unwrap());

        let profile = get_profile(&db, &username).await.unwrap();
        assert_eq!(profile.addresses.len(), 1);
        assert_eq!(profile.addresses[0].city, "Mysuru");

        assert!(delete_address(&db, &id).await.unwrap());
        assert!(!delete_address(&db, &id).await.unwrap());

        let profile = get_profile(&db, &username).await.unwrap();
        assert!(profile.addresses.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn add_address_for_unknown_email_fails() {
        let db = test_db().await;
        let result = add_address(&db, address("a-1", "nobody@example.com"))
            .await
            .unwrap();
        assert!(!result.success);
    }
}
