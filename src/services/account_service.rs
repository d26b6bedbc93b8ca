// ==================== ACCOUNT MANAGEMENT ====================
// Signup, login, profile fetch/update over the Userdata collection.
// Passwords are stored as bcrypt hashes, never echoed back to clients.

use crate::{
    database::{MongoDB, USERDATA},
    models::{Account, Address, CartItem, Order, ProfileProjection},
    services::StatusResponse,
    utils::error::AppError,
    utils::password::{hash_password, verify_password},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Phone_Number", default)]
    pub phone_number: String,
    #[serde(rename = "id", default)]
    pub external_id: String,
    #[serde(rename = "Address", default)]
    pub addresses: Vec<Address>,
    #[serde(rename = "addToCart", default)]
    pub cart: Vec<CartItem>,
    #[serde(rename = "Orders", default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: ProfileProjection,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Phone_Number", default)]
    pub phone_number: String,
    #[serde(rename = "OldEmail", default)]
    pub old_email: String,
}

#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub inserted_id: String,
}

// ==================== SERVICE FUNCTIONS ====================

/// GET / - every document in the collection, verbatim. Admin/debug only.
pub async fn list_accounts(db: &MongoDB) -> Result<Vec<Document>, String> {
    let collection = db.collection::<Document>(USERDATA);

    let cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    cursor
        .try_collect()
        .await
        .map_err(|e| format!("Database error: {}", e))
}

/// POST / - insert an arbitrary JSON body as a document, no validation beyond
/// it being an object at all.
pub async fn create_account_raw(db: &MongoDB, body: serde_json::Value) -> Result<InsertResponse, AppError> {
    let document = mongodb::bson::to_document(&body)
        .map_err(|e| AppError::InvalidRequest(format!("body must be a JSON object: {}", e)))?;

    let collection = db.collection::<Document>(USERDATA);

    let result = collection
        .insert_one(document)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|o| o.to_hex())
        .unwrap_or_default();

    Ok(InsertResponse {
        success: true,
        inserted_id,
    })
}

pub async fn get_profile(db: &MongoDB, username: &str) -> Result<ProfileProjection, AppError> {
    let collection = db.collection::<Account>(USERDATA);

    let account = collection
        .find_one(doc! { "Username": username })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    account
        .map(ProfileProjection::from)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn signup(db: &MongoDB, request: SignupRequest) -> Result<StatusResponse, String> {
    let collection = db.collection::<Account>(USERDATA);

    // Check-then-insert, backed by the unique index on Email for races.
    let existing = collection
        .find_one(doc! { "Email": &request.email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if existing.is_some() {
        return Ok(StatusResponse::fail("Email already exists"));
    }

    let account = Account {
        oid: None,
        username: request.username,
        name: request.name,
        email: request.email,
        password: Some(hash_password(&request.password)?),
        gender: request.gender,
        phone_number: request.phone_number,
        external_id: request.external_id,
        addresses: request.addresses,
        cart: request.cart,
        orders: request.orders,
    };

    collection
        .insert_one(account)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(StatusResponse::ok("Signup successful"))
}

/// Ok(Some) on a credential match, Ok(None) on bad credentials, Err on a
/// storage fault. The caller maps these to 200/401/500.
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<Option<ProfileProjection>, String> {
    let collection = db.collection::<Account>(USERDATA);

    let account = collection
        .find_one(doc! { "Email": &request.email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let Some(account) = account else {
        return Ok(None);
    };

    let matches = account
        .password
        .as_deref()
        .map(|hashed| verify_password(&request.password, hashed))
        .unwrap_or(false);

    if matches {
        Ok(Some(ProfileProjection::from(account)))
    } else {
        Ok(None)
    }
}

pub async fn update_profile(db: &MongoDB, request: UpdateProfileRequest) -> Result<StatusResponse, String> {
    if request.email.is_empty() || request.name.is_empty() || request.phone_number.is_empty() {
        return Ok(StatusResponse::fail("All fields are required!"));
    }

    let collection = db.collection::<Account>(USERDATA);

    // When the email is changing, make sure the new one is not already taken.
    if request.email != request.old_email {
        let email_taken = collection
            .find_one(doc! { "Email": &request.email })
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .is_some();

        if email_taken {
            return Ok(StatusResponse::fail("This email already exists!"));
        }
    }

    let result = collection
        .update_one(
            doc! { "Email": &request.old_email },
            doc! { "$set": {
                "Name": &request.name,
                "Gender": &request.gender,
                "Phone_Number": &request.phone_number,
                "Email": &request.email,
            } },
        )
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.modified_count > 0 {
        Ok(StatusResponse::ok("Profile updated successfully"))
    } else {
        Ok(StatusResponse::fail("No changes detected or user not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signup(username: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            gender: "F".to_string(),
            phone_number: "9999999999".to_string(),
            external_id: uuid::Uuid::new_v4().to_string(),
            addresses: vec![],
            cart: vec![],
            orders: vec![],
        }
    }

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        MongoDB::new("mongodb://localhost:27017", "Ecommerce_test")
            .await
            .unwrap()
    }

    fn unique(prefix: &str) -> String {
        format!("{}-{}", prefix, uuid::Uuid::new_v4())
    }

    #[test]
    fn signup_request_accepts_frontend_field_names() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "Username": "asha",
            "Name": "Asha",
            "Email": "asha@example.com",
            "Password": "pw",
            "Gender": "F",
            "Phone_Number": "9876543210",
            "id": "u-17",
            "addToCart": [],
            "Orders": []
        }))
        .unwrap();

        assert_eq!(request.username, "asha");
        assert_eq!(request.external_id, "u-17");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn signup_then_login_returns_projection() {
        let db = test_db().await;
        let email = format!("{}@example.com", unique("user"));
        let username = unique("user");

        let signed_up = signup(&db, test_signup(&username, &email, "pw123")).await.unwrap();
        assert!(signed_up.success);

        let profile = login(
            &db,
            &LoginRequest {
                email: email.clone(),
                password: "pw123".to_string(),
            },
        )
        .await
        .unwrap()
        .expect("credentials should match");

        assert_eq!(profile.email, email);
        assert_eq!(profile.username, username);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn duplicate_signup_is_rejected_and_first_account_untouched() {
        let db = test_db().await;
        let email = format!("{}@example.com", unique("dup"));
        let first = unique("first");

        assert!(signup(&db, test_signup(&first, &email, "pw1")).await.unwrap().success);

        let second = signup(&db, test_signup(&unique("second"), &email, "pw2")).await.unwrap();
        assert!(!second.success);
        assert_eq!(second.message, "Email already exists");

        // First account still logs in with its own password
        let profile = login(
            &db,
            &LoginRequest {
                email,
                password: "pw1".to_string(),
            },
        )
        .await
        .unwrap()
        .expect("first account must be unmodified");
        assert_eq!(profile.username, first);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn login_with_wrong_password_returns_none() {
        let db = test_db().await;
        let email = format!("{}@example.com", unique("pw"));

        signup(&db, test_signup(&unique("pw"), &email, "right")).await.unwrap();

        let result = login(
            &db,
            &LoginRequest {
                email,
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn update_profile_requires_fields_and_checks_email_conflict() {
        let db = test_db().await;
        let email = format!("{}@example.com", unique("upd"));
        let other_email = format!("{}@example.com", unique("other"));

        signup(&db, test_signup(&unique("upd"), &email, "pw")).await.unwrap();
        signup(&db, test_signup(&unique("other"), &other_email, "pw")).await.unwrap();

        let missing = update_profile(
            &db,
            UpdateProfileRequest {
                name: String::new(),
                email: email.clone(),
                gender: "F".to_string(),
                phone_number: "1".to_string(),
                old_email: email.clone(),
            },
        )
        .await
        .unwrap();
        assert!(!missing.success);

        let conflict = update_profile(
            &db,
            UpdateProfileRequest {
                name: "New Name".to_string(),
                email: other_email,
                gender: "F".to_string(),
                phone_number: "1".to_string(),
                old_email: email.clone(),
            },
        )
        .await
        .unwrap();
        assert!(!conflict.success);
        assert_eq!(conflict.message, "This email already exists!");

        let updated = update_profile(
            &db,
            UpdateProfileRequest {
                name: "New Name".to_string(),
                email: email.clone(),
                gender: "F".to_string(),
                phone_number: "8888888888".to_string(),
                old_email: email,
            },
        )
        .await
        .unwrap();
        assert!(updated.success);
    }
}
