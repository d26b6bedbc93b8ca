use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::{Address, CartItem, Order};

/// One document in the `Userdata` collection. Field names on the wire keep the
/// contract the frontend was written against (`Username`, `addToCart`, ...).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub oid: Option<ObjectId>,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    /// Bcrypt hash. Never serialized into a response; see `ProfileProjection`.
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Phone_Number", default)]
    pub phone_number: String,
    /// External id assigned by the frontend, distinct from `_id`.
    #[serde(rename = "id", default)]
    pub external_id: String,
    #[serde(rename = "Address", default)]
    pub addresses: Vec<Address>,
    #[serde(rename = "addToCart", default)]
    pub cart: Vec<CartItem>,
    #[serde(rename = "Orders", default)]
    pub orders: Vec<Order>,
}

/// The fixed subset of an account returned to clients. Password is excluded by
/// construction; absent fields come back as empty strings/arrays, never null.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProfileProjection {
    #[serde(rename = "_id")]
    pub oid: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Phone_Number")]
    pub phone_number: String,
    #[serde(rename = "id")]
    pub external_id: String,
    #[serde(rename = "Address")]
    pub addresses: Vec<Address>,
    #[serde(rename = "addToCart")]
    pub cart: Vec<CartItem>,
    #[serde(rename = "Orders")]
    pub orders: Vec<Order>,
}

impl From<Account> for ProfileProjection {
    fn from(account: Account) -> Self {
        Self {
            oid: account.oid.map(|o| o.to_hex()).unwrap_or_default(),
            username: account.username,
            name: account.name,
            email: account.email,
            gender: account.gender,
            phone_number: account.phone_number,
            external_id: account.external_id,
            addresses: account.addresses,
            cart: account.cart,
            orders: account.orders,
        }
    }
}
