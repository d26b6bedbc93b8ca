use serde::{Deserialize, Serialize};

/// One saved shipping/billing address. `id` is assigned by the frontend and is
/// the key used by delete/edit; it is unique within an account.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Address {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone_number", default)]
    pub phone_number: String,
    #[serde(rename = "PIN_Code", default)]
    pub pin_code: String,
    #[serde(rename = "Locality", default)]
    pub locality: String,
    #[serde(rename = "Address", default)]
    pub street: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Landmark", default)]
    pub landmark: String,
    #[serde(rename = "Alternate_Phone_Number", default)]
    pub alternate_phone_number: String,
    #[serde(rename = "Address_Type", default)]
    pub address_type: String,
}
