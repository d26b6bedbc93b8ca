use serde::{Deserialize, Serialize};

/// One product line in an account's in-progress cart. Product ids are unique
/// within a cart by convention only; `$push` never deduplicates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct CartItem {
    #[serde(rename = "productId")]
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "productImg", default)]
    pub product_img: String,
    #[serde(default)]
    pub quantity: i64,
}
