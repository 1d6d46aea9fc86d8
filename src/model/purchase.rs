use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub receipt_id: String,
    pub product_code: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseResultDto {
    pub receipt_id: String,
    pub mail_id: i32,
}
