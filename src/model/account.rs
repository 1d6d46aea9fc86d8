use serde::{Deserialize, Serialize};

use crate::model::item::ItemDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProgressDto {
    pub account_id: i64,
    pub level: i32,
    pub exp: i64,
    pub money: i64,
    pub stages_cleared: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    pub progress: AccountProgressDto,
    pub items: Vec<ItemDto>,
}
