use serde::{Deserialize, Serialize};

use crate::model::item::RewardItemDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDto {
    pub day: i32,
    pub mail_id: i32,
    pub reward: Vec<RewardItemDto>,
}
