use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::api::PaginationDto;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PirepSummaryDto {
    pub id: String,
    pub user_id: i32,
    pub pilot: Option<String>,
    pub airline: Option<String>,
    pub flight_number: String,
    pub dpt_airport_id: String,
    pub arr_airport_id: String,
    pub aircraft: Option<String>,
    pub state: String,
    pub submitted_at: Option<NaiveDateTime>,
    pub comments: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PirepPageDto {
    pub pireps: Vec<PirepSummaryDto>,
    pub pagination: PaginationDto,
}
