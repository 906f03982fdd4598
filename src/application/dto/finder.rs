// src/application/dto/finder.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoomMatchDto {
    pub room: String,
    pub available_slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartialMatchDto {
    pub room: String,
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinderResultDto {
    pub day: String,
    pub matches: Vec<RoomMatchDto>,
    pub partial: Vec<PartialMatchDto>,
}
