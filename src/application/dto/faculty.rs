// src/application/dto/faculty.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FacultyDayDto {
    pub name: String,
    pub day: String,
    pub free: Vec<String>,
    pub busy: Vec<String>,
}
