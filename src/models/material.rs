//! Material template model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::MaterialType;

/// Maintenance parameters for one material type.
///
/// At most one template exists per `material_type`; the repository enforces
/// this at write time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Material {
    pub id: i32,
    pub material_type: MaterialType,
    /// Total lifespan in days from commissioning before mandatory replacement
    pub validity_time_days: i32,
    /// Interval in days between mandatory inspections
    pub time_before_control_days: i32,
    /// Interval in days between mandatory recharges (PA only)
    pub time_before_reload_days: Option<i32>,
    pub crea_date: Option<chrono::DateTime<chrono::Utc>>,
    pub modif_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Create material template request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaterial {
    pub material_type: MaterialType,
    #[validate(range(min = 1, message = "validity_time_days must be positive"))]
    pub validity_time_days: i32,
    #[validate(range(min = 1, message = "time_before_control_days must be positive"))]
    pub time_before_control_days: i32,
    #[validate(range(min = 1, message = "time_before_reload_days must be positive"))]
    pub time_before_reload_days: Option<i32>,
}

/// Update material template request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMaterial {
    #[validate(range(min = 1, message = "validity_time_days must be positive"))]
    pub validity_time_days: Option<i32>,
    #[validate(range(min = 1, message = "time_before_control_days must be positive"))]
    pub time_before_control_days: Option<i32>,
    #[validate(range(min = 1, message = "time_before_reload_days must be positive"))]
    pub time_before_reload_days: Option<i32>,
}
