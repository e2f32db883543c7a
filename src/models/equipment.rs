//! Equipment model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::RechargeType;
use super::material::Material;

/// One physical safety equipment unit installed at a client site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub client_id: i32,
    pub material_id: i32,
    /// Unit number, unique within its client
    pub number: i32,
    /// Date the unit entered service
    pub commissioning_date: NaiveDate,
    /// Date of the most recent inspection; absent means never inspected
    pub last_verification_date: Option<NaiveDate>,
    /// Date of the most recent recharge; absent means never recharged
    pub last_recharge_date: Option<NaiveDate>,
    pub recharge_type: Option<RechargeType>,
    /// Capacity in liters or kilograms, descriptive only
    pub volume: Option<f64>,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Equipment joined with its material template, the input of the compliance
/// evaluator
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentWithMaterial {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub material: Material,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    pub material_id: i32,
    #[validate(range(min = 1, message = "number must be positive"))]
    pub number: i32,
    pub commissioning_date: NaiveDate,
    pub last_verification_date: Option<NaiveDate>,
    pub last_recharge_date: Option<NaiveDate>,
    pub recharge_type: Option<RechargeType>,
    pub volume: Option<f64>,
    #[validate(length(max = 500, message = "notes are limited to 500 characters"))]
    pub notes: Option<String>,
}

/// Update equipment request.
///
/// Inspections and recharges are recorded through this type by setting
/// `last_verification_date` / `last_recharge_date`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    pub material_id: Option<i32>,
    #[validate(range(min = 1, message = "number must be positive"))]
    pub number: Option<i32>,
    pub commissioning_date: Option<NaiveDate>,
    pub last_verification_date: Option<NaiveDate>,
    pub last_recharge_date: Option<NaiveDate>,
    pub recharge_type: Option<RechargeType>,
    pub volume: Option<f64>,
    #[validate(length(max = 500, message = "notes are limited to 500 characters"))]
    pub notes: Option<String>,
}
