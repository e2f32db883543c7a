//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ClientStats {
    pub total: i64,
}

/// Equipment counters, all derived through the compliance engine
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct EquipmentStats {
    pub total: i64,
    /// Within their validity period
    pub valid: i64,
    /// Past their validity period
    pub expired: i64,
    /// Valid but expiring within 30 days
    pub expiring_soon: i64,
    pub controls_overdue: i64,
    pub recharges_overdue: i64,
    /// Units with no inspection on record
    pub never_controlled: i64,
}

/// Units per combined severity tier
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct SeverityStats {
    pub critical: i64,
    pub important: i64,
    pub moderate: i64,
    pub attention: i64,
    pub normal: i64,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct MaterialStats {
    pub total: i64,
    pub pa: i64,
    pub pp: i64,
    pub alarm: i64,
    pub co2: i64,
}

/// Dashboard response
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub clients: ClientStats,
    pub equipments: EquipmentStats,
    pub severities: SeverityStats,
    pub materials: MaterialStats,
}

/// Dashboard counters as of the current date
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<DashboardStats>> {
    let today = Utc::now().date_naive();
    let stats = state.services.stats.get_dashboard(today).await?;
    Ok(Json(stats))
}
