//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    compliance::EquipmentStatus,
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    models::material::Material,
};

use super::AuthenticatedUser;

/// Equipment unit joined with its template and its compliance evaluation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentEvaluated {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub material: Material,
    /// French display label of the recharge method, when one is set
    pub recharge_type_label: Option<String>,
    pub status: EquipmentStatus,
}

impl EquipmentEvaluated {
    pub fn new(equipment: Equipment, material: Material, status: EquipmentStatus) -> Self {
        let recharge_type_label = equipment
            .recharge_type
            .map(|t| t.label().to_string());
        Self {
            equipment,
            material,
            recharge_type_label,
            status,
        }
    }
}

/// List the equipment of a client, evaluated at the current date
#[utoipa::path(
    get,
    path = "/clients/{id}/equipments",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentEvaluated>),
        (status = 404, description = "Client not found")
    )
)]
pub async fn list_client_equipments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EquipmentEvaluated>>> {
    let today = Utc::now().date_naive();
    let detail = state.services.clients.get_detail(id, today).await?;
    Ok(Json(detail.equipments))
}

/// Register an equipment unit for a client
#[utoipa::path(
    post,
    path = "/clients/{id}/equipments",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment registered", body = Equipment),
        (status = 404, description = "Client or material not found"),
        (status = 409, description = "Unit number already taken")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipments.create(id, &data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Get one equipment unit with its compliance evaluation
#[utoipa::path(
    get,
    path = "/equipments/{id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentEvaluated),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<EquipmentEvaluated>> {
    let today = Utc::now().date_naive();
    let equipment = state.services.equipments.get_evaluated(id, today).await?;
    Ok(Json(equipment))
}

/// Update an equipment unit (records inspections and recharges)
#[utoipa::path(
    put,
    path = "/equipments/{id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Unit number already taken")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipments.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete an equipment unit
#[utoipa::path(
    delete,
    path = "/equipments/{id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.equipments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
