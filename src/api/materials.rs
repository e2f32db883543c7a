//! Material template API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::material::{CreateMaterial, Material, UpdateMaterial},
};

use super::AuthenticatedUser;

/// List all material templates
#[utoipa::path(
    get,
    path = "/materials",
    tag = "materials",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Material template list", body = Vec<Material>)
    )
)]
pub async fn list_materials(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Material>>> {
    let materials = state.services.materials.list().await?;
    Ok(Json(materials))
}

/// Get a material template by ID
#[utoipa::path(
    get,
    path = "/materials/{id}",
    tag = "materials",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Material ID")),
    responses(
        (status = 200, description = "Material template", body = Material),
        (status = 404, description = "Material not found")
    )
)]
pub async fn get_material(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Material>> {
    let material = state.services.materials.get_by_id(id).await?;
    Ok(Json(material))
}

/// Create a material template (one per type)
#[utoipa::path(
    post,
    path = "/materials",
    tag = "materials",
    security(("bearer_auth" = [])),
    request_body = CreateMaterial,
    responses(
        (status = 201, description = "Material template created", body = Material),
        (status = 409, description = "Template already exists for this type")
    )
)]
pub async fn create_material(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let material = state.services.materials.create(&data).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// Update a material template
#[utoipa::path(
    put,
    path = "/materials/{id}",
    tag = "materials",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Material ID")),
    request_body = UpdateMaterial,
    responses(
        (status = 200, description = "Material template updated", body = Material),
        (status = 404, description = "Material not found")
    )
)]
pub async fn update_material(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMaterial>,
) -> AppResult<Json<Material>> {
    let material = state.services.materials.update(id, &data).await?;
    Ok(Json(material))
}

/// Delete a material template. Refused while equipment references it.
#[utoipa::path(
    delete,
    path = "/materials/{id}",
    tag = "materials",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Material ID")),
    responses(
        (status = 204, description = "Material template deleted"),
        (status = 404, description = "Material not found"),
        (status = 409, description = "Material is referenced by equipment")
    )
)]
pub async fn delete_material(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.materials.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
