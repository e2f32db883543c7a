//! Material template management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::material::{CreateMaterial, Material, UpdateMaterial},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaterialsService {
    repository: Repository,
}

impl MaterialsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all material templates
    pub async fn list(&self) -> AppResult<Vec<Material>> {
        self.repository.materials.list().await
    }

    /// Get a material template by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Material> {
        self.repository.materials.get_by_id(id).await
    }

    /// Create a material template. At most one template may exist per type.
    pub async fn create(&self, data: &CreateMaterial) -> AppResult<Material> {
        data.validate()?;

        if self.repository.materials.exists_for_type(data.material_type).await? {
            return Err(AppError::Conflict(format!(
                "A template already exists for material type {}",
                data.material_type
            )));
        }

        let material = self.repository.materials.create(data).await?;
        tracing::info!("Created material template {} ({})", material.id, material.material_type);
        Ok(material)
    }

    /// Update a material template
    pub async fn update(&self, id: i32, data: &UpdateMaterial) -> AppResult<Material> {
        data.validate()?;
        self.repository.materials.update(id, data).await
    }

    /// Delete a material template. Blocked while equipment references it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let in_use = self.repository.materials.count_equipments(id).await?;
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "Material {} is referenced by {} equipment unit(s)",
                id, in_use
            )));
        }
        self.repository.materials.delete(id).await
    }
}
