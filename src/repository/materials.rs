//! Materials repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::material::{CreateMaterial, Material, UpdateMaterial},
    models::MaterialType,
};

#[derive(Clone)]
pub struct MaterialsRepository {
    pool: Pool<Postgres>,
}

impl MaterialsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all material templates
    pub async fn list(&self) -> AppResult<Vec<Material>> {
        let rows = sqlx::query_as::<_, Material>("SELECT * FROM materials ORDER BY material_type")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get material template by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Material> {
        sqlx::query_as::<_, Material>("SELECT * FROM materials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Material {} not found", id)))
    }

    /// Check whether a template already exists for a type
    pub async fn exists_for_type(&self, material_type: MaterialType) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM materials WHERE material_type = $1")
                .bind(material_type)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    /// Create a material template
    pub async fn create(&self, data: &CreateMaterial) -> AppResult<Material> {
        let row = sqlx::query_as::<_, Material>(
            r#"
            INSERT INTO materials (material_type, validity_time_days, time_before_control_days, time_before_reload_days, crea_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.material_type)
        .bind(data.validity_time_days)
        .bind(data.time_before_control_days)
        .bind(data.time_before_reload_days)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a material template
    pub async fn update(&self, id: i32, data: &UpdateMaterial) -> AppResult<Material> {
        let row = sqlx::query_as::<_, Material>(
            r#"
            UPDATE materials SET
                validity_time_days = COALESCE($2, validity_time_days),
                time_before_control_days = COALESCE($3, time_before_control_days),
                time_before_reload_days = COALESCE($4, time_before_reload_days),
                modif_date = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.validity_time_days)
        .bind(data.time_before_control_days)
        .bind(data.time_before_reload_days)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Material {} not found", id)))?;
        Ok(row)
    }

    /// Delete a material template
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Material {} not found", id)));
        }
        Ok(())
    }

    /// Count equipment units referencing a template
    pub async fn count_equipments(&self, id: i32) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipments WHERE material_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

}
