//! Equipments repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentsRepository {
    pool: Pool<Postgres>,
}

impl EquipmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment units
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipments ORDER BY client_id, number",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List equipment units of one client
    pub async fn list_by_client(&self, client_id: i32) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipments WHERE client_id = $1 ORDER BY number",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Check whether a unit number is already taken within a client,
    /// optionally ignoring one unit (for updates)
    pub async fn number_exists(&self, client_id: i32, number: i32, exclude_id: Option<i32>) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM equipments
            WHERE client_id = $1 AND number = $2 AND ($3::int IS NULL OR id != $3)
            "#,
        )
        .bind(client_id)
        .bind(number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Create an equipment unit for a client
    pub async fn create(&self, client_id: i32, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipments (client_id, material_id, number, commissioning_date,
                                    last_verification_date, last_recharge_date,
                                    recharge_type, volume, notes, crea_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(data.material_id)
        .bind(data.number)
        .bind(data.commissioning_date)
        .bind(data.last_verification_date)
        .bind(data.last_recharge_date)
        .bind(data.recharge_type)
        .bind(data.volume)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an equipment unit (only the provided fields)
    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.material_id, "material_id");
        add_field!(data.number, "number");
        add_field!(data.commissioning_date, "commissioning_date");
        add_field!(data.last_verification_date, "last_verification_date");
        add_field!(data.last_recharge_date, "last_recharge_date");
        add_field!(data.recharge_type, "recharge_type");
        add_field!(data.volume, "volume");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE equipments SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.material_id);
        bind_field!(data.number);
        bind_field!(data.commissioning_date);
        bind_field!(data.last_verification_date);
        bind_field!(data.last_recharge_date);
        bind_field!(data.recharge_type);
        bind_field!(data.volume);
        bind_field!(data.notes);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete an equipment unit
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Count equipment units owned by a client
    pub async fn count_by_client(&self, client_id: i32) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipments WHERE client_id = $1")
                .bind(client_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
