//! Equipment management service

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    api::equipments::EquipmentEvaluated,
    compliance,
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentsService {
    repository: Repository,
}

impl EquipmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get an equipment unit with its template and evaluation at `today`
    pub async fn get_evaluated(&self, id: i32, today: NaiveDate) -> AppResult<EquipmentEvaluated> {
        let equipment = self.repository.equipments.get_by_id(id).await?;
        let material = self.repository.materials.get_by_id(equipment.material_id).await?;
        let status = compliance::evaluate(&equipment, &material, today);
        Ok(EquipmentEvaluated::new(equipment, material, status))
    }

    /// Register an equipment unit for a client
    pub async fn create(&self, client_id: i32, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        // Owning client and template must exist
        self.repository.clients.get_by_id(client_id).await?;
        self.repository.materials.get_by_id(data.material_id).await?;

        if self.repository.equipments.number_exists(client_id, data.number, None).await? {
            return Err(AppError::Conflict(format!(
                "Client {} already has an equipment unit numbered {}",
                client_id, data.number
            )));
        }

        let equipment = self.repository.equipments.create(client_id, data).await?;
        tracing::info!(
            "Registered equipment {} (#{}) for client {}",
            equipment.id,
            equipment.number,
            client_id
        );
        Ok(equipment)
    }

    /// Update an equipment unit. This is also how inspections and recharges
    /// are recorded, by setting the corresponding date field(s).
    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        let current = self.repository.equipments.get_by_id(id).await?;

        if let Some(material_id) = data.material_id {
            self.repository.materials.get_by_id(material_id).await?;
        }

        if let Some(number) = data.number {
            if number != current.number
                && self
                    .repository
                    .equipments
                    .number_exists(current.client_id, number, Some(id))
                    .await?
            {
                return Err(AppError::Conflict(format!(
                    "Client {} already has an equipment unit numbered {}",
                    current.client_id, number
                )));
            }
        }

        self.repository.equipments.update(id, data).await
    }

    /// Delete an equipment unit
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipments.delete(id).await
    }
}
