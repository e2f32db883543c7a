//! Action calendar service
//!
//! Loads every client with its equipment and projects them through the
//! compliance engine onto the selected month window.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::{
    compliance::calendar::{aggregate, ClientActions},
    error::{AppError, AppResult},
    models::{ClientWithEquipments, EquipmentWithMaterial},
    repository::Repository,
};

#[derive(Clone)]
pub struct CalendarService {
    repository: Repository,
}

impl CalendarService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Clients requiring action during the selected month, ordered for
    /// display (overdue first)
    pub async fn get_actions(&self, month: u32, year: i32, today: NaiveDate) -> AppResult<Vec<ClientActions>> {
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!("Invalid month: {}", month)));
        }

        let clients = self.load_clients_with_equipments().await?;
        Ok(aggregate(&clients, month, year, today))
    }

    /// Load every client with its equipment joined to material templates
    async fn load_clients_with_equipments(&self) -> AppResult<Vec<ClientWithEquipments>> {
        let clients = self.repository.clients.list().await?;
        let equipments = self.repository.equipments.list().await?;
        let materials: HashMap<i32, _> = self
            .repository
            .materials
            .list()
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut by_client: HashMap<i32, Vec<EquipmentWithMaterial>> = HashMap::new();
        for equipment in equipments {
            let material = materials.get(&equipment.material_id).ok_or_else(|| {
                AppError::Internal(format!(
                    "Equipment {} references missing material {}",
                    equipment.id, equipment.material_id
                ))
            })?;
            by_client
                .entry(equipment.client_id)
                .or_default()
                .push(EquipmentWithMaterial {
                    equipment,
                    material: material.clone(),
                });
        }

        Ok(clients
            .into_iter()
            .map(|client| {
                let equipments = by_client.remove(&client.id).unwrap_or_default();
                ClientWithEquipments { client, equipments }
            })
            .collect())
    }
}
