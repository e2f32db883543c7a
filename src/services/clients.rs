//! Client management service

use chrono::NaiveDate;
use std::collections::HashMap;
use validator::Validate;

use crate::{
    api::clients::ClientDetail,
    api::equipments::EquipmentEvaluated,
    compliance,
    error::{AppError, AppResult},
    models::client::{Client, CreateClient, UpdateClient},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all clients
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        self.repository.clients.list().await
    }

    /// Get a client by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    /// Get a client with its equipment, each unit evaluated at `today`
    pub async fn get_detail(&self, id: i32, today: NaiveDate) -> AppResult<ClientDetail> {
        let client = self.repository.clients.get_by_id(id).await?;
        let equipments = self.repository.equipments.list_by_client(id).await?;
        let materials: HashMap<i32, _> = self
            .repository
            .materials
            .list()
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut evaluated = Vec::with_capacity(equipments.len());
        for equipment in equipments {
            let material = materials.get(&equipment.material_id).ok_or_else(|| {
                AppError::Internal(format!(
                    "Equipment {} references missing material {}",
                    equipment.id, equipment.material_id
                ))
            })?;
            let status = compliance::evaluate(&equipment, material, today);
            evaluated.push(EquipmentEvaluated::new(equipment, material.clone(), status));
        }

        Ok(ClientDetail {
            client,
            equipments: evaluated,
        })
    }

    /// Create a client
    pub async fn create(&self, data: &CreateClient) -> AppResult<Client> {
        data.validate()?;
        let client = self.repository.clients.create(data).await?;
        tracing::info!("Created client {} ({})", client.id, client.name);
        Ok(client)
    }

    /// Update a client
    pub async fn update(&self, id: i32, data: &UpdateClient) -> AppResult<Client> {
        data.validate()?;
        self.repository.clients.update(id, data).await
    }

    /// Delete a client. Blocked while the client still owns equipment.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let owned = self.repository.equipments.count_by_client(id).await?;
        if owned > 0 {
            return Err(AppError::Conflict(format!(
                "Client {} still owns {} equipment unit(s)",
                id, owned
            )));
        }
        self.repository.clients.delete(id).await
    }
}
