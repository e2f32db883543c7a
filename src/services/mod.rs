//! Business logic services

pub mod calendar;
pub mod clients;
pub mod equipments;
pub mod materials;
pub mod stats;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clients: clients::ClientsService,
    pub equipments: equipments::EquipmentsService,
    pub materials: materials::MaterialsService,
    pub calendar: calendar::CalendarService,
    pub stats: stats::StatsService,
    pub users: users::UsersService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            clients: clients::ClientsService::new(repository.clone()),
            equipments: equipments::EquipmentsService::new(repository.clone()),
            materials: materials::MaterialsService::new(repository.clone()),
            calendar: calendar::CalendarService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone(), auth_config),
            repository,
        }
    }

    /// Database pool, for readiness probes
    pub fn pool(&self) -> sqlx::Pool<sqlx::Postgres> {
        self.repository.pool.clone()
    }
}
