//! Dashboard statistics service
//!
//! Every equipment counter goes through the compliance engine, so the
//! dashboard, the calendar and the client pages can never disagree on what
//! "expired" means.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::{
    api::stats::{ClientStats, DashboardStats, EquipmentStats, MaterialStats, SeverityStats},
    compliance::{self, Severity},
    error::{AppError, AppResult},
    models::MaterialType,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the dashboard counters as of `today`
    pub async fn get_dashboard(&self, today: NaiveDate) -> AppResult<DashboardStats> {
        let total_clients = self.repository.clients.count().await?;
        let materials = self.repository.materials.list().await?;
        let equipments = self.repository.equipments.list().await?;

        let by_id: HashMap<i32, _> = materials.iter().map(|m| (m.id, m)).collect();

        let mut eq = EquipmentStats::default();
        let mut sev = SeverityStats::default();

        for equipment in &equipments {
            let material = by_id.get(&equipment.material_id).ok_or_else(|| {
                AppError::Internal(format!(
                    "Equipment {} references missing material {}",
                    equipment.id, equipment.material_id
                ))
            })?;
            let status = compliance::evaluate(equipment, material, today);

            eq.total += 1;
            if status.validity.is_expired {
                eq.expired += 1;
            } else {
                eq.valid += 1;
                if status.validity.is_due_soon {
                    eq.expiring_soon += 1;
                }
            }
            if status.control.track.is_expired {
                eq.controls_overdue += 1;
            }
            if status.control.has_never_been_controlled {
                eq.never_controlled += 1;
            }
            if status.recharge.is_expired() {
                eq.recharges_overdue += 1;
            }

            match status.severity {
                Severity::Critical => sev.critical += 1,
                Severity::Important => sev.important += 1,
                Severity::Moderate => sev.moderate += 1,
                Severity::Attention => sev.attention += 1,
                Severity::Normal => sev.normal += 1,
            }
        }

        let count_type = |t: MaterialType| materials.iter().filter(|m| m.material_type == t).count() as i64;
        let mat = MaterialStats {
            total: materials.len() as i64,
            pa: count_type(MaterialType::Pa),
            pp: count_type(MaterialType::Pp),
            alarm: count_type(MaterialType::Alarm),
            co2: count_type(MaterialType::Co2),
        };

        Ok(DashboardStats {
            clients: ClientStats { total: total_clients },
            equipments: eq,
            severities: sev,
            materials: mat,
        })
    }
}
