//! Monthly action calendar aggregation
//!
//! Projects every deadline track of every equipment unit onto a selected
//! month window and groups the qualifying actions by client, ordered for
//! display (overdue clients first). Pure like the rest of the engine: the
//! reference date is an explicit parameter.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ClientWithEquipments, MaterialType};

use super::{control_status, recharge_status, validity_status, RechargeStatus, TrackStatus};

/// Which deadline track an action comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Validity,
    Control,
    Recharge,
}

impl ActionType {
    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Validity => "Renouvellement matériel",
            ActionType::Control => "Contrôle périodique",
            ActionType::Recharge => "Recharge",
        }
    }
}

/// One pending maintenance action for one equipment unit
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Action {
    pub equipment_id: i32,
    pub equipment_number: i32,
    pub material_type: MaterialType,
    /// French display label of the material kind
    pub material_label: String,
    pub action_type: ActionType,
    pub action_label: String,
    pub due_date: NaiveDate,
    pub is_overdue: bool,
    /// Days overdue when `is_overdue`, days until the deadline otherwise;
    /// never negative
    pub days_difference: i64,
}

/// A client with its qualifying actions for the selected month
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientActions {
    pub client_id: i32,
    pub client_name: String,
    pub client_location: String,
    pub contact_name: String,
    pub phone: Option<String>,
    pub actions: Vec<Action>,
    pub total_actions: usize,
    pub has_overdue: bool,
}

/// First and last day of a month, inclusive. `None` for an invalid selector.
pub fn month_window(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// A track qualifies when its deadline falls inside the selected month, or
/// when it is already overdue and the selected month is the current month or
/// an earlier one. Overdue items are never back-filled into future month
/// views.
fn qualifies(track: &TrackStatus, window: (NaiveDate, NaiveDate), month: u32, year: i32, today: NaiveDate) -> bool {
    let (start, end) = window;
    if track.due_date >= start && track.due_date <= end {
        return true;
    }
    let current_or_past =
        year < today.year() || (year == today.year() && month <= today.month());
    track.is_expired && current_or_past
}

fn action(track: &TrackStatus, action_type: ActionType, equipment_id: i32, equipment_number: i32, material_type: MaterialType) -> Action {
    Action {
        equipment_id,
        equipment_number,
        material_type,
        material_label: material_type.label().to_string(),
        action_type,
        action_label: action_type.label().to_string(),
        due_date: track.due_date,
        is_overdue: track.is_expired,
        days_difference: if track.is_expired {
            track.days_overdue
        } else {
            track.days_remaining
        },
    }
}

/// Aggregate the pending actions of every client for a month/year selector.
///
/// Clients with no qualifying action are omitted. Ordering is fully
/// deterministic: within a client, overdue first, then ascending due date,
/// then equipment number and track; across clients, those with overdue
/// actions first, then by action count descending, then by id.
pub fn aggregate(clients: &[ClientWithEquipments], month: u32, year: i32, today: NaiveDate) -> Vec<ClientActions> {
    let Some(window) = month_window(month, year) else {
        return Vec::new();
    };

    let mut result: Vec<ClientActions> = Vec::new();

    for client in clients {
        let mut actions: Vec<Action> = Vec::new();

        for eq in &client.equipments {
            let equipment = &eq.equipment;
            let material = &eq.material;

            let validity = validity_status(equipment, material, today);
            if qualifies(&validity, window, month, year, today) {
                actions.push(action(&validity, ActionType::Validity, equipment.id, equipment.number, material.material_type));
            }

            let control = control_status(equipment, material, today);
            if qualifies(&control.track, window, month, year, today) {
                actions.push(action(&control.track, ActionType::Control, equipment.id, equipment.number, material.material_type));
            }

            if let RechargeStatus::Applicable { track, .. } = recharge_status(equipment, material, today) {
                if qualifies(&track, window, month, year, today) {
                    actions.push(action(&track, ActionType::Recharge, equipment.id, equipment.number, material.material_type));
                }
            }
        }

        if actions.is_empty() {
            continue;
        }

        actions.sort_by(|a, b| {
            b.is_overdue
                .cmp(&a.is_overdue)
                .then(a.due_date.cmp(&b.due_date))
                .then(a.equipment_number.cmp(&b.equipment_number))
                .then(a.action_type.cmp(&b.action_type))
        });

        let has_overdue = actions.iter().any(|a| a.is_overdue);
        result.push(ClientActions {
            client_id: client.client.id,
            client_name: client.client.name.clone(),
            client_location: client.client.location.clone(),
            contact_name: client.client.contact_name.clone(),
            phone: client.client.phone.clone(),
            total_actions: actions.len(),
            has_overdue,
            actions,
        });
    }

    result.sort_by(|a, b| {
        b.has_overdue
            .cmp(&a.has_overdue)
            .then(b.total_actions.cmp(&a.total_actions))
            .then(a.client_id.cmp(&b.client_id))
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Equipment, EquipmentWithMaterial, Material};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn client(id: i32, equipments: Vec<EquipmentWithMaterial>) -> ClientWithEquipments {
        ClientWithEquipments {
            client: Client {
                id,
                name: format!("Client {}", id),
                location: "Lyon".to_string(),
                contact_name: "M. Dupont".to_string(),
                phone: None,
                email: None,
                crea_date: None,
                modif_date: None,
            },
            equipments,
        }
    }

    fn unit(id: i32, number: i32, material_type: MaterialType, commissioning: NaiveDate, validity: i32, control: i32, reload: Option<i32>) -> EquipmentWithMaterial {
        EquipmentWithMaterial {
            equipment: Equipment {
                id,
                client_id: 1,
                material_id: 1,
                number,
                commissioning_date: commissioning,
                last_verification_date: None,
                last_recharge_date: None,
                recharge_type: None,
                volume: None,
                notes: None,
                crea_date: None,
                modif_date: None,
            },
            material: Material {
                id: 1,
                material_type,
                validity_time_days: validity,
                time_before_control_days: control,
                time_before_reload_days: reload,
                crea_date: None,
                modif_date: None,
            },
        }
    }

    #[test]
    fn test_month_window_bounds() {
        assert_eq!(month_window(2, 2024), Some((date(2024, 2, 1), date(2024, 2, 29))));
        assert_eq!(month_window(12, 2024), Some((date(2024, 12, 1), date(2024, 12, 31))));
        assert_eq!(month_window(13, 2024), None);
        assert_eq!(month_window(0, 2024), None);
    }

    #[test]
    fn test_overdue_item_included_in_current_month_view() {
        // Expired 2024-06-30, viewed in July 2024 while today is 2024-07-05:
        // July is the current month, so the overdue item is surfaced.
        let clients = vec![client(1, vec![unit(1, 1, MaterialType::Pp, date(2023, 7, 1), 365, 3650, None)])];
        let today = date(2024, 7, 5);

        let result = aggregate(&clients, 7, 2024, today);
        assert_eq!(result.len(), 1);
        let a = &result[0].actions[0];
        assert_eq!(a.action_type, ActionType::Validity);
        assert_eq!(a.due_date, date(2024, 6, 30));
        assert!(a.is_overdue);
        assert_eq!(a.days_difference, 5);
    }

    #[test]
    fn test_overdue_item_excluded_from_future_month_view() {
        let clients = vec![client(1, vec![unit(1, 1, MaterialType::Pp, date(2023, 7, 1), 365, 3650, None)])];
        let today = date(2024, 7, 5);

        // September 2024 is in the future and 2024-06-30 is outside its
        // window: nothing to show.
        assert!(aggregate(&clients, 9, 2024, today).is_empty());
    }

    #[test]
    fn test_client_without_qualifying_actions_is_omitted() {
        // Deadlines years away and nothing overdue
        let clients = vec![client(1, vec![unit(1, 1, MaterialType::Alarm, date(2024, 1, 1), 3650, 3650, None)])];
        assert!(aggregate(&clients, 3, 2024, date(2024, 3, 10)).is_empty());
    }

    #[test]
    fn test_upcoming_deadline_in_selected_window() {
        let clients = vec![client(1, vec![unit(1, 1, MaterialType::Pp, date(2024, 1, 1), 200, 3650, None)])];
        let today = date(2024, 7, 1);
        // Due 2024-07-19
        let result = aggregate(&clients, 7, 2024, today);
        assert_eq!(result.len(), 1);
        let a = &result[0].actions[0];
        assert!(!a.is_overdue);
        assert_eq!(a.due_date, date(2024, 7, 19));
        assert_eq!(a.days_difference, 18);
    }

    #[test]
    fn test_all_three_tracks_qualify_independently() {
        // A PA commissioned long ago: validity, control and recharge all
        // overdue, yielding three actions for the single unit.
        let clients = vec![client(1, vec![unit(1, 1, MaterialType::Pa, date(2020, 1, 1), 1095, 365, Some(90))])];
        let result = aggregate(&clients, 5, 2024, date(2024, 5, 15));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_actions, 3);
        assert!(result[0].has_overdue);

        let types: Vec<ActionType> = result[0].actions.iter().map(|a| a.action_type).collect();
        assert!(types.contains(&ActionType::Validity));
        assert!(types.contains(&ActionType::Control));
        assert!(types.contains(&ActionType::Recharge));
    }

    #[test]
    fn test_actions_sorted_overdue_first_then_due_date() {
        // Unit 1 overdue, unit 2 upcoming within the window
        let clients = vec![client(
            1,
            vec![
                unit(2, 2, MaterialType::Pp, date(2024, 1, 1), 200, 3650, None),
                unit(1, 1, MaterialType::Pp, date(2023, 7, 1), 365, 3650, None),
            ],
        )];
        let result = aggregate(&clients, 7, 2024, date(2024, 7, 5));
        let actions = &result[0].actions;
        assert_eq!(actions.len(), 2);
        assert!(actions[0].is_overdue);
        assert!(!actions[1].is_overdue);
        assert!(actions[0].due_date <= actions[1].due_date);
    }

    #[test]
    fn test_clients_with_overdue_sort_first_then_by_count() {
        let overdue_one = client(3, vec![unit(1, 1, MaterialType::Pp, date(2023, 7, 1), 365, 3650, None)]);
        let upcoming_two = client(
            1,
            vec![
                unit(2, 1, MaterialType::Pp, date(2024, 1, 1), 200, 3650, None),
                unit(3, 2, MaterialType::Pp, date(2024, 1, 5), 200, 3650, None),
            ],
        );
        let upcoming_one = client(2, vec![unit(4, 1, MaterialType::Pp, date(2024, 1, 10), 200, 3650, None)]);

        let clients = vec![upcoming_one, upcoming_two, overdue_one];
        let result = aggregate(&clients, 7, 2024, date(2024, 7, 5));

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].client_id, 3); // overdue wins
        assert_eq!(result[1].client_id, 1); // then more actions
        assert_eq!(result[2].client_id, 2);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let clients = vec![
            client(2, vec![unit(1, 1, MaterialType::Pa, date(2020, 1, 1), 1095, 365, Some(90))]),
            client(1, vec![unit(2, 1, MaterialType::Pp, date(2024, 1, 1), 200, 3650, None)]),
        ];
        let today = date(2024, 7, 5);

        let a = aggregate(&clients, 7, 2024, today);
        let b = aggregate(&clients, 7, 2024, today);
        let ids_a: Vec<i32> = a.iter().map(|c| c.client_id).collect();
        let ids_b: Vec<i32> = b.iter().map(|c| c.client_id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.len(), b.len());
    }
}
