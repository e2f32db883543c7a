//! Compliance date-calculation engine
//!
//! Pure functions deriving the three deadline tracks of an equipment unit
//! (validity, periodic control, recharge) and its combined severity from its
//! commissioning date, its material template and the historical
//! inspection/recharge dates.
//!
//! Nothing in this module reads the clock: the reference date is always an
//! explicit `today` parameter, so results are deterministic and the engine is
//! shared unchanged by the calendar, the client detail view and the dashboard
//! statistics.

pub mod calendar;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Equipment, Material, MaterialType};

/// Look-ahead window, in days, for the "due soon" amber flag
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

/// State of one deadline track at a given date.
///
/// Day counts are whole calendar days between midnight-normalised dates and
/// are never negative; the overdue/remaining distinction is carried by
/// `is_expired`. `today == due_date` counts as not yet overdue, so
/// `days_overdue` is at least 1 whenever `is_expired` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrackStatus {
    pub due_date: NaiveDate,
    pub is_expired: bool,
    pub is_due_soon: bool,
    pub days_remaining: i64,
    pub days_overdue: i64,
}

/// Control track: a plain deadline plus the first-control flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ControlStatus {
    #[serde(flatten)]
    pub track: TrackStatus,
    /// No inspection has ever been recorded; the deadline counts from the
    /// commissioning date and the UI labels it "first control"
    pub has_never_been_controlled: bool,
}

/// Recharge track. Only auxiliary-pressure (PA) extinguishers with a reload
/// interval carry one; everything else is `NotApplicable`, a distinct state
/// rather than a valid-looking track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RechargeStatus {
    NotApplicable,
    Applicable {
        track: TrackStatus,
        has_never_been_recharged: bool,
    },
}

impl RechargeStatus {
    /// True only when the track applies and its deadline has passed
    pub fn is_expired(&self) -> bool {
        match self {
            RechargeStatus::NotApplicable => false,
            RechargeStatus::Applicable { track, .. } => track.is_expired,
        }
    }

    /// True only when the track applies and its deadline is due soon
    pub fn is_due_soon(&self) -> bool {
        match self {
            RechargeStatus::NotApplicable => false,
            RechargeStatus::Applicable { track, .. } => track.is_due_soon,
        }
    }
}

/// Combined severity of an equipment unit, highest first.
///
/// An expired validity is always critical; any other expired track outranks
/// a deadline that is merely approaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Important,
    Moderate,
    Attention,
    Normal,
}

impl Severity {
    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critique",
            Severity::Important => "Importante",
            Severity::Moderate => "Modérée",
            Severity::Attention => "Attention",
            Severity::Normal => "Normale",
        }
    }
}

/// Full evaluation of one equipment unit at a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct EquipmentStatus {
    pub validity: TrackStatus,
    pub control: ControlStatus,
    pub recharge: RechargeStatus,
    pub severity: Severity,
    /// French display label for the severity tier
    #[schema(value_type = String)]
    pub severity_label: &'static str,
}

/// Derive one deadline track: `due = base + interval` calendar days.
///
/// Intervals large enough to push the due date past the representable range
/// saturate to `NaiveDate::MAX` rather than panic; such a deadline is simply
/// never due.
fn track_status(base: NaiveDate, interval_days: i32, today: NaiveDate) -> TrackStatus {
    let due_date = base
        .checked_add_signed(Duration::days(i64::from(interval_days)))
        .unwrap_or(NaiveDate::MAX);
    let diff = (due_date - today).num_days();
    let is_expired = diff < 0;
    TrackStatus {
        due_date,
        is_expired,
        is_due_soon: !is_expired && diff <= DUE_SOON_WINDOW_DAYS,
        days_remaining: if is_expired { 0 } else { diff },
        days_overdue: if is_expired { -diff } else { 0 },
    }
}

/// Validity track: lifespan counted from the commissioning date
pub fn validity_status(equipment: &Equipment, material: &Material, today: NaiveDate) -> TrackStatus {
    track_status(equipment.commissioning_date, material.validity_time_days, today)
}

/// Control track: counted from the last inspection, or from commissioning
/// when the unit has never been inspected
pub fn control_status(equipment: &Equipment, material: &Material, today: NaiveDate) -> ControlStatus {
    let base = equipment
        .last_verification_date
        .unwrap_or(equipment.commissioning_date);
    ControlStatus {
        track: track_status(base, material.time_before_control_days, today),
        has_never_been_controlled: equipment.last_verification_date.is_none(),
    }
}

/// Recharge track: PA extinguishers with a reload interval only
pub fn recharge_status(equipment: &Equipment, material: &Material, today: NaiveDate) -> RechargeStatus {
    if material.material_type != MaterialType::Pa {
        return RechargeStatus::NotApplicable;
    }
    let Some(reload_days) = material.time_before_reload_days else {
        return RechargeStatus::NotApplicable;
    };
    let base = equipment
        .last_recharge_date
        .unwrap_or(equipment.commissioning_date);
    RechargeStatus::Applicable {
        track: track_status(base, reload_days, today),
        has_never_been_recharged: equipment.last_recharge_date.is_none(),
    }
}

/// Combined severity, highest wins
pub fn severity(validity: &TrackStatus, control: &ControlStatus, recharge: &RechargeStatus) -> Severity {
    if validity.is_expired {
        Severity::Critical
    } else if control.track.is_expired || recharge.is_expired() {
        Severity::Important
    } else if validity.is_due_soon {
        Severity::Moderate
    } else if control.track.is_due_soon || recharge.is_due_soon() {
        Severity::Attention
    } else {
        Severity::Normal
    }
}

/// Evaluate every track of one equipment unit at `today`
pub fn evaluate(equipment: &Equipment, material: &Material, today: NaiveDate) -> EquipmentStatus {
    let validity = validity_status(equipment, material, today);
    let control = control_status(equipment, material, today);
    let recharge = recharge_status(equipment, material, today);
    let severity = severity(&validity, &control, &recharge);
    EquipmentStatus {
        validity,
        control,
        recharge,
        severity,
        severity_label: severity.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn material(material_type: MaterialType, validity: i32, control: i32, reload: Option<i32>) -> Material {
        Material {
            id: 1,
            material_type,
            validity_time_days: validity,
            time_before_control_days: control,
            time_before_reload_days: reload,
            crea_date: None,
            modif_date: None,
        }
    }

    fn equipment(commissioning: NaiveDate) -> Equipment {
        Equipment {
            id: 1,
            client_id: 1,
            material_id: 1,
            number: 1,
            commissioning_date: commissioning,
            last_verification_date: None,
            last_recharge_date: None,
            recharge_type: None,
            volume: None,
            notes: None,
            crea_date: None,
            modif_date: None,
        }
    }

    #[test]
    fn test_pa_never_recharged_is_overdue() {
        let mat = material(MaterialType::Pa, 1825, 365, Some(90));
        let eq = equipment(date(2024, 1, 1));
        let status = recharge_status(&eq, &mat, date(2024, 4, 15));

        let RechargeStatus::Applicable { track, has_never_been_recharged } = status else {
            panic!("expected applicable recharge track");
        };
        assert!(has_never_been_recharged);
        assert_eq!(track.due_date, date(2024, 3, 31));
        assert!(track.is_expired);
        assert_eq!(track.days_overdue, 15);
        assert_eq!(track.days_remaining, 0);
    }

    #[test]
    fn test_pp_control_due_soon() {
        let mat = material(MaterialType::Pp, 1825, 365, None);
        let mut eq = equipment(date(2023, 1, 1));
        eq.last_verification_date = Some(date(2023, 12, 20));

        let status = control_status(&eq, &mat, date(2024, 12, 1));
        assert!(!status.has_never_been_controlled);
        assert_eq!(status.track.due_date, date(2024, 12, 19));
        assert!(!status.track.is_expired);
        assert_eq!(status.track.days_remaining, 18);
        assert!(status.track.is_due_soon);
    }

    #[test]
    fn test_alarm_expired_validity_dominates_expired_control() {
        // Both validity and control overdue: severity stays critical
        let mat = material(MaterialType::Alarm, 3650, 180, None);
        let eq = equipment(date(2010, 1, 1));
        let today = date(2024, 6, 1);

        let status = evaluate(&eq, &mat, today);
        assert!(status.validity.is_expired);
        assert!(status.control.track.is_expired);
        assert_eq!(status.severity, Severity::Critical);
    }

    #[test]
    fn test_recharge_not_applicable_for_non_pa() {
        let mut eq = equipment(date(2024, 1, 1));
        eq.last_recharge_date = Some(date(2024, 2, 1));
        for t in [MaterialType::Pp, MaterialType::Alarm, MaterialType::Co2] {
            let mat = material(t, 1825, 365, Some(90));
            assert_eq!(recharge_status(&eq, &mat, date(2024, 6, 1)), RechargeStatus::NotApplicable);
        }
    }

    #[test]
    fn test_recharge_not_applicable_without_reload_interval() {
        let mat = material(MaterialType::Pa, 1825, 365, None);
        let mut eq = equipment(date(2024, 1, 1));
        eq.last_recharge_date = Some(date(2024, 2, 1));
        assert_eq!(recharge_status(&eq, &mat, date(2024, 6, 1)), RechargeStatus::NotApplicable);
    }

    #[test]
    fn test_due_date_boundary_is_not_expired() {
        let mat = material(MaterialType::Pp, 365, 180, None);
        let eq = equipment(date(2024, 1, 1));
        let due = date(2024, 1, 1) + Duration::days(365);

        let on_due = validity_status(&eq, &mat, due);
        assert!(!on_due.is_expired);
        assert_eq!(on_due.days_remaining, 0);
        assert_eq!(on_due.days_overdue, 0);

        let day_after = validity_status(&eq, &mat, due + Duration::days(1));
        assert!(day_after.is_expired);
        assert_eq!(day_after.days_overdue, 1);
        assert_eq!(day_after.days_remaining, 0);
    }

    #[test]
    fn test_expiry_flips_once_and_never_back() {
        let mat = material(MaterialType::Pa, 100, 50, Some(30));
        let eq = equipment(date(2024, 1, 1));

        let mut was_expired = false;
        for offset in 0..200 {
            let today = date(2024, 1, 1) + Duration::days(offset);
            let status = validity_status(&eq, &mat, today);
            if was_expired {
                assert!(status.is_expired, "expired track flipped back at day {}", offset);
            }
            was_expired = status.is_expired;
            assert!(status.days_remaining >= 0);
            assert!(status.days_overdue >= 0);
        }
        assert!(was_expired);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mat = material(MaterialType::Pa, 1825, 365, Some(90));
        let mut eq = equipment(date(2022, 3, 15));
        eq.last_verification_date = Some(date(2023, 11, 2));
        let today = date(2024, 7, 1);

        assert_eq!(evaluate(&eq, &mat, today), evaluate(&eq, &mat, today));
    }

    #[test]
    fn test_due_soon_window() {
        let mat = material(MaterialType::Pp, 365, 180, None);
        let eq = equipment(date(2024, 1, 1));
        let due = date(2024, 1, 1) + Duration::days(365);

        let inside = validity_status(&eq, &mat, due - Duration::days(30));
        assert!(inside.is_due_soon);
        let outside = validity_status(&eq, &mat, due - Duration::days(31));
        assert!(!outside.is_due_soon);
        let expired = validity_status(&eq, &mat, due + Duration::days(1));
        assert!(!expired.is_due_soon);
    }

    #[test]
    fn test_control_overdue_outranks_validity_due_soon() {
        // Validity expiring in 19 days while the control is already overdue:
        // important wins over moderate as long as validity is not expired.
        let mat = material(MaterialType::Pp, 365, 344, None);
        let eq = equipment(date(2024, 1, 1));
        let today = date(2024, 12, 12);

        let status = evaluate(&eq, &mat, today);
        assert!(status.validity.is_due_soon);
        assert!(status.control.track.is_expired);
        assert_eq!(status.severity, Severity::Important);
    }

    #[test]
    fn test_severity_tiers() {
        let today = date(2024, 6, 1);

        // Normal: everything far away
        let mat = material(MaterialType::Pp, 3650, 365, None);
        let eq = equipment(date(2024, 5, 1));
        assert_eq!(evaluate(&eq, &mat, today).severity, Severity::Normal);

        // Attention: control due soon
        let mut eq = equipment(date(2023, 6, 20));
        eq.last_verification_date = Some(date(2023, 6, 20));
        let mat = material(MaterialType::Pp, 3650, 365, None);
        assert_eq!(evaluate(&eq, &mat, today).severity, Severity::Attention);

        // Moderate: validity due soon dominates control due soon
        let mat = material(MaterialType::Pp, 380, 500, None);
        let eq = equipment(date(2023, 5, 25));
        let status = evaluate(&eq, &mat, today);
        assert!(status.validity.is_due_soon);
        assert_eq!(status.severity, Severity::Moderate);

        // Important: recharge overdue on a PA
        let mat = material(MaterialType::Pa, 3650, 365, Some(90));
        let eq = equipment(date(2024, 1, 1));
        assert_eq!(evaluate(&eq, &mat, today).severity, Severity::Important);
    }

    #[test]
    fn test_extreme_interval_saturates_instead_of_overflowing() {
        // Interval bounds are open-ended at write time, so the evaluator must
        // stay total even for absurd templates.
        let mat = material(MaterialType::Pa, i32::MAX, i32::MAX, Some(i32::MAX));
        let eq = equipment(date(2024, 1, 1));
        let today = date(2024, 6, 1);

        let status = evaluate(&eq, &mat, today);
        assert_eq!(status.validity.due_date, NaiveDate::MAX);
        assert!(!status.validity.is_expired);
        assert!(!status.validity.is_due_soon);
        assert_eq!(status.validity.days_overdue, 0);
        assert_eq!(status.severity, Severity::Normal);
    }

    #[test]
    fn test_control_counts_from_commissioning_when_never_inspected() {
        let mat = material(MaterialType::Alarm, 3650, 365, None);
        let eq = equipment(date(2024, 1, 1));
        let status = control_status(&eq, &mat, date(2024, 2, 1));
        assert!(status.has_never_been_controlled);
        assert_eq!(status.track.due_date, date(2024, 12, 31));
    }
}
