//! Action calendar endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{compliance::calendar::ClientActions, error::AppResult};

use super::AuthenticatedUser;

/// Month/year selector; defaults to the current month
#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarQuery {
    /// Month (1-12)
    pub month: Option<u32>,
    /// Year
    pub year: Option<i32>,
}

/// Clients requiring action during the selected month
#[utoipa::path(
    get,
    path = "/calendar",
    tag = "calendar",
    security(("bearer_auth" = [])),
    params(CalendarQuery),
    responses(
        (status = 200, description = "Clients with pending actions, overdue first", body = Vec<ClientActions>),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn get_calendar(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<Vec<ClientActions>>> {
    let today = Utc::now().date_naive();
    let month = query.month.unwrap_or_else(|| today.month());
    let year = query.year.unwrap_or_else(|| today.year());

    let actions = state.services.calendar.get_actions(month, year, today).await?;
    Ok(Json(actions))
}
