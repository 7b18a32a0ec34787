//! Page handlers
//!
//! The roster and dashboard pages, plus their JSON counterparts.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};

use crate::app::{RosterView, Standings};
use crate::error::AppError;
use crate::views::{render_dashboard, render_roster};
use crate::AppState;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/roster")
}

/// GET /roster
///
/// Students grouped by team, with add and delete controls.
pub async fn get_roster(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = state.roster_service.roster().await?;
    Ok(Html(render_roster(&view)))
}

/// GET /dashboard
///
/// Team standings with per-member breakdown.
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let standings = state.roster_service.standings().await?;
    Ok(Html(render_dashboard(&standings)))
}

/// GET /api/roster
pub async fn get_roster_json(State(state): State<AppState>) -> Result<Json<RosterView>, AppError> {
    Ok(Json(state.roster_service.roster().await?))
}

/// GET /api/standings
pub async fn get_standings_json(
    State(state): State<AppState>,
) -> Result<Json<Standings>, AppError> {
    Ok(Json(state.roster_service.standings().await?))
}
