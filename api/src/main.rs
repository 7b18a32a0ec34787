//! Reading Teams API Server
//!
//! Tracks reading-team progress: students belong to teams, points accrue from
//! completed sections, and pages show the roster, the team standings and each
//! student's section history.
//! Uses hexagonal (ports & adapters) architecture; the roster itself lives in
//! a Google spreadsheet.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{load_team_directory, SheetsClient, SheetsSectionStore, SheetsStudentStore};
use app::{ProgressService, RosterService};
use config::{Config, WriteRateLimit};
use domain::ports::{SectionStore, StudentStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster_service: Arc<RosterService<dyn StudentStore>>,
    pub progress_service: Arc<ProgressService<dyn StudentStore, dyn SectionStore>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router; `write_limit` throttles the mutating routes per peer IP
pub fn router(state: AppState, write_limit: Option<WriteRateLimit>) -> anyhow::Result<Router> {
    let mut write_routes = Router::new()
        .route("/add_student", post(handlers::add_student))
        .route("/delete_student", post(handlers::delete_student));

    if let Some(limit) = write_limit {
        // PeerIpKeyExtractor needs the server started with connect info
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_millisecond(limit.replenish_interval_ms())
                .burst_size(limit.burst)
                .finish()
                .ok_or_else(|| anyhow!("invalid write rate limit {:?}", limit))?,
        );
        write_routes = write_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(health))
        // Pages
        .route("/roster", get(handlers::get_roster))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/progress", get(handlers::get_progress))
        .route("/progress/student/:name", get(handlers::get_student_progress))
        .route(
            "/progress/student/:name/section/:index",
            get(handlers::get_section_detail),
        )
        // JSON projections
        .route("/api/roster", get(handlers::get_roster_json))
        .route("/api/standings", get(handlers::get_standings_json))
        .route("/api/progress/:name", get(handlers::get_student_progress_json))
        .merge(write_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reading_teams_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reading Teams API...");

    // Load configuration
    let config = Config::from_env()?;

    // Create adapters
    let sheets = Arc::new(SheetsClient::new(
        config.sheets_api_url.clone(),
        config.spreadsheet_id.clone(),
        config.credentials.clone(),
    ));

    let teams = match config.team_colors.clone() {
        Some(teams) => teams,
        None => {
            tracing::info!("Loading team colors from sheet '{}'", config.teams_sheet);
            load_team_directory(&sheets, &config.teams_sheet)
                .await
                .with_context(|| format!("loading teams from '{}'", config.teams_sheet))?
        }
    };
    if teams.is_empty() {
        tracing::warn!("No teams configured; every add will be rejected");
    } else {
        tracing::info!("{} teams configured", teams.len());
    }

    let store: Arc<dyn StudentStore> = Arc::new(SheetsStudentStore::new(
        sheets.clone(),
        config.roster_sheet.clone(),
    ));

    let sections: Arc<dyn SectionStore> = Arc::new(SheetsSectionStore::new(
        sheets.clone(),
        config.sections_sheet.clone(),
    ));

    // Create application services
    let teams = Arc::new(teams);
    let roster_service = Arc::new(RosterService::new(store.clone(), teams.clone()));
    let progress_service = Arc::new(ProgressService::new(store, sections, teams));

    // Create app state
    let state = AppState {
        roster_service,
        progress_service,
    };

    let app = router(state, config.write_rate_limit)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
