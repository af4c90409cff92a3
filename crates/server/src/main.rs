// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tender_bid_api::{
    ApiError, BidResponse, CreateBidRequest, CreateTenderRequest, EditTenderRequest,
    StatusResponse, TenderResponse, TenderSummaryResponse, TenderVersionResponse,
    bids_for_tender, create_bid, create_tender, edit_tender, get_tender_status,
    list_tender_versions, list_tenders, my_bids, my_tenders, rollback_tender, set_tender_status,
    submit_decision,
};
use tender_bid_domain::Pagination;
use tender_bid_persistence::{Persistence, PersistenceError};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Tender/Bid Server - HTTP server for the procurement service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "DATABASE_PATH")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long, env = "MYSQL_URL")]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "SERVER_ADDRESS", default_value = "0.0.0.0:8080")]
    address: String,
}

/// Application state shared across handlers.
///
/// A single store connection serialized behind a Mutex.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Query carrying only the caller's username.
#[derive(Debug, Clone, Default, Deserialize)]
struct UsernameQuery {
    username: Option<String>,
}

impl UsernameQuery {
    fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ListTendersQuery {
    service_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SetStatusQuery {
    status: Option<String>,
    username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DecisionQuery {
    decision: Option<String>,
    username: Option<String>,
}

/// Paging parameters are taken as raw strings; invalid values fall back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
struct PagedQuery {
    username: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl PagedQuery {
    fn pagination(&self) -> Pagination {
        Pagination::from_params(self.limit.as_deref(), self.offset.as_deref())
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid request body: {rejection}"),
        }
    }
}

/// Parses a version path segment.
fn parse_version(raw: &str) -> Result<i32, HttpError> {
    raw.parse::<i32>().map_err(|_| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid version: '{raw}'. Must be an integer"),
    })
}

/// Handler for GET `/api/ping`.
async fn handle_ping() -> &'static str {
    "ok"
}

/// Handler for GET `/api/tenders`.
async fn handle_list_tenders(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListTendersQuery>,
) -> Result<Json<Vec<TenderSummaryResponse>>, HttpError> {
    info!(service_type = ?query.service_type, "Handling list_tenders request");

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<TenderSummaryResponse> =
        list_tenders(&mut persistence, query.service_type.as_deref())?;

    Ok(Json(response))
}

/// Handler for POST `/api/tenders/new`.
async fn handle_create_tender(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateTenderRequest>, JsonRejection>,
) -> Result<Json<TenderResponse>, HttpError> {
    let Json(request) = payload?;
    info!(
        username = %request.creator_username,
        organization_id = %request.organization_id,
        "Handling create_tender request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: TenderResponse = create_tender(&mut persistence, request)?;

    Ok(Json(response))
}

/// Handler for GET `/api/tenders/my`.
async fn handle_my_tenders(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<Vec<TenderSummaryResponse>>, HttpError> {
    info!(username = query.username(), "Handling my_tenders request");

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<TenderSummaryResponse> = my_tenders(&mut persistence, query.username())?;

    Ok(Json(response))
}

/// Handler for GET `/api/tenders/{tender_id}/status`.
async fn handle_get_tender_status(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<StatusResponse>, HttpError> {
    info!(tender_id = %tender_id, "Handling get_tender_status request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StatusResponse =
        get_tender_status(&mut persistence, &tender_id, query.username())?;

    Ok(Json(response))
}

/// Handler for PUT `/api/tenders/{tender_id}/status`.
async fn handle_set_tender_status(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    Query(query): Query<SetStatusQuery>,
) -> Result<Json<StatusResponse>, HttpError> {
    info!(tender_id = %tender_id, status = ?query.status, "Handling set_tender_status request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StatusResponse = set_tender_status(
        &mut persistence,
        &tender_id,
        query.status.as_deref().unwrap_or_default(),
        query.username.as_deref().unwrap_or_default(),
    )?;

    Ok(Json(response))
}

/// Handler for PATCH `/api/tenders/{tender_id}/edit`.
async fn handle_edit_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    Query(query): Query<UsernameQuery>,
    payload: Result<Json<EditTenderRequest>, JsonRejection>,
) -> Result<Json<TenderResponse>, HttpError> {
    let Json(request) = payload?;
    info!(tender_id = %tender_id, username = query.username(), "Handling edit_tender request");

    let mut persistence = app_state.persistence.lock().await;
    let response: TenderResponse =
        edit_tender(&mut persistence, &tender_id, query.username(), request)?;

    Ok(Json(response))
}

/// Handler for PUT `/api/tenders/{tender_id}/rollback/{version}`.
async fn handle_rollback_tender(
    AxumState(app_state): AxumState<AppState>,
    Path((tender_id, version)): Path<(String, String)>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<TenderResponse>, HttpError> {
    let version: i32 = parse_version(&version)?;
    info!(tender_id = %tender_id, version, "Handling rollback_tender request");

    let mut persistence = app_state.persistence.lock().await;
    let response: TenderResponse =
        rollback_tender(&mut persistence, &tender_id, version, query.username())?;

    Ok(Json(response))
}

/// Handler for GET `/api/tenders/{tender_id}/versions`.
async fn handle_list_tender_versions(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<Vec<TenderVersionResponse>>, HttpError> {
    info!(tender_id = %tender_id, "Handling list_tender_versions request");

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<TenderVersionResponse> =
        list_tender_versions(&mut persistence, &tender_id, query.username())?;

    Ok(Json(response))
}

/// Handler for POST `/api/bids/new`.
async fn handle_create_bid(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateBidRequest>, JsonRejection>,
) -> Result<Json<BidResponse>, HttpError> {
    let Json(request) = payload?;
    info!(
        tender_id = %request.tender_id,
        author_id = %request.author_id,
        "Handling create_bid request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BidResponse = create_bid(&mut persistence, request)?;

    Ok(Json(response))
}

/// Handler for GET `/api/bids/my`.
async fn handle_my_bids(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PagedQuery>,
) -> Result<Json<Vec<BidResponse>>, HttpError> {
    let username: &str = query.username.as_deref().unwrap_or_default();
    info!(username, "Handling my_bids request");

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<BidResponse> = my_bids(&mut persistence, username, query.pagination())?;

    Ok(Json(response))
}

/// Handler for GET `/api/bids/{tender_id}/list`.
async fn handle_bids_for_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    Query(query): Query<PagedQuery>,
) -> Result<Json<Vec<BidResponse>>, HttpError> {
    info!(tender_id = %tender_id, "Handling bids_for_tender request");

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<BidResponse> = bids_for_tender(
        &mut persistence,
        &tender_id,
        query.username.as_deref().unwrap_or_default(),
        query.pagination(),
    )?;

    Ok(Json(response))
}

/// Handler for PUT `/api/bids/{bid_id}/submit_decision`.
async fn handle_submit_decision(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<String>,
    Query(query): Query<DecisionQuery>,
) -> Result<Json<BidResponse>, HttpError> {
    info!(bid_id = %bid_id, decision = ?query.decision, "Handling submit_decision request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BidResponse = submit_decision(
        &mut persistence,
        &bid_id,
        query.decision.as_deref().unwrap_or_default(),
        query.username.as_deref().unwrap_or_default(),
    )?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(handle_ping))
        .route("/api/tenders", get(handle_list_tenders))
        .route("/api/tenders/new", post(handle_create_tender))
        .route("/api/tenders/my", get(handle_my_tenders))
        .route(
            "/api/tenders/{tender_id}/status",
            get(handle_get_tender_status).put(handle_set_tender_status),
        )
        .route("/api/tenders/{tender_id}/edit", patch(handle_edit_tender))
        .route(
            "/api/tenders/{tender_id}/rollback/{version}",
            put(handle_rollback_tender),
        )
        .route(
            "/api/tenders/{tender_id}/versions",
            get(handle_list_tender_versions),
        )
        .route("/api/bids/new", post(handle_create_bid))
        .route("/api/bids/my", get(handle_my_bids))
        .route("/api/bids/{tender_id}/list", get(handle_bids_for_tender))
        .route(
            "/api/bids/{bid_id}/submit_decision",
            put(handle_submit_decision),
        )
        .with_state(app_state)
}

/// Opens the store selected by the arguments.
fn open_persistence(args: &Args) -> Result<Persistence, PersistenceError> {
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Tender/Bid Server");

    let persistence: Persistence = open_persistence(&args)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = args.address.parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
