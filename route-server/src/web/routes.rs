//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::domain::{DepartureId, DepartureInput, NewDeparture};
use crate::planner::{Planner, RouteOutcome, SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/departures", post(create_departure))
        .route("/departures/search", post(search_route))
        .route(
            "/departures/:departure_id",
            get(get_departure).delete(delete_departure),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, turning any failure into a 400.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(body), "JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_id(raw: &str) -> Result<DepartureId, AppError> {
    raw.parse().map_err(|e| AppError::BadRequest {
        message: format!("{e}"),
    })
}

/// Create a new departure record.
async fn create_departure(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DepartureResponse>, AppError> {
    let input: DepartureInput = parse_body(&body)?;
    let new = NewDeparture::try_from(input).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let departure = state.store.create(new).await;
    state.edges.invalidate();

    info!(id = %departure.id(), from = %departure.from(), to = %departure.to(), "departure created");
    Ok(Json(DepartureResponse::from_departure(&departure)))
}

/// Look up a departure record.
async fn get_departure(
    State(state): State<AppState>,
    Path(departure_id): Path<String>,
) -> Result<Json<DepartureResponse>, AppError> {
    let id = parse_id(&departure_id)?;

    let departure = state.store.get(id).await.ok_or_else(|| AppError::NotFound {
        message: format!("Departure {id} not found"),
    })?;

    Ok(Json(DepartureResponse::from_departure(&departure)))
}

/// Delete a departure record.
async fn delete_departure(
    State(state): State<AppState>,
    Path(departure_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&departure_id)?;

    if !state.store.delete(id).await {
        return Err(AppError::NotFound {
            message: format!("Departure {id} not found"),
        });
    }
    state.edges.invalidate();

    info!(%id, "departure deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Find the earliest-arriving route between two stations.
async fn search_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchRouteResponse>, AppError> {
    let req: SearchRouteRequest = parse_body(&body)?;

    let start_time = req.time.resolve().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let request =
        SearchRequest::parse(req.start.as_deref(), req.destination.as_deref(), start_time)?;

    let planner = Planner::new(state.edges.as_ref(), &state.config);
    let result = planner.search(&request).await?;

    match result.outcome {
        RouteOutcome::Found(route) => Ok(Json(SearchRouteResponse::from_route(&route))),
        RouteOutcome::NotFound => Err(AppError::NotFound {
            message: format!(
                "No route from {} to {}",
                request.start, request.destination
            ),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Timeout { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(msg) => AppError::BadRequest { message: msg },
            SearchError::Timeout | SearchError::ExpansionLimit(_) => AppError::Timeout {
                message: e.to_string(),
            },
            SearchError::FetchError { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Timeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            debug!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
