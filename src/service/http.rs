//! HTTP transport — maps the country endpoints onto axum routes.
//!
//! ## Routes
//!
//! - `GET /api/countries` — listing (`sort`, `visited`, `limit` flags). HTML
//!   by default, JSON when the client sends `Accept: application/json`.
//! - `POST /api/countries/addCountry` (and the older `POST /api/addCountry`)
//! - `GET /api/countries/:code`
//! - `PUT /api/countries/edit/:code`
//! - `PUT /api/countries/editById/:id`
//! - `DELETE /api/countries/delete/:code`
//! - `GET /health` — `{ "ok": true, "countries": <count> }`

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::error::ApiError;
use super::view::render_listing;
use super::{CountryService, DELETED_MESSAGE, UPDATED_MESSAGE};
use crate::country::CountryInput;
use crate::persistence::Persistence;
use crate::store::CountryKey;

pub const LISTING_PATH: &str = "/api/countries";

/// Build an axum `Router` serving the country endpoints.
pub fn router<P: Persistence + 'static>(service: Arc<CountryService<P>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<P>))
        .route(LISTING_PATH, get(list_handler::<P>))
        .route("/api/countries/addCountry", post(add_handler::<P>))
        .route("/api/addCountry", post(add_handler::<P>))
        .route("/api/countries/:code", get(get_handler::<P>))
        .route("/api/countries/edit/:code", put(edit_by_code_handler::<P>))
        .route("/api/countries/editById/:id", put(edit_by_id_handler::<P>))
        .route("/api/countries/delete/:code", delete(delete_handler::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the country endpoints at the given address (e.g. `"0.0.0.0:3000"`)
/// until `shutdown` resolves.
pub async fn serve<P, F>(
    service: Arc<CountryService<P>>,
    addr: &str,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    P: Persistence + 'static,
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "country service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    sort: Option<String>,
    visited: Option<String>,
    limit: Option<String>,
}

/// `GET /health`
async fn health_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let count = service.store().len()?;
    Ok(Json(json!({ "ok": true, "countries": count })))
}

/// `GET /api/countries`
async fn list_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let options = service.list_options(
        params.sort.as_deref(),
        params.visited.as_deref(),
        params.limit.as_deref(),
    );
    let countries = service.list(&options)?;

    if wants_json(&headers) {
        Ok(Json(countries).into_response())
    } else {
        Ok(Html(render_listing(&countries, &options)).into_response())
    }
}

/// `POST /api/countries/addCountry`
async fn add_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
    Json(input): Json<CountryInput>,
) -> Result<Response, ApiError> {
    let country = service.add(input)?;
    if service.config().redirect_after_add {
        Ok(Redirect::to(LISTING_PATH).into_response())
    } else {
        Ok(Json(country).into_response())
    }
}

/// `GET /api/countries/:code`
async fn get_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    Ok(Json(service.get(&code)?).into_response())
}

/// `PUT /api/countries/edit/:code`
async fn edit_by_code_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
    Path(code): Path<String>,
    Json(input): Json<CountryInput>,
) -> Result<Response, ApiError> {
    let country = service.edit(CountryKey::Code(&code), input)?;
    Ok(Json(json!({ "message": UPDATED_MESSAGE, "country": country })).into_response())
}

/// `PUT /api/countries/editById/:id`
async fn edit_by_id_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
    Path(id): Path<String>,
    Json(input): Json<CountryInput>,
) -> Result<Response, ApiError> {
    let country = service.edit_by_raw_id(&id, input)?;
    Ok(Json(json!({ "message": UPDATED_MESSAGE, "country": country })).into_response())
}

/// `DELETE /api/countries/delete/:code`
async fn delete_handler<P: Persistence + 'static>(
    State(service): State<Arc<CountryService<P>>>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    service.delete(&code)?;
    Ok(Json(json!({ "message": DELETED_MESSAGE })).into_response())
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}
