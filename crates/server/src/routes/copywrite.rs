use axum::{
    body::Bytes,
    extract::{Path, State},
};
use serde::de::DeserializeOwned;
use service::copywrite::{CreateCopywriteDto, UpdateCopywriteDto};
use tracing::{debug, info};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Path ids arrive as text; anything that is not an integer is a client error.
fn parse_id(raw: &str) -> Result<i64, JsonApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| JsonApiError::bad_request(format!("copywrite id must be an integer, got {raw:?}")))
}

/// Copywrite bodies are not validated: a missing, non-JSON or mismatched body
/// reads as the empty DTO.
fn lenient_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!(error = %e, "copywrite body ignored");
        T::default()
    })
}

#[utoipa::path(
    post, path = "/copywrite", tag = "copywrite",
    request_body(content = String, description = "Any payload; not validated", content_type = "application/json"),
    responses((status = 200, description = "Placeholder message", body = String))
)]
pub async fn create(State(state): State<AppState>, body: Bytes) -> String {
    let dto: CreateCopywriteDto = lenient_body(&body);
    info!(?dto, "create copywrite request");
    state.copywrite.create(dto)
}

#[utoipa::path(
    get, path = "/copywrite", tag = "copywrite",
    responses((status = 200, description = "Placeholder message", body = String))
)]
pub async fn find_all(State(state): State<AppState>) -> String {
    state.copywrite.find_all()
}

#[utoipa::path(
    get, path = "/copywrite/{id}", tag = "copywrite",
    params(("id" = i64, Path, description = "Copywrite id")),
    responses(
        (status = 200, description = "Placeholder message", body = String),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(state.copywrite.find_one(id))
}

#[utoipa::path(
    patch, path = "/copywrite/{id}", tag = "copywrite",
    params(("id" = i64, Path, description = "Copywrite id")),
    request_body(content = String, description = "Any payload; not validated", content_type = "application/json"),
    responses(
        (status = 200, description = "Placeholder message", body = String),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<String, JsonApiError> {
    let id = parse_id(&id)?;
    let dto: UpdateCopywriteDto = lenient_body(&body);
    info!(id, ?dto, "update copywrite request");
    Ok(state.copywrite.update(id, dto))
}

#[utoipa::path(
    delete, path = "/copywrite/{id}", tag = "copywrite",
    params(("id" = i64, Path, description = "Copywrite id")),
    responses(
        (status = 200, description = "Placeholder message", body = String),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(state.copywrite.remove(id))
}
