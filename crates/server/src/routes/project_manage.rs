use axum::{extract::rejection::JsonRejection, extract::State, Json};
use models::project_manage::{Model, NewProject};
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Create a project. Responds `true` once it is stored.
#[utoipa::path(
    post, path = "/project-manage", tag = "project-manage",
    request_body = crate::openapi::NewProjectDoc,
    responses(
        (status = 200, description = "Stored", body = bool),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "Constraint violation"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> Result<Json<bool>, JsonApiError> {
    let Json(input) = payload?;
    info!(name = %input.name, product = input.product, "create project request");
    state.projects.create_project(input).await?;
    Ok(Json(true))
}

/// List every project.
#[utoipa::path(
    get, path = "/project-manage", tag = "project-manage",
    responses(
        (status = 200, description = "All projects", body = [crate::openapi::ProjectDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let list = state.projects.get_projects().await?;
    info!(count = list.len(), "list projects");
    Ok(Json(list))
}
