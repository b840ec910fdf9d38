use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tura_shared::models::organization::{Organization, OrganizationStatus};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Tenant management surface. Mounted behind the super-admin gate; these
/// routes are the only ones not scoped by the caller's own organization.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/organizations",
            get(list_organizations).post(create_organization),
        )
        .route("/api/admin/organizations/{id}", put(update_organization))
}

#[derive(Debug, Deserialize)]
struct CreateOrganizationRequest {
    name: Option<String>,
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateOrganizationRequest {
    status: OrganizationStatus,
}

async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Organization>>, AppError> {
    let organizations = state.organizations.list().await.map_err(AppError::internal)?;
    Ok(Json(organizations))
}

async fn create_organization(
    State(state): State<AppState>,
    Json(req): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>), AppError> {
    let name = req
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Missing required field: name".to_string()))?
        .to_string();

    let slug = req
        .slug
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| slugify(&name));

    let organization = state.organizations.create(&name, &slug).await.map_err(AppError::internal)?;
    Ok((StatusCode::CREATED, Json(organization)))
}

async fn update_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrganizationRequest>,
) -> Result<Json<Value>, AppError> {
    let updated = state.organizations.set_status(id, req.status.clone()).await.map_err(AppError::internal)?;
    if !updated {
        return Err(AppError::NotFound("Organization not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Organization updated successfully",
        "id": id,
        "status": req.status.as_str(),
    })))
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Anatolia  Travel & Tours"), "anatolia-travel-tours");
        assert_eq!(slugify("  Ege DMC "), "ege-dmc");
    }
}
