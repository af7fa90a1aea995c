//! JSON handlers for the `resources` collection.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use resmap_app::ports::ResourceStore;
use resmap_domain::resource::{NewResource, Resource};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a resource.
///
/// Every field is optional at the deserialization layer; the presence check
/// happens in the domain so that absent and falsy values are rejected
/// through the same path.
#[derive(Deserialize)]
pub struct CreateResourceRequest {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Resource>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Resource>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/resources`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ResourceStore + Send + Sync + 'static,
{
    let resources = state.resource_service.list_resources().await?;
    Ok(ListResponse::Ok(Json(resources)))
}

/// `POST /api/resources`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: ResourceStore + Send + Sync + 'static,
{
    let mut builder = NewResource::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(latitude) = req.latitude {
        builder = builder.latitude(latitude);
    }
    if let Some(longitude) = req.longitude {
        builder = builder.longitude(longitude);
    }
    if let Some(kind) = req.kind {
        builder = builder.kind(kind);
    }

    let draft = builder.build()?;
    let created = state.resource_service.create_resource(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}
