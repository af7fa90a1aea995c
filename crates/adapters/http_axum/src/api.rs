//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod resources;

use axum::Router;
use axum::routing::get;

use resmap_app::ports::ResourceStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ResourceStore + Send + Sync + 'static,
{
    Router::new().route(
        "/resources",
        get(resources::list::<S>).post(resources::create::<S>),
    )
}
