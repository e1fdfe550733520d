use crate::common::Created;
use crate::di::{HasContainer, Inject};
use crate::error::{AppError, Result};
use crate::pipe::{CreateUserPipe, ParseIdPipe, Pipe};
use crate::users::domain::User;
use crate::users::service::UserService;
use axum::{
    Json, Router,
    body::Bytes,
    extract::Path,
    routing::{MethodRouter, get},
};

/// Routes for the user collection, relative to the mount point
///
/// | method | path     | handler    |
/// |--------|----------|------------|
/// | GET    | `/`      | [`list`]   |
/// | POST   | `/`      | [`create`] |
/// | GET    | `/{id}`  | [`get_one`]|
pub fn router<S>() -> Router<S>
where
    S: HasContainer + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", collection_routes())
        .route("/{id}", get(get_one))
}

/// List and create, for mounting the collection at extra paths.
pub fn collection_routes<S>() -> MethodRouter<S>
where
    S: HasContainer + Clone + Send + Sync + 'static,
{
    get(list).post(create)
}

pub async fn list(Inject(service): Inject<UserService>) -> Json<Vec<User>> {
    Json(service.list().await)
}

/// Non-numeric ids can never name a record, so they share the not-found answer.
pub async fn get_one(
    Inject(service): Inject<UserService>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>> {
    let id = ParseIdPipe.transform(raw_id).await.map_err(|e| {
        tracing::debug!(error = %e, "rejected user id");
        AppError::NotFound
    })?;
    Ok(Json(service.get(id).await?))
}

pub async fn create(Inject(service): Inject<UserService>, body: Bytes) -> Result<Created<User>> {
    let new_user = CreateUserPipe.transform(body).await.map_err(|e| {
        tracing::debug!(error = %e, "rejected create payload");
        AppError::BadRequest
    })?;
    Ok(Created(service.create(new_user).await?))
}
