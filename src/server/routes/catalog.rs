//! The five CRUD endpoints, generic over the catalog resource.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tracing::{debug, info};

use crate::db::{
    CatalogEntity, CatalogRepository, CatalogRow, NameCreate, NamePatch, begin_write,
};
use crate::error::CatalogError;
use crate::server::extract::{EntityId, Payload};
use crate::server::router::AppState;
use crate::utils::logging::with_pretty_json_debug;

/// `/{route}` for single-row operations, `/{route}s` for the listing.
pub fn router<E: CatalogEntity>() -> Router<AppState> {
    let item = format!("/{}", E::ROUTE);
    let collection = format!("/{}s", E::ROUTE);

    Router::new()
        .route(
            &item,
            post(create::<E>)
                .get(get_by_id::<E>)
                .put(update::<E>)
                .delete(delete::<E>),
        )
        .route(&collection, get(list::<E>))
}

async fn create<E: CatalogEntity>(
    State(state): State<AppState>,
    Payload(body): Payload<NameCreate>,
) -> Result<Json<CatalogRow>, CatalogError> {
    with_pretty_json_debug(&body, |pretty_body| {
        debug!(resource = E::LABEL, body = %pretty_body, "create request");
    });

    let mut tx = begin_write(&state.pool).await?;
    let row = CatalogRepository::<E>::create(&mut tx, body).await?;
    tx.commit().await?;

    info!(resource = E::LABEL, id = row.id, name = %row.name, "created");
    Ok(Json(row))
}

async fn list<E: CatalogEntity>(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogRow>>, CatalogError> {
    let mut conn = state.pool.acquire().await?;
    let rows = CatalogRepository::<E>::list(&mut conn).await?;
    Ok(Json(rows))
}

async fn get_by_id<E: CatalogEntity>(
    State(state): State<AppState>,
    id: EntityId<E>,
) -> Result<Json<CatalogRow>, CatalogError> {
    let mut conn = state.pool.acquire().await?;
    let row = CatalogRepository::<E>::get_by_id(&mut conn, id.id).await?;
    Ok(Json(row))
}

async fn update<E: CatalogEntity>(
    State(state): State<AppState>,
    id: EntityId<E>,
    Payload(patch): Payload<NamePatch>,
) -> Result<Json<CatalogRow>, CatalogError> {
    with_pretty_json_debug(&patch, |pretty_body| {
        debug!(resource = E::LABEL, id = id.id, body = %pretty_body, "update request");
    });

    let mut tx = begin_write(&state.pool).await?;
    let row = CatalogRepository::<E>::update(&mut tx, id.id, patch).await?;
    tx.commit().await?;

    info!(resource = E::LABEL, id = row.id, name = %row.name, "updated");
    Ok(Json(row))
}

async fn delete<E: CatalogEntity>(
    State(state): State<AppState>,
    id: EntityId<E>,
) -> Result<StatusCode, CatalogError> {
    let mut tx = begin_write(&state.pool).await?;
    CatalogRepository::<E>::delete(&mut tx, id.id).await?;
    tx.commit().await?;

    info!(resource = E::LABEL, id = id.id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
