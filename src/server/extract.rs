use std::collections::HashMap;
use std::marker::PhantomData;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::db::CatalogEntity;
use crate::error::CatalogError;

/// JSON body whose parse failures are reported as validation errors.
pub struct Payload<T>(pub T);

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "rejected request body");
        CatalogError::Validation {
            message: "invalid request body".to_string(),
            details: Some(json!({ "reason": rejection.body_text() })),
        }
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CatalogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Payload(value))
    }
}

/// Row id taken from the query string.
///
/// Accepts `?id=` as well as the resource-specific key (`?food_group_id=`).
pub struct EntityId<E> {
    pub id: i64,
    _entity: PhantomData<fn() -> E>,
}

impl<E> EntityId<E> {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            _entity: PhantomData,
        }
    }
}

impl<S, E> FromRequestParts<S> for EntityId<E>
where
    S: Send + Sync,
    E: CatalogEntity,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| CatalogError::validation(format!("invalid query string: {e}")))?;

        let raw = params
            .get("id")
            .or_else(|| params.get(E::ID_PARAM))
            .ok_or_else(|| CatalogError::validation("missing query parameter `id`"))?;

        let id = raw.trim().parse::<i64>().map_err(|_| {
            CatalogError::validation(format!("query parameter `id` must be an integer, got `{raw}`"))
        })?;

        Ok(EntityId::new(id))
    }
}
