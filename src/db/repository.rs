//! Generic data access for catalog tables.
//!
//! Every operation runs on a caller-provided connection so the HTTP layer can
//! scope a transaction to a single request.

use std::marker::PhantomData;

use sqlx::SqliteConnection;
use tracing::debug;

use crate::db::entity::CatalogEntity;
use crate::db::models::CatalogRow;
use crate::db::patch::{NameCreate, NamePatch, merge};
use crate::error::CatalogError;

pub struct CatalogRepository<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogEntity> CatalogRepository<E> {
    pub async fn create(
        conn: &mut SqliteConnection,
        create: NameCreate,
    ) -> Result<CatalogRow, CatalogError> {
        create.validate()?;

        let sql = format!(
            "INSERT INTO {table} (name) VALUES (?) RETURNING id, name",
            table = E::TABLE
        );
        let row = sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(create.name)
            .fetch_one(&mut *conn)
            .await
            .map_err(constraint_to_conflict::<E>)?;

        debug!(table = E::TABLE, id = row.id, "db row created");
        Ok(row)
    }

    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<CatalogRow>, CatalogError> {
        let sql = format!("SELECT id, name FROM {table} ORDER BY id", table = E::TABLE);
        let rows = sqlx::query_as::<_, CatalogRow>(&sql)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows)
    }

    pub async fn get_by_id(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<CatalogRow, CatalogError> {
        let sql = format!(
            "SELECT id, name FROM {table} WHERE id = ?",
            table = E::TABLE
        );
        sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| CatalogError::NotFound(E::NOT_FOUND.to_string()))
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        patch: NamePatch,
    ) -> Result<CatalogRow, CatalogError> {
        patch.validate()?;

        let stored = Self::get_by_id(conn, id).await?;
        if patch.is_empty() {
            debug!(table = E::TABLE, id, "db patch empty, nothing to write");
            return Ok(stored);
        }

        let merged = merge(&stored, patch);
        let sql = format!(
            "UPDATE {table} SET name = ? WHERE id = ? RETURNING id, name",
            table = E::TABLE
        );
        let row = sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(merged.name)
            .bind(merged.id)
            .fetch_one(&mut *conn)
            .await
            .map_err(constraint_to_conflict::<E>)?;

        debug!(table = E::TABLE, id, "db patch applied");
        Ok(row)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), CatalogError> {
        let stored = Self::get_by_id(conn, id).await?;

        let sql = format!("DELETE FROM {table} WHERE id = ?", table = E::TABLE);
        let res = sqlx::query(&sql)
            .bind(stored.id)
            .execute(&mut *conn)
            .await
            .map_err(constraint_to_conflict::<E>)?;

        debug!(
            table = E::TABLE,
            id,
            affected = res.rows_affected(),
            "db row deleted"
        );
        Ok(())
    }
}

/// Unique violations mean a duplicate name; foreign-key violations mean the row
/// is still referenced. Anything else is an internal failure.
fn constraint_to_conflict<E: CatalogEntity>(err: sqlx::Error) -> CatalogError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return CatalogError::Conflict(E::DUPLICATE_NAME.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return CatalogError::Conflict(E::IN_USE.to_string());
        }
    }
    CatalogError::DatabaseError(err)
}
