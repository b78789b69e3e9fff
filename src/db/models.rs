use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of any catalog table. Every resource shares this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct CatalogRow {
    pub id: i64,
    pub name: String,
}
