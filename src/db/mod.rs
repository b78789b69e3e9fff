//! Database module: models, schema and the generic catalog repository.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `entity.rs`: per-resource descriptors (table, route, messages)
//! - `patch.rs`: create/patch payloads and the partial-update merge
//! - `repository.rs`: select/insert/update/delete for any descriptor
//! - `pool.rs`: connection pool setup

pub mod entity;
pub mod models;
pub mod patch;
pub mod pool;
pub mod repository;
pub mod schema;

pub use entity::{
    CatalogEntity, FoodGroup, FoodMoment, MacronutrientGroup, MicronutrientGroup,
    SpecialCondition,
};
pub use models::CatalogRow;
pub use patch::{NameCreate, NamePatch, merge};
pub use pool::{begin_write, connect};
pub use repository::CatalogRepository;
pub use schema::SQLITE_INIT;
