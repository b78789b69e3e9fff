//! Create/patch payloads for catalog rows.

use serde::{Deserialize, Serialize};

use crate::db::models::CatalogRow;
use crate::error::CatalogError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamePatch {
    /// `None` => do not change; `Some(v)` => update. JSON `null` counts as `None`.
    #[serde(default)]
    pub name: Option<String>,
}

impl NameCreate {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_name(&self.name)
    }
}

impl NamePatch {
    pub fn validate(&self) -> Result<(), CatalogError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::validation("El nombre no puede estar vacío"));
    }
    Ok(())
}

/// Applies a sparse patch to a stored row and returns the resulting row.
///
/// The stored row is left untouched; `id` is always carried over.
pub fn merge(stored: &CatalogRow, patch: NamePatch) -> CatalogRow {
    let NamePatch { name } = patch;
    CatalogRow {
        id: stored.id,
        name: name.unwrap_or_else(|| stored.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CatalogRow {
        CatalogRow {
            id: 7,
            name: "Frutas".to_string(),
        }
    }

    #[test]
    fn merge_without_name_keeps_stored_name() {
        let stored = row();
        let merged = merge(&stored, NamePatch::default());
        assert_eq!(merged, stored);
    }

    #[test]
    fn merge_with_name_replaces_only_name() {
        let stored = row();
        let merged = merge(
            &stored,
            NamePatch {
                name: Some("Frutas y Verduras".to_string()),
            },
        );
        assert_eq!(merged.id, 7);
        assert_eq!(merged.name, "Frutas y Verduras");
        assert_eq!(stored.name, "Frutas");
    }

    #[test]
    fn null_name_deserializes_as_absent() {
        let patch: NamePatch = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(patch.is_empty());

        let patch: NamePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn blank_names_are_rejected() {
        let create = NameCreate {
            name: "   ".to_string(),
        };
        match create.validate() {
            Err(CatalogError::Validation { message, .. }) => {
                assert_eq!(message, "El nombre no puede estar vacío");
            }
            other => panic!("expected Validation, got {other:?}"),
        }

        let patch = NamePatch {
            name: Some(String::new()),
        };
        assert!(patch.validate().is_err());
        assert!(NamePatch::default().validate().is_ok());
    }
}
