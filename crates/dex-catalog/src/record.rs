//! On-the-wire catalog records and their validation.
//!
//! The reference dataset uses `Name`, `Types`, `MaxCP` and `img`; lower-case
//! spellings are accepted too. Unknown fields are ignored so richer datasets
//! load unchanged.

use dex_core::Entity;
use serde::Deserialize;

use crate::{CatalogError, Result};

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name", alias = "name", default)]
    name: Option<String>,
    #[serde(rename = "Types", alias = "types", alias = "tags", default)]
    tags: Option<Vec<String>>,
    #[serde(
        rename = "MaxCP",
        alias = "maxCP",
        alias = "max_cp",
        alias = "strength",
        default
    )]
    strength: Option<f64>,
    #[serde(rename = "img", alias = "image", default)]
    image: Option<String>,
}

impl RawRecord {
    fn into_entity(self, index: usize) -> Result<Entity> {
        let name = self.name.ok_or(CatalogError::MissingName { index })?;
        let strength = match self.strength {
            Some(value) if !value.is_finite() || value < 0.0 => {
                return Err(CatalogError::InvalidStrength { index, value });
            }
            // abs() folds -0.0 into 0.0
            other => other.map(f64::abs),
        };
        Ok(Entity {
            name,
            tags: self.tags.unwrap_or_default(),
            strength,
            image: self.image.unwrap_or_default(),
        })
    }
}

/// Parse and validate a JSON array of catalog records.
///
/// Record order is preserved. The first invalid record aborts the whole
/// load: the pipeline only ever sees well-formed entities.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Entity>> {
    let raw: Vec<RawRecord> = serde_json::from_slice(bytes)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.into_entity(index))
        .collect()
}
