//! TOML catalog files.
//!
//! ```toml
//! [meta]
//! region = "US-West"
//! year = 2025
//!
//! [[residential]]
//! code = "asphalt"
//! name = "Asphalt Shingles"
//! low = 5.5
//! high = 11.0
//!
//! [[commercial]]
//! code = "tpo"
//! name = "TPO Membrane"
//! low = 4.0
//! high = 8.0
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Catalog, CatalogInfo, MaterialPrice};
use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalog {
    #[serde(default)]
    meta: CatalogInfo,
    #[serde(default)]
    residential: Vec<TomlMaterial>,
    #[serde(default)]
    commercial: Vec<TomlMaterial>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMaterial {
    code: String,
    name: String,
    low: f64,
    high: f64,
}

impl From<TomlMaterial> for MaterialPrice {
    fn from(raw: TomlMaterial) -> Self {
        MaterialPrice::new(raw.code, raw.name, raw.low, raw.high)
    }
}

pub(super) fn load_file(path: &Path) -> CalcResult<Catalog> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CalcError::catalog_load(path.display().to_string(), e.to_string()))?;
    parse_toml(&path.display().to_string(), &content)
}

pub(super) fn parse_toml(source_name: &str, content: &str) -> CalcResult<Catalog> {
    let raw: TomlCatalog = toml::from_str(content)
        .map_err(|e| CalcError::catalog_load(source_name, e.to_string()))?;

    let catalog = Catalog::new(
        raw.meta,
        raw.residential.into_iter().map(MaterialPrice::from).collect(),
        raw.commercial.into_iter().map(MaterialPrice::from).collect(),
    )?;

    debug!(
        source = source_name,
        region = %catalog.info.region,
        year = catalog.info.year,
        materials = catalog.len(),
        "loaded pricing catalog"
    );
    Ok(catalog)
}
