//! # Pricing Catalog
//!
//! Per-square-foot price ranges for roofing materials, grouped by project
//! category. A material code only has meaning inside its category: `metal`
//! under residential and `metal` under commercial are separate entries with
//! separate prices.
//!
//! The built-in table covers a single region and price year. Alternative
//! tables can be loaded from TOML (see [`Catalog::from_toml_str`]).
//!
//! ## Example
//!
//! ```rust
//! use roof_core::catalog::{Catalog, Category};
//!
//! let catalog = Catalog::builtin();
//!
//! let asphalt = catalog.price(Category::Residential, "asphalt").unwrap();
//! assert_eq!(asphalt.low_per_sqft, 5.0);
//! assert_eq!(asphalt.high_per_sqft, 10.0);
//!
//! // TPO is a commercial membrane; residential does not offer it
//! assert!(catalog.price(Category::Residential, "tpo").is_none());
//!
//! for listing in catalog.list_materials(Category::Commercial) {
//!     println!("{} -> {}", listing.code, listing.label);
//! }
//! ```

mod builtin;
mod loader;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{CalcError, CalcResult};

pub use builtin::BUILTIN_CATALOG;

/// Project category. Selects the material set and pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Houses and small multi-family buildings
    Residential,
    /// Commercial and industrial buildings (low-slope membranes, metal)
    Commercial,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 2] = [Category::Residential, Category::Commercial];

    /// Code string used in TOML tables and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "residential" | "res" | "r" | "home" => Ok(Category::Residential),
            "commercial" | "com" | "c" | "business" => Ok(Category::Commercial),
            _ => Err(CalcError::invalid_input(
                "category",
                s,
                "Expected 'residential' or 'commercial'",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Installed price range in USD per square foot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Low end of the installed price (USD/sq ft)
    pub low_per_sqft: f64,
    /// High end of the installed price (USD/sq ft)
    pub high_per_sqft: f64,
}

impl PriceRange {
    pub fn new(low_per_sqft: f64, high_per_sqft: f64) -> Self {
        PriceRange {
            low_per_sqft,
            high_per_sqft,
        }
    }

    /// Midpoint of the range
    pub fn mid_per_sqft(&self) -> f64 {
        (self.low_per_sqft + self.high_per_sqft) / 2.0
    }

    /// Formatted range, e.g. `$5–$10/sq ft`
    pub fn label(&self) -> String {
        format!(
            "${}–${}/sq ft",
            format_price(self.low_per_sqft),
            format_price(self.high_per_sqft)
        )
    }
}

/// Whole dollars print without decimals, anything else with cents.
fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// One material offered within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPrice {
    /// Material code, unique within its category (e.g., "asphalt")
    pub code: String,
    /// Human-readable material name (e.g., "Asphalt Shingles")
    pub name: String,
    /// Installed price range
    pub range: PriceRange,
}

impl MaterialPrice {
    /// Surrounding whitespace is stripped from `code`.
    pub fn new(code: impl Into<String>, name: impl Into<String>, low: f64, high: f64) -> Self {
        let code: String = code.into();
        MaterialPrice {
            code: code.trim().to_string(),
            name: name.into(),
            range: PriceRange::new(low, high),
        }
    }

    /// Display label combining name and price range,
    /// e.g. `Asphalt Shingles ($5–$10/sq ft)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.range.label())
    }

    fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

/// Flat row handed to a caller building a material picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialListing {
    pub code: String,
    pub label: String,
    pub low_price: f64,
    pub high_price: f64,
}

impl From<&MaterialPrice> for MaterialListing {
    fn from(material: &MaterialPrice) -> Self {
        MaterialListing {
            code: material.code.clone(),
            label: material.label(),
            low_price: material.range.low_per_sqft,
            high_price: material.range.high_per_sqft,
        }
    }
}

/// Region and year the prices were collected for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    /// Pricing region (e.g., "US")
    pub region: String,
    /// Price year (e.g., 2025)
    pub year: u16,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        CatalogInfo {
            region: "US".to_string(),
            year: 2025,
        }
    }
}

/// Immutable price table: category -> material code -> price range.
///
/// Not `Deserialize`: external tables go through the validating TOML loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub info: CatalogInfo,
    residential: Vec<MaterialPrice>,
    commercial: Vec<MaterialPrice>,
}

impl Catalog {
    /// Build a catalog from per-category material lists.
    ///
    /// Rejects non-positive or non-finite prices, inverted ranges, blank codes
    /// and codes repeated within one category.
    pub fn new(
        info: CatalogInfo,
        residential: Vec<MaterialPrice>,
        commercial: Vec<MaterialPrice>,
    ) -> CalcResult<Self> {
        validate_materials(Category::Residential, &residential)?;
        validate_materials(Category::Commercial, &commercial)?;
        Ok(Catalog {
            info,
            residential,
            commercial,
        })
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        loader::parse_toml("<string>", content)
    }

    /// Load a catalog from a TOML file.
    pub fn load_from_toml(path: &std::path::Path) -> CalcResult<Self> {
        loader::load_file(path)
    }

    /// Materials offered for a category, in declaration order.
    pub fn materials(&self, category: Category) -> &[MaterialPrice] {
        match category {
            Category::Residential => &self.residential,
            Category::Commercial => &self.commercial,
        }
    }

    /// Look up a material within a category. Codes compare case-insensitively.
    pub fn material(&self, category: Category, code: &str) -> Option<&MaterialPrice> {
        let found = self.materials(category).iter().find(|m| m.matches(code));
        if found.is_none() {
            trace!(category = category.code(), material = code, "catalog miss");
        }
        found
    }

    /// Price range for a category/material pair, `None` when the material
    /// is not offered in that category.
    pub fn price(&self, category: Category, code: &str) -> Option<PriceRange> {
        self.material(category, code).map(|m| m.range)
    }

    /// Picker rows (code, label, low, high) for a category.
    pub fn list_materials(&self, category: Category) -> Vec<MaterialListing> {
        self.materials(category).iter().map(MaterialListing::from).collect()
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        self.residential.len() + self.commercial.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_materials(category: Category, materials: &[MaterialPrice]) -> CalcResult<()> {
    for (i, material) in materials.iter().enumerate() {
        let field = format!("{}[{}]", category.code(), i);

        if material.code.trim().is_empty() {
            return Err(CalcError::missing_field(format!("{}.code", field)));
        }
        if material.code.trim() != material.code {
            return Err(CalcError::invalid_input(
                format!("{}.code", field),
                &material.code,
                "Material code has leading or trailing whitespace",
            ));
        }
        if materials[..i].iter().any(|prev| prev.matches(&material.code)) {
            return Err(CalcError::invalid_input(
                format!("{}.code", field),
                &material.code,
                "Material code appears more than once in this category",
            ));
        }

        let range = material.range;
        for (name, value) in [("low", range.low_per_sqft), ("high", range.high_per_sqft)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("{}.{}", field, name),
                    value.to_string(),
                    "Price must be a positive number",
                ));
            }
        }
        if range.low_per_sqft > range.high_per_sqft {
            return Err(CalcError::invalid_input(
                format!("{}.low", field),
                range.low_per_sqft.to_string(),
                "Low price exceeds high price",
            ));
        }
    }
    Ok(())
}
