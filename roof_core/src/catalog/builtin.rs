//! Built-in price table (US national averages, 2025, installed cost per sq ft).

use once_cell::sync::Lazy;

use super::{Catalog, CatalogInfo, MaterialPrice};

/// (code, name, low, high)
type Row = (&'static str, &'static str, f64, f64);

const RESIDENTIAL: &[Row] = &[
    ("asphalt", "Asphalt Shingles", 5.0, 10.0),
    ("metal", "Metal (Standing Seam)", 9.0, 16.0),
    ("tile", "Clay / Concrete Tile", 10.0, 20.0),
    ("slate", "Natural Slate", 15.0, 30.0),
    ("wood_shake", "Wood Shakes", 8.0, 14.0),
];

const COMMERCIAL: &[Row] = &[
    ("tpo", "TPO Membrane", 4.0, 8.0),
    ("epdm", "EPDM Rubber", 4.0, 7.0),
    ("pvc", "PVC Membrane", 6.0, 10.0),
    ("modbit", "Modified Bitumen", 5.0, 9.0),
    ("bur", "Built-Up Roofing (BUR)", 5.0, 10.0),
    ("metal", "Commercial Metal", 8.0, 14.0),
];

fn rows(table: &[Row]) -> Vec<MaterialPrice> {
    table
        .iter()
        .map(|&(code, name, low, high)| MaterialPrice::new(code, name, low, high))
        .collect()
}

/// Shared read-only catalog, built on first use.
pub static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    info: CatalogInfo::default(),
    residential: rows(RESIDENTIAL),
    commercial: rows(COMMERCIAL),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let rebuilt = Catalog::new(
            CatalogInfo::default(),
            rows(RESIDENTIAL),
            rows(COMMERCIAL),
        );
        assert_eq!(rebuilt.as_ref(), Ok(&*BUILTIN_CATALOG));
    }

    #[test]
    fn test_builtin_size() {
        assert_eq!(BUILTIN_CATALOG.len(), RESIDENTIAL.len() + COMMERCIAL.len());
        assert_eq!(BUILTIN_CATALOG.info.year, 2025);
    }
}
