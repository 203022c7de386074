//! # Roofing Cost Estimate
//!
//! Turns a project description (category, roof area, material, job type,
//! complexity, add-ons) into a low/mid/high cost range with a
//! materials/labor/add-ons breakdown.
//!
//! ## Pricing Chain
//!
//! Order matters; the steps are not commutative with the additive add-ons.
//!
//! 1. Base = area × catalog price (low, mid, high)
//! 2. Complexity: × (1 + 0.4·m), m = 0 / 0.2 / 0.4
//! 3. Commercial: × 1.10
//! 4. Repair: × 0.6
//! 5. Add-ons: tear-off (replacement only) area × $1.50, permits $500 flat
//! 6. Breakdown: materials 60% / labor 40% of the mid total, add-ons as computed
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::cost::{estimate, Complexity, EstimateRequest, JobType};
//! use roof_core::catalog::Category;
//!
//! let request = EstimateRequest {
//!     category: Category::Residential,
//!     area_sqft: 1000.0,
//!     material: "asphalt".to_string(),
//!     job_type: JobType::Replacement,
//!     complexity: Complexity::Simple,
//!     tearoff: true,
//!     permits: false,
//! };
//!
//! let breakdown = estimate(&request).expect("asphalt is a residential material");
//! assert_eq!(breakdown.addons, 1500.0);
//! assert_eq!(breakdown.total_mid, 9000.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Category};
use crate::errors::{CalcError, CalcResult};
use crate::units::{SqFt, Usd, UsdPerSqFt};

/// Largest roof area (sq ft) callers should pass in. Not enforced here.
pub const MAX_AREA_SQFT: f64 = 50_000.0;

/// Share of the complexity multiplier that lands on the blended cost
const LABOR_SHARE: f64 = 0.4;

/// Scale premium for commercial projects
const COMMERCIAL_PREMIUM: f64 = 1.10;

/// Repairs are priced at this fraction of a full install
const REPAIR_FACTOR: f64 = 0.6;

/// Tear-off of the existing roof (USD per sq ft)
const TEAROFF_PER_SQFT: f64 = 1.5;

/// Flat permit allowance (USD)
const PERMIT_FEE: f64 = 500.0;

/// Breakdown shares of the mid total
const MATERIALS_SHARE: f64 = 0.6;
const LABOR_BREAKDOWN_SHARE: f64 = 0.4;

/// Kind of roofing work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    /// New construction, no existing roof
    #[default]
    New,
    /// Full replacement of an existing roof
    Replacement,
    /// Partial repair
    Repair,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::New, JobType::Replacement, JobType::Repair];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "new" | "new-install" | "new-installation" | "install" => Ok(JobType::New),
            "replacement" | "replace" | "reroof" | "re-roof" => Ok(JobType::Replacement),
            "repair" | "fix" => Ok(JobType::Repair),
            _ => Err(CalcError::invalid_input(
                "job_type",
                s,
                "Expected 'new', 'replacement' or 'repair'",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JobType::New => "New Installation",
            JobType::Replacement => "Replacement",
            JobType::Repair => "Repair",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structural difficulty of the roof. Affects labor only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Simple gable or hip, few penetrations
    #[default]
    Simple,
    /// Several planes, dormers or valleys
    Medium,
    /// Steep, cut-up, many penetrations
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Medium, Complexity::Complex];

    /// Labor multiplier m (0, 0.2, 0.4)
    pub fn multiplier(&self) -> f64 {
        match self {
            Complexity::Simple => 0.0,
            Complexity::Medium => 0.2,
            Complexity::Complex => 0.4,
        }
    }

    /// Factor applied to the blended base cost: 1 + 0.4·m
    pub fn labor_factor(&self) -> f64 {
        1.0 + LABOR_SHARE * self.multiplier()
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" | "easy" | "low" => Ok(Complexity::Simple),
            "medium" | "moderate" | "med" => Ok(Complexity::Medium),
            "complex" | "hard" | "high" => Ok(Complexity::Complex),
            _ => Err(CalcError::invalid_input(
                "complexity",
                s,
                "Expected 'simple', 'medium' or 'complex'",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Medium => "Medium",
            Complexity::Complex => "Complex",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input for a cost estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "category": "commercial",
///   "area_sqft": 12000.0,
///   "material": "tpo",
///   "job_type": "replacement",
///   "complexity": "medium",
///   "tearoff": true,
///   "permits": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Residential or commercial
    pub category: Category,

    /// Roof area in square feet. Callers cap this at [`MAX_AREA_SQFT`].
    pub area_sqft: f64,

    /// Material code, must be offered under `category`
    pub material: String,

    #[serde(default)]
    pub job_type: JobType,

    #[serde(default)]
    pub complexity: Complexity,

    /// Remove the existing roof (only charged on replacements)
    #[serde(default)]
    pub tearoff: bool,

    /// Include a permit allowance
    #[serde(default)]
    pub permits: bool,
}

impl EstimateRequest {
    /// Check that the request carries enough to price.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.area_sqft.is_finite() || self.area_sqft <= 0.0 {
            return Err(CalcError::insufficient_input(
                "area_sqft",
                "Roof area must be a positive number",
            ));
        }
        if self.material.trim().is_empty() {
            return Err(CalcError::insufficient_input(
                "material",
                "Select a roofing material",
            ));
        }
        Ok(())
    }

    /// Same request with the area clamped to [`MAX_AREA_SQFT`].
    pub fn capped(mut self) -> Self {
        if self.area_sqft > MAX_AREA_SQFT {
            self.area_sqft = MAX_AREA_SQFT;
        }
        self
    }
}

/// Estimate output. All amounts in USD.
///
/// `materials + labor == total_mid`; `addons` is reported alongside and is
/// already contained in the totals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "materials": 4500.0,
///   "labor": 3000.0,
///   "addons": 0.0,
///   "total_low": 5000.0,
///   "total_mid": 7500.0,
///   "total_high": 10000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Materials share of the mid total (60%)
    pub materials: f64,
    /// Labor share of the mid total (40%)
    pub labor: f64,
    /// Tear-off and permit charges
    pub addons: f64,
    pub total_low: f64,
    pub total_mid: f64,
    pub total_high: f64,
}

/// Low/mid/high base cost carried through the multiplier chain
#[derive(Debug, Clone, Copy)]
struct Tiered {
    low: Usd,
    mid: Usd,
    high: Usd,
}

impl Tiered {
    fn scale(self, factor: f64) -> Self {
        Tiered {
            low: self.low * factor,
            mid: self.mid * factor,
            high: self.high * factor,
        }
    }
}

fn addons_for(request: &EstimateRequest) -> Usd {
    let mut addons = Usd(0.0);
    if request.job_type == JobType::Replacement && request.tearoff {
        addons = addons + SqFt(request.area_sqft) * UsdPerSqFt(TEAROFF_PER_SQFT);
    }
    if request.permits {
        addons = addons + Usd(PERMIT_FEE);
    }
    addons
}

/// Price a request against the built-in catalog.
///
/// Returns `None` when the request is not yet complete enough to price:
/// non-positive area, blank material, or a material the category does not
/// offer. Use [`calculate`] to learn which.
pub fn estimate(request: &EstimateRequest) -> Option<CostBreakdown> {
    calculate(request).ok()
}

/// Price a request against the built-in catalog, reporting why it could not
/// be priced.
pub fn calculate(request: &EstimateRequest) -> CalcResult<CostBreakdown> {
    calculate_with(Catalog::builtin(), request)
}

/// Price a request against a specific catalog.
///
/// # Errors
///
/// * `CalcError::InsufficientInput` - area ≤ 0 or blank material
/// * `CalcError::MaterialNotFound` - material not offered for the category
pub fn calculate_with(catalog: &Catalog, request: &EstimateRequest) -> CalcResult<CostBreakdown> {
    request.validate()?;

    let range = catalog
        .price(request.category, &request.material)
        .ok_or_else(|| {
            CalcError::material_not_found(request.category.code(), request.material.trim())
        })?;

    let area = SqFt(request.area_sqft);
    let mut base = Tiered {
        low: area * UsdPerSqFt(range.low_per_sqft),
        mid: area * UsdPerSqFt(range.mid_per_sqft()),
        high: area * UsdPerSqFt(range.high_per_sqft),
    };

    base = base.scale(request.complexity.labor_factor());

    if request.category == Category::Commercial {
        base = base.scale(COMMERCIAL_PREMIUM);
    }

    let addons = addons_for(request);

    if request.job_type == JobType::Repair {
        base = base.scale(REPAIR_FACTOR);
    }

    let total_low = base.low + addons;
    let total_mid = base.mid + addons;
    let total_high = base.high + addons;

    debug!(
        category = request.category.code(),
        material = %request.material,
        area_sqft = request.area_sqft,
        labor_factor = request.complexity.labor_factor(),
        addons = addons.0,
        total_mid = total_mid.0,
        "priced roofing estimate"
    );

    // TODO: split materials/labor from the base cost before add-ons once the
    // display no longer relies on the parts summing to total_mid.
    Ok(CostBreakdown {
        materials: (total_mid * MATERIALS_SHARE).0,
        labor: (total_mid * LABOR_BREAKDOWN_SHARE).0,
        addons: addons.0,
        total_low: total_low.0,
        total_mid: total_mid.0,
        total_high: total_high.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn asphalt_request() -> EstimateRequest {
        EstimateRequest {
            category: Category::Residential,
            area_sqft: 1000.0,
            material: "asphalt".to_string(),
            job_type: JobType::New,
            complexity: Complexity::Simple,
            tearoff: false,
            permits: false,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOL,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_simple_residential() {
        let result = calculate(&asphalt_request()).unwrap();
        assert_close(result.total_low, 5000.0);
        assert_close(result.total_mid, 7500.0);
        assert_close(result.total_high, 10000.0);
        assert_close(result.materials, 4500.0);
        assert_close(result.labor, 3000.0);
        assert_eq!(result.addons, 0.0);
    }

    #[test]
    fn test_replacement_with_tearoff() {
        let mut request = asphalt_request();
        request.job_type = JobType::Replacement;
        request.tearoff = true;

        let result = calculate(&request).unwrap();
        assert_close(result.addons, 1500.0);
        assert_close(result.total_low, 6500.0);
        assert_close(result.total_mid, 9000.0);
        assert_close(result.total_high, 11500.0);
    }

    #[test]
    fn test_tearoff_ignored_for_new_install() {
        let mut request = asphalt_request();
        request.tearoff = true;

        let result = calculate(&request).unwrap();
        assert_eq!(result.addons, 0.0);
        assert_close(result.total_mid, 7500.0);
    }

    #[test]
    fn test_commercial_complex_with_permits() {
        let request = EstimateRequest {
            category: Category::Commercial,
            area_sqft: 1000.0,
            material: "tpo".to_string(),
            job_type: JobType::New,
            complexity: Complexity::Complex,
            tearoff: false,
            permits: true,
        };

        let result = calculate(&request).unwrap();
        // 6000 × 1.16 × 1.10 + 500
        assert_close(result.total_mid, 8156.0);
        assert_close(result.addons, 500.0);
        // 4000 × 1.16 × 1.10 + 500
        assert_close(result.total_low, 5604.0);
        // 8000 × 1.16 × 1.10 + 500
        assert_close(result.total_high, 10708.0);
    }

    #[test]
    fn test_medium_complexity_factor() {
        let mut request = asphalt_request();
        request.complexity = Complexity::Medium;

        let result = calculate(&request).unwrap();
        assert_close(Complexity::Medium.labor_factor(), 1.08);
        assert_close(result.total_mid, 7500.0 * 1.08);
    }

    #[test]
    fn test_repair_reduces_base_but_not_addons() {
        let mut request = asphalt_request();
        request.job_type = JobType::Repair;
        request.permits = true;

        let result = calculate(&request).unwrap();
        assert_close(result.addons, 500.0);
        assert_close(result.total_low, 5000.0 * 0.6 + 500.0);
        assert_close(result.total_mid, 7500.0 * 0.6 + 500.0);
        assert_close(result.total_high, 10000.0 * 0.6 + 500.0);
    }

    #[test]
    fn test_repair_never_charges_tearoff() {
        let mut request = asphalt_request();
        request.job_type = JobType::Repair;
        request.tearoff = true;

        assert_eq!(calculate(&request).unwrap().addons, 0.0);
    }

    #[test]
    fn test_breakdown_split_includes_addons() {
        let mut request = asphalt_request();
        request.permits = true;

        let result = calculate(&request).unwrap();
        assert_close(result.materials, 8000.0 * 0.6);
        assert_close(result.labor, 8000.0 * 0.4);
        assert_close(result.materials + result.labor, result.total_mid);
    }

    #[test]
    fn test_zero_area_not_applicable() {
        let mut request = asphalt_request();
        request.area_sqft = 0.0;

        assert!(estimate(&request).is_none());
        let err = calculate(&request).unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_INPUT");
        assert!(err.is_not_applicable());
    }

    #[test]
    fn test_negative_and_nan_area_not_applicable() {
        let mut request = asphalt_request();
        request.area_sqft = -10.0;
        assert!(estimate(&request).is_none());

        request.area_sqft = f64::NAN;
        assert!(estimate(&request).is_none());
    }

    #[test]
    fn test_empty_material_not_applicable() {
        let mut request = asphalt_request();
        request.material = String::new();
        assert!(estimate(&request).is_none());

        request.material = "   ".to_string();
        assert!(estimate(&request).is_none());
    }

    #[test]
    fn test_material_from_other_category() {
        let mut request = asphalt_request();
        request.material = "tpo".to_string();

        assert!(estimate(&request).is_none());
        assert_eq!(
            calculate(&request).unwrap_err(),
            CalcError::material_not_found("residential", "tpo")
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::from_toml_str(
            "[[residential]]\ncode = \"asphalt\"\nname = \"Asphalt\"\nlow = 2.0\nhigh = 4.0\n",
        )
        .unwrap();

        let result = calculate_with(&catalog, &asphalt_request()).unwrap();
        assert_close(result.total_mid, 3000.0);
    }

    #[test]
    fn test_capped_request() {
        let mut request = asphalt_request();
        request.area_sqft = 80_000.0;
        assert_eq!(request.clone().capped().area_sqft, MAX_AREA_SQFT);

        request.area_sqft = 1200.0;
        assert_eq!(request.capped().area_sqft, 1200.0);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(JobType::from_str_flexible("Re-Roof").unwrap(), JobType::Replacement);
        assert_eq!(JobType::from_str_flexible("new install").unwrap(), JobType::New);
        assert!(JobType::from_str_flexible("demolish").is_err());
        assert_eq!(Complexity::from_str_flexible("MEDIUM").unwrap(), Complexity::Medium);
        assert!(Complexity::from_str_flexible("extreme").is_err());
    }

    #[test]
    fn test_request_json_defaults() {
        let json = r#"{ "category": "residential", "area_sqft": 1000.0, "material": "asphalt" }"#;
        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, asphalt_request());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&asphalt_request()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("total_mid"));
        assert!(json.contains("materials"));

        let roundtrip: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
