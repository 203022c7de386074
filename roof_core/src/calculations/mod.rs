//! # Estimation Calculations
//!
//! Each calculation follows the same pattern:
//!
//! - `*Input` / `*Request` - input parameters (JSON-serializable)
//! - a result value (JSON-serializable)
//! - a pure function from one to the other
//!
//! ## Available Calculations
//!
//! - [`cost`] - Roofing cost range and breakdown
//! - [`area`] - Roof area from building footprint

pub mod area;
pub mod cost;

use serde::{Deserialize, Serialize};

pub use area::{estimate_area, AreaInput, Pitch};
pub use cost::{calculate, estimate, Complexity, CostBreakdown, EstimateRequest, JobType};

use crate::catalog::Catalog;

/// Any calculation the engine can run, for heterogeneous JSON batches.
///
/// ```json
/// [
///   { "type": "Area", "footprint_sqft": 1000.0, "overhang_in": 12.0, "pitch": "medium" },
///   { "type": "Cost", "category": "residential", "area_sqft": 1647.0, "material": "asphalt" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Cost estimate
    Cost(EstimateRequest),
    /// Roof area helper
    Area(AreaInput),
}

/// Result of running a [`CalculationItem`].
///
/// An insufficient cost request yields `Cost { breakdown: None }`, the
/// same "not applicable" outcome as [`estimate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Cost { breakdown: Option<CostBreakdown> },
    Area { area_sqft: u32 },
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Cost(_) => "Cost",
            CalculationItem::Area(_) => "Area",
        }
    }

    /// Run against the given catalog. Cost requests are capped at
    /// [`cost::MAX_AREA_SQFT`] first, as a form caller would.
    pub fn run(&self, catalog: &Catalog) -> CalculationOutput {
        match self {
            CalculationItem::Cost(request) => CalculationOutput::Cost {
                breakdown: cost::calculate_with(catalog, &request.clone().capped()).ok(),
            },
            CalculationItem::Area(input) => CalculationOutput::Area {
                area_sqft: estimate_area(input),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_deserialization() {
        let json = r#"[
            { "type": "Area", "footprint_sqft": 1000.0, "overhang_in": 12.0, "pitch": "medium" },
            { "type": "Cost", "category": "residential", "area_sqft": 1000.0, "material": "asphalt" },
            { "type": "Cost", "category": "commercial", "area_sqft": 0.0, "material": "tpo" }
        ]"#;
        let items: Vec<CalculationItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].calc_type(), "Area");
        assert_eq!(items[1].calc_type(), "Cost");

        let catalog = Catalog::builtin();
        let outputs: Vec<CalculationOutput> = items.iter().map(|i| i.run(catalog)).collect();

        assert_eq!(outputs[0], CalculationOutput::Area { area_sqft: 1647 });
        match &outputs[1] {
            CalculationOutput::Cost { breakdown: Some(b) } => {
                assert!((b.total_mid - 7500.0).abs() < 1e-6)
            }
            other => panic!("unexpected output: {other:?}"),
        }
        assert_eq!(outputs[2], CalculationOutput::Cost { breakdown: None });
    }

    #[test]
    fn test_batch_caps_area() {
        let item = CalculationItem::Cost(EstimateRequest {
            category: crate::catalog::Category::Residential,
            area_sqft: 90_000.0,
            material: "asphalt".to_string(),
            job_type: JobType::New,
            complexity: Complexity::Simple,
            tearoff: false,
            permits: false,
        });

        match item.run(Catalog::builtin()) {
            CalculationOutput::Cost { breakdown: Some(b) } => {
                assert!((b.total_low - 50_000.0 * 5.0).abs() < 1e-6)
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_output_serialization() {
        let json = serde_json::to_string(&CalculationOutput::Area { area_sqft: 1800 }).unwrap();
        assert_eq!(json, r#"{"type":"Area","area_sqft":1800}"#);
    }
}
