//! # roof_core - Roofing Estimate Engine
//!
//! `roof_core` prices roofing projects and derives roof area from a building
//! footprint. All inputs and outputs are JSON-serializable so a form, CLI or
//! other front end can drive it directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Not-applicable, not errors**: Incomplete input yields `None`
//!   (or a structured [`CalcError`] explaining why), never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use roof_core::{estimate, estimate_area, AreaInput, Category, Complexity, EstimateRequest, JobType, Pitch};
//!
//! let area = estimate_area(&AreaInput {
//!     footprint_sqft: 1600.0,
//!     overhang_in: 0.0,
//!     pitch: Pitch::Flat,
//! });
//! assert_eq!(area, 1800);
//!
//! let breakdown = estimate(&EstimateRequest {
//!     category: Category::Residential,
//!     area_sqft: area as f64,
//!     material: "asphalt".to_string(),
//!     job_type: JobType::New,
//!     complexity: Complexity::Simple,
//!     tearoff: false,
//!     permits: true,
//! })
//! .unwrap();
//! assert!(breakdown.total_low <= breakdown.total_high);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Material price table by category
//! - [`calculations`] - Cost estimate and roof area helper
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, estimate, estimate_area, AreaInput, CalculationItem, CalculationOutput, Complexity,
    CostBreakdown, EstimateRequest, JobType, Pitch,
};
pub use catalog::{Catalog, Category, MaterialListing, PriceRange};
pub use errors::{CalcError, CalcResult};
