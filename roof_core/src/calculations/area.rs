//! # Roof Area from Footprint
//!
//! Rough roof area for when the user knows the building footprint but not
//! the roof itself.
//!
//! ## Method
//!
//! - Treat the footprint as a square: perimeter ≈ 4·√footprint
//! - Eave overhang adds perimeter × overhang (overhang given in inches)
//! - Multiply by the pitch factor, then by a 12.5% waste allowance
//! - Round to the nearest square foot
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::area::{estimate_area, AreaInput, Pitch};
//!
//! let input = AreaInput {
//!     footprint_sqft: 1000.0,
//!     overhang_in: 12.0,
//!     pitch: Pitch::Medium,
//! };
//!
//! // (1000 + 126.49 × 1) × 1.3 × 1.125 = 1647.49
//! assert_eq!(estimate_area(&input), 1647);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Inches, SqFt};

/// Cut and overlap allowance applied to every area estimate
pub const WASTE_FACTOR: f64 = 1.125;

/// Roof steepness bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pitch {
    /// Flat / low-slope membrane roofs
    Flat,
    /// Up to about 4:12
    Low,
    /// About 5:12 to 8:12
    #[default]
    Medium,
    /// 9:12 and steeper
    Steep,
}

impl Pitch {
    pub const ALL: [Pitch; 4] = [Pitch::Flat, Pitch::Low, Pitch::Medium, Pitch::Steep];

    /// Sloped-to-plan area ratio
    pub fn multiplier(&self) -> f64 {
        match self {
            Pitch::Flat => 1.0,
            Pitch::Low => 1.1,
            Pitch::Medium => 1.3,
            Pitch::Steep => 1.5,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "none" | "0" => Ok(Pitch::Flat),
            "low" | "shallow" => Ok(Pitch::Low),
            "medium" | "med" | "moderate" | "normal" => Ok(Pitch::Medium),
            "steep" | "high" => Ok(Pitch::Steep),
            _ => Err(CalcError::invalid_input(
                "pitch",
                s,
                "Expected 'flat', 'low', 'medium' or 'steep'",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pitch::Flat => "Flat",
            Pitch::Low => "Low (≤4:12)",
            Pitch::Medium => "Medium (5–8:12)",
            Pitch::Steep => "Steep (≥9:12)",
        }
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input for the roof area helper.
///
/// ## JSON Example
///
/// ```json
/// { "footprint_sqft": 1800.0, "overhang_in": 18.0, "pitch": "steep" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaInput {
    /// Building footprint in square feet
    pub footprint_sqft: f64,

    /// Eave overhang in inches
    #[serde(default)]
    pub overhang_in: f64,

    #[serde(default)]
    pub pitch: Pitch,
}

/// Estimated roof area in whole square feet. Returns 0 when the footprint is
/// not a positive number. Negative overhang counts as none. Results beyond
/// `u32::MAX` are clamped to it; callers bound the footprint well below that.
pub fn estimate_area(input: &AreaInput) -> u32 {
    if !input.footprint_sqft.is_finite() || input.footprint_sqft <= 0.0 {
        return 0;
    }

    let footprint = SqFt(input.footprint_sqft);
    let perimeter = footprint.square_perimeter();
    let overhang: Feet = Inches(input.overhang_in.max(0.0)).into();

    let plan_area = footprint + perimeter * overhang;
    let roof_area = plan_area * input.pitch.multiplier() * WASTE_FACTOR;

    debug!(
        footprint_sqft = input.footprint_sqft,
        perimeter_ft = perimeter.0,
        pitch = ?input.pitch,
        roof_area_sqft = roof_area.0,
        "estimated roof area"
    );

    roof_area.0.round().min(u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(footprint_sqft: f64, overhang_in: f64, pitch: Pitch) -> AreaInput {
        AreaInput {
            footprint_sqft,
            overhang_in,
            pitch,
        }
    }

    #[test]
    fn test_reference_house() {
        // perimeter = 4√1000 = 126.49 ft, overhang 1 ft
        // (1000 + 126.49) × 1.3 × 1.125 = 1647.49
        let area = estimate_area(&input(1000.0, 12.0, Pitch::Medium));
        assert_eq!(area, 1647);
    }

    #[test]
    fn test_flat_no_overhang_is_waste_only() {
        // 1600 × 1.0 × 1.125 = 1800
        assert_eq!(estimate_area(&input(1600.0, 0.0, Pitch::Flat)), 1800);
    }

    #[test]
    fn test_pitch_multipliers() {
        // 1600 × 1.125 = 1800 before pitch
        assert_eq!(estimate_area(&input(1600.0, 0.0, Pitch::Low)), 1980);
        assert_eq!(estimate_area(&input(1600.0, 0.0, Pitch::Medium)), 2340);
        assert_eq!(estimate_area(&input(1600.0, 0.0, Pitch::Steep)), 2700);
    }

    #[test]
    fn test_overhang_in_inches() {
        // perimeter = 4 × 40 = 160 ft, overhang 18" = 1.5 ft -> +240 sq ft
        // (1600 + 240) × 1.0 × 1.125 = 2070
        assert_eq!(estimate_area(&input(1600.0, 18.0, Pitch::Flat)), 2070);
    }

    #[test]
    fn test_zero_footprint() {
        assert_eq!(estimate_area(&input(0.0, 12.0, Pitch::Steep)), 0);
        assert_eq!(estimate_area(&input(-50.0, 12.0, Pitch::Steep)), 0);
        assert_eq!(estimate_area(&input(f64::NAN, 12.0, Pitch::Steep)), 0);
    }

    #[test]
    fn test_huge_footprint_clamps() {
        assert_eq!(estimate_area(&input(1e12, 12.0, Pitch::Steep)), u32::MAX);
    }

    #[test]
    fn test_negative_overhang_ignored() {
        assert_eq!(
            estimate_area(&input(1600.0, -24.0, Pitch::Flat)),
            estimate_area(&input(1600.0, 0.0, Pitch::Flat))
        );
    }

    #[test]
    fn test_steeper_is_larger() {
        let areas: Vec<u32> = Pitch::ALL
            .iter()
            .map(|&p| estimate_area(&input(1200.0, 12.0, p)))
            .collect();
        assert!(areas.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_pitch_parsing() {
        assert_eq!(Pitch::from_str_flexible("Steep").unwrap(), Pitch::Steep);
        assert_eq!(Pitch::from_str_flexible("moderate").unwrap(), Pitch::Medium);
        assert!(Pitch::from_str_flexible("vertical").is_err());
    }

    #[test]
    fn test_input_json_defaults() {
        let parsed: AreaInput = serde_json::from_str(r#"{ "footprint_sqft": 1000.0 }"#).unwrap();
        assert_eq!(parsed, input(1000.0, 0.0, Pitch::Medium));
    }
}
