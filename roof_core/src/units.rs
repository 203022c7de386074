//! # Unit Types
//!
//! Lightweight newtype wrappers for the few units the estimator deals in.
//! They serialize as bare numbers, so JSON stays clean.
//!
//! - Length: feet (ft), inches (in)
//! - Area: square feet (sq ft)
//! - Money: US dollars (USD)
//!
//! ## Example
//!
//! ```rust
//! use roof_core::units::{Feet, Inches, SqFt};
//!
//! let overhang = Inches(18.0);
//! let overhang_ft: Feet = overhang.into();
//! assert_eq!(overhang_ft.0, 1.5);
//!
//! let footprint = SqFt(1600.0);
//! assert_eq!(footprint.square_perimeter().0, 160.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl SqFt {
    /// Perimeter of a square with this area: 4·√A
    pub fn square_perimeter(self) -> Feet {
        Feet(4.0 * self.0.sqrt())
    }
}

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Amount in US dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(pub f64);

/// Unit price in US dollars per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdPerSqFt(pub f64);

impl Mul<UsdPerSqFt> for SqFt {
    type Output = Usd;
    fn mul(self, rhs: UsdPerSqFt) -> Usd {
        Usd(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }
    };
}

// Sums and scaling, for the quantities that accumulate
impl_arithmetic!(SqFt);
impl_arithmetic!(Usd);
