//! # Unit Types
//!
//! Length and density unit systems, with conversion to the canonical units
//! used inside the calculation engine.
//!
//! ## Canonical Units
//!
//! - Length: millimeters (every geometry formula works in mm)
//! - Density: kg/m³ for storage, g/cm³ inside the engine (kg/m³ ÷ 1000)
//!
//! ## Example
//!
//! ```rust
//! use weight_core::units::{DensityUnit, LengthUnit, length_to_millimeters};
//!
//! assert_eq!(length_to_millimeters(2.0, LengthUnit::Meter), 2000.0);
//! assert_eq!(length_to_millimeters(1.0, LengthUnit::Inch), 25.4);
//!
//! let g_cm3 = DensityUnit::GramPerCm3.display_value(7850.0);
//! assert!((g_cm3 - 7.85).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Length Units
// ============================================================================

/// Unit a length dimension is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "in")]
    Inch,
}

impl LengthUnit {
    /// All length units for iteration
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Millimeter,
        LengthUnit::Meter,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    /// Millimeters per one of this unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Meter => 1000.0,
            LengthUnit::Foot => 304.8,
            LengthUnit::Inch => 25.4,
        }
    }

    /// Unit symbol as shown next to an input field
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }

    /// Parse a unit symbol, falling back to millimeters for anything unknown.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeter),
            "m" | "meter" | "meters" => Ok(LengthUnit::Meter),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert a length to millimeters.
pub fn length_to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    value * unit.mm_per_unit()
}

/// Convert a length with an optional unit; a missing unit means millimeters.
pub fn length_to_millimeters_or_default(value: f64, unit: Option<LengthUnit>) -> f64 {
    length_to_millimeters(value, unit.unwrap_or_default())
}

// ============================================================================
// Density Units
// ============================================================================

/// kg/m³ in one lb/ft³
const KG_M3_PER_LB_FT3: f64 = 16.018463;

/// kg/m³ in one lb/yd³
const KG_M3_PER_LB_YD3: f64 = 0.593276;

/// Unit a density is displayed or entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DensityUnit {
    #[default]
    #[serde(rename = "kg/m3")]
    KgPerM3,
    #[serde(rename = "lb/ft3")]
    LbPerFt3,
    #[serde(rename = "lb/yd3")]
    LbPerYd3,
    #[serde(rename = "g/cm3")]
    GramPerCm3,
    #[serde(rename = "g/m3")]
    GramPerM3,
}

impl DensityUnit {
    /// All density units for iteration
    pub const ALL: [DensityUnit; 5] = [
        DensityUnit::KgPerM3,
        DensityUnit::LbPerFt3,
        DensityUnit::LbPerYd3,
        DensityUnit::GramPerCm3,
        DensityUnit::GramPerM3,
    ];

    /// Convert a canonical kg/m³ density into this unit.
    pub fn display_value(self, kg_m3: f64) -> f64 {
        match self {
            DensityUnit::KgPerM3 => kg_m3,
            DensityUnit::LbPerFt3 => kg_m3 / KG_M3_PER_LB_FT3,
            DensityUnit::LbPerYd3 => kg_m3 / KG_M3_PER_LB_YD3,
            DensityUnit::GramPerCm3 => kg_m3 / 1000.0,
            DensityUnit::GramPerM3 => kg_m3 * 1000.0,
        }
    }

    /// Convert a density in this unit back to canonical kg/m³.
    pub fn canonical_value(self, value: f64) -> f64 {
        match self {
            DensityUnit::KgPerM3 => value,
            DensityUnit::LbPerFt3 => value * KG_M3_PER_LB_FT3,
            DensityUnit::LbPerYd3 => value * KG_M3_PER_LB_YD3,
            DensityUnit::GramPerCm3 => value * 1000.0,
            DensityUnit::GramPerM3 => value / 1000.0,
        }
    }

    /// Fractional digits used when displaying a density in this unit
    pub fn display_decimals(self) -> usize {
        match self {
            DensityUnit::GramPerCm3 => 3,
            DensityUnit::LbPerFt3 | DensityUnit::LbPerYd3 => 2,
            DensityUnit::KgPerM3 | DensityUnit::GramPerM3 => 0,
        }
    }

    /// Unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerM3 => "kg/m³",
            DensityUnit::LbPerFt3 => "lb/ft³",
            DensityUnit::LbPerYd3 => "lb/yd³",
            DensityUnit::GramPerCm3 => "g/cm³",
            DensityUnit::GramPerM3 => "g/m³",
        }
    }
}

impl FromStr for DensityUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let key = s.trim().to_lowercase().replace('³', "3");
        match key.as_str() {
            "kg/m3" | "kgm3" => Ok(DensityUnit::KgPerM3),
            "lb/ft3" | "lbft3" | "pcf" => Ok(DensityUnit::LbPerFt3),
            "lb/yd3" | "lbyd3" => Ok(DensityUnit::LbPerYd3),
            "g/cm3" | "gcm3" => Ok(DensityUnit::GramPerCm3),
            "g/m3" | "gm3" => Ok(DensityUnit::GramPerM3),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert a canonical kg/m³ density to a display value in `unit`.
pub fn density_from_canonical_kg_m3(kg_m3: f64, unit: DensityUnit) -> f64 {
    unit.display_value(kg_m3)
}

/// Convert a density entered in `unit` to canonical kg/m³.
pub fn density_to_canonical_kg_m3(value: f64, unit: DensityUnit) -> f64 {
    unit.canonical_value(value)
}

/// Format a canonical kg/m³ density for display in `unit`.
///
/// ```rust
/// use weight_core::units::{format_density, DensityUnit};
///
/// assert_eq!(format_density(7850.0, DensityUnit::GramPerCm3), "7.850");
/// assert_eq!(format_density(7850.0, DensityUnit::KgPerM3), "7850");
/// assert_eq!(format_density(7850.0, DensityUnit::LbPerFt3), "490.06");
/// ```
pub fn format_density(kg_m3: f64, unit: DensityUnit) -> String {
    format!("{:.*}", unit.display_decimals(), unit.display_value(kg_m3))
}

// ============================================================================
// Newtype Wrappers
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

/// Density in kilograms per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

/// Density in grams per cubic centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramPerCm3(pub f64);

impl From<KgPerM3> for GramPerCm3 {
    fn from(d: KgPerM3) -> Self {
        GramPerCm3(d.0 / 1000.0)
    }
}

impl From<GramPerCm3> for KgPerM3 {
    fn from(d: GramPerCm3) -> Self {
        KgPerM3(d.0 * 1000.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(KgPerM3);
impl_arithmetic!(GramPerCm3);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_scale_table() {
        assert_eq!(LengthUnit::Millimeter.mm_per_unit(), 1.0);
        assert_eq!(LengthUnit::Meter.mm_per_unit(), 1000.0);
        assert_eq!(LengthUnit::Foot.mm_per_unit(), 304.8);
        assert_eq!(LengthUnit::Inch.mm_per_unit(), 25.4);
    }

    #[test]
    fn test_length_round_trip() {
        for unit in LengthUnit::ALL {
            for v in [0.0, 0.001, 1.0, 12.5, 7321.9] {
                let mm = length_to_millimeters(v, unit);
                assert_relative_eq!(mm / unit.mm_per_unit(), v, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_missing_unit_is_millimeters() {
        assert_eq!(length_to_millimeters_or_default(42.0, None), 42.0);
        assert_eq!(LengthUnit::parse_lenient("furlong"), LengthUnit::Millimeter);
        assert_eq!(LengthUnit::parse_lenient("ft"), LengthUnit::Foot);
    }

    #[test]
    fn test_density_round_trip() {
        for unit in DensityUnit::ALL {
            for v in [0.5, 7.85, 490.0, 7850.0] {
                let canonical = density_to_canonical_kg_m3(v, unit);
                assert_relative_eq!(density_from_canonical_kg_m3(canonical, unit), v, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_density_conversions() {
        assert_relative_eq!(DensityUnit::LbPerFt3.display_value(7850.0), 490.0595, epsilon = 1e-3);
        assert_relative_eq!(DensityUnit::LbPerYd3.display_value(7850.0), 13231.6156, epsilon = 1e-3);
        assert_eq!(DensityUnit::GramPerM3.display_value(7850.0), 7_850_000.0);
        assert_eq!(DensityUnit::KgPerM3.display_value(7850.0), 7850.0);
    }

    #[test]
    fn test_display_precision_table() {
        assert_eq!(DensityUnit::GramPerCm3.display_decimals(), 3);
        assert_eq!(DensityUnit::LbPerFt3.display_decimals(), 2);
        assert_eq!(DensityUnit::LbPerYd3.display_decimals(), 2);
        assert_eq!(DensityUnit::KgPerM3.display_decimals(), 0);
        assert_eq!(DensityUnit::GramPerM3.display_decimals(), 0);
        assert_eq!(format_density(2700.0, DensityUnit::GramPerM3), "2700000");
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg/m³".parse::<DensityUnit>().unwrap(), DensityUnit::KgPerM3);
        assert_eq!("G/CM3".parse::<DensityUnit>().unwrap(), DensityUnit::GramPerCm3);
        assert!("stone".parse::<DensityUnit>().is_err());
        assert_eq!("Inches".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LengthUnit::Foot).unwrap();
        assert_eq!(json, "\"ft\"");
        let json = serde_json::to_string(&DensityUnit::GramPerCm3).unwrap();
        assert_eq!(json, "\"g/cm3\"");

        let mm = Millimeters(12.5);
        assert_eq!(serde_json::to_string(&mm).unwrap(), "12.5");
    }

    #[test]
    fn test_newtype_conversions() {
        let m: Meters = Millimeters(2500.0).into();
        assert_eq!(m.0, 2.5);
        let d: GramPerCm3 = KgPerM3(7850.0).into();
        assert_relative_eq!(d.value(), 7.85, epsilon = 1e-12);
        assert_eq!((Millimeters(10.0) + Millimeters(5.0)).0, 15.0);
        assert_eq!((Meters(3.0) * 2.0).0, 6.0);
    }
}
