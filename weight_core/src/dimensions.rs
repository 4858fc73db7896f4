//! # Dimension Sets
//!
//! The per-profile store of user-entered dimensions. Raw text is normalized
//! on every write (see [`normalize`](crate::normalize)) and kept as a string
//! so partial input such as `"12."` survives between keystrokes.
//!
//! Keys are the short engineering symbols shared by every profile family:
//! `h, tf, tw, t, r, s, u`. A given family only reads the subset its field
//! list declares (see [`fields::resolve`](crate::fields::resolve)).
//!
//! ## Key Roles
//!
//! ```text
//! h   length of the piece (area in m² for expanded metal by weight)
//! tf  flange thickness; width for sheet products; weight/m² for expanded metal by weight
//! tw  web thickness; main section size (diameter, width, side); weight/m² for grating/mesh by weight
//! t   wall / plate thickness
//! r   section height, cone height, bar spacing; bolt-hole count on flange rings
//! s   fillet / bend radius, lip width, hole diameter, cross bar size
//! u   flange width, second leg, inner or small diameter, cross spacing
//! ```
//!
//! [`DimensionSet::canonicalize`] turns the stored text into [`Dimensions`],
//! the typed millimeter record consumed by the engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields;
use crate::formula::FormulaId;
use crate::normalize::{normalize, parse_normalized};
use crate::units::{length_to_millimeters, DensityUnit, GramPerCm3, KgPerM3, LengthUnit};

/// Short dimension key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimKey {
    H,
    Tf,
    Tw,
    T,
    R,
    S,
    U,
}

impl DimKey {
    /// All keys
    pub const ALL: [DimKey; 7] = [
        DimKey::H,
        DimKey::Tf,
        DimKey::Tw,
        DimKey::T,
        DimKey::R,
        DimKey::S,
        DimKey::U,
    ];

    /// Key as typed by the input layer
    pub fn as_str(&self) -> &'static str {
        match self {
            DimKey::H => "h",
            DimKey::Tf => "tf",
            DimKey::Tw => "tw",
            DimKey::T => "t",
            DimKey::R => "r",
            DimKey::S => "s",
            DimKey::U => "u",
        }
    }
}

impl FromStr for DimKey {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        DimKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| CalcError::unknown_dimension(s))
    }
}

impl fmt::Display for DimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-formula input style selector.
///
/// Only grating, wire mesh and expanded metal change their field set by mode;
/// every other family ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    /// Stated weight per square meter times area
    #[default]
    Weight,
    /// Solid plate of given thickness (expanded metal)
    Thickness,
    /// Discrete members (grating bars, mesh wires)
    Geometric,
}

impl CalcMode {
    /// Parse a mode name; anything other than `weight`/`thickness` is geometric.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "weight" => CalcMode::Weight,
            "thickness" => CalcMode::Thickness,
            _ => CalcMode::Geometric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalcMode::Weight => "weight",
            CalcMode::Thickness => "thickness",
            CalcMode::Geometric => "geometric",
        }
    }
}

/// Raw dimensional and modal input for one profile.
///
/// Recreated from scratch whenever the active profile changes, so nothing
/// carries over between profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    /// Normalized text per key. Absent keys were never entered or were cleared.
    values: BTreeMap<DimKey, String>,

    /// Unit chosen per key; keys without an entry use the profile default
    units: BTreeMap<DimKey, LengthUnit>,

    /// Input style selector
    pub calc_mode: CalcMode,

    /// I-beam fillet radius toggle
    pub include_radius: bool,

    /// Normalized density text, in `density_unit`
    density: Option<String>,

    /// Unit the density text is entered in
    pub density_unit: DensityUnit,
}

impl DimensionSet {
    /// Create an empty dimension set
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text for a key after normalizing it.
    ///
    /// Text that normalizes to an empty string clears the key.
    pub fn set(&mut self, key: DimKey, raw: &str) {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, normalized);
        }
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: DimKey, raw: &str) -> Self {
        self.set(key, raw);
        self
    }

    /// Remove a key
    pub fn clear(&mut self, key: DimKey) {
        self.values.remove(&key);
    }

    /// Normalized text for a key
    pub fn get(&self, key: DimKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Whether a key holds non-empty normalized text
    pub fn is_present(&self, key: DimKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Numeric value of a key in its entered unit (0 when missing or unparseable)
    pub fn number(&self, key: DimKey) -> f64 {
        self.get(key).map(parse_normalized).unwrap_or(0.0)
    }

    /// Select the unit for a key
    pub fn set_unit(&mut self, key: DimKey, unit: LengthUnit) {
        self.units.insert(key, unit);
    }

    /// Builder-style [`set_unit`](Self::set_unit)
    pub fn with_unit(mut self, key: DimKey, unit: LengthUnit) -> Self {
        self.set_unit(key, unit);
        self
    }

    /// Unit explicitly selected for a key, if any
    pub fn unit(&self, key: DimKey) -> Option<LengthUnit> {
        self.units.get(&key).copied()
    }

    /// Unit in effect for a key: the explicit selection, else the profile default
    pub fn unit_for_key(&self, formula: Option<FormulaId>, key: DimKey) -> LengthUnit {
        self.unit(key)
            .unwrap_or_else(|| fields::default_unit_for_key(formula, key))
    }

    /// Store raw density text (in `density_unit`)
    pub fn set_density(&mut self, raw: &str) {
        let normalized = normalize(raw);
        self.density = if normalized.is_empty() { None } else { Some(normalized) };
    }

    /// Store a canonical kg/m³ density, expressed in the current density unit
    pub fn set_density_kg_m3(&mut self, kg_m3: f64) {
        let value = self.density_unit.display_value(kg_m3);
        self.density = Some(value.to_string());
    }

    /// Normalized density text
    pub fn density(&self) -> Option<&str> {
        self.density.as_deref()
    }

    /// Density in g/cm³, or `None` when unset, unparseable or non-positive
    pub fn density_g_cm3(&self) -> Option<f64> {
        let value = parse_normalized(self.density.as_deref()?);
        let g_cm3 = GramPerCm3::from(KgPerM3(self.density_unit.canonical_value(value))).value();
        (g_cm3.is_finite() && g_cm3 > 0.0).then_some(g_cm3)
    }

    /// Convert to canonical millimeter dimensions for `formula`.
    ///
    /// Keys whose field shows a unit selector are scaled from their unit to
    /// millimeters. Keys without one (weight per area, area, hole count) pass
    /// through as entered.
    pub fn canonicalize(&self, formula: Option<FormulaId>) -> Dimensions {
        let value = |key: DimKey| {
            let raw = self.number(key);
            if fields::should_show_unit_for_key(formula, key, self.calc_mode) {
                length_to_millimeters(raw, self.unit_for_key(formula, key))
            } else {
                raw
            }
        };

        Dimensions {
            h: value(DimKey::H),
            tf: value(DimKey::Tf),
            tw: value(DimKey::Tw),
            t: value(DimKey::T),
            r: value(DimKey::R),
            s: value(DimKey::S),
            u: value(DimKey::U),
            calc_mode: self.calc_mode,
            include_radius: self.include_radius,
        }
    }
}

/// Canonical dimensions handed to the engine.
///
/// Length keys are in millimeters; non-length keys (see
/// [`fields::should_show_unit_for_key`]) hold the raw entered number.
/// Missing keys are `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub h: f64,
    pub tf: f64,
    pub tw: f64,
    pub t: f64,
    pub r: f64,
    pub s: f64,
    pub u: f64,
    #[serde(default)]
    pub calc_mode: CalcMode,
    #[serde(default)]
    pub include_radius: bool,
}

impl Dimensions {
    /// Value for a key
    pub fn get(&self, key: DimKey) -> f64 {
        match key {
            DimKey::H => self.h,
            DimKey::Tf => self.tf,
            DimKey::Tw => self.tw,
            DimKey::T => self.t,
            DimKey::R => self.r,
            DimKey::S => self.s,
            DimKey::U => self.u,
        }
    }

    /// Copy with every negative or NaN key raised to zero
    pub fn non_negative(&self) -> Self {
        DimKey::ALL
            .into_iter()
            .fold(*self, |dims, key| dims.with(key, self.get(key).max(0.0)))
    }

    /// Builder-style setter for one key
    pub fn with(mut self, key: DimKey, value: f64) -> Self {
        match key {
            DimKey::H => self.h = value,
            DimKey::Tf => self.tf = value,
            DimKey::Tw => self.tw = value,
            DimKey::T => self.t = value,
            DimKey::R => self.r = value,
            DimKey::S => self.s = value,
            DimKey::U => self.u = value,
        }
        self
    }

    /// Builder-style mode selector
    pub fn with_mode(mut self, calc_mode: CalcMode) -> Self {
        self.calc_mode = calc_mode;
        self
    }

    /// Builder-style radius toggle
    pub fn with_radius(mut self, include_radius: bool) -> Self {
        self.include_radius = include_radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_set_normalizes() {
        let mut dims = DimensionSet::new();
        dims.set(DimKey::Tw, " ٥٠ ");
        assert_eq!(dims.get(DimKey::Tw), Some("50"));
        assert_eq!(dims.number(DimKey::Tw), 50.0);
    }

    #[test]
    fn test_empty_text_clears_key() {
        let mut dims = DimensionSet::new().with(DimKey::T, "5");
        assert!(dims.is_present(DimKey::T));
        dims.set(DimKey::T, "  ");
        assert!(!dims.is_present(DimKey::T));
    }

    #[test]
    fn test_zero_counts_as_present() {
        let dims = DimensionSet::new().with(DimKey::T, "0");
        assert!(dims.is_present(DimKey::T));
        assert_eq!(dims.number(DimKey::T), 0.0);
    }

    #[test]
    fn test_partial_input_is_zero() {
        let dims = DimensionSet::new().with(DimKey::T, "-");
        assert!(dims.is_present(DimKey::T));
        assert_eq!(dims.number(DimKey::T), 0.0);
    }

    #[test]
    fn test_non_negative_raises_only_negatives() {
        let dims = Dimensions { h: -6.0, tw: 50.0, t: f64::NAN, ..Default::default() }
            .with_mode(CalcMode::Geometric)
            .non_negative();
        assert_eq!(dims.h, 0.0);
        assert_eq!(dims.tw, 50.0);
        assert_eq!(dims.t, 0.0);
        assert_eq!(dims.calc_mode, CalcMode::Geometric);
    }

    #[test]
    fn test_canonicalize_uses_default_units() {
        // Length defaults to meters, section sizes to millimeters
        let dims = DimensionSet::new()
            .with(DimKey::Tw, "50")
            .with(DimKey::H, "2");
        let canonical = dims.canonicalize(Some(FormulaId::RoundBar));
        assert_eq!(canonical.tw, 50.0);
        assert_eq!(canonical.h, 2000.0);
    }

    #[test]
    fn test_canonicalize_explicit_units() {
        let dims = DimensionSet::new()
            .with(DimKey::Tw, "2")
            .with_unit(DimKey::Tw, LengthUnit::Inch)
            .with(DimKey::H, "10")
            .with_unit(DimKey::H, LengthUnit::Foot);
        let canonical = dims.canonicalize(Some(FormulaId::RoundBar));
        assert_relative_eq!(canonical.tw, 50.8, epsilon = 1e-9);
        assert_relative_eq!(canonical.h, 3048.0, epsilon = 1e-9);
    }

    #[test]
    fn test_canonicalize_passes_through_non_length_keys() {
        let mut dims = DimensionSet::new()
            .with(DimKey::Tf, "12.5")
            .with(DimKey::H, "40");
        dims.calc_mode = CalcMode::Weight;
        let canonical = dims.canonicalize(Some(FormulaId::ExpandedMetal));
        assert_eq!(canonical.tf, 12.5);
        assert_eq!(canonical.h, 40.0);
    }

    #[test]
    fn test_density_conversion() {
        let mut dims = DimensionSet::new();
        assert_eq!(dims.density_g_cm3(), None);

        dims.set_density("7850");
        assert_relative_eq!(dims.density_g_cm3().unwrap(), 7.85, epsilon = 1e-12);

        dims.density_unit = DensityUnit::GramPerCm3;
        dims.set_density("2,7");
        assert_relative_eq!(dims.density_g_cm3().unwrap(), 2.7, epsilon = 1e-12);

        dims.set_density("abc");
        assert_eq!(dims.density_g_cm3(), None);
    }

    #[test]
    fn test_set_density_kg_m3() {
        let mut dims = DimensionSet::new();
        dims.density_unit = DensityUnit::GramPerCm3;
        dims.set_density_kg_m3(8960.0);
        assert_relative_eq!(dims.density_g_cm3().unwrap(), 8.96, epsilon = 1e-12);
    }

    #[test]
    fn test_calc_mode_parsing() {
        assert_eq!(CalcMode::parse_lenient("weight"), CalcMode::Weight);
        assert_eq!(CalcMode::parse_lenient("Thickness"), CalcMode::Thickness);
        assert_eq!(CalcMode::parse_lenient("bars"), CalcMode::Geometric);
    }

    #[test]
    fn test_dim_key_parsing() {
        assert_eq!("tf".parse::<DimKey>().unwrap(), DimKey::Tf);
        assert!("b".parse::<DimKey>().is_err());
    }
}
