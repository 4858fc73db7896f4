//! # Materials Database
//!
//! Density catalog of common stock metals, grouped by family. The catalog
//! only seeds the `density` field of a
//! [`DimensionSet`](crate::dimensions::DimensionSet); the engine treats
//! density as a plain number whatever its source.
//!
//! ## Example
//!
//! ```rust
//! use weight_core::materials::{groups, lookup};
//!
//! let steel = lookup("Mild steel").unwrap();
//! assert_eq!(steel.density_kg_m3, 7850.0);
//!
//! for group in groups() {
//!     println!("{}: {} materials", group.label, group.materials.len());
//! }
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::units::{GramPerCm3, KgPerM3};

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialDensity {
    /// Display label
    pub label: &'static str,
    /// Canonical density (kg/m³)
    pub density_kg_m3: f64,
}

impl MaterialDensity {
    /// Density in g/cm³, as used by the engine
    pub fn density_g_cm3(&self) -> f64 {
        GramPerCm3::from(KgPerM3(self.density_kg_m3)).value()
    }
}

/// A named family of materials
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialGroup {
    /// Group label (e.g., "Steel")
    pub label: &'static str,
    /// Materials in display order
    pub materials: &'static [MaterialDensity],
}

const fn material(label: &'static str, density_kg_m3: f64) -> MaterialDensity {
    MaterialDensity { label, density_kg_m3 }
}

static CATALOG: &[MaterialGroup] = &[
    MaterialGroup {
        label: "Steel",
        materials: &[
            material("Mild steel", 7850.0),
            material("Carbon steel", 7850.0),
            material("Tool steel", 7715.0),
            material("Cast steel", 7800.0),
            material("Cast iron", 7200.0),
            material("Wrought iron", 7750.0),
        ],
    },
    MaterialGroup {
        label: "Stainless Steel",
        materials: &[
            material("Stainless 304", 7930.0),
            material("Stainless 316", 7980.0),
            material("Stainless 410", 7740.0),
            material("Stainless 430", 7700.0),
            material("Duplex 2205", 7800.0),
        ],
    },
    MaterialGroup {
        label: "Aluminium",
        materials: &[
            material("Aluminium 1100", 2710.0),
            material("Aluminium 5083", 2660.0),
            material("Aluminium 6061", 2700.0),
            material("Aluminium 6063", 2690.0),
            material("Aluminium 7075", 2810.0),
        ],
    },
    MaterialGroup {
        label: "Copper Alloys",
        materials: &[
            material("Copper", 8960.0),
            material("Brass", 8500.0),
            material("Bronze", 8800.0),
            material("Phosphor bronze", 8860.0),
        ],
    },
    MaterialGroup {
        label: "Other Metals",
        materials: &[
            material("Titanium", 4510.0),
            material("Nickel", 8900.0),
            material("Zinc", 7140.0),
            material("Lead", 11340.0),
            material("Magnesium", 1740.0),
        ],
    },
];

/// Case-insensitive label index, built once
static INDEX: Lazy<HashMap<String, MaterialDensity>> = Lazy::new(|| {
    CATALOG
        .iter()
        .flat_map(|group| group.materials.iter())
        .map(|m| (m.label.to_lowercase(), *m))
        .collect()
});

/// All material groups in display order
pub fn groups() -> &'static [MaterialGroup] {
    CATALOG
}

/// Find a material by label (case-insensitive)
pub fn lookup(label: &str) -> CalcResult<MaterialDensity> {
    INDEX
        .get(&label.trim().to_lowercase())
        .copied()
        .ok_or_else(|| CalcError::material_not_found(label))
}
