//! # weight_core - Structural Metal Weight Engine
//!
//! `weight_core` computes the weight and cost of structural metal stock:
//! bars, tubes, rolled and cold-formed profiles, sheet products and
//! volumetric parts. Inputs arrive as raw text the way a user types them
//! (any mix of Arabic-Indic digits, decimal commas and unit choices) and
//! leave as a formatted result record.
//!
//! ## Design Philosophy
//!
//! - **Never fails on numbers**: malformed text is zero, zero in gives zero out
//! - **Typed keys**: dimension keys, modes and profile families are enums
//! - **JSON-First**: inputs and results implement Serialize
//! - **One dispatch**: every profile family maps to exactly one geometry function
//!
//! ## Quick Start
//!
//! ```rust
//! use weight_core::dimensions::{DimKey, DimensionSet};
//! use weight_core::formula::FormulaId;
//! use weight_core::calculations::compute;
//!
//! let formula = Some(FormulaId::RoundBar);
//! let dims = DimensionSet::new()
//!     .with(DimKey::Tw, "50")   // diameter, mm
//!     .with(DimKey::H, "2");    // length, m by default
//!
//! let result = compute(formula, &dims.canonicalize(formula), 7.85, 3, Some(1.2));
//! assert_eq!(result.piece_weight, "30.825");
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] - Locale-tolerant numeric text normalization
//! - [`units`] - Length and density units and conversions
//! - [`formula`] - The closed set of profile families
//! - [`dimensions`] - Raw dimension input and canonical millimeter records
//! - [`fields`] - Required fields per profile and mode
//! - [`equations`] - Shared area and volume formulas
//! - [`calculations`] - The weight and cost engine
//! - [`controller`] - Debounced recompute driver
//! - [`materials`] - Density catalog
//! - [`settings`] - Runtime configuration
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod controller;
pub mod dimensions;
pub mod equations;
pub mod errors;
pub mod fields;
pub mod formula;
pub mod materials;
pub mod normalize;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, compute_breakdown, CalculationResult, WeightBreakdown};
pub use controller::{CalculationController, ControllerState};
pub use dimensions::{CalcMode, DimKey, DimensionSet, Dimensions};
pub use errors::{CalcError, CalcResult};
pub use formula::FormulaId;
pub use settings::CalculatorSettings;
pub use units::{DensityUnit, LengthUnit};
