//! # Weight Calculations
//!
//! The calculation engine: canonical millimeter dimensions, a density and a
//! profile family in; unit weight, piece weight, total weight and price out.
//!
//! Every family follows the same pattern:
//!
//! - derive `piece_weight_kg` (one bar, plate, ring, ...) and
//!   `unit_weight_kg_per_m` (mass per linear meter) from the dimensions
//! - `total_weight_kg = piece_weight_kg × quantity`
//! - `total_price = total_weight_kg × price_per_kg` (0 when no price is set)
//!
//! The engine never fails. Unknown formulas weigh nothing, zero spacings
//! give zero members, negative dimensions count as zero, and any negative
//! or non-finite output is coerced to zero.
//!
//! ## Families
//!
//! - [`bars`] - Solid bar stock and plate
//! - [`tubes`] - Hollow sections with a uniform wall
//! - [`profiles`] - Angles, channels, beams and developed-width sections
//! - [`volumes`] - Spheres, frustums and flange rings
//! - [`sheets`] - Grating, wire mesh and expanded metal
//!
//! ## Example
//!
//! ```rust
//! use weight_core::calculations::{calculate, WeightInput};
//! use weight_core::dimensions::Dimensions;
//! use weight_core::formula::FormulaId;
//!
//! let input = WeightInput {
//!     formula: Some(FormulaId::Plate),
//!     dimensions: Dimensions { h: 1000.0, tw: 500.0, t: 10.0, ..Default::default() },
//!     density_g_cm3: 7.85,
//!     quantity: 2,
//!     price_per_kg: Some(1.5),
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.piece_weight, "39.250");
//! assert_eq!(result.total_weight, "78.500");
//! assert_eq!(result.total_price, "117.75");
//! ```

pub mod bars;
pub mod profiles;
pub mod sheets;
pub mod tubes;
pub mod volumes;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::dimensions::Dimensions;
use crate::equations::section::{STEEL_DENSITY_G_CM3, STEEL_KG_PER_M_PER_MM2};
use crate::formula::FormulaId;
use crate::units::{Meters, Millimeters};

/// Fractional digits for weights in a [`CalculationResult`]
pub const WEIGHT_DECIMALS: usize = 3;

/// Fractional digits for the price in a [`CalculationResult`]
pub const PRICE_DECIMALS: usize = 2;

/// Density used when none is set (mild steel, g/cm³)
pub const DEFAULT_DENSITY_G_CM3: f64 = STEEL_DENSITY_G_CM3;

/// Weight of a single piece, as produced by each family's geometry function.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PieceWeight {
    /// Mass per linear meter (kg/m)
    pub unit_weight_kg_per_m: f64,
    /// Mass of one piece (kg)
    pub piece_weight_kg: f64,
}

impl PieceWeight {
    /// Linear stock: per-meter weight times the piece length
    pub fn from_unit_weight(unit_weight_kg_per_m: f64, length_mm: f64) -> Self {
        PieceWeight {
            unit_weight_kg_per_m,
            piece_weight_kg: unit_weight_kg_per_m * length_mm / 1000.0,
        }
    }

    /// Discrete pieces with no per-meter meaning report the piece weight twice
    pub fn volumetric(piece_weight_kg: f64) -> Self {
        PieceWeight {
            unit_weight_kg_per_m: piece_weight_kg,
            piece_weight_kg,
        }
    }
}

/// Per-meter weight of a cross-section.
///
/// `area_mm2 × 0.00785 × ρ/7.85` kg/m, i.e. the steel constant scaled to the
/// actual density.
pub fn linear_weight(area_mm2: f64, density_g_cm3: f64) -> f64 {
    area_mm2 * STEEL_KG_PER_M_PER_MM2 * density_g_cm3 / STEEL_DENSITY_G_CM3
}

/// Millimeters to meters
pub(crate) fn meters(mm: f64) -> f64 {
    Meters::from(Millimeters(mm)).value()
}

/// Density in g/cm³ to use, falling back to mild steel when unset or invalid.
pub fn effective_density(density_g_cm3: f64) -> f64 {
    if density_g_cm3.is_finite() && density_g_cm3 > 0.0 {
        density_g_cm3
    } else {
        DEFAULT_DENSITY_G_CM3
    }
}

/// Geometry dispatch: one function per profile family.
///
/// `None` is the explicit fallback for unrecognized formulas and weighs zero.
pub fn piece_weight(formula: Option<FormulaId>, dims: &Dimensions, density_g_cm3: f64) -> PieceWeight {
    let Some(formula) = formula else {
        trace!("no geometry for unrecognized formula, weight is zero");
        return PieceWeight::default();
    };

    let rho = density_g_cm3;
    let weight = match formula {
        FormulaId::Strip | FormulaId::FlatBar => bars::flat(dims, rho),
        FormulaId::Plate => bars::plate(dims, rho),
        FormulaId::RoundBar => bars::round_bar(dims),
        FormulaId::Rebar => bars::rebar(dims, rho),
        FormulaId::SquareBar => bars::square_bar(dims, rho),
        FormulaId::HexBar => bars::hex_bar(dims, rho),
        FormulaId::RoundTube => tubes::round_tube(dims, rho),
        FormulaId::SquareTube => tubes::square_tube(dims, rho),
        FormulaId::RectTube => tubes::rect_tube(dims, rho),
        FormulaId::HexTube => tubes::hex_tube(dims, rho),
        FormulaId::EqualAngle => profiles::equal_angle(dims, rho),
        FormulaId::UnequalAngle => profiles::unequal_angle(dims, rho),
        FormulaId::UChannel => profiles::u_channel(dims, rho),
        FormulaId::IBeam => profiles::i_beam(dims, rho),
        FormulaId::TSection => profiles::t_section(dims, rho),
        FormulaId::ZChannel => profiles::z_channel(dims, rho),
        FormulaId::HatChannel => profiles::hat_channel(dims, rho),
        FormulaId::LippedCChannel => profiles::lipped_c_channel(dims, rho),
        FormulaId::SolidSphere => volumes::solid_sphere(dims, rho),
        FormulaId::ConeFrustum => volumes::cone_frustum(dims, rho),
        FormulaId::FlangeRing => volumes::flange_ring(dims, rho),
        FormulaId::SteelGrating => sheets::steel_grating(dims, rho),
        FormulaId::WireMesh => sheets::wire_mesh(dims, rho),
        FormulaId::ExpandedMetal => sheets::expanded_metal(dims, rho),
    };

    trace!(
        formula = formula.as_str(),
        unit_weight_kg_per_m = weight.unit_weight_kg_per_m,
        piece_weight_kg = weight.piece_weight_kg,
        "geometry evaluated"
    );
    weight
}

/// Complete input for one weight calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "formula": "round_tube",
///   "dimensions": { "h": 6000.0, "tf": 0.0, "tw": 60.3, "t": 3.2, "r": 0.0, "s": 0.0, "u": 0.0 },
///   "density_g_cm3": 7.85,
///   "quantity": 4,
///   "price_per_kg": 1.2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightInput {
    /// Profile family (`None` for an unrecognized id)
    pub formula: Option<FormulaId>,
    /// Canonical dimensions
    pub dimensions: Dimensions,
    /// Density in g/cm³ (non-positive means unset)
    pub density_g_cm3: f64,
    /// Number of pieces
    pub quantity: u32,
    /// Price per kilogram, if set
    pub price_per_kg: Option<f64>,
}

/// Unformatted calculation outputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightBreakdown {
    /// Mass per linear meter (kg/m)
    pub unit_weight_kg_per_m: f64,
    /// Mass of one piece (kg)
    pub piece_weight_kg: f64,
    /// Mass of all pieces (kg)
    pub total_weight_kg: f64,
    /// Total price (0 when no price is set)
    pub total_price: f64,
}

impl WeightBreakdown {
    /// Format for presentation: weights to 3 decimals, price to 2.
    pub fn to_result(&self) -> CalculationResult {
        CalculationResult {
            unit_weight_per_meter: format!("{:.*}", WEIGHT_DECIMALS, self.unit_weight_kg_per_m),
            piece_weight: format!("{:.*}", WEIGHT_DECIMALS, self.piece_weight_kg),
            total_weight: format!("{:.*}", WEIGHT_DECIMALS, self.total_weight_kg),
            total_price: format!("{:.*}", PRICE_DECIMALS, self.total_price),
        }
    }
}

/// Formatted result record surfaced to the presentation layer.
///
/// Always fully populated; "no result" is represented by `None` upstream.
///
/// ## JSON Example
///
/// ```json
/// {
///   "unit_weight_per_meter": "15.413",
///   "piece_weight": "30.825",
///   "total_weight": "92.475",
///   "total_price": "110.97"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub unit_weight_per_meter: String,
    pub piece_weight: String,
    pub total_weight: String,
    pub total_price: String,
}

/// Coerce a non-finite or negative value (and negative zero) to zero.
fn non_negative_or_zero(name: &str, value: f64) -> f64 {
    if !value.is_finite() {
        warn!(value = %value, "non-finite {} coerced to zero", name);
        0.0
    } else if value < 0.0 {
        warn!(value, "negative {} coerced to zero", name);
        0.0
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Compute the unformatted weight breakdown.
pub fn compute_breakdown(
    formula: Option<FormulaId>,
    dims: &Dimensions,
    density_g_cm3: f64,
    quantity: u32,
    price_per_kg: Option<f64>,
) -> WeightBreakdown {
    let density = effective_density(density_g_cm3);
    let weight = piece_weight(formula, &dims.non_negative(), density);

    let unit_weight_kg_per_m = non_negative_or_zero("unit weight", weight.unit_weight_kg_per_m);
    let piece_weight_kg = non_negative_or_zero("piece weight", weight.piece_weight_kg);
    let total_weight_kg = non_negative_or_zero("total weight", piece_weight_kg * f64::from(quantity));
    let price = price_per_kg.filter(|p| p.is_finite()).unwrap_or(0.0);
    let total_price = non_negative_or_zero("total price", total_weight_kg * price);

    WeightBreakdown {
        unit_weight_kg_per_m,
        piece_weight_kg,
        total_weight_kg,
        total_price,
    }
}

/// Compute the formatted result.
///
/// Preconditions (positive quantity, complete fields) are the caller's job;
/// this function is numerically safe for any input.
pub fn compute(
    formula: Option<FormulaId>,
    dims: &Dimensions,
    density_g_cm3: f64,
    quantity: u32,
    price_per_kg: Option<f64>,
) -> CalculationResult {
    compute_breakdown(formula, dims, density_g_cm3, quantity, price_per_kg).to_result()
}

/// Calculate from a [`WeightInput`].
pub fn calculate(input: &WeightInput) -> CalculationResult {
    compute(
        input.formula,
        &input.dimensions,
        input.density_g_cm3,
        input.quantity,
        input.price_per_kg,
    )
}
