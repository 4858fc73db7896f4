//! # Field Configuration
//!
//! Which dimensional inputs each profile family needs, in display order.
//!
//! The field list is a pure function of the formula and its mode flags
//! (`calc_mode`, `include_radius`); entered values never change it. Three
//! families switch field sets by mode:
//!
//! | Formula | Mode | Fields |
//! |---------|------|--------|
//! | `i_beam` | `include_radius` off | fillet radius `s` dropped |
//! | `steel_grating`, `wire_mesh` | `weight` | length, width, weight/m² |
//! | `steel_grating`, `wire_mesh` | other | discrete bar/wire geometry |
//! | `expanded_metal` | `thickness` | length, width, thickness |
//! | `expanded_metal` | other | weight/m², total area |
//!
//! Unknown formulas fall back to a generic width/length/thickness set.
//!
//! ## Example
//!
//! ```rust
//! use weight_core::dimensions::{DimKey, DimensionSet};
//! use weight_core::fields::resolve;
//! use weight_core::formula::FormulaId;
//!
//! let fields = resolve(Some(FormulaId::RoundTube), &DimensionSet::new());
//! let keys: Vec<DimKey> = fields.iter().map(|f| f.key).collect();
//! assert_eq!(keys, vec![DimKey::Tw, DimKey::T, DimKey::H]);
//! ```

use serde::Serialize;

use crate::dimensions::{CalcMode, DimKey, DimensionSet};
use crate::formula::FormulaId;
use crate::units::LengthUnit;

/// One required input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Dimension key the field writes to
    pub key: DimKey,
    /// Short engineering symbol
    pub label: &'static str,
    /// Descriptive title (English / Arabic)
    pub title: &'static str,
}

const fn field(key: DimKey, label: &'static str, title: &'static str) -> FieldSpec {
    FieldSpec { key, label, title }
}

// =============================================================================
// Shared fields
// =============================================================================

const LENGTH: FieldSpec = field(DimKey::H, "L", "Length / الطول");
const WIDTH: FieldSpec = field(DimKey::Tw, "W", "Width / العرض");
const THICKNESS: FieldSpec = field(DimKey::T, "T", "Thickness / السماكة");
const WALL: FieldSpec = field(DimKey::T, "t", "Wall thickness / سماكة الجدار");
const HEIGHT: FieldSpec = field(DimKey::R, "H", "Height / الارتفاع");
const FLANGE_WIDTH: FieldSpec = field(DimKey::U, "B", "Flange width / عرض الشفة");
const SHEET_LENGTH: FieldSpec = field(DimKey::H, "L", "Length / الطول");
const SHEET_WIDTH: FieldSpec = field(DimKey::Tf, "W", "Width / العرض");
const MESH_WEIGHT: FieldSpec = field(DimKey::Tw, "kg/m²", "Weight per m² / الوزن لكل متر مربع");

// =============================================================================
// Per-family field lists
// =============================================================================

const STRIP_FIELDS: &[FieldSpec] = &[WIDTH, THICKNESS, LENGTH];

const FLAT_BAR_FIELDS: &[FieldSpec] = &[WIDTH, THICKNESS, LENGTH];

const PLATE_FIELDS: &[FieldSpec] = &[LENGTH, WIDTH, THICKNESS];

const ROUND_BAR_FIELDS: &[FieldSpec] = &[field(DimKey::Tw, "D", "Diameter / القطر"), LENGTH];

const REBAR_FIELDS: &[FieldSpec] = &[field(DimKey::Tw, "Ø", "Bar diameter / قطر القضيب"), LENGTH];

const SQUARE_BAR_FIELDS: &[FieldSpec] = &[field(DimKey::Tw, "a", "Side / طول الضلع"), LENGTH];

const HEX_BAR_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "s", "Across flats / المسافة بين الأسطح المتقابلة"),
    LENGTH,
];

const ROUND_TUBE_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "D", "Outer diameter / القطر الخارجي"),
    WALL,
    LENGTH,
];

const SQUARE_TUBE_FIELDS: &[FieldSpec] = &[field(DimKey::Tw, "a", "Side / طول الضلع"), WALL, LENGTH];

const RECT_TUBE_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "B", "Width / العرض"),
    field(DimKey::U, "H", "Height / الارتفاع"),
    WALL,
    LENGTH,
];

const HEX_TUBE_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "s", "Across flats / المسافة بين الأسطح المتقابلة"),
    WALL,
    LENGTH,
];

const EQUAL_ANGLE_FIELDS: &[FieldSpec] = &[field(DimKey::Tw, "a", "Leg / الضلع"), THICKNESS, LENGTH];

const UNEQUAL_ANGLE_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "a", "Long leg / الضلع الطويل"),
    field(DimKey::U, "b", "Short leg / الضلع القصير"),
    THICKNESS,
    LENGTH,
];

const U_CHANNEL_FIELDS: &[FieldSpec] = &[
    HEIGHT,
    FLANGE_WIDTH,
    THICKNESS,
    field(DimKey::S, "r", "Inner bend radius / نصف قطر الثني الداخلي"),
    LENGTH,
];

const I_BEAM_FIELDS: &[FieldSpec] = &[
    HEIGHT,
    FLANGE_WIDTH,
    field(DimKey::Tf, "tf", "Flange thickness / سماكة الشفة"),
    field(DimKey::Tw, "tw", "Web thickness / سماكة الجذع"),
    field(DimKey::S, "r", "Fillet radius / نصف قطر التقوس"),
    LENGTH,
];

const T_SECTION_FIELDS: &[FieldSpec] = &[HEIGHT, FLANGE_WIDTH, THICKNESS, LENGTH];

const Z_CHANNEL_FIELDS: &[FieldSpec] = &[HEIGHT, FLANGE_WIDTH, THICKNESS, LENGTH];

const HAT_CHANNEL_FIELDS: &[FieldSpec] = &[
    HEIGHT,
    field(DimKey::U, "B", "Crown width / عرض القمة"),
    field(DimKey::S, "c", "Brim width / عرض الحافة"),
    THICKNESS,
    LENGTH,
];

const LIPPED_C_CHANNEL_FIELDS: &[FieldSpec] = &[
    HEIGHT,
    FLANGE_WIDTH,
    field(DimKey::S, "c", "Lip length / طول الحافة"),
    THICKNESS,
    LENGTH,
];

const SOLID_SPHERE_FIELDS: &[FieldSpec] = &[field(DimKey::Tw, "D", "Diameter / القطر")];

const CONE_FRUSTUM_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "D₁", "Large diameter / القطر الكبير"),
    field(DimKey::U, "D₂", "Small diameter / القطر الصغير"),
    field(DimKey::R, "H", "Height / الارتفاع"),
    THICKNESS,
];

const FLANGE_RING_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tw, "D", "Outer diameter / القطر الخارجي"),
    field(DimKey::U, "d", "Inner diameter / القطر الداخلي"),
    THICKNESS,
    field(DimKey::R, "n", "Bolt hole count / عدد الثقوب"),
    field(DimKey::S, "dₕ", "Bolt hole diameter / قطر الثقب"),
];

const GRATING_WEIGHT_FIELDS: &[FieldSpec] = &[SHEET_LENGTH, SHEET_WIDTH, MESH_WEIGHT];

const GRATING_GEOMETRIC_FIELDS: &[FieldSpec] = &[
    SHEET_LENGTH,
    SHEET_WIDTH,
    field(DimKey::Tw, "bh", "Bearing bar height / ارتفاع القضيب الحامل"),
    field(DimKey::T, "bt", "Bearing bar thickness / سماكة القضيب الحامل"),
    field(DimKey::R, "p₁", "Bearing bar spacing / تباعد القضبان الحاملة"),
    field(DimKey::S, "d", "Cross bar diameter / قطر القضيب العرضي"),
    field(DimKey::U, "p₂", "Cross bar spacing / تباعد القضبان العرضية"),
];

const MESH_WEIGHT_FIELDS: &[FieldSpec] = &[SHEET_LENGTH, SHEET_WIDTH, MESH_WEIGHT];

const MESH_GEOMETRIC_FIELDS: &[FieldSpec] = &[
    SHEET_LENGTH,
    SHEET_WIDTH,
    field(DimKey::Tw, "d", "Wire diameter / قطر السلك"),
    field(DimKey::R, "p₁", "Longitudinal wire spacing / تباعد الأسلاك الطولية"),
    field(DimKey::U, "p₂", "Cross wire spacing / تباعد الأسلاك العرضية"),
];

const EXPANDED_THICKNESS_FIELDS: &[FieldSpec] = &[
    SHEET_LENGTH,
    SHEET_WIDTH,
    field(DimKey::T, "T", "Thickness / السماكة"),
];

const EXPANDED_WEIGHT_FIELDS: &[FieldSpec] = &[
    field(DimKey::Tf, "kg/m²", "Weight per m² / الوزن لكل متر مربع"),
    field(DimKey::H, "A", "Total area (m²) / المساحة الكلية"),
];

/// Generic fallback for unrecognized formulas
const FALLBACK_FIELDS: &[FieldSpec] = &[WIDTH, LENGTH, THICKNESS];

/// Resolve the ordered list of required fields for a formula.
///
/// Only the mode flags of `dims` are read, never the entered values.
pub fn resolve(formula: Option<FormulaId>, dims: &DimensionSet) -> Vec<FieldSpec> {
    resolve_for_mode(formula, dims.calc_mode, dims.include_radius)
}

/// Resolve fields from explicit mode flags.
pub fn resolve_for_mode(formula: Option<FormulaId>, calc_mode: CalcMode, include_radius: bool) -> Vec<FieldSpec> {
    let Some(formula) = formula else {
        return FALLBACK_FIELDS.to_vec();
    };

    let fields: &[FieldSpec] = match formula {
        FormulaId::Strip => STRIP_FIELDS,
        FormulaId::FlatBar => FLAT_BAR_FIELDS,
        FormulaId::Plate => PLATE_FIELDS,
        FormulaId::RoundBar => ROUND_BAR_FIELDS,
        FormulaId::Rebar => REBAR_FIELDS,
        FormulaId::SquareBar => SQUARE_BAR_FIELDS,
        FormulaId::HexBar => HEX_BAR_FIELDS,
        FormulaId::RoundTube => ROUND_TUBE_FIELDS,
        FormulaId::SquareTube => SQUARE_TUBE_FIELDS,
        FormulaId::RectTube => RECT_TUBE_FIELDS,
        FormulaId::HexTube => HEX_TUBE_FIELDS,
        FormulaId::EqualAngle => EQUAL_ANGLE_FIELDS,
        FormulaId::UnequalAngle => UNEQUAL_ANGLE_FIELDS,
        FormulaId::UChannel => U_CHANNEL_FIELDS,
        FormulaId::IBeam => {
            if include_radius {
                I_BEAM_FIELDS
            } else {
                return I_BEAM_FIELDS
                    .iter()
                    .filter(|f| f.key != DimKey::S)
                    .copied()
                    .collect();
            }
        }
        FormulaId::TSection => T_SECTION_FIELDS,
        FormulaId::ZChannel => Z_CHANNEL_FIELDS,
        FormulaId::HatChannel => HAT_CHANNEL_FIELDS,
        FormulaId::LippedCChannel => LIPPED_C_CHANNEL_FIELDS,
        FormulaId::SolidSphere => SOLID_SPHERE_FIELDS,
        FormulaId::ConeFrustum => CONE_FRUSTUM_FIELDS,
        FormulaId::FlangeRing => FLANGE_RING_FIELDS,
        FormulaId::SteelGrating => match calc_mode {
            CalcMode::Weight => GRATING_WEIGHT_FIELDS,
            _ => GRATING_GEOMETRIC_FIELDS,
        },
        FormulaId::WireMesh => match calc_mode {
            CalcMode::Weight => MESH_WEIGHT_FIELDS,
            _ => MESH_GEOMETRIC_FIELDS,
        },
        FormulaId::ExpandedMetal => match calc_mode {
            CalcMode::Thickness => EXPANDED_THICKNESS_FIELDS,
            _ => EXPANDED_WEIGHT_FIELDS,
        },
    };

    fields.to_vec()
}

/// Whether the field for `key` gets a length-unit selector.
///
/// Fields holding a weight per area, an area or a count are not lengths and
/// are used exactly as entered.
pub fn should_show_unit_for_key(formula: Option<FormulaId>, key: DimKey, calc_mode: CalcMode) -> bool {
    match formula {
        Some(FormulaId::ExpandedMetal) => {
            !(calc_mode != CalcMode::Thickness && matches!(key, DimKey::Tf | DimKey::H))
        }
        Some(FormulaId::SteelGrating | FormulaId::WireMesh) => {
            !(calc_mode == CalcMode::Weight && key == DimKey::Tw)
        }
        Some(FormulaId::FlangeRing) => key != DimKey::R,
        _ => true,
    }
}

/// Default length unit for a key before the user picks one.
///
/// Piece length `h` is entered in meters; sheet width `tf` is in meters for
/// grating, mesh and expanded metal. Everything else is in millimeters.
pub fn default_unit_for_key(formula: Option<FormulaId>, key: DimKey) -> LengthUnit {
    match key {
        DimKey::H => LengthUnit::Meter,
        DimKey::Tf
            if matches!(
                formula,
                Some(FormulaId::SteelGrating | FormulaId::WireMesh | FormulaId::ExpandedMetal)
            ) =>
        {
            LengthUnit::Meter
        }
        _ => LengthUnit::Millimeter,
    }
}

/// Required keys whose text is missing from `dims`.
pub fn missing_fields(formula: Option<FormulaId>, dims: &DimensionSet) -> Vec<FieldSpec> {
    resolve(formula, dims)
        .into_iter()
        .filter(|f| !dims.is_present(f.key))
        .collect()
}

/// Whether every required field holds non-empty normalized text.
///
/// An empty field list never counts as complete.
pub fn has_all_required_inputs(formula: Option<FormulaId>, dims: &DimensionSet) -> bool {
    let fields = resolve(formula, dims);
    !fields.is_empty() && fields.iter().all(|f| dims.is_present(f.key))
}
