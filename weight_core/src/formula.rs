//! # Profile Formula Identifiers
//!
//! The closed set of stock profile families the engine knows how to weigh.
//! Each identifier maps to exactly one geometry function in
//! [`calculations`](crate::calculations) and one field list in
//! [`fields`](crate::fields).
//!
//! Identifiers serialize as the snake_case keys used by the profile catalog
//! (`"round_bar"`, `"i_beam"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Profile family identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaId {
    Strip,
    RoundBar,
    EqualAngle,
    UnequalAngle,
    Plate,
    UChannel,
    RoundTube,
    Rebar,
    FlatBar,
    HexBar,
    HexTube,
    SquareBar,
    SquareTube,
    SolidSphere,
    RectTube,
    ConeFrustum,
    TSection,
    LippedCChannel,
    SteelGrating,
    HatChannel,
    WireMesh,
    ZChannel,
    FlangeRing,
    IBeam,
    ExpandedMetal,
}

impl FormulaId {
    /// All profile families, in catalog order
    pub const ALL: [FormulaId; 25] = [
        FormulaId::Strip,
        FormulaId::RoundBar,
        FormulaId::EqualAngle,
        FormulaId::UnequalAngle,
        FormulaId::Plate,
        FormulaId::UChannel,
        FormulaId::RoundTube,
        FormulaId::Rebar,
        FormulaId::FlatBar,
        FormulaId::HexBar,
        FormulaId::HexTube,
        FormulaId::SquareBar,
        FormulaId::SquareTube,
        FormulaId::SolidSphere,
        FormulaId::RectTube,
        FormulaId::ConeFrustum,
        FormulaId::TSection,
        FormulaId::LippedCChannel,
        FormulaId::SteelGrating,
        FormulaId::HatChannel,
        FormulaId::WireMesh,
        FormulaId::ZChannel,
        FormulaId::FlangeRing,
        FormulaId::IBeam,
        FormulaId::ExpandedMetal,
    ];

    /// Catalog key
    pub fn as_str(&self) -> &'static str {
        match self {
            FormulaId::Strip => "strip",
            FormulaId::RoundBar => "round_bar",
            FormulaId::EqualAngle => "equal_angle",
            FormulaId::UnequalAngle => "unequal_angle",
            FormulaId::Plate => "plate",
            FormulaId::UChannel => "u_channel",
            FormulaId::RoundTube => "round_tube",
            FormulaId::Rebar => "rebar",
            FormulaId::FlatBar => "flat_bar",
            FormulaId::HexBar => "hex_bar",
            FormulaId::HexTube => "hex_tube",
            FormulaId::SquareBar => "square_bar",
            FormulaId::SquareTube => "square_tube",
            FormulaId::SolidSphere => "solid_sphere",
            FormulaId::RectTube => "rect_tube",
            FormulaId::ConeFrustum => "cone_frustum",
            FormulaId::TSection => "t_section",
            FormulaId::LippedCChannel => "lipped_c_channel",
            FormulaId::SteelGrating => "steel_grating",
            FormulaId::HatChannel => "hat_channel",
            FormulaId::WireMesh => "wire_mesh",
            FormulaId::ZChannel => "z_channel",
            FormulaId::FlangeRing => "flange_ring",
            FormulaId::IBeam => "i_beam",
            FormulaId::ExpandedMetal => "expanded_metal",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaId::Strip => "Strip",
            FormulaId::RoundBar => "Round Bar",
            FormulaId::EqualAngle => "Equal Angle",
            FormulaId::UnequalAngle => "Unequal Angle",
            FormulaId::Plate => "Plate",
            FormulaId::UChannel => "U Channel",
            FormulaId::RoundTube => "Round Tube",
            FormulaId::Rebar => "Rebar",
            FormulaId::FlatBar => "Flat Bar",
            FormulaId::HexBar => "Hex Bar",
            FormulaId::HexTube => "Hex Tube",
            FormulaId::SquareBar => "Square Bar",
            FormulaId::SquareTube => "Square Tube",
            FormulaId::SolidSphere => "Solid Sphere",
            FormulaId::RectTube => "Rectangular Tube",
            FormulaId::ConeFrustum => "Cone Frustum",
            FormulaId::TSection => "T Section",
            FormulaId::LippedCChannel => "Lipped C Channel",
            FormulaId::SteelGrating => "Steel Grating",
            FormulaId::HatChannel => "Hat Channel",
            FormulaId::WireMesh => "Wire Mesh",
            FormulaId::ZChannel => "Z Channel",
            FormulaId::FlangeRing => "Flange Ring",
            FormulaId::IBeam => "I Beam",
            FormulaId::ExpandedMetal => "Expanded Metal",
        }
    }

    /// Short description of the governing geometry
    pub fn geometry(&self) -> &'static str {
        match self {
            FormulaId::Strip | FormulaId::FlatBar => "A = W·T",
            FormulaId::Plate => "m = L·W·T·ρ",
            FormulaId::RoundBar => "w = 0.006165·D² (steel constant)",
            FormulaId::Rebar => "w = D²/162 · ρ/7.85",
            FormulaId::SquareBar => "A = a²",
            FormulaId::HexBar => "A = (√3/2)·s²",
            FormulaId::EqualAngle => "A = 2·a·t − t²",
            FormulaId::UnequalAngle => "A = (a + b − t)·t",
            FormulaId::RoundTube => "A = (π/4)(D² − (D − 2t)²)",
            FormulaId::SquareTube => "A = a² − (a − 2t)²",
            FormulaId::RectTube => "A = B·H − (B − 2t)(H − 2t)",
            FormulaId::HexTube => "A = (√3/2)(s² − (s − 2t)²)",
            FormulaId::UChannel => "A = 2·B·t + (H − 2t)·t + 2 bend corrections",
            FormulaId::IBeam => "A = 2·B·tf + (H − 2tf)·tw + 4 fillet corrections",
            FormulaId::TSection => "A = (B + H − t)·t",
            FormulaId::ZChannel => "A = (H + 2B − 2t)·t",
            FormulaId::HatChannel => "A = (B + 2H + 2c − 4t)·t",
            FormulaId::LippedCChannel => "A = (H + 2B + 2c − 4t)·t",
            FormulaId::SolidSphere => "V = (π/6)·D³",
            FormulaId::ConeFrustum => "V = π(R₁ + R₂)·√((R₁ − R₂)² + H²)·t",
            FormulaId::FlangeRing => "V = (π/4)(D² − d² − n·h²)·t",
            FormulaId::SteelGrating => "weight/m² × area, or bearing + cross bar members",
            FormulaId::WireMesh => "weight/m² × area, or longitudinal + cross wires",
            FormulaId::ExpandedMetal => "solid plate L·W·T, or weight/m² × area",
        }
    }

    /// Whether the result has a meaningful per-meter weight.
    ///
    /// Volumetric pieces report their piece weight as the unit weight.
    pub fn is_volumetric(&self) -> bool {
        matches!(
            self,
            FormulaId::SolidSphere | FormulaId::ConeFrustum | FormulaId::FlangeRing
        )
    }

    /// Parse a catalog key, returning `None` for unknown ids.
    ///
    /// Callers that need the generic fallback behaviour use this and pass
    /// the `Option` through to the resolver and engine.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for FormulaId {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let key = s.trim().to_lowercase().replace('-', "_");
        FormulaId::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| CalcError::unknown_formula(s))
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        for formula in FormulaId::ALL {
            assert_eq!(formula.as_str().parse::<FormulaId>().unwrap(), formula);
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("I-Beam".parse::<FormulaId>().unwrap(), FormulaId::IBeam);
        assert_eq!(" round_bar ".parse::<FormulaId>().unwrap(), FormulaId::RoundBar);
    }

    #[test]
    fn test_unknown_formula() {
        let err = "k_beam".parse::<FormulaId>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FORMULA");
        assert_eq!(FormulaId::parse_lenient("k_beam"), None);
    }

    #[test]
    fn test_serde_matches_catalog_key() {
        for formula in FormulaId::ALL {
            let json = serde_json::to_string(&formula).unwrap();
            assert_eq!(json, format!("\"{}\"", formula.as_str()));
        }
    }

    #[test]
    fn test_volumetric() {
        assert!(FormulaId::SolidSphere.is_volumetric());
        assert!(!FormulaId::RoundTube.is_volumetric());
    }
}
