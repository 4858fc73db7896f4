//! # Cross-Section and Volume Formulas
//!
//! Closed-form geometry used by the weight calculations. All inputs are in
//! millimeters; areas come back in mm² and volumes in mm³.
//!
//! ## Notation
//!
//! - `D`, `d` = diameters
//! - `s` = distance across flats of a hexagon
//! - `t` = wall or plate thickness
//! - `r` = inner bend / fillet radius

use std::f64::consts::PI;

/// Steel reference density (g/cm³)
pub const STEEL_DENSITY_G_CM3: f64 = 7.85;

/// Mass per meter of one mm² of steel cross-section (kg/m)
pub const STEEL_KG_PER_M_PER_MM2: f64 = 0.00785;

/// Steel round bar constant: kg/m per mm² of diameter squared (π/4 · 0.00785)
pub const ROUND_BAR_KG_PER_M_PER_MM2: f64 = 0.006165;

/// Empirical rebar divisor: kg/m ≈ d²/162
pub const REBAR_DIVISOR: f64 = 162.0;

/// mm³ in one m³
pub const MM3_PER_M3: f64 = 1.0e9;

// =============================================================================
// SOLID SECTIONS
// =============================================================================

/// Rectangle area
///
/// # Formula
/// A = b × d
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Circle area from diameter
///
/// # Formula
/// A = (π/4)·D²
///
/// # Example
/// ```rust
/// use weight_core::equations::section::circular_area;
///
/// let area = circular_area(100.0);
/// assert!((area - 7853.98).abs() < 0.01);
/// ```
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI / 4.0 * d * d
}

/// Regular hexagon area from distance across flats
///
/// ```text
///      ____
///     /    \
///    /      \   s (across flats, vertical)
///    \      /
///     \____/
/// ```
///
/// # Formula
/// A = (√3/2)·s²
#[inline]
pub fn hexagon_area(s: f64) -> f64 {
    3.0_f64.sqrt() / 2.0 * s * s
}

// =============================================================================
// HOLLOW SECTIONS
// =============================================================================

/// Inner dimension of a hollow section with uniform wall thickness.
///
/// Clamped at zero so an over-thick wall reads as a solid section.
#[inline]
pub fn inner_dimension(outer: f64, wall: f64) -> f64 {
    (outer - 2.0 * wall).max(0.0)
}

/// Annulus (ring) area
///
/// # Formula
/// A = (π/4)(D² − d²)
#[inline]
pub fn annulus_area(outer_d: f64, inner_d: f64) -> f64 {
    circular_area(outer_d) - circular_area(inner_d)
}

/// Quarter-annulus area of a bend or fillet corner
///
/// ```text
///   r_o = r + t
///   ╭──
///   │ ╭─
///   │ │  r (inner radius)
/// ```
///
/// # Formula
/// A = (π/4)(r_o² − r_i²), with r_o = r_i + t
#[inline]
pub fn quarter_annulus_area(inner_radius: f64, thickness: f64) -> f64 {
    let outer_radius = inner_radius + thickness;
    PI / 4.0 * (outer_radius * outer_radius - inner_radius * inner_radius)
}

// =============================================================================
// VOLUMES
// =============================================================================

/// Sphere volume from diameter
///
/// # Formula
/// V = (π/6)·D³
#[inline]
pub fn sphere_volume(d: f64) -> f64 {
    PI / 6.0 * d * d * d
}

/// Lateral (slant) surface area of a cone frustum
///
/// # Formula
/// S = π(R₁ + R₂)·√((R₁ − R₂)² + H²)
#[inline]
pub fn frustum_lateral_area(large_d: f64, small_d: f64, height: f64) -> f64 {
    let r1 = large_d / 2.0;
    let r2 = small_d / 2.0;
    let slant = ((r1 - r2).powi(2) + height * height).sqrt();
    PI * (r1 + r2) * slant
}

// =============================================================================
// DISCRETE MEMBERS
// =============================================================================

/// Number of evenly spaced members across a span.
///
/// At least one member when a spacing is given; zero when the spacing is
/// zero or negative so the count never becomes infinite.
///
/// ```rust
/// use weight_core::equations::section::member_count;
///
/// assert_eq!(member_count(1000.0, 30.0), 33.0);
/// assert_eq!(member_count(10.0, 30.0), 1.0);
/// assert_eq!(member_count(1000.0, 0.0), 0.0);
/// ```
#[inline]
pub fn member_count(span: f64, spacing: f64) -> f64 {
    if spacing > 0.0 {
        (span / spacing).round().max(1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_bar_constant_matches_circle() {
        // 0.006165 is the rounded steel value of π/4 × 0.00785
        assert_relative_eq!(
            circular_area(1.0) * STEEL_KG_PER_M_PER_MM2,
            ROUND_BAR_KG_PER_M_PER_MM2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_annulus() {
        // OD 100, wall 5
        let area = annulus_area(100.0, inner_dimension(100.0, 5.0));
        assert_relative_eq!(area, 1492.257, epsilon = 1e-3);
    }

    #[test]
    fn test_inner_dimension_clamped() {
        assert_eq!(inner_dimension(20.0, 15.0), 0.0);
        assert_eq!(inner_dimension(20.0, 2.0), 16.0);
    }

    #[test]
    fn test_hexagon() {
        // Across flats 10 => side 5.7735, area 86.6025
        assert_relative_eq!(hexagon_area(10.0), 86.6025, epsilon = 1e-4);
    }

    #[test]
    fn test_quarter_annulus() {
        assert_relative_eq!(quarter_annulus_area(0.0, 2.0), PI, epsilon = 1e-12);
        assert_eq!(quarter_annulus_area(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_sphere_volume() {
        assert_relative_eq!(sphere_volume(2.0), 4.0 / 3.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_frustum_reduces_to_cylinder() {
        // Equal diameters: lateral area = π·D·H
        assert_relative_eq!(frustum_lateral_area(100.0, 100.0, 50.0), PI * 100.0 * 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_member_count_guards() {
        assert_eq!(member_count(0.0, 0.0), 0.0);
        assert_eq!(member_count(500.0, -5.0), 0.0);
        assert_eq!(member_count(0.0, 40.0), 1.0);
    }
}
