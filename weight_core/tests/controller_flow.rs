//! End-to-end controller flows on a paused tokio clock.

use std::time::Duration;

use tokio::time::sleep;
use weight_core::controller::{CalculationController, ControllerState};
use weight_core::dimensions::{CalcMode, DimKey};
use weight_core::settings::CalculatorSettings;
use weight_core::units::LengthUnit;

fn keys(controller: &CalculationController) -> Vec<DimKey> {
    controller.required_fields().iter().map(|f| f.key).collect()
}

/// Let the default debounce window pass
async fn settle() {
    sleep(Duration::from_millis(181)).await;
}

#[tokio::test(start_paused = true)]
async fn test_never_settles_while_incomplete() {
    let mut c = CalculationController::new(CalculatorSettings::default());
    let mut rx = c.subscribe();
    c.select_profile("i_beam");

    let inputs = [
        (DimKey::R, "200"),
        (DimKey::U, "100"),
        (DimKey::Tf, "8.5"),
        (DimKey::Tw, "5.6"),
    ];
    for (key, value) in inputs {
        c.set_dimension(key, value);
        settle().await;
        assert_eq!(c.state(), ControllerState::Idle);
    }

    // Fillet radius is only required with the toggle on
    c.set_include_radius(true);
    assert!(keys(&c).contains(&DimKey::S));
    c.set_include_radius(false);
    assert!(!keys(&c).contains(&DimKey::S));

    c.set_dimension(DimKey::H, "6");
    assert_eq!(c.state(), ControllerState::Pending);
    settle().await;

    let mut saw_settled = false;
    while rx.has_changed().unwrap_or(false) {
        saw_settled |= rx.borrow_and_update().result().is_some();
    }
    assert!(saw_settled);

    // 2724.8 mm² → 21.390 kg/m over 6 m
    let result = c.result().unwrap();
    assert_eq!(result.unit_weight_per_meter, "21.390");
    assert_eq!(result.piece_weight, "128.338");
}

#[tokio::test(start_paused = true)]
async fn test_mode_switch_changes_required_fields() {
    let mut c = CalculationController::new(CalculatorSettings::default());
    c.select_profile("wire_mesh");
    assert_eq!(keys(&c), vec![DimKey::H, DimKey::Tf, DimKey::Tw]);
    assert!(!c.should_show_unit_for_key(DimKey::Tw));

    c.set_dimension(DimKey::H, "5");
    c.set_dimension(DimKey::Tf, "2");
    c.set_dimension(DimKey::Tw, "3.2");
    settle().await;
    assert_eq!(c.result().unwrap().piece_weight, "32.000");

    // Geometric mode needs spacings as well
    c.set_calc_mode(CalcMode::Geometric);
    assert_eq!(c.state(), ControllerState::Idle);
    assert!(c.should_show_unit_for_key(DimKey::Tw));

    c.set_dimension(DimKey::R, "100");
    c.set_dimension(DimKey::U, "100");
    settle().await;
    assert!(c.result().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_expanded_metal_weight_mode_takes_area() {
    let mut c = CalculationController::new(CalculatorSettings::default());
    c.select_profile("expanded_metal");
    c.set_calc_mode(CalcMode::Weight);
    assert_eq!(keys(&c), vec![DimKey::Tf, DimKey::H]);

    // A unit choice on a non-length field has no effect
    c.set_unit(DimKey::H, LengthUnit::Foot);
    c.set_dimension(DimKey::Tf, "4.5");
    c.set_dimension(DimKey::H, "12");
    c.set_quantity(2);
    c.set_price(Some(1.5));
    settle().await;

    let result = c.result().unwrap();
    assert_eq!(result.piece_weight, "54.000");
    assert_eq!(result.total_weight, "108.000");
    assert_eq!(result.total_price, "162.00");
}

#[tokio::test(start_paused = true)]
async fn test_custom_debounce_window() {
    let settings = CalculatorSettings {
        debounce_ms: 500,
        ..Default::default()
    };
    let mut c = CalculationController::new(settings);
    c.select_profile("rebar");
    c.set_dimension(DimKey::Tw, "16");
    c.set_dimension(DimKey::H, "12");

    settle().await;
    assert_eq!(c.state(), ControllerState::Pending);

    sleep(Duration::from_millis(320)).await;
    // 16² / 162 = 1.580 kg/m
    assert_eq!(c.result().unwrap().unit_weight_per_meter, "1.580");
}

#[tokio::test(start_paused = true)]
async fn test_clear_profile_goes_idle() {
    let mut c = CalculationController::new(CalculatorSettings::default());
    c.select_profile("flat_bar");
    c.set_dimension(DimKey::Tw, "40");
    c.set_dimension(DimKey::T, "5");
    c.set_dimension(DimKey::H, "6");
    settle().await;
    assert!(c.result().is_some());

    c.clear_profile();
    assert_eq!(c.state(), ControllerState::Idle);
    assert!(c.required_fields().is_empty());
    assert!(!c.has_all_required_inputs());
}
