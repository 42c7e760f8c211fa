//! Behaviour of the public API as a page adapter would drive it

use broker_quote::{
    compute_commission, estimate_premium, Addon, CommissionInputs, CoverageType, PremiumEstimator, PremiumInputs,
    RateCard, StepController, VehicleType,
};

fn quote(vehicle: &str, value: &str, coverage: &str, addons: &[&str]) -> i64 {
    estimate_premium(&PremiumInputs::from_form(vehicle, value, coverage, addons)).rounded()
}

#[test]
fn car_basic_scales_linearly_with_value() {
    for value in [0u32, 500, 1_000, 12_345, 80_000, 1_000_000] {
        let expected = (value as f64 / 1000.0 * 25.0).round() as i64;
        assert_eq!(quote("car", &value.to_string(), "basic", &[]), expected);
    }
}

#[test]
fn published_examples() {
    assert_eq!(quote("bike", "100000", "comprehensive", &["roadside", "engine"]), 3725);
    assert_eq!(quote("commercial", "50000", "premium", &["zerodep"]), 4000);
    assert_eq!(quote("unknown", "1000", "unknown", &[]), 25);
}

#[test]
fn every_addon_together() {
    // 20000 / 1000 * 40 * 1.0 = 800, plus 50 + 400 + 75 + 25
    let inputs = PremiumInputs::new(Some(VehicleType::Car), 20_000.0, Some(CoverageType::Premium), Addon::ALL);
    assert_eq!(estimate_premium(&inputs).rounded(), 1350);
}

#[test]
fn rate_card_override_from_json() {
    let card = RateCard::from_json_str(r#"{ "vehicles": { "bike": 0.5 } }"#).expect("Failed to parse");
    let estimator = PremiumEstimator::new(card);
    let inputs = PremiumInputs::from_form("bike", "100000", "comprehensive", ["roadside", "engine"]);
    assert_eq!(estimator.estimate(&inputs).rounded(), 3125);
}

#[test]
fn commission_examples() {
    assert_eq!(compute_commission(&CommissionInputs::from_form("10", "500", "5")), 250.0);
    assert_eq!(compute_commission(&CommissionInputs::from_form("0", "500", "5")), 0.0);
}

#[test]
fn four_step_claim_form() {
    let mut form = StepController::new(4);
    for _ in 0..4 {
        form.next();
    }
    assert_eq!(form.current_step(), 3);

    let mut form = StepController::new(4);
    form.previous();
    assert_eq!(form.current_step(), 0);

    form.next();
    form.next();
    assert_eq!(form.progress_percent(), 75.0);
}
