use kine_core::labels;
use kine_core::models::power::{mean_power, EmissionMode, MeanPowerInput};

#[test]
fn continuous_mode_returns_peak() {
    assert_eq!(
        mean_power(EmissionMode::Continuous, Some(400.0), Some(80.0), Some(50.0)),
        50.0
    );
    assert_eq!(mean_power(EmissionMode::Continuous, None, None, Some(50.0)), 50.0);
}

#[test]
fn pulsed_mode_scales_by_width_and_frequency() {
    assert_eq!(
        mean_power(EmissionMode::Pulsed, Some(200.0), Some(50.0), Some(100.0)),
        1.0
    );
}

#[test]
fn pulsed_mode_rounds_to_one_decimal() {
    // 150 W * 400 µs * 110 Hz = 6.6 W
    assert_eq!(
        mean_power(EmissionMode::Pulsed, Some(400.0), Some(110.0), Some(150.0)),
        6.6
    );
    // 33 W * 333 µs * 33 Hz = 0.362637 W
    assert_eq!(
        mean_power(EmissionMode::Pulsed, Some(333.0), Some(33.0), Some(33.0)),
        0.4
    );
}

#[test]
fn unset_inputs_count_as_zero() {
    assert_eq!(mean_power(EmissionMode::Pulsed, None, Some(50.0), Some(100.0)), 0.0);
    assert_eq!(mean_power(EmissionMode::Continuous, None, None, None), 0.0);
}

#[test]
fn unknown_mode_label_is_pulsed() {
    assert_eq!(EmissionMode::from_label(labels::MODE_CONTINUOUS), EmissionMode::Continuous);
    assert_eq!(EmissionMode::from_label(labels::MODE_PULSED), EmissionMode::Pulsed);
    assert_eq!(EmissionMode::from_label("Seleccionar..."), EmissionMode::Pulsed);
}

#[test]
fn input_defaults_to_pulsed() {
    let input = MeanPowerInput {
        mode: None,
        pulse_width_us: Some(200.0),
        pulse_frequency_hz: Some(50.0),
        peak_power_w: Some(100.0),
    };
    assert_eq!(input.mean_power(), 1.0);

    let input = MeanPowerInput {
        mode: Some(labels::MODE_CONTINUOUS.to_string()),
        ..input
    };
    assert_eq!(input.mean_power(), 100.0);
}
