//! End-to-end tests for `resistor-code decode`.

mod fixtures;

use fixtures::*;

#[test]
fn test_decode_four_band_plain() {
    let output = run(&["decode", "yellow", "violet", "red", "gold"]);
    assert_exit(&output, 0);

    let stdout = stdout(&output);
    assert!(stdout.contains("Bands:       Yellow, Violet, Red, Gold"));
    assert!(stdout.contains("Resistance:  4,700 Ω (4.70 KΩ)"));
    assert!(stdout.contains("Tolerance:   ±5%"));
    assert!(!stdout.contains("Temp Coeff"));
}

#[test]
fn test_decode_four_band_json() {
    let output = run(&["decode", "yellow", "violet", "red", "gold", "--json"]);
    assert_exit(&output, 0);

    let result = json(&output);
    assert_eq!(result["band_count"], 4);
    assert_eq!(result["resistance_ohms"], 4700.0);
    assert_eq!(result["tolerance_percent"], 5.0);
    assert_eq!(result["formatted"], "4.70 KΩ");
    assert_eq!(result["display"], "4,700 Ω (4.70 KΩ)");
    assert!(result.get("temp_coefficient").is_none());
    assert_eq!(
        result["bands"],
        serde_json::json!(["yellow", "violet", "red", "gold"])
    );
}

#[test]
fn test_decode_five_band() {
    let output = run(&["decode", "brown", "black", "black", "brown", "brown", "--json"]);
    assert_exit(&output, 0);

    let result = json(&output);
    assert_eq!(result["band_count"], 5);
    assert_eq!(result["resistance_ohms"], 1000.0);
    assert_eq!(result["tolerance_percent"], 1.0);
    assert_eq!(result["formatted"], "1.00 KΩ");
}

#[test]
fn test_decode_six_band_shows_temp_coefficient() {
    let output = run(&["decode", "red", "violet", "black", "black", "brown", "red"]);
    assert_exit(&output, 0);

    let stdout = stdout(&output);
    assert!(stdout.contains("270 Ω (270.00 Ω)"));
    assert!(stdout.contains("Temp Coeff:  50 ppm/K"));
}

#[test]
fn test_decode_normalizes_aliases_and_case() {
    let output = run(&["decode", "GREY", "Purple", "brown", "Gold", "--json"]);
    assert_exit(&output, 0);

    let result = json(&output);
    assert_eq!(
        result["bands"],
        serde_json::json!(["gray", "violet", "brown", "gold"])
    );
    assert_eq!(result["resistance_ohms"], 870.0);
}

#[test]
fn test_decode_invalid_tolerance_color() {
    let output = run(&["decode", "yellow", "violet", "red", "orange"]);
    assert_exit(&output, 1);

    let stderr = stderr(&output);
    assert!(stderr.contains("Band 4 requires a tolerance color"));
    assert!(stderr.contains("orange"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_decode_unknown_color() {
    let output = run(&["decode", "yellow", "teal", "red", "gold"]);
    assert_exit(&output, 1);
    assert!(stderr(&output).contains("Unknown color 'teal'"));
}

#[test]
fn test_decode_wrong_band_count() {
    let output = run(&["decode", "yellow", "violet", "red"]);
    assert_exit(&output, 1);
    assert!(stderr(&output).contains("Unsupported band count 3"));

    let output = run(&[
        "decode", "red", "red", "red", "red", "red", "red", "red",
    ]);
    assert_exit(&output, 1);
    assert!(stderr(&output).contains("Unsupported band count 7"));
}

#[test]
fn test_decode_is_repeatable() {
    let first = stdout(&run(&["decode", "red", "red", "orange", "gold"]));
    let second = stdout(&run(&["decode", "red", "red", "orange", "gold"]));
    assert_eq!(first, second);
    assert!(first.contains("22.00 KΩ"));
}

#[test]
fn test_decode_sixth_band_requires_temp_coefficient_color() {
    for color in ["white", "gold", "silver"] {
        let output = run(&["decode", "red", "violet", "black", "black", "brown", color]);
        assert_exit(&output, 1);
        assert!(
            stderr(&output).contains("Band 6 requires a temperature coefficient color"),
            "{color}: {}",
            stderr(&output)
        );
    }
}

#[test]
fn test_decode_gold_multiplier_is_exact() {
    let result = json(&run(&["decode", "gray", "red", "gold", "gold", "--json"]));
    assert_eq!(result["resistance_ohms"], 8.2);
    assert_eq!(result["formatted"], "8.20 Ω");
}
