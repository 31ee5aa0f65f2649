//! The facade exposes every scoring building block under one crate.

use dropzone_engine::{
    CenterDistance, ComponentScores, Location, LocationKind, MAX_SCORE, NEUTRAL_SCORE, Preset,
    RotationData, calculate_score, contest_risk_inverse, loot_quality, materials, normalize,
    rotate_potential, shield_availability, surge_potential,
};
use rstest::rstest;

#[rstest]
fn normalize_is_reachable_with_its_bounds() {
    assert_eq!(normalize(50.0, 0.0, 50.0), MAX_SCORE);
    assert_eq!(normalize(3.0, 3.0, 3.0), NEUTRAL_SCORE);
}

#[rstest]
fn component_scorers_agree_with_the_composite_breakdown() {
    let location = Location::new("pier", "Pier", LocationKind::Landmark).with_rotation(
        RotationData {
            center_distance: CenterDistance::Close,
        },
    );
    let expected = ComponentScores {
        rotate_potential: rotate_potential(&location),
        loot_quality: loot_quality(&location),
        shield_availability: shield_availability(&location),
        materials: materials(&location),
        surge_potential: surge_potential(&location),
        contest_risk_inverse: contest_risk_inverse(&location),
    };

    let scored = calculate_score(&location, "balanced");
    assert_eq!(scored.preset, Preset::Balanced);
    assert_eq!(scored.component_scores, expected);
}
