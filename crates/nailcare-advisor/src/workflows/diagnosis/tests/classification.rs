use super::common::*;
use crate::workflows::diagnosis::classifier::{classify, matching_rule, rules};
use crate::workflows::diagnosis::{score, AnswerSet, DimensionScores, Severity};

fn scores(brittleness: u32, dryness: u32, damage: u32, growth_deficiency: u32) -> DimensionScores {
    DimensionScores {
        brittleness,
        dryness,
        damage,
        growth_deficiency,
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn rule_table_is_ordered_by_precedence() {
    let keys: Vec<_> = rules().iter().map(|rule| rule.key).collect();
    assert_eq!(
        keys,
        vec![
            "severely_damaged",
            "dry_and_brittle",
            "weak_nails",
            "dry_cuticles",
            "slow_growth",
            "healthy",
        ]
    );
}

#[test]
fn severe_when_total_reaches_twelve() {
    let diagnosis = classify(&scores(4, 4, 4, 0));
    assert_eq!(diagnosis.condition, "Severely Damaged Nails");
    assert_eq!(diagnosis.severity, Severity::Severe);
    let topic_tags: Vec<_> = diagnosis.topic_tags.into_iter().collect();
    let mut expected = tags(&["strengthening", "cuticle-care", "moisturizing", "treatment"]);
    expected.sort();
    assert_eq!(topic_tags, expected);
}

#[test]
fn total_eleven_with_damage_five_is_not_severe() {
    let diagnosis = classify(&scores(3, 3, 5, 0));
    assert_eq!(diagnosis.condition, "Dry and Brittle Nails");
    assert_eq!(diagnosis.severity, Severity::Moderate);
}

#[test]
fn damage_six_alone_is_severe() {
    let diagnosis = classify(&scores(0, 0, 6, 0));
    assert_eq!(diagnosis.severity, Severity::Severe);
}

#[test]
fn first_matching_rule_wins_over_later_rules() {
    let both = scores(0, 5, 7, 0);
    assert!(rules()[0].matches(&both));
    assert!(rules()[1].matches(&both));
    assert_eq!(matching_rule(&both).key, "severely_damaged");
}

#[test]
fn dryness_four_is_dry_and_brittle() {
    let diagnosis = classify(&scores(0, 4, 0, 0));
    assert_eq!(diagnosis.condition, "Dry and Brittle Nails");
    assert!(diagnosis.topic_tags.contains("moisturizing"));
}

#[test]
fn total_seven_is_dry_and_brittle_but_six_is_not() {
    assert_eq!(classify(&scores(2, 2, 3, 0)).condition, "Dry and Brittle Nails");
    assert_eq!(classify(&scores(2, 2, 2, 0)).condition, "Generally Healthy Nails");
}

#[test]
fn damage_three_alone_needs_strength() {
    let diagnosis = classify(&scores(0, 0, 3, 0));
    assert_eq!(diagnosis.condition, "Weak Nails Needing Strength");
    assert_eq!(diagnosis.severity, Severity::Moderate);
    assert_eq!(classify(&scores(0, 0, 2, 0)).condition, "Generally Healthy Nails");
}

#[test]
fn brittleness_three_needs_strength() {
    let diagnosis = classify(&scores(3, 0, 0, 0));
    assert_eq!(diagnosis.condition, "Weak Nails Needing Strength");
    assert_eq!(diagnosis.severity, Severity::Moderate);
    assert!(diagnosis.topic_tags.contains("base-coat"));
}

#[test]
fn dryness_three_matches_dry_cuticles() {
    let diagnosis = classify(&scores(0, 3, 0, 0));
    assert_eq!(diagnosis.condition, "Dry Nails and Cuticles");
    assert_eq!(diagnosis.severity, Severity::Mild);
}

#[test]
fn dryness_two_falls_through_to_healthy() {
    let diagnosis = classify(&scores(0, 2, 0, 0));
    assert_eq!(diagnosis.condition, "Generally Healthy Nails");
}

#[test]
fn growth_deficiency_two_is_slow_growth() {
    let diagnosis = classify(&scores(0, 0, 0, 2));
    assert_eq!(diagnosis.condition, "Slow Nail Growth");
    let topic_tags: Vec<_> = diagnosis.topic_tags.into_iter().collect();
    assert_eq!(topic_tags, tags(&["growth", "treatment"]));
}

#[test]
fn growth_deficiency_one_is_still_healthy() {
    assert_eq!(
        classify(&scores(0, 0, 0, 1)).condition,
        "Generally Healthy Nails"
    );
}

#[test]
fn brittle_peeling_scenario_is_severe() {
    let answers: AnswerSet = [
        ("condition-1", "brittle"),
        ("condition-2", "often"),
        ("habits-4", "peel"),
    ]
    .into_iter()
    .collect();

    let diagnosis = classify(&score(&answers));

    assert_eq!(diagnosis.condition, "Severely Damaged Nails");
    assert_eq!(diagnosis.severity, Severity::Severe);
}

#[test]
fn mildest_answers_are_generally_healthy() {
    let diagnosis = classify(&score(&mildest_answers()));

    assert_eq!(diagnosis.condition, "Generally Healthy Nails");
    assert_eq!(diagnosis.severity, Severity::Mild);
    let topic_tags: Vec<_> = diagnosis.topic_tags.into_iter().collect();
    assert_eq!(topic_tags, tags(&["base-coat", "cuticle-care", "preventive"]));
}

#[test]
fn classification_is_total_and_deterministic() {
    for brittleness in 0..=4 {
        for dryness in 0..=10 {
            for damage in 0..=14 {
                for growth_deficiency in 0..=2 {
                    let input = scores(brittleness, dryness, damage, growth_deficiency);
                    let first = classify(&input);
                    assert_eq!(first, classify(&input));
                    let matched = rules().iter().filter(|rule| rule.matches(&input)).count();
                    assert!(matched >= 1);
                }
            }
        }
    }
}
