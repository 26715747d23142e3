use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::DimensionScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub condition: String,
    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
    pub topic_tags: BTreeSet<String>,
}

struct DiagnosisTemplate {
    condition: &'static str,
    severity: Severity,
    description: &'static str,
    recommendations: &'static [&'static str],
    topic_tags: &'static [&'static str],
}

impl DiagnosisTemplate {
    fn to_diagnosis(&self) -> Diagnosis {
        Diagnosis {
            condition: self.condition.to_string(),
            severity: self.severity,
            description: self.description.to_string(),
            recommendations: self
                .recommendations
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
            topic_tags: self.topic_tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// Predicate paired with the diagnosis it yields. Rules are evaluated in table order.
pub struct ClassificationRule {
    pub key: &'static str,
    predicate: fn(&DimensionScores) -> bool,
    template: DiagnosisTemplate,
}

impl ClassificationRule {
    pub fn matches(&self, scores: &DimensionScores) -> bool {
        (self.predicate)(scores)
    }

    pub fn diagnosis(&self) -> Diagnosis {
        self.template.to_diagnosis()
    }
}

impl fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("key", &self.key)
            .field("condition", &self.template.condition)
            .finish_non_exhaustive()
    }
}

const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        key: "severely_damaged",
        predicate: |scores| scores.total() >= 12 || scores.damage >= 6,
        template: DiagnosisTemplate {
            condition: "Severely Damaged Nails",
            severity: Severity::Severe,
            description: "Your answers point to significant, ongoing damage: nails that break, peel and lift, \
                          combined with habits that keep stripping them. They need a focused repair routine \
                          and a break from anything that adds stress before they can recover.",
            recommendations: &[
                "Pause gel, acrylics and polish for at least four weeks",
                "Apply a strengthening treatment every other day",
                "Massage cuticle oil into the nail folds twice a day",
                "Use a rich hand cream after every wash",
                "Keep nails short and file in one direction only",
                "Never peel or pick off polish; soak it off instead",
                "Wear gloves for cleaning and dishwashing",
            ],
            topic_tags: &["strengthening", "cuticle-care", "moisturizing", "treatment"],
        },
    },
    ClassificationRule {
        key: "dry_and_brittle",
        predicate: |scores| scores.total() >= 7 || scores.dryness >= 4,
        template: DiagnosisTemplate {
            condition: "Dry and Brittle Nails",
            severity: Severity::Moderate,
            description: "Your nails and cuticles are short on moisture, which leaves the nail plate stiff \
                          and prone to snapping. Restoring hydration and adding a protective layer should \
                          make a visible difference within a few weeks.",
            recommendations: &[
                "Apply cuticle oil every evening",
                "Moisturize hands at least twice a day",
                "Switch to an acetone-free polish remover",
                "Use a strengthening base coat under any polish",
                "Drink enough water and limit long hot-water soaks",
            ],
            topic_tags: &["cuticle-care", "moisturizing", "strengthening", "treatment"],
        },
    },
    ClassificationRule {
        key: "weak_nails",
        predicate: |scores| scores.brittleness >= 3 || scores.damage >= 3,
        template: DiagnosisTemplate {
            condition: "Weak Nails Needing Strength",
            severity: Severity::Moderate,
            description: "Your nails bend, tear or split more easily than they should. A strengthening \
                          routine and a protective base coat will help them hold up to daily wear.",
            recommendations: &[
                "Apply a nail strengthener two to three times a week",
                "Always start manicures with a protective base coat",
                "Keep nails at a short, manageable length while they recover",
                "Avoid using your nails as tools",
            ],
            topic_tags: &["strengthening", "treatment", "base-coat"],
        },
    },
    ClassificationRule {
        key: "dry_cuticles",
        predicate: |scores| scores.dryness >= 3,
        template: DiagnosisTemplate {
            condition: "Dry Nails and Cuticles",
            severity: Severity::Mild,
            description: "Your nails are in reasonable shape, but your cuticles and the skin around them \
                          are dry. A simple daily moisture routine will keep them soft and prevent hangnails.",
            recommendations: &[
                "Apply cuticle oil once a day",
                "Moisturize hands after washing",
                "Push cuticles back gently instead of cutting them",
            ],
            topic_tags: &["cuticle-care", "moisturizing"],
        },
    },
    ClassificationRule {
        key: "slow_growth",
        predicate: |scores| scores.growth_deficiency >= 2,
        template: DiagnosisTemplate {
            condition: "Slow Nail Growth",
            severity: Severity::Mild,
            description: "Your nails are healthy overall but grow slowly. Supporting the nail matrix with \
                          regular care and a growth treatment can help you reach your desired length.",
            recommendations: &[
                "Use a growth-supporting treatment daily",
                "Massage the nail bed to encourage circulation",
                "Keep nails protected with a base coat to prevent breakage while they grow",
                "Include protein and biotin-rich foods in your diet",
            ],
            topic_tags: &["growth", "treatment"],
        },
    },
    ClassificationRule {
        key: "healthy",
        predicate: |_| true,
        template: DiagnosisTemplate {
            condition: "Generally Healthy Nails",
            severity: Severity::Mild,
            description: "Your nails are in good condition. Keep up your current habits and add a little \
                          preventive care to keep them strong and looking their best.",
            recommendations: &[
                "Keep using a base coat under polish",
                "Apply cuticle oil a few times a week",
                "Moisturize hands regularly, especially in cold weather",
            ],
            topic_tags: &["preventive", "base-coat", "cuticle-care"],
        },
    },
];

/// The ordered rule table; the last rule always matches.
pub fn rules() -> &'static [ClassificationRule] {
    RULES
}

/// The first rule whose predicate holds for `scores`.
pub fn matching_rule(scores: &DimensionScores) -> &'static ClassificationRule {
    RULES
        .iter()
        .find(|rule| rule.matches(scores))
        .unwrap_or(&RULES[RULES.len() - 1])
}

pub fn classify(scores: &DimensionScores) -> Diagnosis {
    matching_rule(scores).diagnosis()
}
