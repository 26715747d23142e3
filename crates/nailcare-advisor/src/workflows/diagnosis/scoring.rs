use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;

/// Axis a scoring trigger feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDimension {
    Brittleness,
    Dryness,
    Damage,
    GrowthDeficiency,
}

impl ScoreDimension {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Brittleness => "brittleness",
            Self::Dryness => "dryness",
            Self::Damage => "damage",
            Self::GrowthDeficiency => "growth deficiency",
        }
    }
}

/// Accumulated severity per axis. Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DimensionScores {
    pub brittleness: u32,
    pub dryness: u32,
    pub damage: u32,
    pub growth_deficiency: u32,
}

impl DimensionScores {
    /// Combined brittleness, dryness and damage. Growth is tracked separately.
    pub fn total(&self) -> u32 {
        self.brittleness + self.dryness + self.damage
    }

    pub fn get(&self, dimension: ScoreDimension) -> u32 {
        match dimension {
            ScoreDimension::Brittleness => self.brittleness,
            ScoreDimension::Dryness => self.dryness,
            ScoreDimension::Damage => self.damage,
            ScoreDimension::GrowthDeficiency => self.growth_deficiency,
        }
    }

    fn add(&mut self, dimension: ScoreDimension, weight: u32) {
        match dimension {
            ScoreDimension::Brittleness => self.brittleness += weight,
            ScoreDimension::Dryness => self.dryness += weight,
            ScoreDimension::Damage => self.damage += weight,
            ScoreDimension::GrowthDeficiency => self.growth_deficiency += weight,
        }
    }
}

/// One fired trigger, kept so a diagnosis can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreContribution {
    pub question_id: &'static str,
    pub value: &'static str,
    pub dimension: ScoreDimension,
    pub weight: u32,
}

struct Trigger {
    question_id: &'static str,
    dimension: ScoreDimension,
    weights: &'static [(&'static str, u32)],
}

use ScoreDimension::{Brittleness, Damage, Dryness, GrowthDeficiency};

// condition-5, condition-6, appearance-2 and appearance-3 are collected but not scored.
const TRIGGERS: &[Trigger] = &[
    Trigger {
        question_id: "condition-1",
        dimension: Brittleness,
        weights: &[("brittle", 3), ("weak", 2), ("moderate", 1)],
    },
    Trigger {
        question_id: "condition-2",
        dimension: Damage,
        weights: &[("often", 3), ("sometimes", 2), ("rarely", 1)],
    },
    Trigger {
        question_id: "condition-3",
        dimension: Dryness,
        weights: &[("dry", 3), ("damaged", 2), ("overgrown", 1)],
    },
    Trigger {
        question_id: "habits-4",
        dimension: Damage,
        weights: &[("peel", 3)],
    },
    Trigger {
        question_id: "habits-4",
        dimension: Dryness,
        weights: &[("acetone", 2)],
    },
    Trigger {
        question_id: "habits-1",
        dimension: Dryness,
        weights: &[("rarely", 3), ("weekly", 1)],
    },
    Trigger {
        question_id: "habits-2",
        dimension: Damage,
        weights: &[("cut", 2)],
    },
    Trigger {
        question_id: "habits-2",
        dimension: Dryness,
        weights: &[("nothing", 2)],
    },
    Trigger {
        question_id: "habits-3",
        dimension: Damage,
        weights: &[("often", 3), ("sometimes", 2)],
    },
    Trigger {
        question_id: "condition-4",
        dimension: Damage,
        weights: &[("often", 2), ("sometimes", 1)],
    },
    Trigger {
        question_id: "appearance-1",
        dimension: GrowthDeficiency,
        weights: &[("very-slow", 2), ("slow", 1)],
    },
];

/// Reduce an answer set to dimension scores.
///
/// Only single-choice answers can fire a trigger; unknown questions and values
/// contribute nothing.
pub fn score(answers: &AnswerSet) -> DimensionScores {
    score_with_trail(answers).0
}

pub fn score_with_trail(answers: &AnswerSet) -> (DimensionScores, Vec<ScoreContribution>) {
    let mut scores = DimensionScores::default();
    let mut trail = Vec::new();

    for trigger in TRIGGERS {
        let Some(selected) = answers.single(trigger.question_id) else {
            continue;
        };

        if let Some(&(value, weight)) = trigger
            .weights
            .iter()
            .find(|(value, _)| *value == selected)
        {
            scores.add(trigger.dimension, weight);
            trail.push(ScoreContribution {
                question_id: trigger.question_id,
                value,
                dimension: trigger.dimension,
                weight,
            });
        }
    }

    (scores, trail)
}
