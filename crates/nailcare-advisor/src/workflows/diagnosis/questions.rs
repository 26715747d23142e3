use serde::Serialize;

use super::answers::{AnswerSet, AnswerSetError, AnswerValue};

/// Whether a question accepts one option or any subset of its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Display grouping for the wizard. Scoring never looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionDimension {
    Condition,
    Habits,
    Appearance,
}

impl QuestionDimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Condition, Self::Habits, Self::Appearance]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Condition => "Nail Condition",
            Self::Habits => "Care Habits",
            Self::Appearance => "Appearance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub mode: SelectionMode,
    pub dimension: QuestionDimension,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// The ordered questionnaire presented by the storefront wizard.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    pub fn questions_for_dimension(&self, dimension: QuestionDimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    /// Check a single response against the declared question definition.
    pub fn check_answer(
        &self,
        question_id: &str,
        value: &AnswerValue,
    ) -> Result<(), AnswerSetError> {
        let question = self
            .get(question_id)
            .ok_or_else(|| AnswerSetError::UnknownQuestion(question_id.to_string()))?;

        match (question.mode, value) {
            (SelectionMode::Single, AnswerValue::Single(selected)) => {
                if !question.has_option(selected) {
                    return Err(AnswerSetError::UnknownOption {
                        question_id: question.id.to_string(),
                        value: selected.clone(),
                    });
                }
            }
            (SelectionMode::Multiple, AnswerValue::Multiple(selected)) => {
                if selected.is_empty() {
                    return Err(AnswerSetError::EmptySelection(question.id.to_string()));
                }
                if let Some(unknown) = selected.iter().find(|value| !question.has_option(value)) {
                    return Err(AnswerSetError::UnknownOption {
                        question_id: question.id.to_string(),
                        value: unknown.clone(),
                    });
                }
            }
            (expected, _) => {
                return Err(AnswerSetError::SelectionMode {
                    question_id: question.id.to_string(),
                    expected,
                });
            }
        }

        Ok(())
    }

    /// Reject answer sets that are incomplete or reference undeclared values.
    pub fn validate(&self, answers: &AnswerSet) -> Result<(), AnswerSetError> {
        for (question_id, value) in answers.iter() {
            self.check_answer(question_id, value)?;
        }

        if let Some(missing) = self
            .questions
            .iter()
            .find(|question| answers.get(question.id).is_none())
        {
            return Err(AnswerSetError::MissingAnswer(missing.id.to_string()));
        }

        Ok(())
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

const fn opt(value: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption { value, label }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "condition-1",
            prompt: "How would you describe the strength of your natural nails?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Condition,
            options: vec![
                opt("strong", "Strong and flexible"),
                opt("moderate", "Mostly strong, bends now and then"),
                opt("weak", "Weak, they bend or tear easily"),
                opt("brittle", "Brittle, they snap or crack"),
            ],
        },
        Question {
            id: "condition-2",
            prompt: "How often do your nails peel or split into layers?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Condition,
            options: vec![
                opt("never", "Never"),
                opt("rarely", "Rarely"),
                opt("sometimes", "Sometimes"),
                opt("often", "Often"),
            ],
        },
        Question {
            id: "condition-3",
            prompt: "What do your cuticles usually look like?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Condition,
            options: vec![
                opt("healthy", "Soft and neat"),
                opt("overgrown", "Overgrown onto the nail plate"),
                opt("damaged", "Torn, with hangnails"),
                opt("dry", "Dry, rough or cracked"),
            ],
        },
        Question {
            id: "condition-4",
            prompt: "How often does polish, gel or the nail itself lift at the edges?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Condition,
            options: vec![
                opt("never", "Never"),
                opt("sometimes", "Sometimes"),
                opt("often", "Often"),
            ],
        },
        Question {
            id: "condition-5",
            prompt: "Do you notice any discoloration? Select all that apply.",
            mode: SelectionMode::Multiple,
            dimension: QuestionDimension::Condition,
            options: vec![
                opt("none", "No discoloration"),
                opt("yellowing", "Yellowing"),
                opt("white-spots", "White spots"),
                opt("dark-streaks", "Dark streaks"),
            ],
        },
        Question {
            id: "condition-6",
            prompt: "How would you describe the surface texture of your nails?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Condition,
            options: vec![
                opt("smooth", "Smooth"),
                opt("slight", "Slight ridges"),
                opt("pronounced", "Pronounced ridges"),
            ],
        },
        Question {
            id: "habits-1",
            prompt: "How often do you moisturize your hands and cuticles?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Habits,
            options: vec![
                opt("daily", "Every day"),
                opt("weekly", "A few times a week"),
                opt("rarely", "Rarely or never"),
            ],
        },
        Question {
            id: "habits-2",
            prompt: "How do you usually take care of your cuticles?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Habits,
            options: vec![
                opt("oil", "Apply cuticle oil"),
                opt("push", "Gently push them back"),
                opt("cut", "Cut or trim them"),
                opt("nothing", "Nothing in particular"),
            ],
        },
        Question {
            id: "habits-3",
            prompt: "Do you bite or pick at your nails?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Habits,
            options: vec![
                opt("never", "Never"),
                opt("sometimes", "Sometimes"),
                opt("often", "Often"),
            ],
        },
        Question {
            id: "habits-4",
            prompt: "How do you usually remove nail polish?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Habits,
            options: vec![
                opt("non-acetone", "Non-acetone remover"),
                opt("acetone", "Acetone remover"),
                opt("peel", "Peel or pick it off"),
                opt("no-polish", "I don't wear polish"),
            ],
        },
        Question {
            id: "appearance-1",
            prompt: "How quickly do your nails grow?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Appearance,
            options: vec![
                opt("fast", "Fast, I trim them weekly"),
                opt("normal", "Normal"),
                opt("slow", "Slow"),
                opt("very-slow", "Very slow, they barely grow"),
            ],
        },
        Question {
            id: "appearance-2",
            prompt: "What is the natural shape of your nails?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Appearance,
            options: vec![
                opt("oval", "Oval"),
                opt("square", "Square"),
                opt("round", "Round"),
                opt("almond", "Almond"),
            ],
        },
        Question {
            id: "appearance-3",
            prompt: "How long is your natural nail bed?",
            mode: SelectionMode::Single,
            dimension: QuestionDimension::Appearance,
            options: vec![
                opt("long", "Long"),
                opt("average", "Average"),
                opt("short", "Short"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_bank_has_unique_ids_in_order() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 13);

        let ids: HashSet<_> = bank.questions().iter().map(|question| question.id).collect();
        assert_eq!(ids.len(), bank.len());
        assert_eq!(bank.questions()[0].id, "condition-1");
        assert_eq!(bank.position("appearance-1"), Some(10));
    }

    #[test]
    fn every_question_offers_at_least_three_options() {
        let bank = QuestionBank::standard();
        for question in bank.questions() {
            assert!(question.options.len() >= 3, "{} has too few options", question.id);
        }
    }

    #[test]
    fn dimensions_partition_the_bank() {
        let bank = QuestionBank::standard();
        let total: usize = QuestionDimension::ordered()
            .into_iter()
            .map(|dimension| bank.questions_for_dimension(dimension).len())
            .sum();
        assert_eq!(total, bank.len());
    }

    #[test]
    fn check_answer_rejects_mode_mismatch() {
        let bank = QuestionBank::standard();
        let err = bank
            .check_answer("condition-5", &AnswerValue::single("none"))
            .expect_err("multiple-choice question needs a set");
        assert!(matches!(
            err,
            AnswerSetError::SelectionMode {
                expected: SelectionMode::Multiple,
                ..
            }
        ));
    }
}
