//! Questionnaire-driven nail diagnosis and product recommendation.
//!
//! Answers are reduced to dimension scores, classified through an ordered rule
//! table, and the resulting topic tags are matched against the storefront catalog.

pub mod answers;
pub mod catalog;
pub mod classifier;
pub mod matcher;
pub mod questions;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, AnswerSetError, AnswerValue};
pub use catalog::{
    CatalogError, CatalogProduct, CatalogReader, ConfiguredCatalog, HttpCatalogReader,
    ProductCategory, StaticCatalog,
};
pub use classifier::{classify, Diagnosis, Severity};
pub use matcher::{match_products, MAX_RECOMMENDATIONS};
pub use questions::{AnswerOption, Question, QuestionBank, QuestionDimension, SelectionMode};
pub use router::diagnosis_router;
pub use scoring::{score, score_with_trail, DimensionScores, ScoreContribution, ScoreDimension};
pub use service::{DiagnosisService, RecommendationResult};
pub use session::{PendingSubmission, QuestionnaireSession, SessionError, SubmissionToken};
