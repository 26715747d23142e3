use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::answers::{AnswerSet, AnswerSetError};
use super::catalog::{CatalogProduct, CatalogReader};
use super::classifier::{classify, Diagnosis};
use super::matcher::match_products;
use super::questions::QuestionBank;
use super::scoring::score;

/// Payload handed back to the storefront after a completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub diagnosis: Diagnosis,
    pub recommended_products: Vec<CatalogProduct>,
}

/// Service composing scoring, classification, the catalog fetch and matching.
pub struct DiagnosisService<C> {
    bank: Arc<QuestionBank>,
    catalog: Arc<C>,
}

impl<C> DiagnosisService<C>
where
    C: CatalogReader + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_bank(Arc::new(QuestionBank::standard()), catalog)
    }

    pub fn with_bank(bank: Arc<QuestionBank>, catalog: Arc<C>) -> Self {
        Self { bank, catalog }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Score and classify without touching the catalog.
    pub fn diagnose(&self, answers: &AnswerSet) -> Diagnosis {
        classify(&score(answers))
    }

    /// Run the full pipeline. Catalog failures degrade to an empty product list.
    pub async fn recommend(&self, answers: &AnswerSet) -> RecommendationResult {
        let diagnosis = self.diagnose(answers);

        let catalog = match self.catalog.list().await {
            Ok(products) => products,
            Err(err) => {
                warn!(error = %err, "catalog unavailable, continuing without products");
                Vec::new()
            }
        };

        let recommended_products = match_products(&diagnosis.topic_tags, &catalog);

        info!(
            condition = %diagnosis.condition,
            severity = %diagnosis.severity,
            catalog_size = catalog.len(),
            recommended = recommended_products.len(),
            "diagnosis completed"
        );

        RecommendationResult {
            diagnosis,
            recommended_products,
        }
    }

    /// Validate a submitted answer set against the question bank, then recommend.
    pub async fn submit(
        &self,
        answers: &AnswerSet,
    ) -> Result<RecommendationResult, AnswerSetError> {
        self.bank.validate(answers)?;
        Ok(self.recommend(answers).await)
    }
}
