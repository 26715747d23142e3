use std::sync::Mutex;

use axum::response::Response;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::workflows::diagnosis::catalog::{
    CatalogError, CatalogProduct, CatalogReader, ProductCategory, StaticCatalog,
};
use crate::workflows::diagnosis::{AnswerSet, AnswerValue, QuestionBank, SelectionMode};

/// A complete answer set with the mildest option chosen everywhere.
pub(super) fn mildest_answers() -> AnswerSet {
    let bank = QuestionBank::standard();
    let mut answers = AnswerSet::new();
    for question in bank.questions() {
        let value = match question.mode {
            SelectionMode::Single => AnswerValue::single(question.options[0].value),
            SelectionMode::Multiple => AnswerValue::multiple([question.options[0].value]),
        };
        answers.insert(question.id, value);
    }
    answers
}

/// Mildest answers with the given single-choice overrides applied.
pub(super) fn answers_with(overrides: &[(&str, &str)]) -> AnswerSet {
    let mut answers = mildest_answers();
    for (question_id, value) in overrides {
        answers.insert(*question_id, AnswerValue::single(*value));
    }
    answers
}

pub(super) fn product(id: &str, name: &str) -> CatalogProduct {
    CatalogProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price: 10.0,
        image: None,
        images: Vec::new(),
        featured: false,
        category: None,
    }
}

pub(super) fn featured(id: &str, name: &str) -> CatalogProduct {
    CatalogProduct {
        featured: true,
        ..product(id, name)
    }
}

pub(super) fn in_category(id: &str, name: &str, category: &str) -> CatalogProduct {
    CatalogProduct {
        category: Some(ProductCategory {
            id: None,
            name: category.to_string(),
        }),
        ..product(id, name)
    }
}

pub(super) fn care_catalog() -> Vec<CatalogProduct> {
    vec![
        product("p-1", "Cherry Red Lacquer"),
        CatalogProduct {
            description: Some("Keratin strengthening formula".to_string()),
            ..product("p-2", "Diamond Shield")
        },
        featured("p-3", "Cuticle OIL Treatment"),
        in_category("p-4", "Rose Hand Balm", "Moisturizers"),
        featured("p-5", "Glitter Top Coat"),
    ]
}

pub(super) fn static_catalog(products: Vec<CatalogProduct>) -> StaticCatalog {
    StaticCatalog::new(products)
}

#[derive(Debug, Default)]
pub(super) struct FailingCatalog;

impl CatalogReader for FailingCatalog {
    async fn list(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        Err(CatalogError::Status(503))
    }
}

/// Catalog whose response is released by the test through a oneshot channel.
#[derive(Debug)]
pub(super) struct GatedCatalog {
    release: Mutex<Option<oneshot::Receiver<Vec<CatalogProduct>>>>,
}

impl GatedCatalog {
    pub(super) fn new() -> (Self, oneshot::Sender<Vec<CatalogProduct>>) {
        let (sender, receiver) = oneshot::channel();
        let catalog = Self {
            release: Mutex::new(Some(receiver)),
        };
        (catalog, sender)
    }
}

impl CatalogReader for GatedCatalog {
    async fn list(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        let receiver = self
            .release
            .lock()
            .expect("gate mutex poisoned")
            .take()
            .ok_or_else(|| CatalogError::Unavailable("gate already used".to_string()))?;
        receiver
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
