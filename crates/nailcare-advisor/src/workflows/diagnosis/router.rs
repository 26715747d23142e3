use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use super::answers::AnswerSet;
use super::catalog::CatalogReader;
use super::questions::{Question, QuestionDimension};
use super::service::DiagnosisService;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub(crate) struct QuestionBankView<'a> {
    pub(crate) total: usize,
    pub(crate) dimensions: Vec<DimensionView<'a>>,
    pub(crate) questions: &'a [Question],
}

#[derive(Debug, Serialize)]
pub(crate) struct DimensionView<'a> {
    pub(crate) dimension: QuestionDimension,
    pub(crate) label: &'static str,
    pub(crate) question_ids: Vec<&'a str>,
}

/// Router builder exposing the questionnaire and the diagnosis submission.
pub fn diagnosis_router<C>(service: Arc<DiagnosisService<C>>) -> Router
where
    C: CatalogReader + 'static,
{
    Router::new()
        .route("/api/v1/diagnosis", post(submit_handler::<C>))
        .route("/api/v1/diagnosis/questions", get(questions_handler::<C>))
        .with_state(service)
}

pub(crate) async fn questions_handler<C>(
    State(service): State<Arc<DiagnosisService<C>>>,
) -> Response
where
    C: CatalogReader + 'static,
{
    let bank = service.bank();
    let dimensions = QuestionDimension::ordered()
        .into_iter()
        .map(|dimension| DimensionView {
            dimension,
            label: dimension.label(),
            question_ids: bank
                .questions_for_dimension(dimension)
                .into_iter()
                .map(|question| question.id)
                .collect(),
        })
        .collect();

    let view = QuestionBankView {
        total: bank.len(),
        dimensions,
        questions: bank.questions(),
    };

    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn submit_handler<C>(
    State(service): State<Arc<DiagnosisService<C>>>,
    payload: Result<Json<AnswerSet>, JsonRejection>,
) -> Response
where
    C: CatalogReader + 'static,
{
    let answers = match payload {
        Ok(Json(answers)) => answers,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match service.submit(&answers).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
