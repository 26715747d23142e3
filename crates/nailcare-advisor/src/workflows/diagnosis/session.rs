//! Wizard state for a single shopper working through the questionnaire.
//!
//! The session owns the answers while they are being collected and hands a
//! snapshot to the diagnosis service once every question is answered. Each
//! submission carries a token; restarting the session invalidates tokens that
//! are still in flight so a slow catalog response cannot overwrite newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::answers::{AnswerSet, AnswerSetError, AnswerValue};
use super::catalog::CatalogReader;
use super::questions::{Question, QuestionBank};
use super::service::{DiagnosisService, RecommendationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionToken(u64);

impl SubmissionToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic token source; only the most recently issued token is current.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    latest: AtomicU64,
}

impl SubmissionGuard {
    pub fn issue(&self) -> SubmissionToken {
        SubmissionToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Retire every outstanding token without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, token: SubmissionToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Answer(#[from] AnswerSetError),
    #[error("questionnaire is incomplete: '{0}' has not been answered")]
    Incomplete(String),
    #[error("every question has already been answered")]
    Finished,
    #[error("submission was superseded by a restart or newer submission")]
    Superseded,
}

#[derive(Debug)]
pub struct QuestionnaireSession {
    bank: Arc<QuestionBank>,
    current_index: usize,
    answers: AnswerSet,
    guard: Arc<SubmissionGuard>,
}

impl QuestionnaireSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            current_index: 0,
            answers: AnswerSet::new(),
            guard: Arc::new(SubmissionGuard::default()),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.questions().get(self.current_index)
    }

    pub fn is_complete(&self) -> bool {
        self.bank
            .questions()
            .iter()
            .all(|question| self.answers.get(question.id).is_some())
    }

    /// Record an answer for the current question and advance.
    pub fn answer(&mut self, value: AnswerValue) -> Result<(), SessionError> {
        let question_id = self.current_question().ok_or(SessionError::Finished)?.id;
        self.bank.check_answer(question_id, &value)?;
        self.answers.insert(question_id, value);
        self.current_index += 1;
        Ok(())
    }

    /// Step back one question. Earlier answers are kept until overwritten.
    pub fn back(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Discard all answers and retire any submission still in flight.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answers = AnswerSet::new();
        self.guard.invalidate();
    }

    /// Snapshot the completed answers under a fresh submission token.
    pub fn begin_submission(&self) -> Result<PendingSubmission, SessionError> {
        if let Some(missing) = self
            .bank
            .questions()
            .iter()
            .find(|question| self.answers.get(question.id).is_none())
        {
            return Err(SessionError::Incomplete(missing.id.to_string()));
        }

        Ok(PendingSubmission {
            token: self.guard.issue(),
            answers: self.answers.clone(),
            guard: Arc::clone(&self.guard),
        })
    }
}

/// A submitted answer set waiting on the catalog.
#[derive(Debug)]
pub struct PendingSubmission {
    token: SubmissionToken,
    answers: AnswerSet,
    guard: Arc<SubmissionGuard>,
}

impl PendingSubmission {
    pub fn token(&self) -> SubmissionToken {
        self.token
    }

    /// Run the pipeline; the result is discarded if the session moved on meanwhile.
    pub async fn resolve<C>(
        self,
        service: &DiagnosisService<C>,
    ) -> Result<RecommendationResult, SessionError>
    where
        C: CatalogReader + 'static,
    {
        let result = service.submit(&self.answers).await?;

        if !self.guard.is_current(self.token) {
            debug!(token = self.token.value(), "dropping stale diagnosis result");
            return Err(SessionError::Superseded);
        }

        Ok(result)
    }
}
