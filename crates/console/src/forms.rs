//! Generic form controller.
//!
//! A [`FormController`] owns one draft, its field errors and a status:
//!
//! ```text
//! Idle -> Editing -> Submitting -> Idle                (created)
//!                               -> Editing with errors (invalid or failed)
//! ```
//!
//! Validation failures never reach the network. A failed create keeps the
//! draft so the user can retry.

use std::future::Future;

use cineweb_client::ApiError;
use cineweb_core::types::Timestamp;
use cineweb_core::validation::{Draft, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Editing,
    Submitting,
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome<R> {
    /// The backend stored the record; the form was reset.
    Created(R),
    /// Validation failed; see the controller's errors. No request was made.
    Invalid,
    /// The backend call failed; the draft is preserved.
    Failed(ApiError),
    /// A submit is already in flight.
    Busy,
}

impl<R> SubmitOutcome<R> {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

pub struct FormController<D: Draft> {
    draft: D,
    errors: FieldErrors<D::Field>,
    status: FormStatus,
}

impl<D: Draft> FormController<D> {
    pub fn new() -> Self {
        Self::with_draft(D::default())
    }

    /// Start from a pre-filled draft.
    pub fn with_draft(draft: D) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
            status: FormStatus::Idle,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors<D::Field> {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Update one field and clear its previous error.
    pub fn edit(&mut self, field: D::Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
        self.errors.clear(field);
        self.status = FormStatus::Editing;
    }

    /// Set a field the program controls, leaving errors and status alone.
    pub fn prefill(&mut self, field: D::Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Back to the blank initial draft with no errors.
    ///
    /// Also recovers a form whose submit future was dropped mid-flight.
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.errors.clear_all();
        self.status = FormStatus::Idle;
    }

    /// Validate the draft at `now` and, if valid, hand the payload to `create`.
    pub async fn submit_with<R, F, Fut>(&mut self, now: Timestamp, create: F) -> SubmitOutcome<R>
    where
        F: FnOnce(D::Output) -> Fut,
        Fut: Future<Output = Result<R, ApiError>>,
    {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }
        self.status = FormStatus::Submitting;

        let payload = match self.draft.validate(now) {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::debug!(entity = D::ENTITY, errors = %errors, "Form rejected by validation");
                self.errors = errors;
                self.status = FormStatus::Editing;
                return SubmitOutcome::Invalid;
            }
        };

        match create(payload).await {
            Ok(record) => {
                tracing::info!(entity = D::ENTITY, "Record created");
                self.reset();
                SubmitOutcome::Created(record)
            }
            Err(error) => {
                tracing::error!(entity = D::ENTITY, error = %error, "Failed to create record");
                self.status = FormStatus::Editing;
                SubmitOutcome::Failed(error)
            }
        }
    }
}

impl<D: Draft> Default for FormController<D> {
    fn default() -> Self {
        Self::new()
    }
}
