use std::sync::Arc;

use chrono::Utc;

use cineweb_client::{ApiError, Gateway};
use cineweb_core::models::Movie;
use cineweb_core::types::Timestamp;
use cineweb_core::validation::{MovieDraft, MovieField};

use crate::forms::{FormController, SubmitOutcome};
use crate::notifier::Notifier;

pub const DELETE_CONFIRMATION: &str = "Tem certeza que deseja excluir este filme?";

/// Result of a delete request from the movie list.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Failed(ApiError),
}

/// Movie catalogue: the list plus the registration form.
pub struct MoviesPage {
    gateway: Arc<dyn Gateway>,
    notifier: Arc<dyn Notifier>,
    movies: Vec<Movie>,
    form: FormController<MovieDraft>,
}

impl MoviesPage {
    pub fn new(gateway: Arc<dyn Gateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            movies: Vec::new(),
            form: FormController::new(),
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn form(&self) -> &FormController<MovieDraft> {
        &self.form
    }

    /// Replace the list with the backend's. On failure the list is kept.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.gateway.list_movies().await {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "Loaded movies");
                self.movies = movies;
                Ok(())
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to load movies");
                Err(error)
            }
        }
    }

    pub fn edit(&mut self, field: MovieField, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    pub async fn submit(&mut self) -> SubmitOutcome<Movie> {
        self.submit_at(Utc::now()).await
    }

    /// Submit the form, refetching the list after a successful create.
    pub async fn submit_at(&mut self, now: Timestamp) -> SubmitOutcome<Movie> {
        let gateway = Arc::clone(&self.gateway);
        let outcome = self
            .form
            .submit_with(now, move |movie| async move { gateway.create_movie(&movie).await })
            .await;

        if outcome.is_created() {
            let _ = self.load().await;
        }
        outcome
    }

    /// Delete a movie after the user confirms.
    pub async fn delete(&mut self, id: &str) -> DeleteOutcome {
        if !self.notifier.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Cancelled;
        }

        match self.gateway.delete_movie(id).await {
            Ok(()) => {
                tracing::info!(movie_id = %id, "Movie deleted");
                let _ = self.load().await;
                DeleteOutcome::Deleted
            }
            Err(error) => {
                tracing::error!(movie_id = %id, error = %error, "Failed to delete movie");
                DeleteOutcome::Failed(error)
            }
        }
    }
}
