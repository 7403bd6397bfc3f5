use std::sync::Arc;

use cineweb_client::{ApiError, Gateway};
use cineweb_core::models::{Movie, Session, Ticket};

/// Read-only list of sold tickets.
///
/// Sessions and movies are fetched alongside so each ticket can be shown
/// with its movie title.
pub struct TicketsPage {
    gateway: Arc<dyn Gateway>,
    tickets: Vec<Ticket>,
    sessions: Vec<Session>,
    movies: Vec<Movie>,
}

impl TicketsPage {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            tickets: Vec::new(),
            sessions: Vec::new(),
            movies: Vec::new(),
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        let gateway = &self.gateway;
        let (tickets, sessions, movies) = tokio::try_join!(
            gateway.list_tickets(),
            gateway.list_sessions(),
            gateway.list_movies(),
        )
        .map_err(|error| {
            tracing::error!(error = %error, "Failed to load tickets");
            error
        })?;

        self.tickets = tickets;
        self.sessions = sessions;
        self.movies = movies;
        Ok(())
    }
}
