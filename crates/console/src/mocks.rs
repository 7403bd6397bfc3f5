//! In-memory gateway and notifier for exercising pages without a backend.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use cineweb_client::{ApiError, Gateway};
use cineweb_core::models::{
    Movie, NewMovie, NewRoom, NewSession, NewTicket, Room, Session, Ticket,
};

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct GatewayState {
    next_id: u64,
    movies: Vec<Movie>,
    rooms: Vec<Room>,
    sessions: Vec<Session>,
    tickets: Vec<Ticket>,
    fail_next: Option<u16>,
    stall_next: bool,
    calls: Vec<&'static str>,
}

impl GatewayState {
    /// Record the call and consume a pending injected failure.
    fn enter(&mut self, call: &'static str) -> Result<(), ApiError> {
        self.calls.push(call);
        match self.fail_next.take() {
            Some(status) => Err(ApiError::Status {
                status,
                body: "injected failure".into(),
            }),
            None => Ok(()),
        }
    }

    /// Consume a pending stall request.
    fn take_stall(&mut self) -> bool {
        std::mem::take(&mut self.stall_next)
    }

    fn assign_id(&mut self) -> String {
        self.next_id += 1;
        format!("id{}", self.next_id)
    }
}

/// Mock backend storing records in memory.
///
/// Ids are assigned as `id1`, `id2`, ... Deleting an unknown movie fails
/// with status 404, like the real backend.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    state: Mutex<GatewayState>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn seed_movie(&self, movie: Movie) {
        self.state().movies.push(movie);
    }

    pub fn seed_room(&self, room: Room) {
        self.state().rooms.push(room);
    }

    pub fn seed_session(&self, session: Session) {
        self.state().sessions.push(session);
    }

    /// Make the next call fail with `status`.
    pub fn fail_next(&self, status: u16) {
        self.state().fail_next = Some(status);
    }

    /// Make the next call hang forever, like a backend that never answers.
    pub fn stall_next(&self) {
        self.state().stall_next = true;
    }

    /// Names of the operations invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state().calls.clone()
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.state().movies.clone()
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.state().tickets.clone()
    }

    /// Record `call`, then fail or stall it if that was requested.
    async fn begin(&self, call: &'static str) -> Result<(), ApiError> {
        let stalled = {
            let mut state = self.state();
            state.enter(call)?;
            state.take_stall()
        };
        if stalled {
            std::future::pending::<()>().await;
        }
        Ok(())
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.begin("list_movies").await?;
        Ok(self.state().movies.clone())
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        self.begin("create_movie").await?;
        let mut state = self.state();
        let created = Movie {
            id: state.assign_id(),
            title: movie.title.clone(),
            synopsis: movie.synopsis.clone(),
            duration: movie.duration,
            rating: movie.rating.clone(),
            genre: movie.genre.clone(),
            exhibition_start: movie.exhibition_start.clone(),
            exhibition_end: movie.exhibition_end.clone(),
        };
        state.movies.push(created.clone());
        Ok(created)
    }

    async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        self.begin("delete_movie").await?;
        let mut state = self.state();
        let index = state
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                body: "Not Found".into(),
            })?;
        state.movies.remove(index);
        Ok(())
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.begin("list_rooms").await?;
        Ok(self.state().rooms.clone())
    }

    async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.begin("create_room").await?;
        let mut state = self.state();
        let created = Room {
            id: state.assign_id(),
            number: room.number,
            capacity: room.capacity,
        };
        state.rooms.push(created.clone());
        Ok(created)
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.begin("list_sessions").await?;
        Ok(self.state().sessions.clone())
    }

    async fn create_session(&self, session: &NewSession) -> Result<Session, ApiError> {
        self.begin("create_session").await?;
        let mut state = self.state();
        let created = Session {
            id: Some(state.assign_id()),
            movie_id: session.movie_id.clone(),
            room_id: session.room_id.clone(),
            date_time: session.date_time.clone(),
        };
        state.sessions.push(created.clone());
        Ok(created)
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.begin("list_tickets").await?;
        Ok(self.state().tickets.clone())
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, ApiError> {
        self.begin("create_ticket").await?;
        let mut state = self.state();
        let created = Ticket {
            id: Some(state.assign_id()),
            session_id: ticket.session_id.clone(),
            kind: ticket.kind,
            price: ticket.price,
        };
        state.tickets.push(created.clone());
        Ok(created)
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Notifier that records every message and answers confirmations with a
/// fixed reply.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    answer: bool,
    alerts: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// A notifier that answers every confirmation with `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl crate::notifier::Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.questions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.answer
    }
}
