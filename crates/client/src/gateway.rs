//! Backend operations used by the console pages.

use async_trait::async_trait;

use cineweb_core::models::{
    Movie, NewMovie, NewRoom, NewSession, NewTicket, Room, Session, Ticket,
};

use crate::api::{ApiError, CinemaApi};

/// The list/create/delete operations the front end needs, one method per
/// entity and action.
///
/// [`CinemaApi`] is the HTTP implementation; tests substitute an in-memory one.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError>;
    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, ApiError>;
    async fn delete_movie(&self, id: &str) -> Result<(), ApiError>;

    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;
    async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError>;

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError>;
    async fn create_session(&self, session: &NewSession) -> Result<Session, ApiError>;

    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError>;
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, ApiError>;
}

#[async_trait]
impl Gateway for CinemaApi {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.list::<Movie>().await
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        self.create::<Movie>(movie).await
    }

    async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<Movie>(id).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.list::<Room>().await
    }

    async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.create::<Room>(room).await
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.list::<Session>().await
    }

    async fn create_session(&self, session: &NewSession) -> Result<Session, ApiError> {
        self.create::<Session>(session).await
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.list::<Ticket>().await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, ApiError> {
        self.create::<Ticket>(ticket).await
    }
}
