//! Session scheduling rules.
//!
//! Besides the required references, a session may not be scheduled
//! before the moment of validation.

use std::str::FromStr;

use validator::Validate;

use super::{parse_field, Draft, FieldErrors, FormField};
use crate::datetime::parse_date_time;
use crate::error::CoreError;
use crate::models::NewSession;
use crate::types::Timestamp;

pub const MOVIE_REQUIRED: &str = "Selecione um filme";
pub const ROOM_REQUIRED: &str = "Selecione uma sala";
pub const DATE_TIME_REQUIRED: &str = "Informe a data e hora da sessão";
pub const DATE_TIME_RETROACTIVE: &str = "A data da sessão não pode ser retroativa";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionField {
    MovieId,
    RoomId,
    DateTime,
}

impl FormField for SessionField {
    const ALL: &'static [Self] = &[Self::MovieId, Self::RoomId, Self::DateTime];

    fn key(self) -> &'static str {
        match self {
            Self::MovieId => "filmeId",
            Self::RoomId => "salaId",
            Self::DateTime => "dataHora",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::MovieId => "Filme",
            Self::RoomId => "Sala",
            Self::DateTime => "Data e hora",
        }
    }

    fn from_member(member: &str) -> Option<Self> {
        match member {
            "movie_id" => Some(Self::MovieId),
            "room_id" => Some(Self::RoomId),
            "date_time" => Some(Self::DateTime),
            _ => None,
        }
    }
}

impl FromStr for SessionField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(
            "session",
            s,
            &[
                ("movie", Self::MovieId),
                ("movie_id", Self::MovieId),
                ("room", Self::RoomId),
                ("room_id", Self::RoomId),
                ("date_time", Self::DateTime),
                ("datetime", Self::DateTime),
            ],
        )
    }
}

/// Raw session form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    pub movie_id: String,
    pub room_id: String,
    pub date_time: String,
}

#[derive(Debug, Validate)]
struct SessionInput {
    #[validate(length(min = 1, message = "Selecione um filme"))]
    movie_id: String,

    #[validate(length(min = 1, message = "Selecione uma sala"))]
    room_id: String,

    #[validate(length(min = 1, message = "Informe a data e hora da sessão"))]
    date_time: String,
}

impl Draft for SessionDraft {
    type Field = SessionField;
    type Output = NewSession;

    const ENTITY: &'static str = "session";

    fn set(&mut self, field: SessionField, value: String) {
        match field {
            SessionField::MovieId => self.movie_id = value,
            SessionField::RoomId => self.room_id = value,
            SessionField::DateTime => self.date_time = value,
        }
    }

    fn get(&self, field: SessionField) -> &str {
        match field {
            SessionField::MovieId => &self.movie_id,
            SessionField::RoomId => &self.room_id,
            SessionField::DateTime => &self.date_time,
        }
    }

    /// A date/time equal to `now` is accepted.
    fn validate(&self, now: Timestamp) -> Result<NewSession, FieldErrors<SessionField>> {
        let input = SessionInput {
            movie_id: self.movie_id.trim().to_string(),
            room_id: self.room_id.trim().to_string(),
            date_time: self.date_time.trim().to_string(),
        };

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.absorb(&e);
        }

        if !errors.contains(SessionField::DateTime) {
            let not_past = parse_date_time(&input.date_time).is_some_and(|ts| ts >= now);
            if !not_past {
                errors.insert(SessionField::DateTime, DATE_TIME_RETROACTIVE);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewSession {
            movie_id: input.movie_id,
            room_id: input.room_id,
            date_time: input.date_time,
        })
    }
}
