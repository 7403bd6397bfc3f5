//! Movie form rules.

use std::str::FromStr;

use validator::Validate;

use super::{optional_text, parse_decimal, parse_field, Draft, FieldErrors, FormField};
use crate::error::CoreError;
use crate::models::NewMovie;
use crate::types::Timestamp;

pub const TITLE_REQUIRED: &str = "Título é obrigatório";
pub const SYNOPSIS_REQUIRED: &str = "Sinopse é obrigatória";
pub const DURATION_NOT_A_NUMBER: &str = "Duração deve ser um número";
pub const DURATION_NOT_POSITIVE: &str = "A duração deve ser maior que 0";

/// Fields of the movie form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovieField {
    Title,
    Synopsis,
    Duration,
    Rating,
    Genre,
    ExhibitionStart,
    ExhibitionEnd,
}

impl FormField for MovieField {
    const ALL: &'static [Self] = &[
        Self::Title,
        Self::Synopsis,
        Self::Duration,
        Self::Rating,
        Self::Genre,
        Self::ExhibitionStart,
        Self::ExhibitionEnd,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Title => "titulo",
            Self::Synopsis => "sinopse",
            Self::Duration => "duracao",
            Self::Rating => "classificacao",
            Self::Genre => "genero",
            Self::ExhibitionStart => "dataInicioExibicao",
            Self::ExhibitionEnd => "dataFimExibicao",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Título",
            Self::Synopsis => "Sinopse",
            Self::Duration => "Duração (min)",
            Self::Rating => "Classificação",
            Self::Genre => "Gênero",
            Self::ExhibitionStart => "Início da exibição",
            Self::ExhibitionEnd => "Fim da exibição",
        }
    }

    fn from_member(member: &str) -> Option<Self> {
        match member {
            "title" => Some(Self::Title),
            "synopsis" => Some(Self::Synopsis),
            "duration" => Some(Self::Duration),
            _ => None,
        }
    }
}

impl FromStr for MovieField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(
            "movie",
            s,
            &[
                ("title", Self::Title),
                ("synopsis", Self::Synopsis),
                ("duration", Self::Duration),
                ("rating", Self::Rating),
                ("genre", Self::Genre),
                ("exhibition_start", Self::ExhibitionStart),
                ("exhibition_end", Self::ExhibitionEnd),
            ],
        )
    }
}

/// Raw movie form contents. The initial value is all blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub synopsis: String,
    pub duration: String,
    pub rating: String,
    pub genre: String,
    pub exhibition_start: String,
    pub exhibition_end: String,
}

#[derive(Debug, Validate)]
struct MovieInput {
    #[validate(length(min = 1, message = "Título é obrigatório"))]
    title: String,

    #[validate(length(min = 1, message = "Sinopse é obrigatória"))]
    synopsis: String,

    #[validate(
        required(message = "Duração deve ser um número"),
        range(exclusive_min = 0.0, message = "A duração deve ser maior que 0")
    )]
    duration: Option<f64>,
}

impl Draft for MovieDraft {
    type Field = MovieField;
    type Output = NewMovie;

    const ENTITY: &'static str = "movie";

    fn set(&mut self, field: MovieField, value: String) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::Synopsis => &mut self.synopsis,
            MovieField::Duration => &mut self.duration,
            MovieField::Rating => &mut self.rating,
            MovieField::Genre => &mut self.genre,
            MovieField::ExhibitionStart => &mut self.exhibition_start,
            MovieField::ExhibitionEnd => &mut self.exhibition_end,
        };
        *slot = value;
    }

    fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Synopsis => &self.synopsis,
            MovieField::Duration => &self.duration,
            MovieField::Rating => &self.rating,
            MovieField::Genre => &self.genre,
            MovieField::ExhibitionStart => &self.exhibition_start,
            MovieField::ExhibitionEnd => &self.exhibition_end,
        }
    }

    /// Title, synopsis and a positive duration are required; the
    /// remaining fields are free text and dropped when blank.
    fn validate(&self, _now: Timestamp) -> Result<NewMovie, FieldErrors<MovieField>> {
        let input = MovieInput {
            title: self.title.clone(),
            synopsis: self.synopsis.clone(),
            duration: parse_decimal(&self.duration),
        };

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.absorb(&e);
        }

        match input.duration {
            Some(duration) if errors.is_empty() => Ok(NewMovie {
                title: input.title,
                synopsis: input.synopsis,
                duration,
                rating: optional_text(&self.rating),
                genre: optional_text(&self.genre),
                exhibition_start: optional_text(&self.exhibition_start),
                exhibition_end: optional_text(&self.exhibition_end),
            }),
            _ => Err(errors),
        }
    }
}
