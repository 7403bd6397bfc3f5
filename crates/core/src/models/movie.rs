//! Movie catalog entries (`/filmes`).

use serde::{Deserialize, Serialize};

use super::{Deletable, Resource};
use crate::types::EntityId;

/// A movie as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: EntityId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "sinopse")]
    pub synopsis: String,
    /// Running time in minutes. The backend does not require a whole number.
    #[serde(rename = "duracao")]
    pub duration: f64,
    #[serde(rename = "classificacao", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(rename = "genero", default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "dataInicioExibicao", default, skip_serializing_if = "Option::is_none")]
    pub exhibition_start: Option<String>,
    #[serde(rename = "dataFimExibicao", default, skip_serializing_if = "Option::is_none")]
    pub exhibition_end: Option<String>,
}

/// Payload for creating a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "sinopse")]
    pub synopsis: String,
    #[serde(rename = "duracao")]
    pub duration: f64,
    #[serde(rename = "classificacao", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(rename = "genero", default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "dataInicioExibicao", default, skip_serializing_if = "Option::is_none")]
    pub exhibition_start: Option<String>,
    #[serde(rename = "dataFimExibicao", default, skip_serializing_if = "Option::is_none")]
    pub exhibition_end: Option<String>,
}

impl Resource for Movie {
    const PATH: &'static str = "filmes";
    type New = NewMovie;
}

impl Deletable for Movie {}
