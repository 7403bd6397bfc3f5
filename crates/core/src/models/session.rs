//! Scheduled screenings (`/sessoes`).

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::EntityId;

/// A screening of a movie in a room, as stored by the backend.
///
/// `date_time` is kept exactly as the backend returns it; see
/// [`crate::datetime`] for parsing and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "filmeId")]
    pub movie_id: EntityId,
    #[serde(rename = "salaId")]
    pub room_id: EntityId,
    #[serde(rename = "dataHora")]
    pub date_time: String,
}

impl Session {
    /// The session id, if the backend assigned a non-empty one.
    pub fn valid_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Payload for scheduling a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    #[serde(rename = "filmeId")]
    pub movie_id: EntityId,
    #[serde(rename = "salaId")]
    pub room_id: EntityId,
    #[serde(rename = "dataHora")]
    pub date_time: String,
}

impl Resource for Session {
    const PATH: &'static str = "sessoes";
    type New = NewSession;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn session_without_id_deserializes() {
        let session: Session = serde_json::from_value(json!({
            "filmeId": "f1",
            "salaId": "r1",
            "dataHora": "2026-10-16T14:30"
        }))
        .unwrap();

        assert_eq!(session.id, None);
        assert_eq!(session.valid_id(), None);
    }

    #[test]
    fn empty_id_is_not_a_valid_reference() {
        let session = Session {
            id: Some(String::new()),
            movie_id: "f1".into(),
            room_id: "r1".into(),
            date_time: String::new(),
        };
        assert_eq!(session.valid_id(), None);
    }
}
