//! Exhibition rooms (`/salas`).

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::EntityId;

/// A room as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: EntityId,
    #[serde(rename = "numero")]
    pub number: f64,
    /// Seats available in the room.
    #[serde(rename = "capacidade")]
    pub capacity: f64,
}

/// Payload for creating a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    #[serde(rename = "numero")]
    pub number: f64,
    #[serde(rename = "capacidade")]
    pub capacity: f64,
}

impl Resource for Room {
    const PATH: &'static str = "salas";
    type New = NewRoom;
}
