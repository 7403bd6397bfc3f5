//! Sold admissions (`/ingressos`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::CoreError;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Ticket kind
// ---------------------------------------------------------------------------

/// Admission kind. The price is entered separately; no pricing rule ties
/// the two together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TicketKind {
    #[default]
    #[serde(rename = "INTEIRA")]
    Full,
    #[serde(rename = "MEIA")]
    Half,
}

/// All valid ticket kind strings, in display order.
pub const VALID_TICKET_KINDS: &[&str] = &["INTEIRA", "MEIA"];

impl TicketKind {
    /// Wire value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "INTEIRA",
            Self::Half => "MEIA",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Inteira",
            Self::Half => "Meia",
        }
    }
}

impl FromStr for TicketKind {
    type Err = CoreError;

    /// Only the exact wire values are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTEIRA" => Ok(Self::Full),
            "MEIA" => Ok(Self::Half),
            _ => Err(CoreError::Validation(format!(
                "Invalid ticket kind '{s}'. Must be one of: {}",
                VALID_TICKET_KINDS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A ticket as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "sessaoId")]
    pub session_id: EntityId,
    #[serde(rename = "tipo")]
    pub kind: TicketKind,
    /// Price in reais.
    #[serde(rename = "valor")]
    pub price: f64,
}

/// Payload for registering a ticket sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    #[serde(rename = "sessaoId")]
    pub session_id: EntityId,
    #[serde(rename = "tipo")]
    pub kind: TicketKind,
    #[serde(rename = "valor")]
    pub price: f64,
}

impl Resource for Ticket {
    const PATH: &'static str = "ingressos";
    type New = NewTicket;
}
