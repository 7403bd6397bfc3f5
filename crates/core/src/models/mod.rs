//! Records exchanged with the backend REST API.
//!
//! Each entity has a record type (as returned by the backend, with its
//! server-assigned id) and a `New*` payload type used for creation.
//! Rust field names are English; the JSON keys are the backend's.

pub mod movie;
pub mod room;
pub mod session;
pub mod ticket;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use movie::{Movie, NewMovie};
pub use room::{NewRoom, Room};
pub use session::{NewSession, Session};
pub use ticket::{NewTicket, Ticket, TicketKind};

/// A backend collection that can be listed and created.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Collection path on the backend, without the leading slash.
    const PATH: &'static str;

    /// Creation payload (the record without its id).
    type New: Serialize + Send + Sync;
}

/// A collection whose records the console may delete.
pub trait Deletable: Resource {}
