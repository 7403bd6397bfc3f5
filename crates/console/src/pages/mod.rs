//! Per-page state: fetched lists plus the page's form controllers.
//!
//! Pages talk to the backend only through [`Gateway`] and to the user only
//! through [`Notifier`], so both can be replaced in tests.
//!
//! [`Gateway`]: cineweb_client::Gateway
//! [`Notifier`]: crate::notifier::Notifier

pub mod movies;
pub mod rooms;
pub mod sessions;
pub mod tickets;

pub use movies::{DeleteOutcome, MoviesPage};
pub use rooms::RoomsPage;
pub use sessions::{SessionsPage, TicketSale};
pub use tickets::TicketsPage;
