//! Form drafts and the rules that validate them.
//!
//! A draft holds the raw text of a form. [`Draft::validate`] either
//! produces the typed creation payload or a [`FieldErrors`] map with at
//! most one message per field (the first violation wins).
//!
//! Declarative constraints live on small `*Input` structs deriving
//! [`validator::Validate`]; cross-field and clock-dependent checks are
//! written out by hand in each module.

pub mod movie;
pub mod room;
pub mod session;
pub mod ticket;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use validator::ValidationErrors;

use crate::error::CoreError;
use crate::types::Timestamp;

pub use movie::{MovieDraft, MovieField};
pub use room::{RoomDraft, RoomField};
pub use session::{SessionDraft, SessionField};
pub use ticket::{TicketDraft, TicketField};

// ---------------------------------------------------------------------------
// Field identifiers
// ---------------------------------------------------------------------------

/// A closed set of field identifiers for one form.
pub trait FormField: Copy + Ord + fmt::Debug + FromStr<Err = CoreError> + Send + 'static {
    /// Every field of the form, in display order.
    const ALL: &'static [Self];

    /// JSON key of the field in backend payloads.
    fn key(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Map the struct member name reported by `validator` back to a field.
    fn from_member(member: &str) -> Option<Self>;
}

/// Resolve a field by JSON key or by its English name (`snake_case`).
pub(crate) fn parse_field<F: FormField>(
    entity: &'static str,
    name: &str,
    aliases: &[(&str, F)],
) -> Result<F, CoreError> {
    F::ALL
        .iter()
        .copied()
        .find(|field| field.key() == name)
        .or_else(|| {
            aliases
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, field)| *field)
        })
        .ok_or_else(|| CoreError::UnknownField {
            entity,
            name: name.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// Raw form contents for one entity.
pub trait Draft: Default + Clone + Send {
    type Field: FormField;

    /// Creation payload produced by a successful validation.
    type Output: Send;

    /// Singular entity name, used in log lines.
    const ENTITY: &'static str;

    /// Replace the raw text of one field.
    fn set(&mut self, field: Self::Field, value: String);

    /// Current raw text of one field.
    fn get(&self, field: Self::Field) -> &str;

    /// Validate the draft against the clock reading `now`.
    fn validate(&self, now: Timestamp) -> Result<Self::Output, FieldErrors<Self::Field>>;
}

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Per-field error messages, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    messages: BTreeMap<F, String>,
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Record a message unless the field already has one.
    ///
    /// Returns `true` if the message was stored.
    pub fn insert(&mut self, field: F, message: impl Into<String>) -> bool {
        if self.messages.contains_key(&field) {
            return false;
        }
        self.messages.insert(field, message.into());
        true
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.messages.contains_key(&field)
    }

    /// Drop the message for one field.
    pub fn clear(&mut self, field: F) {
        self.messages.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterate messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.messages.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Fold `validator` results in, keeping the first message per field.
    pub(crate) fn absorb(&mut self, errors: &ValidationErrors) {
        for (member, violations) in errors.field_errors() {
            let Some(field) = F::from_member(&member) else {
                continue;
            };
            if let Some(first) = violations.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                self.insert(field, message);
            }
        }
    }
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormField> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.key())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Numeric input helpers
// ---------------------------------------------------------------------------

/// Parse form text as a finite decimal. A decimal comma is accepted.
///
/// Blank or non-numeric text yields `None`, which the `required` rule
/// reports as "not a number".
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Blank optional text becomes `None`.
pub(crate) fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
