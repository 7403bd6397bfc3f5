//! Ticket sale rules.

use std::borrow::Cow;
use std::str::FromStr;

use validator::{Validate, ValidationError};

use super::{parse_decimal, parse_field, Draft, FieldErrors, FormField};
use crate::error::CoreError;
use crate::models::{NewTicket, TicketKind};
use crate::types::Timestamp;

pub const SESSION_REQUIRED: &str = "Sessão é obrigatória";
pub const KIND_INVALID: &str = "Tipo de ingresso deve ser INTEIRA ou MEIA";
pub const PRICE_NOT_A_NUMBER: &str = "Valor deve ser um número";
pub const PRICE_NOT_POSITIVE: &str = "Valor deve ser maior que zero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TicketField {
    SessionId,
    Kind,
    Price,
}

impl FormField for TicketField {
    const ALL: &'static [Self] = &[Self::SessionId, Self::Kind, Self::Price];

    fn key(self) -> &'static str {
        match self {
            Self::SessionId => "sessaoId",
            Self::Kind => "tipo",
            Self::Price => "valor",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::SessionId => "Sessão",
            Self::Kind => "Tipo de ingresso",
            Self::Price => "Valor (R$)",
        }
    }

    fn from_member(member: &str) -> Option<Self> {
        match member {
            "session_id" => Some(Self::SessionId),
            "kind" => Some(Self::Kind),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

impl FromStr for TicketField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(
            "ticket",
            s,
            &[
                ("session", Self::SessionId),
                ("session_id", Self::SessionId),
                ("kind", Self::Kind),
                ("type", Self::Kind),
                ("price", Self::Price),
            ],
        )
    }
}

/// Raw ticket sale form contents.
///
/// The initial value has no session and the full-price kind selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub session_id: String,
    pub kind: String,
    pub price: String,
}

impl TicketDraft {
    /// Initial draft for selling a ticket to `session_id`.
    pub fn for_session(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            ..Self::default()
        }
    }
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            kind: TicketKind::default().as_str().to_string(),
            price: String::new(),
        }
    }
}

fn validate_kind(kind: &str) -> Result<(), ValidationError> {
    TicketKind::from_str(kind)
        .map(|_| ())
        .map_err(|_| ValidationError::new("ticket_kind").with_message(Cow::Borrowed(KIND_INVALID)))
}

#[derive(Debug, Validate)]
struct TicketInput {
    #[validate(length(min = 1, message = "Sessão é obrigatória"))]
    session_id: String,

    #[validate(custom(function = "validate_kind"))]
    kind: String,

    #[validate(
        required(message = "Valor deve ser um número"),
        range(exclusive_min = 0.0, message = "Valor deve ser maior que zero")
    )]
    price: Option<f64>,
}

impl Draft for TicketDraft {
    type Field = TicketField;
    type Output = NewTicket;

    const ENTITY: &'static str = "ticket";

    fn set(&mut self, field: TicketField, value: String) {
        match field {
            TicketField::SessionId => self.session_id = value,
            TicketField::Kind => self.kind = value,
            TicketField::Price => self.price = value,
        }
    }

    fn get(&self, field: TicketField) -> &str {
        match field {
            TicketField::SessionId => &self.session_id,
            TicketField::Kind => &self.kind,
            TicketField::Price => &self.price,
        }
    }

    /// The kind must be exactly `INTEIRA` or `MEIA`; nothing else,
    /// including other casings, is accepted.
    fn validate(&self, _now: Timestamp) -> Result<NewTicket, FieldErrors<TicketField>> {
        let input = TicketInput {
            session_id: self.session_id.trim().to_string(),
            kind: self.kind.clone(),
            price: parse_decimal(&self.price),
        };

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.absorb(&e);
        }

        match (TicketKind::from_str(&input.kind), input.price) {
            (Ok(kind), Some(price)) if errors.is_empty() => Ok(NewTicket {
                session_id: input.session_id,
                kind,
                price,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn half_for_s1(price: &str) -> TicketDraft {
        let mut draft = TicketDraft::for_session("s1");
        draft.set(TicketField::Kind, "MEIA".into());
        draft.set(TicketField::Price, price.into());
        draft
    }

    #[test]
    fn seeded_draft_defaults_to_full_price_kind() {
        let draft = TicketDraft::for_session("s1");
        assert_eq!(draft.session_id, "s1");
        assert_eq!(draft.kind, "INTEIRA");
        assert_eq!(draft.price, "");
    }

    #[test]
    fn valid_half_price_ticket() {
        let ticket = half_for_s1("20").validate(Utc::now()).unwrap();
        assert_eq!(ticket.session_id, "s1");
        assert_eq!(ticket.kind, TicketKind::Half);
        assert_eq!(ticket.price, 20.0);
    }

    #[test]
    fn kind_outside_enumeration_is_rejected() {
        for kind in ["", "meia", "FULL", "HALF", "ESTUDANTE"] {
            let mut draft = half_for_s1("20");
            draft.kind = kind.into();
            let errors = draft.validate(Utc::now()).unwrap_err();
            assert_eq!(errors.get(TicketField::Kind), Some(KIND_INVALID), "{kind}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn price_must_be_positive_number() {
        let errors = half_for_s1("0").validate(Utc::now()).unwrap_err();
        assert_eq!(errors.get(TicketField::Price), Some(PRICE_NOT_POSITIVE));

        let errors = half_for_s1("vinte").validate(Utc::now()).unwrap_err();
        assert_eq!(errors.get(TicketField::Price), Some(PRICE_NOT_A_NUMBER));
    }

    #[test]
    fn missing_session_is_rejected() {
        let mut draft = half_for_s1("20");
        draft.session_id.clear();
        let errors = draft.validate(Utc::now()).unwrap_err();
        assert_eq!(errors.get(TicketField::SessionId), Some(SESSION_REQUIRED));
    }
}
