//! Room form rules.

use std::str::FromStr;

use validator::Validate;

use super::{parse_decimal, parse_field, Draft, FieldErrors, FormField};
use crate::error::CoreError;
use crate::models::NewRoom;
use crate::types::Timestamp;

pub const NUMBER_NOT_A_NUMBER: &str = "Número da sala deve ser um número";
pub const NUMBER_NOT_POSITIVE: &str = "O número da sala deve ser maior que 0";
pub const CAPACITY_NOT_A_NUMBER: &str = "Capacidade deve ser um número";
pub const CAPACITY_NOT_POSITIVE: &str = "A capacidade deve ser maior que 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomField {
    Number,
    Capacity,
}

impl FormField for RoomField {
    const ALL: &'static [Self] = &[Self::Number, Self::Capacity];

    fn key(self) -> &'static str {
        match self {
            Self::Number => "numero",
            Self::Capacity => "capacidade",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Number => "Número",
            Self::Capacity => "Capacidade",
        }
    }

    fn from_member(member: &str) -> Option<Self> {
        match member {
            "number" => Some(Self::Number),
            "capacity" => Some(Self::Capacity),
            _ => None,
        }
    }
}

impl FromStr for RoomField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(
            "room",
            s,
            &[("number", Self::Number), ("capacity", Self::Capacity)],
        )
    }
}

/// Raw room form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDraft {
    pub number: String,
    pub capacity: String,
}

#[derive(Debug, Validate)]
struct RoomInput {
    #[validate(
        required(message = "Número da sala deve ser um número"),
        range(exclusive_min = 0.0, message = "O número da sala deve ser maior que 0")
    )]
    number: Option<f64>,

    #[validate(
        required(message = "Capacidade deve ser um número"),
        range(exclusive_min = 0.0, message = "A capacidade deve ser maior que 0")
    )]
    capacity: Option<f64>,
}

impl Draft for RoomDraft {
    type Field = RoomField;
    type Output = NewRoom;

    const ENTITY: &'static str = "room";

    fn set(&mut self, field: RoomField, value: String) {
        match field {
            RoomField::Number => self.number = value,
            RoomField::Capacity => self.capacity = value,
        }
    }

    fn get(&self, field: RoomField) -> &str {
        match field {
            RoomField::Number => &self.number,
            RoomField::Capacity => &self.capacity,
        }
    }

    fn validate(&self, _now: Timestamp) -> Result<NewRoom, FieldErrors<RoomField>> {
        let input = RoomInput {
            number: parse_decimal(&self.number),
            capacity: parse_decimal(&self.capacity),
        };

        let mut errors = FieldErrors::new();
        if let Err(e) = input.validate() {
            errors.absorb(&e);
        }

        match (input.number, input.capacity) {
            (Some(number), Some(capacity)) if errors.is_empty() => Ok(NewRoom { number, capacity }),
            _ => Err(errors),
        }
    }
}
