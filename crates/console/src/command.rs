//! Console command parsing.
//!
//! One line of input is one command. Field values are the rest of the
//! line, so they may contain spaces.

use std::str::FromStr;

use cineweb_core::error::CoreError;
use cineweb_core::validation::{MovieField, RoomField, SessionField, TicketField};

pub const HELP: &str = "\
Comandos:
  movies | rooms | sessions | tickets      mostra a página (recarrega as listas)
  movie set <campo> <valor...>             edita o formulário de filme
  movie submit                             cadastra o filme
  movie delete <id>                        exclui um filme (pede confirmação)
  room set <campo> <valor...>              edita o formulário de sala
  room submit                              cadastra a sala
  session set <campo> <valor...>           edita o formulário de sessão
  session submit                           agenda a sessão
  sell <id-da-sessão>                      abre a venda de ingresso
  sale set <campo> <valor...>              edita a venda (tipo, valor)
  sale submit | sale cancel                registra ou cancela a venda
  help                                     mostra esta ajuda
  quit                                     encerra

Campos aceitam a chave JSON (ex.: titulo, dataHora) ou o nome em inglês.";

/// A page of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Movies,
    Rooms,
    Sessions,
    Tickets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(Page),
    MovieSet(MovieField, String),
    MovieSubmit,
    MovieDelete(String),
    RoomSet(RoomField, String),
    RoomSubmit,
    SessionSet(SessionField, String),
    SessionSubmit,
    Sell(String),
    SaleSet(TicketField, String),
    SaleSubmit,
    SaleCancel,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Comando vazio")]
    Empty,

    #[error("Comando desconhecido '{0}'. Digite 'help' para ver os comandos.")]
    UnknownCommand(String),

    #[error("Ação desconhecida '{action}' para '{command}'")]
    UnknownAction { command: &'static str, action: String },

    #[error("Uso: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Field(#[from] CoreError),
}

/// Split off the first whitespace-delimited word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

/// Parse `set <field> <value...>` arguments.
fn field_value<F: FromStr<Err = CoreError>>(
    rest: &str,
    usage: &'static str,
) -> Result<(F, String), ParseError> {
    let (name, value) = next_word(rest);
    if name.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok((name.parse()?, value.trim_end().to_string()))
}

fn single_arg(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    let (arg, extra) = next_word(rest);
    if arg.is_empty() || !extra.trim().is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(arg.to_string())
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = next_word(line);
        let (action, args) = next_word(rest);

        match word.to_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "movies" | "filmes" => Ok(Self::Show(Page::Movies)),
            "rooms" | "salas" => Ok(Self::Show(Page::Rooms)),
            "sessions" | "sessoes" | "sessões" => Ok(Self::Show(Page::Sessions)),
            "tickets" | "ingressos" => Ok(Self::Show(Page::Tickets)),
            "help" | "ajuda" | "?" => Ok(Self::Help),
            "quit" | "exit" | "sair" => Ok(Self::Quit),
            "sell" | "vender" => Ok(Self::Sell(single_arg(rest, "sell <id-da-sessão>")?)),
            "movie" | "filme" => match action {
                "set" => {
                    let (field, value) = field_value(args, "movie set <campo> <valor...>")?;
                    Ok(Self::MovieSet(field, value))
                }
                "submit" => Ok(Self::MovieSubmit),
                "delete" => Ok(Self::MovieDelete(single_arg(args, "movie delete <id>")?)),
                "" => Err(ParseError::Usage("movie set|submit|delete")),
                other => Err(ParseError::UnknownAction {
                    command: "movie",
                    action: other.to_string(),
                }),
            },
            "room" | "sala" => match action {
                "set" => {
                    let (field, value) = field_value(args, "room set <campo> <valor...>")?;
                    Ok(Self::RoomSet(field, value))
                }
                "submit" => Ok(Self::RoomSubmit),
                "" => Err(ParseError::Usage("room set|submit")),
                other => Err(ParseError::UnknownAction {
                    command: "room",
                    action: other.to_string(),
                }),
            },
            "session" | "sessao" | "sessão" => match action {
                "set" => {
                    let (field, value) = field_value(args, "session set <campo> <valor...>")?;
                    Ok(Self::SessionSet(field, value))
                }
                "submit" => Ok(Self::SessionSubmit),
                "" => Err(ParseError::Usage("session set|submit")),
                other => Err(ParseError::UnknownAction {
                    command: "session",
                    action: other.to_string(),
                }),
            },
            "sale" | "venda" => match action {
                "set" => {
                    let (field, value) = field_value(args, "sale set <campo> <valor...>")?;
                    Ok(Self::SaleSet(field, value))
                }
                "submit" => Ok(Self::SaleSubmit),
                "cancel" => Ok(Self::SaleCancel),
                "" => Err(ParseError::Usage("sale set|submit|cancel")),
                other => Err(ParseError::UnknownAction {
                    command: "sale",
                    action: other.to_string(),
                }),
            },
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }
}
