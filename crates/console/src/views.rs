//! Text rendering of fetched lists and forms.
//!
//! Views only read state; they never validate or persist anything.

use std::fmt::Write as _;

use cineweb_core::datetime::format_date_time;
use cineweb_core::models::{Movie, Room, Session, Ticket};
use cineweb_core::validation::{Draft, FormField};

use crate::forms::FormController;

pub const NO_MOVIES: &str = "Nenhum filme cadastrado.";
pub const NO_ROOMS: &str = "Nenhuma sala cadastrada.";
pub const NO_SESSIONS: &str = "Nenhuma sessão agendada.";
pub const NO_TICKETS: &str = "Nenhum ingresso vendido.";

pub const MOVIE_NOT_FOUND: &str = "Filme não encontrado";
pub const ROOM_NOT_FOUND: &str = "Sala não encontrada";

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Left-aligned text table sized to its widest cell per column.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) -> &mut Self {
        self.rows.push(cells);
        self
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn movie_title<'a>(movies: &'a [Movie], id: &str) -> Option<&'a str> {
    movies
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.title.as_str())
}

pub fn find_room<'a>(rooms: &'a [Room], id: &str) -> Option<&'a Room> {
    rooms.iter().find(|r| r.id == id)
}

/// Price in Brazilian currency notation, e.g. `R$ 20,00`.
pub fn format_price(value: f64) -> String {
    format!("R$ {value:.2}").replace('.', ",")
}

fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

pub fn movies_table(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return format!("{NO_MOVIES}\n");
    }
    let mut table = Table::new(&["Título", "Gênero", "Duração", "Classificação", "id"]);
    for movie in movies {
        table.row(vec![
            movie.title.clone(),
            or_dash(&movie.genre),
            format!("{} min", movie.duration),
            or_dash(&movie.rating),
            movie.id.clone(),
        ]);
    }
    table.render()
}

pub fn rooms_table(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return format!("{NO_ROOMS}\n");
    }
    let mut table = Table::new(&["Número", "Capacidade", "id"]);
    for room in rooms {
        table.row(vec![
            room.number.to_string(),
            room.capacity.to_string(),
            room.id.clone(),
        ]);
    }
    table.render()
}

/// One resolved session line: movie title, room label, formatted date, id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub movie: String,
    pub room: String,
    pub date_time: String,
    pub id: String,
}

pub fn session_rows(sessions: &[Session], movies: &[Movie], rooms: &[Room]) -> Vec<SessionRow> {
    sessions
        .iter()
        .map(|session| SessionRow {
            movie: movie_title(movies, &session.movie_id)
                .unwrap_or(MOVIE_NOT_FOUND)
                .to_string(),
            room: find_room(rooms, &session.room_id)
                .map(|room| format!("Sala {}", room.number))
                .unwrap_or_else(|| ROOM_NOT_FOUND.to_string()),
            date_time: format_date_time(&session.date_time),
            id: session.id.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn sessions_table(sessions: &[Session], movies: &[Movie], rooms: &[Room]) -> String {
    if sessions.is_empty() {
        return format!("{NO_SESSIONS}\n");
    }
    let mut table = Table::new(&["Filme", "Sala", "Data/Hora", "id"]);
    for row in session_rows(sessions, movies, rooms) {
        table.row(vec![row.movie, row.room, row.date_time, row.id]);
    }
    table.render()
}

pub fn tickets_table(tickets: &[Ticket], sessions: &[Session], movies: &[Movie]) -> String {
    if tickets.is_empty() {
        return format!("{NO_TICKETS}\n");
    }
    let mut table = Table::new(&["Sessão", "Tipo", "Valor", "id"]);
    for ticket in tickets {
        let session = sessions
            .iter()
            .find(|s| s.valid_id() == Some(ticket.session_id.as_str()));
        let label = match session {
            Some(session) => {
                let title = movie_title(movies, &session.movie_id).unwrap_or(MOVIE_NOT_FOUND);
                format!("{title} ({})", format_date_time(&session.date_time))
            }
            None => ticket.session_id.clone(),
        };
        table.row(vec![
            label,
            ticket.kind.label().to_string(),
            format_price(ticket.price),
            ticket.id.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.render()
}

// ---------------------------------------------------------------------------
// Sale panel and form helpers
// ---------------------------------------------------------------------------

/// Header of the ticket-sale panel for the selected session.
pub fn sale_summary(session: &Session, movies: &[Movie], rooms: &[Room]) -> String {
    let movie = movie_title(movies, &session.movie_id).unwrap_or("Não encontrado");
    let room = find_room(rooms, &session.room_id)
        .map(|room| format!("Sala {}", room.number))
        .unwrap_or_else(|| "Não encontrada".to_string());
    format!(
        "Venda de ingresso\nFilme: {movie}\nSala: {room}\nData/Hora: {}\n",
        format_date_time(&session.date_time)
    )
}

/// Choices for the session form's movie field.
pub fn movie_options(movies: &[Movie]) -> String {
    let mut out = String::new();
    for movie in movies {
        let _ = writeln!(out, "  {} - {}", movie.id, movie.title);
    }
    out
}

/// Choices for the session form's room field.
pub fn room_options(rooms: &[Room]) -> String {
    let mut out = String::new();
    for room in rooms {
        let _ = writeln!(
            out,
            "  {} - Sala {} (capacidade {})",
            room.id, room.number, room.capacity
        );
    }
    out
}

/// Current draft values with the message under each invalid field.
pub fn form_view<D: Draft>(title: &str, form: &FormController<D>) -> String {
    let mut out = format!("{title}\n");
    for field in D::Field::ALL.iter().copied() {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            field.label(),
            field.key(),
            form.draft().get(field)
        );
        if let Some(message) = form.errors().get(field) {
            let _ = writeln!(out, "    ! {message}");
        }
    }
    if form.is_submitting() {
        out.push_str("  Salvando...\n");
    }
    out
}
