//! Routes console commands to pages and renders the result.

use std::sync::Arc;

use cineweb_client::Gateway;
use cineweb_core::models::{Movie, Room, Session};
use cineweb_core::validation::Draft;

use crate::command::{Command, Page, HELP};
use crate::forms::{FormController, SubmitOutcome};
use crate::notifier::Notifier;
use crate::pages::{DeleteOutcome, MoviesPage, RoomsPage, SessionsPage, TicketsPage};
use crate::views;

const MOVIE_FORM: &str = "Novo filme";
const ROOM_FORM: &str = "Nova sala";
const SESSION_FORM: &str = "Nova sessão";
const SALE_FORM: &str = "Ingresso";
const NO_OPEN_SALE: &str = "Nenhuma venda aberta. Use 'sell <id-da-sessão>'.\n";

pub struct App {
    movies: MoviesPage,
    rooms: RoomsPage,
    sessions: SessionsPage,
    tickets: TicketsPage,
}

impl App {
    pub fn new(gateway: Arc<dyn Gateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            movies: MoviesPage::new(Arc::clone(&gateway), Arc::clone(&notifier)),
            rooms: RoomsPage::new(Arc::clone(&gateway)),
            sessions: SessionsPage::new(Arc::clone(&gateway), notifier),
            tickets: TicketsPage::new(gateway),
        }
    }

    /// Run one command and return the text to print.
    pub async fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Show(page) => self.show(page).await,
            Command::Help => format!("{HELP}\n"),
            Command::Quit => String::new(),

            Command::MovieSet(field, value) => {
                self.movies.edit(field, value);
                views::form_view(MOVIE_FORM, self.movies.form())
            }
            Command::MovieSubmit => {
                let outcome = self.movies.submit().await;
                let created = |m: &Movie| {
                    format!("Filme cadastrado: {} ({})\n", m.title, m.id)
                };
                submit_text(outcome, created, MOVIE_FORM, self.movies.form())
            }
            Command::MovieDelete(id) => match self.movies.delete(&id).await {
                DeleteOutcome::Deleted => {
                    format!("Filme excluído.\n{}", views::movies_table(self.movies.movies()))
                }
                DeleteOutcome::Cancelled => "Exclusão cancelada.\n".to_string(),
                DeleteOutcome::Failed(error) => format!("Erro ao excluir filme: {error}\n"),
            },

            Command::RoomSet(field, value) => {
                self.rooms.edit(field, value);
                views::form_view(ROOM_FORM, self.rooms.form())
            }
            Command::RoomSubmit => {
                let outcome = self.rooms.submit().await;
                let created = |r: &Room| {
                    format!("Sala cadastrada: Sala {} ({})\n", r.number, r.id)
                };
                submit_text(outcome, created, ROOM_FORM, self.rooms.form())
            }

            Command::SessionSet(field, value) => {
                self.sessions.edit(field, value);
                views::form_view(SESSION_FORM, self.sessions.form())
            }
            Command::SessionSubmit => {
                let outcome = self.sessions.submit().await;
                let created = |s: &Session| {
                    format!("Sessão agendada ({}).\n", s.id.as_deref().unwrap_or("-"))
                };
                submit_text(outcome, created, SESSION_FORM, self.sessions.form())
            }

            Command::Sell(id) => {
                if self.sessions.sell(&id).await {
                    self.sale_panel()
                } else {
                    String::new()
                }
            }
            Command::SaleSet(field, value) => {
                if self.sessions.edit_sale(field, value) {
                    self.sale_panel()
                } else {
                    NO_OPEN_SALE.to_string()
                }
            }
            Command::SaleSubmit => match self.sessions.submit_sale().await {
                Some(SubmitOutcome::Invalid) => self.sale_panel(),
                Some(SubmitOutcome::Busy) => "Envio em andamento.\n".to_string(),
                // Success, failure and a missing session are alerted by the page.
                Some(SubmitOutcome::Created(_)) | Some(SubmitOutcome::Failed(_)) | None => {
                    String::new()
                }
            },
            Command::SaleCancel => {
                self.sessions.cancel_sale();
                "Venda cancelada.\n".to_string()
            }
        }
    }

    async fn show(&mut self, page: Page) -> String {
        match page {
            Page::Movies => {
                let mut out = load_note(self.movies.load().await.is_ok(), "filmes");
                out.push_str(&views::movies_table(self.movies.movies()));
                out.push('\n');
                out.push_str(&views::form_view(MOVIE_FORM, self.movies.form()));
                out
            }
            Page::Rooms => {
                let mut out = load_note(self.rooms.load().await.is_ok(), "salas");
                out.push_str(&views::rooms_table(self.rooms.rooms()));
                out.push('\n');
                out.push_str(&views::form_view(ROOM_FORM, self.rooms.form()));
                out
            }
            Page::Sessions => {
                let page = &mut self.sessions;
                let mut out = load_note(page.load().await.is_ok(), "sessões");
                out.push_str(&views::sessions_table(page.sessions(), page.movies(), page.rooms()));
                out.push_str("\nFilmes:\n");
                out.push_str(&views::movie_options(page.movies()));
                out.push_str("Salas:\n");
                out.push_str(&views::room_options(page.rooms()));
                out.push('\n');
                out.push_str(&views::form_view(SESSION_FORM, page.form()));
                if page.sale().is_some() {
                    out.push('\n');
                    out.push_str(&self.sale_panel());
                }
                out
            }
            Page::Tickets => {
                let page = &mut self.tickets;
                let mut out = load_note(page.load().await.is_ok(), "ingressos");
                out.push_str(&views::tickets_table(page.tickets(), page.sessions(), page.movies()));
                out
            }
        }
    }

    fn sale_panel(&self) -> String {
        let page = &self.sessions;
        match page.sale() {
            Some(sale) => {
                let mut out = views::sale_summary(sale.session(), page.movies(), page.rooms());
                out.push_str(&views::form_view(SALE_FORM, sale.form()));
                out
            }
            None => NO_OPEN_SALE.to_string(),
        }
    }
}

fn load_note(loaded: bool, what: &str) -> String {
    if loaded {
        String::new()
    } else {
        format!("Erro ao carregar {what}; exibindo a última lista obtida.\n")
    }
}

fn submit_text<R, D: Draft>(
    outcome: SubmitOutcome<R>,
    created: impl FnOnce(&R) -> String,
    title: &str,
    form: &FormController<D>,
) -> String {
    match outcome {
        SubmitOutcome::Created(record) => created(&record),
        SubmitOutcome::Invalid => views::form_view(title, form),
        SubmitOutcome::Failed(error) => format!("Erro ao salvar: {error}\n"),
        SubmitOutcome::Busy => "Envio em andamento.\n".to_string(),
    }
}
