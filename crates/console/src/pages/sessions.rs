use std::sync::Arc;

use chrono::Utc;

use cineweb_client::{ApiError, Gateway};
use cineweb_core::models::{Movie, Room, Session, Ticket};
use cineweb_core::types::Timestamp;
use cineweb_core::validation::{SessionDraft, SessionField, TicketDraft, TicketField};

use crate::forms::{FormController, SubmitOutcome};
use crate::notifier::Notifier;

pub const SESSION_WITHOUT_ID: &str = "Sessão inválida (sem ID).";
pub const SESSION_NOT_FOUND: &str = "Sessão não encontrada.";
pub const SELECT_VALID_SESSION: &str = "Selecione uma sessão válida.";
pub const SALE_REGISTERED: &str = "Ingresso registrado com sucesso!";
pub const SALE_FAILED: &str = "Erro ao registrar ingresso.";

/// Open ticket-sale panel for one session.
pub struct TicketSale {
    session: Session,
    form: FormController<TicketDraft>,
}

impl TicketSale {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn form(&self) -> &FormController<TicketDraft> {
        &self.form
    }
}

/// Session scheduling plus the ticket-sale panel.
pub struct SessionsPage {
    gateway: Arc<dyn Gateway>,
    notifier: Arc<dyn Notifier>,
    movies: Vec<Movie>,
    rooms: Vec<Room>,
    sessions: Vec<Session>,
    form: FormController<SessionDraft>,
    sale: Option<TicketSale>,
}

impl SessionsPage {
    pub fn new(gateway: Arc<dyn Gateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            movies: Vec::new(),
            rooms: Vec::new(),
            sessions: Vec::new(),
            form: FormController::new(),
            sale: None,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn form(&self) -> &FormController<SessionDraft> {
        &self.form
    }

    pub fn sale(&self) -> Option<&TicketSale> {
        self.sale.as_ref()
    }

    /// Fetch movies, rooms and sessions concurrently.
    ///
    /// The three lists are replaced together, and only if every request
    /// succeeded.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let gateway = &self.gateway;
        let fetched = tokio::try_join!(
            gateway.list_movies(),
            gateway.list_rooms(),
            gateway.list_sessions(),
        );

        match fetched {
            Ok((movies, rooms, sessions)) => {
                tracing::debug!(
                    movies = movies.len(),
                    rooms = rooms.len(),
                    sessions = sessions.len(),
                    "Loaded session page data"
                );
                self.movies = movies;
                self.rooms = rooms;
                self.sessions = sessions;
                Ok(())
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to load sessions");
                Err(error)
            }
        }
    }

    pub fn edit(&mut self, field: SessionField, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    pub async fn submit(&mut self) -> SubmitOutcome<Session> {
        self.submit_at(Utc::now()).await
    }

    pub async fn submit_at(&mut self, now: Timestamp) -> SubmitOutcome<Session> {
        let gateway = Arc::clone(&self.gateway);
        let outcome = self
            .form
            .submit_with(now, move |session| async move {
                gateway.create_session(&session).await
            })
            .await;

        if outcome.is_created() {
            let _ = self.load().await;
        }
        outcome
    }

    // -----------------------------------------------------------------------
    // Ticket sale
    // -----------------------------------------------------------------------

    /// Open the sale panel for `session`, seeding the draft with its id.
    ///
    /// A session without an id is rejected with an alert.
    pub fn open_sale(&mut self, session: &Session) -> bool {
        let Some(id) = session.valid_id() else {
            self.notifier.alert(SESSION_WITHOUT_ID);
            return false;
        };

        self.sale = Some(TicketSale {
            session: session.clone(),
            form: FormController::with_draft(TicketDraft::for_session(id)),
        });
        true
    }

    /// Open the sale panel for a session of the loaded list.
    pub fn open_sale_by_id(&mut self, id: &str) -> bool {
        let found = self
            .sessions
            .iter()
            .find(|session| session.valid_id() == Some(id))
            .cloned();

        match found {
            Some(session) => self.open_sale(&session),
            None => {
                self.notifier.alert(SESSION_NOT_FOUND);
                false
            }
        }
    }

    /// Open the sale panel for `id`, refetching the lists once if the
    /// session is not among those already loaded.
    pub async fn sell(&mut self, id: &str) -> bool {
        let known = self
            .sessions
            .iter()
            .any(|session| session.valid_id() == Some(id));
        if !known {
            let _ = self.load().await;
        }
        self.open_sale_by_id(id)
    }

    /// Edit the open sale. Returns `false` when no panel is open.
    pub fn edit_sale(&mut self, field: TicketField, value: impl Into<String>) -> bool {
        match self.sale.as_mut() {
            Some(sale) => {
                sale.form.edit(field, value);
                true
            }
            None => false,
        }
    }

    /// Close the panel and discard its draft.
    pub fn cancel_sale(&mut self) {
        self.sale = None;
    }

    pub async fn submit_sale(&mut self) -> Option<SubmitOutcome<Ticket>> {
        self.submit_sale_at(Utc::now()).await
    }

    /// Register a ticket for the selected session.
    ///
    /// Returns `None` when no valid session is selected.
    pub async fn submit_sale_at(&mut self, now: Timestamp) -> Option<SubmitOutcome<Ticket>> {
        let Some(sale) = self.sale.as_mut() else {
            self.notifier.alert(SELECT_VALID_SESSION);
            return None;
        };
        let Some(session_id) = sale.session.valid_id().map(str::to_string) else {
            self.notifier.alert(SELECT_VALID_SESSION);
            return None;
        };

        // The selected session always wins over whatever the draft holds.
        sale.form.prefill(TicketField::SessionId, session_id);

        let gateway = Arc::clone(&self.gateway);
        let outcome = sale
            .form
            .submit_with(now, move |ticket| async move {
                gateway.create_ticket(&ticket).await
            })
            .await;

        match &outcome {
            SubmitOutcome::Created(_) => {
                self.notifier.alert(SALE_REGISTERED);
                self.sale = None;
            }
            SubmitOutcome::Failed(_) => self.notifier.alert(SALE_FAILED),
            SubmitOutcome::Invalid | SubmitOutcome::Busy => {}
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone};
    use cineweb_core::models::TicketKind;
    use cineweb_core::validation::session::DATE_TIME_RETROACTIVE;
    use cineweb_core::validation::ticket::PRICE_NOT_POSITIVE;

    use crate::forms::FormStatus;
    use crate::mocks::{InMemoryGateway, RecordingNotifier};

    use super::*;

    fn page() -> (SessionsPage, Arc<InMemoryGateway>, Arc<RecordingNotifier>) {
        let gateway = Arc::new(InMemoryGateway::new());
        let notifier = Arc::new(RecordingNotifier::answering(true));
        let page = SessionsPage::new(gateway.clone(), notifier.clone());
        (page, gateway, notifier)
    }

    fn session(id: Option<&str>) -> Session {
        Session {
            id: id.map(str::to_string),
            movie_id: "m1".into(),
            room_id: "r1".into(),
            date_time: "2030-01-01T20:00:00Z".into(),
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2029, 12, 31, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn load_replaces_all_three_lists() {
        let (mut page, gateway, _) = page();
        gateway.seed_room(Room {
            id: "r1".into(),
            number: 1.0,
            capacity: 50.0,
        });
        gateway.seed_session(session(Some("s1")));

        page.load().await.unwrap();

        assert!(page.movies().is_empty());
        assert_eq!(page.rooms().len(), 1);
        assert_eq!(page.sessions().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_keeps_every_list() {
        let (mut page, gateway, _) = page();
        gateway.seed_session(session(Some("s1")));
        page.load().await.unwrap();
        gateway.seed_session(session(Some("s2")));
        gateway.fail_next(500);

        assert!(page.load().await.is_err());
        assert_eq!(page.sessions().len(), 1);
    }

    #[tokio::test]
    async fn scheduling_in_the_past_is_rejected() {
        let (mut page, gateway, _) = page();
        page.edit(SessionField::MovieId, "m1");
        page.edit(SessionField::RoomId, "r1");
        page.edit(SessionField::DateTime, "2020-01-01T10:00:00Z");

        assert_matches!(page.submit_at(now()).await, SubmitOutcome::Invalid);
        assert_eq!(
            page.form().errors().get(SessionField::DateTime),
            Some(DATE_TIME_RETROACTIVE)
        );
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn scheduling_at_exactly_now_is_accepted() {
        let (mut page, gateway, _) = page();
        page.edit(SessionField::MovieId, "m1");
        page.edit(SessionField::RoomId, "r1");
        page.edit(SessionField::DateTime, "2029-12-31T12:00:00Z");

        assert_matches!(page.submit_at(now()).await, SubmitOutcome::Created(_));
        assert_eq!(gateway.calls()[0], "create_session");
        assert_eq!(page.sessions().len(), 1);
    }

    #[tokio::test]
    async fn sale_registers_ticket_and_closes_panel() {
        let (mut page, gateway, notifier) = page();
        gateway.seed_session(session(Some("s1")));
        page.load().await.unwrap();

        assert!(page.open_sale_by_id("s1"));
        let draft = page.sale().unwrap().form().draft().clone();
        assert_eq!(draft.session_id, "s1");
        assert_eq!(draft.kind, "INTEIRA");

        page.edit_sale(TicketField::Kind, "MEIA");
        page.edit_sale(TicketField::Price, "20");
        let outcome = page.submit_sale_at(now()).await;

        let ticket = assert_matches!(outcome, Some(SubmitOutcome::Created(ticket)) => ticket);
        assert_eq!(ticket.session_id, "s1");
        assert_eq!(ticket.kind, TicketKind::Half);
        assert_eq!(ticket.price, 20.0);
        assert!(page.sale().is_none());
        assert_eq!(notifier.alerts(), [SALE_REGISTERED]);
        assert_eq!(gateway.tickets().len(), 1);
    }

    #[tokio::test]
    async fn sale_failure_alerts_and_keeps_panel() {
        let (mut page, gateway, notifier) = page();
        assert!(page.open_sale(&session(Some("s1"))));
        page.edit_sale(TicketField::Price, "15,5");
        gateway.fail_next(500);

        let outcome = page.submit_sale_at(now()).await;

        assert_matches!(outcome, Some(SubmitOutcome::Failed(_)));
        assert_eq!(notifier.alerts(), [SALE_FAILED]);
        let sale = page.sale().unwrap();
        assert_eq!(sale.form().draft().price, "15,5");
        assert_eq!(sale.form().status(), FormStatus::Editing);
    }

    #[tokio::test]
    async fn invalid_price_keeps_panel_without_call() {
        let (mut page, gateway, notifier) = page();
        page.open_sale(&session(Some("s1")));
        page.edit_sale(TicketField::Price, "0");

        let outcome = page.submit_sale_at(now()).await;

        assert_matches!(outcome, Some(SubmitOutcome::Invalid));
        assert!(gateway.calls().is_empty());
        assert!(notifier.alerts().is_empty());
        let errors = page.sale().unwrap().form().errors();
        assert_eq!(errors.get(TicketField::Price), Some(PRICE_NOT_POSITIVE));
    }

    #[test]
    fn session_without_id_cannot_open_sale() {
        let (mut page, _, notifier) = page();

        assert!(!page.open_sale(&session(None)));
        assert!(!page.open_sale(&session(Some(""))));
        assert!(page.sale().is_none());
        assert_eq!(notifier.alerts(), [SESSION_WITHOUT_ID, SESSION_WITHOUT_ID]);
    }

    #[test]
    fn unknown_session_id_is_reported() {
        let (mut page, _, notifier) = page();

        assert!(!page.open_sale_by_id("nope"));
        assert_eq!(notifier.alerts(), [SESSION_NOT_FOUND]);
    }

    #[tokio::test]
    async fn submit_without_panel_alerts() {
        let (mut page, gateway, notifier) = page();

        assert!(page.submit_sale_at(now()).await.is_none());
        assert_eq!(notifier.alerts(), [SELECT_VALID_SESSION]);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn sell_refetches_when_session_is_not_loaded() {
        let (mut page, gateway, notifier) = page();
        gateway.seed_session(session(Some("s1")));
        page.load().await.unwrap();
        gateway.seed_session(session(Some("s2")));

        assert!(page.sell("s2").await);

        assert_eq!(page.sale().unwrap().session().valid_id(), Some("s2"));
        assert_eq!(page.sessions().len(), 2);
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn sell_uses_loaded_list_without_refetching() {
        let (mut page, gateway, _) = page();
        gateway.seed_session(session(Some("s1")));
        page.load().await.unwrap();
        let calls_after_load = gateway.calls().len();

        assert!(page.sell("s1").await);
        assert_eq!(gateway.calls().len(), calls_after_load);
    }

    #[tokio::test]
    async fn sell_unknown_session_alerts_once_after_refetch() {
        let (mut page, gateway, notifier) = page();

        assert!(!page.sell("nope").await);

        assert!(gateway.calls().contains(&"list_sessions"));
        assert_eq!(notifier.alerts(), [SESSION_NOT_FOUND]);
    }

    #[tokio::test]
    async fn abandoned_sale_submit_reports_busy() {
        let (mut page, gateway, notifier) = page();
        page.open_sale(&session(Some("s1")));
        page.edit_sale(TicketField::Price, "20");
        gateway.stall_next();

        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            page.submit_sale_at(now()),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(page.sale().unwrap().form().is_submitting());

        let outcome = page.submit_sale_at(now()).await;

        assert_matches!(outcome, Some(SubmitOutcome::Busy));
        assert!(page.sale().unwrap().form().is_submitting());
        assert!(gateway.tickets().is_empty());
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn cancel_closes_panel_without_call() {
        let (mut page, gateway, _) = page();
        page.open_sale(&session(Some("s1")));
        page.edit_sale(TicketField::Kind, "MEIA");

        page.cancel_sale();

        assert!(page.sale().is_none());
        assert!(!page.edit_sale(TicketField::Kind, "MEIA"));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn future_session_relative_to_wall_clock_passes() {
        let (mut page, _, _) = page();
        let later = (Utc::now() + Duration::days(1)).to_rfc3339();
        page.edit(SessionField::MovieId, "m1");
        page.edit(SessionField::RoomId, "r1");
        page.edit(SessionField::DateTime, later);

        assert_matches!(page.submit().await, SubmitOutcome::Created(_));
    }
}
