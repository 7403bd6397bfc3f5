use std::sync::Arc;

use chrono::Utc;

use cineweb_client::{ApiError, Gateway};
use cineweb_core::models::Room;
use cineweb_core::types::Timestamp;
use cineweb_core::validation::{RoomDraft, RoomField};

use crate::forms::{FormController, SubmitOutcome};

pub struct RoomsPage {
    gateway: Arc<dyn Gateway>,
    rooms: Vec<Room>,
    form: FormController<RoomDraft>,
}

impl RoomsPage {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            rooms: Vec::new(),
            form: FormController::new(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn form(&self) -> &FormController<RoomDraft> {
        &self.form
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        let rooms = self.gateway.list_rooms().await.map_err(|error| {
            tracing::error!(error = %error, "Failed to load rooms");
            error
        })?;
        self.rooms = rooms;
        Ok(())
    }

    pub fn edit(&mut self, field: RoomField, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    pub async fn submit(&mut self) -> SubmitOutcome<Room> {
        self.submit_at(Utc::now()).await
    }

    pub async fn submit_at(&mut self, now: Timestamp) -> SubmitOutcome<Room> {
        let gateway = Arc::clone(&self.gateway);
        let outcome = self
            .form
            .submit_with(now, move |room| async move { gateway.create_room(&room).await })
            .await;

        if outcome.is_created() {
            let _ = self.load().await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use cineweb_core::validation::room::NUMBER_NOT_A_NUMBER;

    use crate::mocks::InMemoryGateway;

    use super::*;

    #[tokio::test]
    async fn submit_creates_room_and_refetches() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut page = RoomsPage::new(gateway.clone());
        page.edit(RoomField::Number, "1");
        page.edit(RoomField::Capacity, "80");

        let outcome = page.submit().await;

        let room = assert_matches!(outcome, SubmitOutcome::Created(room) => room);
        assert_eq!((room.number, room.capacity), (1.0, 80.0));
        assert_eq!(gateway.calls(), ["create_room", "list_rooms"]);
        assert_eq!(page.rooms().len(), 1);
    }

    #[tokio::test]
    async fn non_numeric_number_is_rejected_locally() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut page = RoomsPage::new(gateway.clone());
        page.edit(RoomField::Number, "um");
        page.edit(RoomField::Capacity, "80");

        assert_matches!(page.submit().await, SubmitOutcome::Invalid);
        assert_eq!(page.form().errors().get(RoomField::Number), Some(NUMBER_NOT_A_NUMBER));
        assert!(gateway.calls().is_empty());
    }
}
