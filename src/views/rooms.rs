use std::sync::Arc;

use crate::api;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::Room;

/// Room board for doctors: list, occupy, release.
pub struct RoomBoardController {
    ctx: Arc<ApiContext>,
    pub rooms: Vec<Room>,
    pub loading: bool,
}

impl RoomBoardController {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self {
            ctx,
            rooms: Vec::new(),
            loading: false,
        }
    }

    pub fn load(&mut self) {
        self.loading = true;
        match api::rooms::list(&self.ctx) {
            Ok(rooms) => self.rooms = rooms,
            Err(e) => tracing::debug!(error = %e, "room list load failed"),
        }
        self.loading = false;
    }

    /// Occupy then reload so the board reflects the backend's verdict.
    /// A rejection ("Room is not available") is already on the toast
    /// surface; the board just stays as it was.
    pub fn occupy(&mut self, room_id: i64) -> Result<(), ClientError> {
        api::rooms::occupy(&self.ctx, room_id)?;
        self.ctx.toasts().success("Room occupied successfully");
        self.load();
        Ok(())
    }

    pub fn unoccupy(&mut self, room_id: i64) -> Result<(), ClientError> {
        api::rooms::unoccupy(&self.ctx, room_id)?;
        self.ctx.toasts().success("Room released");
        self.load();
        Ok(())
    }

    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockTransport, Transport};
    use crate::notify::{ToastBus, ToastKind};
    use crate::route::Navigator;
    use crate::session::SessionStore;
    use serde_json::json;

    fn controller() -> (RoomBoardController, Arc<MockTransport>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(MockTransport::new());
        let ctx = Arc::new(ApiContext::with_parts(
            "http://backend.test/api/",
            Arc::new(SessionStore::with_path(dir.path().join("session.json"))),
            Arc::new(ToastBus::new()),
            Arc::new(Navigator::new()),
            transport.clone() as Arc<dyn Transport>,
        ));
        (RoomBoardController::new(ctx), transport, dir)
    }

    fn room_row(id: i64, status: &str) -> serde_json::Value {
        json!({
            "id": id, "name": format!("Room {id}"), "room_type": "patient",
            "description": "", "floor": 1, "capacity": 1, "equipment": "",
            "status": status, "current_occupant": null, "patient": null,
            "created_at": "2024-09-01T00:00:00Z", "updated_at": "2024-09-01T00:00:00Z"
        })
    }

    #[test]
    fn load_filters_available_rooms() {
        let (mut controller, transport, _dir) = controller();
        transport.push_json(200, json!([room_row(1, "available"), room_row(2, "occupied")]));

        controller.load();

        assert_eq!(controller.rooms.len(), 2);
        assert_eq!(controller.available_rooms().count(), 1);
    }

    #[test]
    fn occupy_reloads_the_board() {
        let (mut controller, transport, _dir) = controller();
        transport.push_json(200, json!({"message": "Room occupied successfully"}));
        transport.push_json(200, json!([room_row(1, "occupied")]));

        controller.occupy(1).unwrap();

        assert_eq!(controller.rooms[0].status, crate::models::RoomStatus::Occupied);
        let toasts = controller.ctx.toasts().active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }

    #[test]
    fn rejected_occupy_leaves_board_unchanged() {
        let (mut controller, transport, _dir) = controller();
        transport.push_json(200, json!([room_row(1, "occupied")]));
        controller.load();

        transport.push_json(400, json!({"message": "Room is not available"}));
        let result = controller.occupy(1);

        assert!(result.is_err());
        assert_eq!(controller.rooms.len(), 1);
        let toasts = controller.ctx.toasts().active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Room is not available");
    }
}
