//! Room inventory and occupancy actions.
//!
//! Occupancy rules (who may occupy, double-booking) are enforced by the
//! backend; rejections come back as message bodies the guard surfaces.

use crate::api::{decode, Acknowledgment};
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::Room;

pub fn list(ctx: &ApiContext) -> Result<Vec<Room>, ClientError> {
    decode(ctx.request().get("rooms/")?)
}

pub fn create(ctx: &ApiContext, room: &Room) -> Result<Room, ClientError> {
    decode(ctx.request().post("rooms/", room)?)
}

pub fn update(ctx: &ApiContext, room_id: i64, room: &Room) -> Result<Room, ClientError> {
    decode(ctx.request().put(&format!("rooms/{room_id}/"), room)?)
}

pub fn delete(ctx: &ApiContext, room_id: i64) -> Result<(), ClientError> {
    ctx.request().delete(&format!("rooms/{room_id}/"))?;
    Ok(())
}

pub fn occupy(ctx: &ApiContext, room_id: i64) -> Result<Acknowledgment, ClientError> {
    decode(ctx.request().post_empty(&format!("rooms/{room_id}/occupy/"))?)
}

pub fn unoccupy(ctx: &ApiContext, room_id: i64) -> Result<Acknowledgment, ClientError> {
    decode(
        ctx.request()
            .post_empty(&format!("rooms/{room_id}/unoccupy/"))?,
    )
}
