//! Dashboard statistics.

use crate::api::decode;
use crate::client::ApiContext;
use crate::error::ClientError;
use crate::models::DashboardStats;

pub fn stats(ctx: &ApiContext) -> Result<DashboardStats, ClientError> {
    decode(ctx.request().get("dashboard-stats/")?)
}
