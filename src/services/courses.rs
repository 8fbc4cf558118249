use std::collections::BTreeMap;
use std::sync::Arc;

use futures::StreamExt;
use mongodb::bson::doc;

use crate::{context::Context, dbs::mongo::models::course::Course};

pub struct CourseService;

impl CourseService {
    /// Courses grouped by (course-selection channel, academic year). The
    /// map order is stable, so render passes walk channels and years in a
    /// deterministic order.
    pub async fn by_selection_channel(
        ctx: &Arc<Context>,
        guild_id: u64,
    ) -> anyhow::Result<BTreeMap<(u64, u32), Vec<Course>>> {
        let mut grouped: BTreeMap<(u64, u32), Vec<Course>> = BTreeMap::new();

        let mut cursor = ctx
            .mongo
            .courses
            .find(doc! { "guild_id": guild_id as i64 })
            .await?;
        while let Some(course) = cursor.next().await {
            let course = course?;
            grouped
                .entry((course.channel_id, course.year))
                .or_default()
                .push(course);
        }

        Ok(grouped)
    }

    pub async fn panel_message(ctx: &Arc<Context>, channel_id: u64, year: u32) -> Option<u64> {
        ctx.mongo
            .course_panels
            .find_one(doc! { "channel_id": channel_id as i64, "year": year })
            .await
            .ok()
            .flatten()
            .map(|panel| panel.message_id)
    }

    pub async fn set_panel_message(
        ctx: &Arc<Context>,
        channel_id: u64,
        year: u32,
        message_id: u64,
    ) {
        if let Err(e) = ctx
            .mongo
            .course_panels
            .update_one(
                doc! { "channel_id": channel_id as i64, "year": year },
                doc! { "$set": {
                    "channel_id": channel_id as i64,
                    "year": year,
                    "message_id": message_id as i64,
                } },
            )
            .upsert(true)
            .await
        {
            tracing::warn!(channel_id, year, message_id, error = %e, "failed to persist course panel message id");
        }
    }
}
