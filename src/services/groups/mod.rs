pub mod validate;

use deadpool_redis::Pool;
use futures::StreamExt;
use mongodb::bson::{doc, to_bson};
use std::sync::Arc;

use twilight_model::id::Id;

use crate::{
    configs::CACHE_PREFIX,
    context::Context,
    dbs::{
        mongo::models::role_group::{GroupMode, RoleGroup, RoleGroupOption},
        redis::{redis_delete, redis_get, redis_set},
    },
    utils::text::unescape_newlines,
};

pub use validate::GroupError;
use validate::{is_text_channel, validate_cardinality, validate_group_id};

pub struct NewGroup {
    pub group_id: String,
    pub mode: GroupMode,
    pub placeholder: Option<String>,
    pub message: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub min_values: i64,
    pub max_values: i64,
}

pub struct GroupService;

impl GroupService {
    pub async fn list(ctx: &Arc<Context>, guild_id: u64) -> Vec<RoleGroup> {
        let redis_key = format!("{CACHE_PREFIX}:role-groups:{guild_id}");

        if let Some(groups) = redis_get::<Vec<RoleGroup>>(&ctx.redis, &redis_key).await {
            return groups;
        }

        let mut groups = Vec::new();
        if let Ok(mut cursor) = ctx
            .mongo
            .role_groups
            .find(doc! { "guild_id": guild_id as i64 })
            .await
        {
            while let Some(Ok(group)) = cursor.next().await {
                groups.push(group);
            }

            redis_set(&ctx.redis, &redis_key, &groups).await;
        }

        groups
    }

    pub async fn get(ctx: &Arc<Context>, group_id: &str) -> Option<RoleGroup> {
        ctx.mongo
            .role_groups
            .find_one(doc! { "group_id": group_id })
            .await
            .ok()
            .flatten()
    }

    pub async fn purge_cache(pool: &Pool, guild_id: u64) {
        let redis_key = format!("{CACHE_PREFIX}:role-groups:{guild_id}");
        redis_delete(pool, &redis_key).await;
    }

    pub async fn create(ctx: &Arc<Context>, new: NewGroup) -> Result<RoleGroup, GroupError> {
        validate_group_id(&new.group_id)?;
        validate_cardinality(new.min_values, new.max_values)?;
        Self::require_text_channel(ctx, new.channel_id)?;

        if Self::get(ctx, &new.group_id).await.is_some() {
            return Err(GroupError::DuplicateId(new.group_id));
        }

        let group = RoleGroup {
            id: None,
            group_id: new.group_id,
            mode: new.mode,
            placeholder: new.placeholder.as_deref().map(unescape_newlines),
            message: unescape_newlines(&new.message),
            guild_id: new.guild_id,
            channel_id: new.channel_id,
            min_values: new.min_values,
            max_values: new.max_values,
            message_id: None,
            options: Vec::new(),
        };

        ctx.mongo
            .role_groups
            .insert_one(&group)
            .await
            .map_err(|e| Self::internal(&group.group_id, e))?;
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    pub async fn edit_text(
        ctx: &Arc<Context>,
        group_id: &str,
        message: Option<&str>,
        placeholder: Option<&str>,
    ) -> Result<RoleGroup, GroupError> {
        let group = Self::require(ctx, group_id).await?;

        let mut set = doc! {};
        if let Some(message) = message {
            set.insert("message", unescape_newlines(message));
        }
        if let Some(placeholder) = placeholder {
            set.insert("placeholder", unescape_newlines(placeholder));
        }
        if set.is_empty() {
            return Ok(group);
        }

        ctx.mongo
            .role_groups
            .update_one(doc! { "group_id": group_id }, doc! { "$set": set })
            .await
            .map_err(|e| Self::internal(group_id, e))?;
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    pub async fn move_channel(
        ctx: &Arc<Context>,
        group_id: &str,
        channel_id: u64,
    ) -> Result<RoleGroup, GroupError> {
        Self::require_text_channel(ctx, channel_id)?;
        let group = Self::require(ctx, group_id).await?;

        // The old rendered message stays in the old channel; clearing the
        // reference makes the next render pass send a fresh one.
        ctx.mongo
            .role_groups
            .update_one(
                doc! { "group_id": group_id },
                doc! {
                    "$set": { "channel_id": channel_id as i64 },
                    "$unset": { "message_id": "" },
                },
            )
            .await
            .map_err(|e| Self::internal(group_id, e))?;
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    pub async fn set_cardinality(
        ctx: &Arc<Context>,
        group_id: &str,
        min_values: i64,
        max_values: i64,
    ) -> Result<RoleGroup, GroupError> {
        validate_cardinality(min_values, max_values)?;
        let group = Self::require(ctx, group_id).await?;

        ctx.mongo
            .role_groups
            .update_one(
                doc! { "group_id": group_id },
                doc! { "$set": { "min_values": min_values, "max_values": max_values } },
            )
            .await
            .map_err(|e| Self::internal(group_id, e))?;
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    pub async fn delete(ctx: &Arc<Context>, group_id: &str) -> Result<RoleGroup, GroupError> {
        let group = Self::require(ctx, group_id).await?;

        ctx.mongo
            .role_groups
            .delete_one(doc! { "group_id": group_id })
            .await
            .map_err(|e| Self::internal(group_id, e))?;
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    pub async fn add_option(
        ctx: &Arc<Context>,
        group_id: &str,
        option: RoleGroupOption,
    ) -> Result<RoleGroup, GroupError> {
        let group = Self::require(ctx, group_id).await?;

        let bson = to_bson(&option).map_err(|e| {
            tracing::error!(group_id, error = %e, "failed to serialize group option");
            GroupError::Internal
        })?;

        // The filter doubles as the per-group uniqueness constraint on the
        // option's role id.
        let result = ctx
            .mongo
            .role_groups
            .update_one(
                doc! {
                    "group_id": group_id,
                    "options.value": { "$ne": option.value as i64 },
                },
                doc! { "$push": { "options": bson } },
            )
            .await
            .map_err(|e| Self::internal(group_id, e))?;

        if result.modified_count == 0 {
            return Err(GroupError::DuplicateOption(group_id.to_string()));
        }
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    pub async fn remove_option(
        ctx: &Arc<Context>,
        group_id: &str,
        role_id: u64,
    ) -> Result<RoleGroup, GroupError> {
        let group = Self::require(ctx, group_id).await?;

        let result = ctx
            .mongo
            .role_groups
            .update_one(
                doc! { "group_id": group_id },
                doc! { "$pull": { "options": { "value": role_id as i64 } } },
            )
            .await
            .map_err(|e| Self::internal(group_id, e))?;

        if result.modified_count == 0 {
            return Err(GroupError::UnknownOption(group_id.to_string()));
        }
        Self::purge_cache(&ctx.redis, group.guild_id).await;

        Ok(group)
    }

    /// Renderer bookkeeping; not exposed through the admin surface.
    pub async fn set_message_id(ctx: &Arc<Context>, group_id: &str, message_id: u64) {
        if let Err(e) = ctx
            .mongo
            .role_groups
            .update_one(
                doc! { "group_id": group_id },
                doc! { "$set": { "message_id": message_id as i64 } },
            )
            .await
        {
            tracing::warn!(group_id, message_id, error = %e, "failed to persist rendered message id");
            return;
        }

        if let Some(group) = Self::get(ctx, group_id).await {
            Self::purge_cache(&ctx.redis, group.guild_id).await;
        }
    }

    async fn require(ctx: &Arc<Context>, group_id: &str) -> Result<RoleGroup, GroupError> {
        Self::get(ctx, group_id)
            .await
            .ok_or_else(|| GroupError::NotFound(group_id.to_string()))
    }

    fn require_text_channel(ctx: &Arc<Context>, channel_id: u64) -> Result<(), GroupError> {
        match ctx.cache.channel(Id::new(channel_id)) {
            Some(channel) if is_text_channel(channel.kind) => Ok(()),
            _ => Err(GroupError::NotTextChannel),
        }
    }

    fn internal(group_id: &str, e: mongodb::error::Error) -> GroupError {
        tracing::error!(group_id, error = %e, "role group storage operation failed");
        GroupError::Internal
    }
}

#[cfg(test)]
mod tests;
