use deadpool_redis::Pool;
use mongodb::bson::doc;

use crate::{
    configs::CACHE_PREFIX,
    context::Context,
    dbs::redis::{redis_delete, redis_get, redis_set},
};
use std::sync::Arc;

pub struct ConfigService;

impl ConfigService {
    pub fn scoped(scope: &str, key: &str) -> String {
        format!("{scope}:{key}")
    }

    pub async fn get(ctx: &Arc<Context>, key: &str) -> Option<String> {
        let redis_key = format!("{CACHE_PREFIX}:config:{key}");

        if let Some(value) = redis_get(&ctx.redis, &redis_key).await {
            return Some(value);
        }

        if let Ok(Some(entry)) = ctx.mongo.configs.find_one(doc! { "key": key }).await {
            redis_set(&ctx.redis, &redis_key, &entry.value).await;
            return Some(entry.value);
        }

        None
    }

    pub async fn get_scoped(ctx: &Arc<Context>, scope: &str, key: &str) -> Option<String> {
        Self::get(ctx, &Self::scoped(scope, key)).await
    }

    pub async fn upsert(ctx: &Arc<Context>, key: &str, value: &str) -> anyhow::Result<()> {
        ctx.mongo
            .configs
            .update_one(
                doc! { "key": key },
                doc! { "$set": { "key": key, "value": value } },
            )
            .upsert(true)
            .await?;
        Self::purge_cache(&ctx.redis, key).await;
        Ok(())
    }

    pub async fn purge_cache(pool: &Pool, key: &str) {
        let redis_key = format!("{CACHE_PREFIX}:config:{key}");
        redis_delete(pool, &redis_key).await;
    }
}
