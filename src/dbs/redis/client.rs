use anyhow::Context as _;
use deadpool_redis::{Config, Pool, Runtime, redis::cmd};
use serde::{Serialize, de::DeserializeOwned};

use crate::configs::redis::REDIS_CONFIGS;

pub fn new_pool() -> anyhow::Result<Pool> {
    let cfg = Config::from_url(REDIS_CONFIGS.url.clone());
    cfg.create_pool(Some(Runtime::Tokio1))
        .context("create redis pool")
}

pub async fn redis_get<T>(pool: &Pool, key: &str) -> Option<T>
where
    T: DeserializeOwned + Send + Sync,
{
    let mut conn = pool.get().await.ok()?;

    let json: String = cmd("GET").arg(key).query_async(&mut conn).await.ok()?;

    serde_json::from_str(&json)
        .context("redis_get: deserializing")
        .ok()
}

pub async fn redis_set<T>(pool: &Pool, key: &str, value: &T)
where
    T: Serialize + Sync,
{
    if let Err(e) = async {
        let json = serde_json::to_string(value).context("serialize value for redis_set")?;
        let mut conn = pool.get().await.context("get redis connection")?;
        cmd("SET")
            .arg(key)
            .arg(json)
            .query_async::<()>(&mut conn)
            .await
            .context("execute SET in redis")?;
        Ok::<(), anyhow::Error>(())
    }
    .await
    {
        tracing::error!(key, error = %e, "Redis SET failed");
    }
}

pub async fn redis_delete(pool: &Pool, key: &str) {
    if let Err(e) = async {
        let mut conn = pool.get().await?;
        cmd("DEL").arg(key).query_async::<()>(&mut conn).await?;
        Ok::<_, anyhow::Error>(())
    }
    .await
    {
        tracing::error!(key, error = %e, "Redis DEL failed")
    }
}
