use std::sync::Arc;

use deadpool_redis::Pool;
use twilight_cache_inmemory::{DefaultInMemoryCache, ResourceType};
use twilight_http::Client;

use crate::configs::discord::DISCORD_CONFIGS;
use crate::dbs::mongo::MongoDB;
use crate::dbs::redis::new_pool;

use super::Context;

#[derive(Default)]
pub struct ContextBuilder {
    http: Option<Client>,
    cache: Option<DefaultInMemoryCache>,
    redis: Option<Pool>,
    mongo: Option<Arc<MongoDB>>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn http(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn cache(mut self, cache: DefaultInMemoryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn redis(mut self, redis: Pool) -> Self {
        self.redis = Some(redis);
        self
    }

    pub fn mongo(mut self, mongo: Arc<MongoDB>) -> Self {
        self.mongo = Some(mongo);
        self
    }

    pub async fn build(self) -> anyhow::Result<Context> {
        let http = self
            .http
            .unwrap_or_else(|| Client::new(DISCORD_CONFIGS.discord_token.clone()));

        let cache = self.cache.unwrap_or_else(|| {
            DefaultInMemoryCache::builder()
                .resource_types(
                    ResourceType::GUILD
                        | ResourceType::CHANNEL
                        | ResourceType::MESSAGE
                        | ResourceType::ROLE
                        | ResourceType::MEMBER
                        | ResourceType::USER_CURRENT,
                )
                .build()
        });

        let redis = match self.redis {
            Some(pool) => pool,
            None => new_pool()?,
        };

        let mongo = match self.mongo {
            Some(mongo) => mongo,
            None => MongoDB::init().await?,
        };

        Ok(Context {
            http: Arc::new(http),
            cache: Arc::new(cache),
            mongo,
            redis,
        })
    }
}
