mod builder;

pub use builder::ContextBuilder;

use std::sync::Arc;

use deadpool_redis::Pool;
use twilight_cache_inmemory::DefaultInMemoryCache;
use twilight_http::Client;

use crate::dbs::mongo::MongoDB;

/// Shared handles every event handler receives. Cloned behind an `Arc`, one
/// instance for the whole process.
pub struct Context {
    pub http: Arc<Client>,
    pub cache: Arc<DefaultInMemoryCache>,
    pub mongo: Arc<MongoDB>,
    pub redis: Pool,
}
