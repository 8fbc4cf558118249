mod client;

pub use client::{new_pool, redis_delete, redis_get, redis_set};
