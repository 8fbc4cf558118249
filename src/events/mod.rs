pub mod guild_create;
pub mod interaction_create;
pub mod ready;
