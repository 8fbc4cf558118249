pub mod config;
pub mod courses;
pub mod groups;
pub mod health;
pub mod role_selection;
pub mod shutdown;
