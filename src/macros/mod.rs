pub mod defer_interaction;
pub mod guild_command;
pub mod handle_ephemeral;
