pub mod button_style;
pub mod embed;
pub mod env;
pub mod text;
