pub mod config_entry;
pub mod course;
pub mod course_panel;
pub mod role_group;
