pub mod commands;
pub mod work_entry;
