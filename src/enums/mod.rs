pub mod analysis_status;
pub mod commands;
