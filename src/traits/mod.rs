pub mod line_counter;
pub mod repository_listing_client;
pub mod source_control_client;
