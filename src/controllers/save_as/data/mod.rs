pub mod save_config;
pub mod save_outcome;
pub mod save_request;
