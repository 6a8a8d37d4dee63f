pub mod display_error;
pub mod encode_error;
pub mod save_error;
