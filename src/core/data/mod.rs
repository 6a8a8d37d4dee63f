pub mod confirm_prompt;
pub mod dataset;
pub mod image;
pub mod progress_sample;
