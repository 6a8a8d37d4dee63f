pub mod display;
pub mod publisher;
