pub mod overwrite_guard;
pub mod progress_throttler;
