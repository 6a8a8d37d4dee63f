pub mod console;
pub mod file;
pub mod headless;
