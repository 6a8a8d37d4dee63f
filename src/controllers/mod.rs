pub mod save_as;
