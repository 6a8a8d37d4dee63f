pub mod save_event;
