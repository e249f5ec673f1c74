pub mod store_io;

pub use store_io::{StoreError, load_settings, load_tasks, save_settings, save_tasks};
