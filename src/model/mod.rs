pub mod palette;
pub mod settings;
pub mod task;

pub use palette::*;
pub use settings::*;
pub use task::*;
