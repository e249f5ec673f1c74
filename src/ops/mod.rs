pub mod reorder;
pub mod store;
pub mod task_ops;

pub use reorder::{DragState, RowExtent, resolve_drop_target};
pub use store::{StoreOpError, TaskStore};
pub use task_ops::TaskError;
