pub mod error;
pub mod ops;
pub mod store;
pub mod table;
pub mod task;

pub use error::Error;
pub use store::{StoreError, TaskStore};
pub use task::{Status, Task, TaskList};
