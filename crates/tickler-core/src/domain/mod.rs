//! Domain model (IDs, tasks, drafts, filters, errors).

pub mod draft;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod importance;
pub mod task;

pub use self::draft::TaskDraft;
pub use self::errors::ValidationError;
pub use self::filter::TaskFilter;
pub use self::ids::TaskId;
pub use self::importance::Importance;
pub use self::task::Task;
