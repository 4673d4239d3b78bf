pub mod flattener;
pub mod walker;

pub use flattener::{flatten_ignore_set, flatten_issue, ProjectScope};
pub use walker::HierarchyWalker;
