pub mod config;
pub mod error;
pub mod models;
pub mod snyk;
pub mod traversal;
pub mod export;

pub use config::{Config, WalkerConfig};
pub use error::{Error, Result};
pub use snyk::{IgnoreSource, SnykClient};
pub use traversal::HierarchyWalker;
