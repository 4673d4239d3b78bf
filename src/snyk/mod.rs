pub mod client;
pub mod paginator;
pub mod source;

pub use client::SnykClient;
pub use paginator::Paginator;
pub use source::IgnoreSource;
