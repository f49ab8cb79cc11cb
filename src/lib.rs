pub mod cache;
pub mod config;
pub mod metadata;
pub mod models;
pub mod probe;
pub mod product_info;
pub mod resources;
pub mod steam;
pub mod store;

pub use metadata::{MetadataError, MetadataProvider};
pub use tokio_util::sync::CancellationToken;
