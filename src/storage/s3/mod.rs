pub mod bucket;
pub mod client;
pub mod models;
pub mod upload;

pub use models::{S3Config, S3StorageClient};
