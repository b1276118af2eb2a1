pub mod dry_run;
pub mod models;
pub mod s3;

pub use dry_run::DryRunStorage;
pub use models::UploadReceipt;
pub use s3::{S3Config, S3StorageClient};
