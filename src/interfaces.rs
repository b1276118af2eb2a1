use crate::errors::StorageError;
use crate::storage::UploadReceipt;
use mockall::automock;
use std::path::Path;

/// Object storage operations the uploader depends on
///
/// Transport, retries and authentication belong to the implementation.
#[automock]
pub trait StorageClient {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError>;
    /// Upload `local_path` to `bucket` under `key`, replacing any existing object.
    fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<UploadReceipt, StorageError>;
    fn list_buckets(&self) -> Result<Vec<String>, StorageError>;
}
