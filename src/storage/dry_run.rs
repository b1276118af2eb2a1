use std::path::Path;

use crate::errors::StorageError;
use crate::interfaces::StorageClient;
use crate::storage::UploadReceipt;
use crate::utils::log_utils::Logger;

/// Storage client that performs no network calls.
///
/// Every bucket is treated as existing; uploads are logged and reported as done.
pub struct DryRunStorage {
    buckets: Vec<String>,
    logger: Logger,
}

impl DryRunStorage {
    pub fn new(buckets: Vec<String>, logger: Logger) -> Self {
        Self { buckets, logger }
    }
}

impl StorageClient for DryRunStorage {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
        self.logger
            .debug(&format!("dry run: assuming bucket '{bucket}' exists"));
        Ok(true)
    }

    fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<UploadReceipt, StorageError> {
        if !local_path.is_file() {
            return Err(StorageError::MissingLocalFile(local_path.to_path_buf()));
        }
        self.logger.info(&format!(
            "dry run: would upload {} to {bucket}/{key}",
            local_path.display()
        ));
        Ok(UploadReceipt::new(bucket, key, None))
    }

    fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.buckets.clone())
    }
}
