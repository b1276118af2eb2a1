use std::path::Path;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::errors::StorageError;
use crate::storage::UploadReceipt;
use crate::storage::s3::models::S3StorageClient;

impl S3StorageClient {
    /// Upload a file, overwriting any object already stored under `key`
    pub fn put_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<UploadReceipt, StorageError> {
        if !local_path.exists() {
            return Err(StorageError::MissingLocalFile(local_path.to_path_buf()));
        }

        let upload_error = |message: String| StorageError::Upload {
            path: local_path.to_path_buf(),
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        };

        self.runtime.block_on(async {
            // Streams from disk rather than loading the file into memory
            let body = ByteStream::from_path(local_path)
                .await
                .map_err(|e| upload_error(format!("Failed to read file: {e}")))?;

            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .await
                .map_err(|e| upload_error(DisplayErrorContext(&e).to_string()))?;

            let etag = response.e_tag().map(|t| t.replace('"', ""));
            self.logger.debug(&format!(
                "PutObject {bucket}/{key} etag={}",
                etag.as_deref().unwrap_or("-")
            ));
            Ok(UploadReceipt::new(bucket, key, etag))
        })
    }
}
