use aws_sdk_s3::error::DisplayErrorContext;

use crate::errors::StorageError;
use crate::storage::s3::models::S3StorageClient;

impl S3StorageClient {
    /// Check for a bucket without creating it
    ///
    /// A 404 from HeadBucket means absent; any other failure is an error.
    pub fn head_bucket(&self, bucket: &str) -> Result<bool, StorageError> {
        self.runtime.block_on(async {
            match self.client.head_bucket().bucket(bucket).send().await {
                Ok(_) => Ok(true),
                Err(e) => {
                    let not_found = e
                        .as_service_error()
                        .is_some_and(|se| se.is_not_found())
                        || e.raw_response()
                            .is_some_and(|r| r.status().as_u16() == 404);
                    if not_found {
                        self.logger
                            .debug(&format!("HeadBucket returned not found for '{bucket}'"));
                        Ok(false)
                    } else {
                        Err(StorageError::BucketCheck {
                            bucket: bucket.to_string(),
                            message: DisplayErrorContext(&e).to_string(),
                        })
                    }
                }
            }
        })
    }

    /// List the names of all buckets visible to the current credentials
    pub fn bucket_names(&self) -> Result<Vec<String>, StorageError> {
        self.runtime.block_on(async {
            let response = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| StorageError::ListBuckets(DisplayErrorContext(&e).to_string()))?;

            let names: Vec<String> = response
                .buckets()
                .iter()
                .filter_map(|b| b.name().map(str::to_string))
                .collect();
            self.logger
                .debug(&format!("ListBuckets returned {} buckets", names.len()));
            Ok(names)
        })
    }
}
