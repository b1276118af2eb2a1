use std::path::Path;

use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};

use crate::credentials::{CredentialSource, KeyFile};
use crate::errors::{Result, StorageError};
use crate::interfaces::StorageClient;
use crate::storage::UploadReceipt;
use crate::storage::s3::models::{S3Config, S3StorageClient};
use crate::utils::log_utils::Logger;

impl S3StorageClient {
    /// Create a new S3-compatible client from the provided config
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot start or the key file cannot be read.
    pub fn new(config: S3Config, logger: Logger) -> Result<Self> {
        // One runtime per client, reused for every call
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            StorageError::Runtime(format!("Failed to create runtime: {e}"))
        })?;

        logger.debug("Creating S3-compatible client with these parameters:");
        logger.debug(&format!("Endpoint: {}", config.endpoint));
        logger.debug(&format!("Region: {}", config.region));
        logger.debug(&format!("Credentials: {}", config.credentials.describe()));

        let region = Region::new(config.region.clone());
        let retry = RetryConfig::standard().with_max_attempts(3);

        let s3_config = match &config.credentials {
            CredentialSource::KeyFile(path) => {
                let key_file = KeyFile::load(path)?;
                let key_hint: String = key_file.access_key_id.chars().take(4).collect();
                logger.debug(&format!("Key ID: {key_hint}****"));
                let credentials = Credentials::new(
                    key_file.access_key_id,
                    key_file.secret_access_key,
                    None,
                    None,
                    "BucketMirrorKeyFile",
                );
                aws_sdk_s3::Config::builder()
                    .region(region)
                    .endpoint_url(&config.endpoint)
                    .credentials_provider(credentials)
                    .retry_config(retry)
                    .force_path_style(true)
                    .behavior_version(BehaviorVersion::latest())
                    .build()
            }
            CredentialSource::DefaultChain => {
                let sdk_config = runtime.block_on(
                    aws_config::defaults(BehaviorVersion::latest())
                        .region(region)
                        .endpoint_url(&config.endpoint)
                        .retry_config(retry)
                        .load(),
                );
                aws_sdk_s3::config::Builder::from(&sdk_config)
                    .force_path_style(true)
                    .build()
            }
        };

        Ok(Self {
            client: Client::from_conf(s3_config),
            runtime,
            logger,
        })
    }
}


impl StorageClient for S3StorageClient {
    fn bucket_exists(&self, bucket: &str) -> std::result::Result<bool, StorageError> {
        self.head_bucket(bucket)
    }

    fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> std::result::Result<UploadReceipt, StorageError> {
        self.put_file(local_path, bucket, key)
    }

    fn list_buckets(&self) -> std::result::Result<Vec<String>, StorageError> {
        self.bucket_names()
    }
}
