use aws_sdk_s3::Client;

use crate::credentials::CredentialSource;
use crate::utils::log_utils::Logger;

/// Cloud Storage XML API, which accepts S3 requests signed with HMAC keys
pub const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";
pub const DEFAULT_REGION: &str = "auto";

/// Configuration for an S3-compatible storage client
#[derive(Debug, Clone)]
pub struct S3Config {
    pub endpoint: String,
    pub region: String,
    pub credentials: CredentialSource,
}

impl S3Config {
    pub fn new(credentials: CredentialSource) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            credentials,
        }
    }
}

/// Blocking client for S3-compatible object storage
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) logger: Logger,
}
