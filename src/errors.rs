use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Credential file not found at {}", .0.display())]
    MissingKeyFile(PathBuf),

    #[error("Credential verification failed: {0}")]
    CredentialVerification(#[source] StorageError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No bucket defined for product \"{0}\"")]
    UnknownProduct(String),

    #[error("Duplicate product \"{0}\" in configuration")]
    DuplicateProduct(String),

    #[error("Product \"{0}\" has an empty bucket name")]
    EmptyBucket(String),

    #[error("Invalid subdirectory name \"{0}\"")]
    InvalidSubdir(String),

    #[error("Configuration defines no products")]
    NoProducts,

    #[error("Product name must not be empty")]
    EmptyProductName,

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to check bucket \"{bucket}\": {message}")]
    BucketCheck { bucket: String, message: String },

    #[error("Failed to upload {} to {bucket}/{key}: {message}", path.display())]
    Upload {
        path: PathBuf,
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to list buckets: {0}")]
    ListBuckets(String),

    #[error("Local file does not exist: {}", .0.display())]
    MissingLocalFile(PathBuf),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, MirrorError>;
