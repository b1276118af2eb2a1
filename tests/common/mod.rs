#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use bucket_mirror::errors::StorageError;
use bucket_mirror::interfaces::StorageClient;
use bucket_mirror::storage::UploadReceipt;

/// Storage fake that records every upload and can fail on chosen keys
#[derive(Default)]
pub struct RecordingStorage {
    pub uploads: RefCell<Vec<(String, String, PathBuf)>>,
    pub bucket_checks: RefCell<Vec<String>>,
    pub missing_buckets: HashSet<String>,
    pub failing_keys: HashSet<String>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_bucket(mut self, bucket: &str) -> Self {
        self.missing_buckets.insert(bucket.to_string());
        self
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    /// `bucket/key` strings, ordered for comparison
    pub fn uploaded_keys(&self) -> BTreeSet<String> {
        self.uploads
            .borrow()
            .iter()
            .map(|(bucket, key, _)| format!("{bucket}/{key}"))
            .collect()
    }
}

impl StorageClient for RecordingStorage {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
        self.bucket_checks.borrow_mut().push(bucket.to_string());
        Ok(!self.missing_buckets.contains(bucket))
    }

    fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
    ) -> Result<UploadReceipt, StorageError> {
        if self.failing_keys.contains(key) {
            return Err(StorageError::Upload {
                path: local_path.to_path_buf(),
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "simulated failure".to_string(),
            });
        }
        self.uploads.borrow_mut().push((
            bucket.to_string(),
            key.to_string(),
            local_path.to_path_buf(),
        ));
        Ok(UploadReceipt::new(bucket, key, Some("etag".to_string())))
    }

    fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        Ok(vec!["bia-test".to_string()])
    }
}

/// Create `relative` under `root` with its parent directories
pub fn write_file(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, relative.as_bytes()).unwrap();
}
