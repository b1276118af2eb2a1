/// Result of a single object upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub bucket: String,
    pub key: String,
    /// Absent for dry runs and providers that omit it
    pub etag: Option<String>,
    pub uploaded_at: String,
}

impl UploadReceipt {
    pub fn new(bucket: &str, key: &str, etag: Option<String>) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            etag,
            uploaded_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}
