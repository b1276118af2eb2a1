use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::StorageError;
use crate::interfaces::StorageClient;
use crate::utils::log_utils::Logger;
use crate::utils::path_utils::dir_exists;

/// What happened to one directory upload call
#[derive(Debug)]
pub enum UploadOutcome {
    /// Local directory was absent; nothing attempted
    MissingLocalDir(PathBuf),
    /// Target bucket does not exist; nothing uploaded
    BucketMissing(String),
    /// `failed_dirs` counts nested directories that stopped early
    Completed { uploaded: usize, failed_dirs: usize },
    /// Work stopped at `cause`; files uploaded before it stay uploaded
    Failed {
        uploaded: usize,
        failed_dirs: usize,
        cause: UploadFailure,
    },
}

impl UploadOutcome {
    pub fn uploaded(&self) -> usize {
        match self {
            Self::Completed { uploaded, .. } | Self::Failed { uploaded, .. } => *uploaded,
            Self::MissingLocalDir(_) | Self::BucketMissing(_) => 0,
        }
    }

    /// Directories in this tree that stopped early, this one included
    pub fn failed_dirs(&self) -> usize {
        match self {
            Self::Completed { failed_dirs, .. } => *failed_dirs,
            Self::Failed { failed_dirs, .. } => failed_dirs + 1,
            Self::MissingLocalDir(_) | Self::BucketMissing(_) => 0,
        }
    }
}

/// Running totals for one directory and everything below it
#[derive(Debug, Default)]
struct Tally {
    uploaded: usize,
    failed_dirs: usize,
}

#[derive(Debug)]
pub enum UploadFailure {
    Listing { dir: PathBuf, message: String },
    Storage(StorageError),
}

impl fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing { dir, message } => {
                write!(f, "failed to list {}: {message}", dir.display())
            }
            Self::Storage(e) => write!(f, "{e}"),
        }
    }
}

/// Join a destination prefix and an entry name with `/`, whatever the host separator.
pub fn join_key(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Mirrors a local directory tree into a bucket, one object per regular file.
pub struct DirectoryUploader<'a, S: StorageClient> {
    storage: &'a S,
    logger: Logger,
}

impl<'a, S: StorageClient> DirectoryUploader<'a, S> {
    pub fn new(storage: &'a S, logger: Logger) -> Self {
        Self { storage, logger }
    }

    /// Upload everything under `local_dir` to `bucket`, keyed by `dest_prefix/<relative path>`.
    ///
    /// The bucket is checked once here; recursion assumes it exists.
    pub fn upload(&self, local_dir: &Path, bucket: &str, dest_prefix: &str) -> UploadOutcome {
        if !dir_exists(local_dir) {
            self.logger
                .normal(&format!("Directory does not exist: {}", local_dir.display()));
            return UploadOutcome::MissingLocalDir(local_dir.to_path_buf());
        }

        match self.storage.bucket_exists(bucket) {
            Ok(true) => {}
            Ok(false) => {
                self.logger.error(&format!(
                    "Bucket \"{bucket}\" does not exist. Please create it first."
                ));
                return UploadOutcome::BucketMissing(bucket.to_string());
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Error uploading directory {}: {e}",
                    local_dir.display()
                ));
                return UploadOutcome::Failed {
                    uploaded: 0,
                    failed_dirs: 0,
                    cause: UploadFailure::Storage(e),
                };
            }
        }

        self.upload_tree(local_dir, bucket, dest_prefix)
    }

    fn upload_tree(&self, local_dir: &Path, bucket: &str, dest_prefix: &str) -> UploadOutcome {
        self.logger.normal(&format!(
            "Uploading from {} to {bucket}/{dest_prefix}",
            local_dir.display()
        ));

        let mut tally = Tally::default();
        match self.upload_entries(local_dir, bucket, dest_prefix, &mut tally) {
            Ok(()) => {
                self.logger.normal(&format!(
                    "Completed upload from {} to {bucket}/{dest_prefix}",
                    local_dir.display()
                ));
                UploadOutcome::Completed {
                    uploaded: tally.uploaded,
                    failed_dirs: tally.failed_dirs,
                }
            }
            Err(cause) => {
                self.logger.error(&format!(
                    "Error uploading directory {}: {cause}",
                    local_dir.display()
                ));
                UploadOutcome::Failed {
                    uploaded: tally.uploaded,
                    failed_dirs: tally.failed_dirs,
                    cause,
                }
            }
        }
    }

    /// Process the immediate entries of `local_dir`.
    ///
    /// The first listing or upload error ends this directory. A failing child
    /// directory has already been reported by its own call, so siblings continue;
    /// its failures are still added to `tally`.
    fn upload_entries(
        &self,
        local_dir: &Path,
        bucket: &str,
        dest_prefix: &str,
        tally: &mut Tally,
    ) -> Result<(), UploadFailure> {
        let listing = WalkDir::new(local_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in listing {
            let entry = entry.map_err(|e| UploadFailure::Listing {
                dir: local_dir.to_path_buf(),
                message: e.to_string(),
            })?;
            // A lossy conversion could map two local names onto one key
            let Some(name) = entry.file_name().to_str() else {
                return Err(UploadFailure::Listing {
                    dir: local_dir.to_path_buf(),
                    message: format!(
                        "file name {:?} is not valid UTF-8",
                        entry.file_name()
                    ),
                });
            };
            let dest_key = join_key(dest_prefix, name);

            if entry.file_type().is_dir() {
                self.logger
                    .debug(&format!("Descending into {}", entry.path().display()));
                let child = self.upload_tree(entry.path(), bucket, &dest_key);
                tally.uploaded += child.uploaded();
                tally.failed_dirs += child.failed_dirs();
            } else {
                let receipt = self
                    .storage
                    .upload_file(entry.path(), bucket, &dest_key)
                    .map_err(UploadFailure::Storage)?;
                tally.uploaded += 1;
                self.logger.normal(&format!(
                    "Uploaded: {} → {}/{}",
                    entry.path().display(),
                    receipt.bucket,
                    receipt.key
                ));
            }
        }
        Ok(())
    }
}
