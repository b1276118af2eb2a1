use crate::config::MirrorConfig;
use crate::errors::{ConfigError, MirrorError, Result};
use crate::interfaces::StorageClient;
use crate::uploader::{DirectoryUploader, UploadOutcome};
use crate::utils::log_utils::Logger;
use crate::utils::path_utils::dir_exists;

#[derive(Debug)]
pub enum SubdirStatus {
    /// Not present locally
    Skipped,
    Attempted(UploadOutcome),
}

#[derive(Debug)]
pub struct ProductReport {
    pub product: String,
    /// `None` when the product has no bucket in the table
    pub bucket: Option<String>,
    pub subdirs: Vec<(String, SubdirStatus)>,
}

impl ProductReport {
    pub fn uploaded(&self) -> usize {
        self.subdirs
            .iter()
            .map(|(_, status)| match status {
                SubdirStatus::Attempted(outcome) => outcome.uploaded(),
                SubdirStatus::Skipped => 0,
            })
            .sum()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub products: usize,
    pub unknown_products: usize,
    pub files_uploaded: usize,
    pub subdirs_skipped: usize,
    pub buckets_missing: usize,
    pub failures: usize,
}

impl RunSummary {
    fn record(&mut self, report: &ProductReport) {
        self.products += 1;
        if report.bucket.is_none() {
            self.unknown_products += 1;
        }
        for (_, status) in &report.subdirs {
            match status {
                SubdirStatus::Skipped => self.subdirs_skipped += 1,
                SubdirStatus::Attempted(outcome) => {
                    self.files_uploaded += outcome.uploaded();
                    self.failures += outcome.failed_dirs();
                    match outcome {
                        UploadOutcome::BucketMissing(_) => self.buckets_missing += 1,
                        UploadOutcome::MissingLocalDir(_) => self.subdirs_skipped += 1,
                        UploadOutcome::Completed { .. } | UploadOutcome::Failed { .. } => {}
                    }
                }
            }
        }
    }
}

/// Walks the product table and mirrors each product's subdirectories.
pub struct ProductDriver<'a, S: StorageClient> {
    config: &'a MirrorConfig,
    storage: &'a S,
    logger: Logger,
}

impl<'a, S: StorageClient> ProductDriver<'a, S> {
    pub fn new(config: &'a MirrorConfig, storage: &'a S, logger: Logger) -> Self {
        Self {
            config,
            storage,
            logger,
        }
    }

    /// Upload the configured subdirectories of one product.
    ///
    /// An unknown product is reported and nothing else happens.
    pub fn process_product(&self, product: &str) -> ProductReport {
        self.logger
            .normal(&format!("\n======= Processing {product} ======="));

        let Some(bucket) = self.config.bucket_for(product) else {
            self.logger
                .error(&ConfigError::UnknownProduct(product.to_string()).to_string());
            return ProductReport {
                product: product.to_string(),
                bucket: None,
                subdirs: Vec::new(),
            };
        };

        let product_dir = self.config.product_dir(product);
        let uploader = DirectoryUploader::new(self.storage, self.logger);
        let mut subdirs = Vec::with_capacity(self.config.subdirs.len());

        for subdir in &self.config.subdirs {
            let local_dir = product_dir.join(subdir);
            let status = if dir_exists(&local_dir) {
                SubdirStatus::Attempted(uploader.upload(&local_dir, bucket, subdir))
            } else {
                self.logger.normal(&format!(
                    "Directory does not exist: {} - skipping",
                    local_dir.display()
                ));
                SubdirStatus::Skipped
            };
            subdirs.push((subdir.clone(), status));
        }

        ProductReport {
            product: product.to_string(),
            bucket: Some(bucket.to_string()),
            subdirs,
        }
    }

    /// List buckets to prove the credentials work before touching any product.
    ///
    /// # Errors
    ///
    /// Returns `CredentialVerification` if listing fails.
    pub fn verify_credentials(&self) -> Result<Vec<String>> {
        self.logger
            .normal("Verifying credentials by listing buckets...");
        let buckets = self
            .storage
            .list_buckets()
            .map_err(MirrorError::CredentialVerification)?;
        self.logger
            .normal("Successfully authenticated. Found buckets:");
        for bucket in &buckets {
            self.logger.normal(&format!("- {bucket}"));
        }
        Ok(buckets)
    }

    /// Process every product in order, one at a time.
    ///
    /// # Errors
    ///
    /// Only the credential check can fail the run; per-product problems are
    /// logged and counted in the summary.
    pub fn run(&self, verify_credentials: bool) -> Result<RunSummary> {
        self.logger.normal("Starting upload process...");
        if verify_credentials {
            self.verify_credentials()?;
            self.logger.normal("\nProceeding with upload...");
        }

        let mut summary = RunSummary::default();
        for product in self.config.run_order() {
            let report = self.process_product(&product);
            self.logger.info(&format!(
                "{}: {} files uploaded",
                report.product,
                report.uploaded()
            ));
            summary.record(&report);
        }

        self.logger.normal(&format!(
            "\nUpload process completed: {} products, {} files uploaded, {} missing buckets, {} failed directories",
            summary.products, summary.files_uploaded, summary.buckets_missing, summary.failures
        ));
        Ok(summary)
    }
}
