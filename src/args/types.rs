use clap::Parser;
use std::path::PathBuf;

use super::validators::validate;
use crate::utils::path_utils::{check_readable_dir, check_readable_file, check_yaml_file};

pub const DEFAULT_SOURCE_ROOT: &str = "data-stores";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Mirror per-product directory trees into object storage buckets", long_about = None)]
pub struct Args {
    /// Root directory holding one subdirectory per product [default: data-stores]
    #[arg(short = 'p', long, value_name = "PATH", value_parser = check_readable_dir)]
    pub path: Option<PathBuf>,

    /// YAML file with the product-to-bucket table and subdirectories to mirror
    #[arg(short, long, value_name = "FILE", value_parser = check_yaml_file)]
    pub config: Option<PathBuf>,

    /// Only process these products (repeatable). Defaults to every configured product.
    #[arg(long)]
    pub product: Vec<String>,

    /// JSON key file with access_key_id and secret_access_key
    #[arg(long, value_name = "FILE", value_parser = check_readable_file)]
    pub key_file: Option<PathBuf>,

    /// Use the default credential chain (environment, shared profile) instead of a key file
    #[arg(long)]
    pub use_default_credentials: bool,

    /// List buckets before uploading to confirm the credentials work
    #[arg(long)]
    pub verify_credentials: bool,

    /// S3-compatible endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Region to sign requests for
    #[arg(long)]
    pub region: Option<String>,

    /// Log what would be uploaded without contacting storage
    #[arg(long)]
    pub dry_run: bool,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            path: None,
            config: None,
            product: Vec::new(),
            key_file: None,
            use_default_credentials: false,
            verify_credentials: false,
            endpoint: None,
            region: None,
            dry_run: false,
            verbose: 0,
        }
    }
}

impl Args {
    /// # Errors
    ///
    /// Returns an error if the arguments are inconsistent.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    /// Source root to mirror. Only an explicit `--path` must exist; a missing
    /// default root just means every product directory is skipped.
    pub fn source_root(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_ROOT))
    }

    /// Key-file runs always confirm credentials first
    pub fn should_verify_credentials(&self) -> bool {
        self.verify_credentials || (!self.use_default_credentials && !self.dry_run)
    }
}
