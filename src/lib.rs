pub mod args;
pub mod config;
pub mod credentials;
pub mod driver;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod uploader;
pub mod utils {
    pub mod log_utils;
    pub mod path_utils;
}

pub use args::Args;

use config::MirrorConfig;
use credentials::{CREDENTIALS_ENV_VAR, CREDENTIALS_HINT, CredentialSource};
use driver::{ProductDriver, RunSummary};
use errors::{MirrorError, Result};
use interfaces::StorageClient;
use storage::{DryRunStorage, S3Config, S3StorageClient};
use utils::log_utils::Logger;

/// Build the mirror configuration from the command line
///
/// # Errors
///
/// Returns an error if the YAML config cannot be loaded or fails validation.
pub fn load_config(args: &Args) -> Result<MirrorConfig> {
    let source_root = args.source_root();
    let config = match &args.config {
        Some(path) => MirrorConfig::from_yaml_file(path, &source_root)?,
        None => MirrorConfig::default_for(source_root),
    };
    Ok(config.select(&args.product))
}

/// Resolve credentials as requested on the command line.
///
/// # Errors
///
/// Returns `MissingKeyFile` when key-file mode is selected and no file exists.
pub fn credential_source(args: &Args, logger: &Logger) -> Result<CredentialSource> {
    if args.use_default_credentials {
        return Ok(CredentialSource::DefaultChain);
    }
    let source = CredentialSource::key_file(
        args.key_file.as_deref(),
        std::env::var(CREDENTIALS_ENV_VAR).ok(),
    )?;
    logger.normal(&format!("Using {}", source.describe()));
    Ok(source)
}

/// Lines `main` prints for a fatal error: the error itself, then a hint for credential problems
pub fn error_lines(e: &MirrorError) -> Vec<String> {
    let mut lines = vec![format!("Error: {e}")];
    if matches!(
        e,
        MirrorError::MissingKeyFile(_) | MirrorError::CredentialVerification(_)
    ) {
        lines.push(CREDENTIALS_HINT.to_string());
    }
    lines
}

/// Run a full mirror pass against whatever storage the arguments select
///
/// # Errors
///
/// Returns an error for configuration problems, a missing key file, client
/// construction failures, or a failed credential check.
pub fn run_app(args: &Args) -> Result<RunSummary> {
    let logger = Logger::new(args.verbose);
    let config = load_config(args)?;
    logger.info(&format!(
        "Mirroring {} into {} buckets",
        config.source_root.display(),
        config.products.len()
    ));

    if args.dry_run {
        let buckets = config.products.iter().map(|p| p.bucket.clone()).collect();
        let storage = DryRunStorage::new(buckets, logger);
        return drive(&config, &storage, logger, args.verify_credentials);
    }

    let mut s3_config = S3Config::new(credential_source(args, &logger)?);
    if let Some(endpoint) = &args.endpoint {
        s3_config.endpoint = endpoint.clone();
    }
    if let Some(region) = &args.region {
        s3_config.region = region.clone();
    }
    let storage = S3StorageClient::new(s3_config, logger)?;
    drive(&config, &storage, logger, args.should_verify_credentials())
}

fn drive<S: StorageClient>(
    config: &MirrorConfig,
    storage: &S,
    logger: Logger,
    verify_credentials: bool,
) -> Result<RunSummary> {
    ProductDriver::new(config, storage, logger).run(verify_credentials)
}
