mod common;

use std::fs;

use bucket_mirror::args::Args;
use bucket_mirror::errors::{ConfigError, MirrorError};
use bucket_mirror::utils::log_utils::Logger;
use bucket_mirror::{credential_source, error_lines, load_config, run_app};
use clap::Parser;
use common::write_file;
use tempfile::tempdir;

#[test]
fn parses_command_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().to_str().ok_or("non-UTF-8 temp dir")?;
    let args = Args::parse_from([
        "bucket-mirror",
        "-p",
        root,
        "--product",
        "looker",
        "--product",
        "omni",
        "--dry-run",
        "-vv",
    ]);

    assert_eq!(args.source_root(), dir.path());
    assert_eq!(args.product, vec!["looker", "omni"]);
    assert!(args.dry_run);
    assert_eq!(args.verbose, 2);
    assert!(args.validate().is_ok());
    assert!(!args.should_verify_credentials());

    let config = load_config(&args)?;
    assert_eq!(config.run_order(), vec!["looker", "omni"]);
    Ok(())
}

#[test]
fn missing_default_root_is_not_a_parse_error() {
    let args = Args::try_parse_from(["bucket-mirror", "--dry-run"]).unwrap();
    assert!(args.path.is_none());
    assert_eq!(args.source_root(), std::path::PathBuf::from("data-stores"));
}

#[test]
fn absent_source_root_skips_every_product() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let args = Args {
        path: Some(dir.path().join("data-stores")),
        dry_run: true,
        ..Default::default()
    };
    let summary = run_app(&args)?;
    assert_eq!(summary.products, 5);
    assert_eq!(summary.subdirs_skipped, 20);
    assert_eq!(summary.files_uploaded, 0);
    Ok(())
}

#[test]
fn credential_errors_print_once_with_a_hint() {
    let err = MirrorError::MissingKeyFile(std::path::PathBuf::from("/nope/key.json"));
    let lines = error_lines(&err);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error: Credential file not found at /nope/key.json"));
    assert!(lines[1].contains("BUCKET_MIRROR_CREDENTIALS"));

    let config_err = MirrorError::Config(ConfigError::NoProducts);
    assert_eq!(
        error_lines(&config_err),
        vec!["Error: Configuration error: Configuration defines no products".to_string()]
    );
}

#[test]
fn unreadable_source_root_is_rejected() {
    let result = Args::try_parse_from(["bucket-mirror", "-p", "/definitely/not/here"]);
    assert!(result.is_err());
}

#[test]
fn conflicting_credential_flags_fail_validation() {
    let dir = tempdir().unwrap();
    let key = dir.path().join("key.json");
    fs::write(&key, "{}").unwrap();

    let args = Args {
        path: Some(dir.path().to_path_buf()),
        key_file: Some(key),
        use_default_credentials: true,
        ..Default::default()
    };
    assert!(args.validate().unwrap_err().contains("--key-file"));
}

#[test]
fn yaml_config_replaces_the_built_in_table() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("mirror.yaml");
    fs::write(
        &config_path,
        "subdirs: [docs]\nproducts:\n  - name: test\n    bucket: bia-test\n  - name: extra\n    bucket: bia-extra\n",
    )?;

    let args = Args {
        path: Some(dir.path().to_path_buf()),
        config: Some(config_path),
        ..Default::default()
    };
    let config = load_config(&args)?;
    assert_eq!(config.source_root, dir.path());
    assert_eq!(config.subdirs, vec!["docs"]);
    assert_eq!(config.run_order(), vec!["test", "extra"]);
    assert_eq!(config.bucket_for("extra"), Some("bia-extra"));
    Ok(())
}

#[test]
fn empty_product_table_is_a_config_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("mirror.yaml");
    fs::write(&config_path, "products: []\n").unwrap();

    let args = Args {
        path: Some(dir.path().to_path_buf()),
        config: Some(config_path),
        ..Default::default()
    };
    assert!(matches!(
        load_config(&args),
        Err(MirrorError::Config(ConfigError::NoProducts))
    ));
}

#[test]
fn missing_key_file_stops_startup() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let args = Args {
        path: Some(dir.path().to_path_buf()),
        key_file: Some(missing.clone()),
        ..Default::default()
    };

    let err = credential_source(&args, &Logger::new(0)).unwrap_err();
    assert!(matches!(err, MirrorError::MissingKeyFile(p) if p == missing));

    // The whole run fails the same way, before any storage client exists
    assert!(matches!(run_app(&args), Err(MirrorError::MissingKeyFile(_))));
}

#[test]
fn dry_run_walks_the_whole_table() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_file(dir.path(), "bigquery/docs/intro.md");
    write_file(dir.path(), "looker/pdfs/guide.pdf");
    write_file(dir.path(), "looker/repo/views/orders.view.lkml");
    write_file(dir.path(), "looker/notes/ignored.txt");

    let args = Args {
        path: Some(dir.path().to_path_buf()),
        dry_run: true,
        ..Default::default()
    };
    let summary = run_app(&args)?;
    assert_eq!(summary.products, 5);
    assert_eq!(summary.files_uploaded, 3);
    assert_eq!(summary.failures, 0);
    Ok(())
}
