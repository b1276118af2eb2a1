use super::types::Args;

/// Validate option combinations clap cannot express
///
/// # Errors
///
/// Returns an error naming the conflicting or empty option.
pub fn validate(args: &Args) -> Result<(), String> {
    if args.key_file.is_some() && args.use_default_credentials {
        return Err("--key-file cannot be combined with --use-default-credentials".to_string());
    }
    if args.product.iter().any(|p| p.trim().is_empty()) {
        return Err("--product must not be empty".to_string());
    }
    if args.endpoint.as_deref().is_some_and(|e| e.trim().is_empty()) {
        return Err("--endpoint must not be empty".to_string());
    }
    Ok(())
}
