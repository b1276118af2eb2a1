mod dir_checks;
mod expansion;
mod file_checks;

pub use dir_checks::{check_readable_dir, dir_exists};
pub use expansion::expand_tilde;
pub use file_checks::{check_readable_file, check_yaml_file};
