use bucket_mirror::{args, error_lines, run_app};

fn main() {
    let args = args::args_checks();

    if let Err(e) = run_app(&args) {
        for line in error_lines(&e) {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}
