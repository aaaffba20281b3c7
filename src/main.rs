use std::process::ExitCode;

fn main() -> ExitCode {
    match axis_range::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
