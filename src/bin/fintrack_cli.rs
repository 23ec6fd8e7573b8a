use std::process::ExitCode;

fn main() -> ExitCode {
    fintrack::init();
    match fintrack::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "shell terminated");
            eprintln!("fintrack: {err}");
            ExitCode::FAILURE
        }
    }
}
