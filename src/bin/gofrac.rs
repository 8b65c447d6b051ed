use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match gofrac::run_gui() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
