mod browse;
mod cli;
mod infra;
mod screen;

use entry_board::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
