mod cli;
mod commands;
mod render;

use defense_desk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
