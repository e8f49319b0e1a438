mod cli;
mod infra;
mod report;
mod routes;
mod server;

use golf_scorecard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
