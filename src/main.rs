use std::process::ExitCode;

use app::App;
use utilities::config::Config;
use utilities::logchamp;

mod apis;
mod app;
mod commands;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = logchamp::init() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            log::warn!("could not load .env: {err}");
        }
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let app = match App::new(config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("could not build the HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    app.run().await;

    ExitCode::SUCCESS
}
