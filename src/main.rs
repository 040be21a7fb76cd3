//! formcheck - Entry Point
//!
//! Interactive login and sign-up form validation over stdin/stdout.

use log::info;
use tokio::io::BufReader;

use formcheck::config::FrontendConfig;
use formcheck::error::FrontendError;
use formcheck::error::handlers::{exit_code, handle_error};
use formcheck::frontend::run_session;
use formcheck::utils::logging::setup_logging;

#[tokio::main]
async fn main() {
    let config = match FrontendConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let e = FrontendError::from(e);
            // Logging is configured from this file, so report directly
            eprintln!("{}", e);
            std::process::exit(exit_code(&e));
        }
    };

    setup_logging(&config.log_level);
    info!("Starting formcheck front end...");

    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();

    match run_session(reader, &mut writer, &config).await {
        Ok(summary) => info!("Exiting after {} submission(s)", summary.submissions),
        Err(e) => {
            handle_error(&e);
            std::process::exit(exit_code(&e));
        }
    }
}
