//! `cineweb` -- line-oriented console for the cinema back office.
//!
//! Registers movies, rooms and sessions and sells tickets against the
//! CineWeb REST backend. Tables and prompts go to stdout; logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable                       | Required | Default                 | Description                  |
//! |--------------------------------|----------|-------------------------|------------------------------|
//! | `CINEWEB_API_URL`              | no       | `http://localhost:3000` | Backend base URL             |
//! | `CINEWEB_REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout, seconds |
//! | `RUST_LOG`                     | no       | see below               | `tracing` filter directives  |

use std::io::{self, Write};
use std::sync::Arc;

use cineweb_client::{CinemaApi, ClientConfig};
use cineweb_console::app::App;
use cineweb_console::command::Command;
use cineweb_console::notifier::ConsoleNotifier;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PROMPT: &str = "cineweb> ";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cineweb_console=info,cineweb_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let api = CinemaApi::from_config(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });

    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout_secs,
        "Starting cineweb console",
    );

    let mut app = App::new(Arc::new(api), Arc::new(ConsoleNotifier));
    println!("CineWeb. Digite 'help' para ver os comandos.");

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }

        // Read one line at a time so confirmations can share stdin.
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => print!("{}", app.execute(command).await),
            Err(e) => println!("{e}"),
        }
    }

    tracing::info!("Console closed");
}
