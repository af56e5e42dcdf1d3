// Entrypoint for the CLI application.
// - Keeps `main` small: set up diagnostics, create an API client and
//   hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling.

use fleamart_cli::{api::ApiClient, ui::main_menu};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go through tracing; `RUST_LOG` controls the filter.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    // Create an API client configured by environment variable `API_URL`
    // or default to http://127.0.0.1:9000. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}
