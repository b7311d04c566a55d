use clap::Parser;

use rosterd::config::Config;
use rosterd::db::Store;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::parse();

    tracing::info!(db_path = %config.db_path.display(), "opening store");
    let store = match Store::open(config.store_config()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "failed to open store");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bind = %config.bind,
        row_limit = config.row_limit,
        "starting http server"
    );
    if let Err(e) = rosterd::http::serve(&config, store) {
        tracing::error!(error = %format!("{e:#}"), "server exited");
        std::process::exit(1);
    }
}
