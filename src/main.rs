use movie_catalog::app;
use movie_catalog::config::Config;
use movie_catalog::core::{CatalogStore, StoreOptions};

fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::init().expect("Failed to initialize configuration");
    app::init_logging(&config);
    if let Err(e) = app::ensure_storage_dir(&config) {
        tracing::error!("{e}");
        return;
    }

    let store = match CatalogStore::open(
        &config.storage.path,
        StoreOptions::from(&config.storage),
    ) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open catalog '{}': {e}", config.storage.path);
            return;
        }
    };

    print!("{}", app::render_listing(store.read_all()));
}
