use std::path::Path;

use crate::utils::{CatalogResult, Error};

/// Log to stderr so the catalog listing on stdout stays clean.
pub fn init_logging(config: &crate::config::Config) {
    tracing_subscriber::fmt()
        .with_max_level(config.logs.max_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Make sure the directory that will hold the catalog file exists.
pub fn ensure_storage_dir(config: &crate::config::Config) -> CatalogResult<()> {
    let Some(dir) = Path::new(&config.storage.path).parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    if dir.exists() {
        if !dir.is_dir() {
            return Err(Error::Other(format!(
                "Storage directory '{}' exists but is not a directory",
                dir.display()
            )));
        }
        return Ok(());
    }

    std::fs::create_dir_all(dir)?;
    tracing::info!("Created storage directory: '{}'", dir.display());
    Ok(())
}
