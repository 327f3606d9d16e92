pub mod common;
pub mod listing;

pub use common::{ensure_storage_dir, init_logging};
pub use listing::render_listing;
