pub mod flatfile;
pub mod fs;
pub mod store;

pub use store::{CatalogStore, StoreOptions};
