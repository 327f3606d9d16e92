mod errors;

pub use errors::{Error, RecordError};

pub type CatalogResult<T> = Result<T, Error>;
