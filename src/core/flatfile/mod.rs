pub mod layout;
pub mod parser;
pub mod serializer;

pub use layout::{fit_width, is_storable_text};
pub use parser::*;
pub use serializer::*;
