pub mod movie;

pub use movie::{Actor, Movie};
