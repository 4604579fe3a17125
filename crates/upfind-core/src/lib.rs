pub mod error;
pub mod path;
pub mod search;

pub use error::LocateError;
pub use search::{locate, SearchConfig};
