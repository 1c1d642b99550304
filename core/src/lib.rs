pub mod cache;
pub mod dates;
pub mod error;
pub mod settings;
pub mod types;

pub use error::{SearchError, SearchResult};
