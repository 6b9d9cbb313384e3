pub mod search;
pub mod sequence;

pub use crate::domain::model::{CollatzResponse, SearchResult, WorkerReport};
pub use crate::domain::ports::LengthSource;
pub use crate::utils::error::Result;
