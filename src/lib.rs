pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{CliConfig, Command};
pub use core::search::{
    search, search_memoized, search_parallel, DirectLength, MemoizedLength,
};
pub use core::sequence::{sequence, sequence_length};
pub use domain::model::{CollatzResponse, SearchResult, WorkerReport};
pub use domain::ports::LengthSource;
pub use utils::error::{CollatzError, Result};
