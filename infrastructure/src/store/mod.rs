//! Profile store adapters

mod json_file;
mod memory;

pub use json_file::JsonFileProfileStore;
pub use memory::InMemoryProfileStore;
