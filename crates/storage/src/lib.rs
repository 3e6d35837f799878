#![forbid(unsafe_code)]

pub mod builder;
pub mod repository;
pub mod source;

pub use repository::{DatasetSource, InMemorySource, Storage, StorageError};
pub use source::{DataLocation, FileSource, HttpSource};
