#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;

pub use scoring::{ScoreTier, percentage};
