pub mod catalog;
pub mod config;
pub mod filters;
pub mod generation;
pub mod models;
pub mod storage;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use generation::{GeminiClient, GenerationClient, Source, Sourced};
