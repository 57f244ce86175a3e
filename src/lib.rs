pub mod checker;
pub mod config;
pub mod extractor;
pub mod report;
pub mod version;
