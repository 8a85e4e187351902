pub mod error;
pub mod extractors;
pub mod migration;
