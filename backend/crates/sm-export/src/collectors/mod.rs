pub mod configuration_collector;
pub mod content_collector;

pub use configuration_collector::ConfigurationCollector;
pub use content_collector::ContentCollector;
