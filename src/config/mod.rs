//! Configuration loading and validation

mod loader;

pub use loader::{
    load_config, load_token_addresses, Config, ConfigError, LoggingSection, OutputSection,
    PipelineSection, SourceSection,
};
