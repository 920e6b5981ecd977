pub mod config;

pub use config::{Backend, ConfigError, ConfigOverrides, ModeConfig, PixelizerConfig};
