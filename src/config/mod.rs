mod loader;
pub use loader::{Config, ConfigOverrides, DisplayConfig, GridConfig, MAX_DIMENSION, show_configuration};
