pub mod config_load;
pub mod config_types;

pub use config_load::{parse_hex_color, Config, ConfigError};
pub use config_types::{AnimationConfig, RenderConfig, StyleConfig, WindowConfig};
