pub mod builder;
pub mod loader;
pub mod templates;
pub mod types;
pub mod validator;

pub use builder::ConsoleConfigBuilder;
pub use loader::{apply_env_overrides, ConfigLoader, DefaultConfigLoader};
pub use templates::{ensure_config_file_exists, generate_default_config_template};
pub use types::{ApiConfig, ConsoleConfig, LoginConfig, PaginationConfig};
pub use validator::ConfigValidatorImpl;
