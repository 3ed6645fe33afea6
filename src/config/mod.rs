pub mod app_config;
pub mod cli;
pub mod error;
pub mod validation;

pub use app_config::{load_config, open_output, setup_client};
pub use cli::Cli;
pub use error::ConfigError;
pub use validation::Target;
