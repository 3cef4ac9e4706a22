pub mod commands;
pub mod config;

pub use config::CliConfig;

use std::path::Path;

use anyhow::Result;

use obot_core::config::CoreConfig;

/// Effective core configuration for this invocation: flag over
/// environment over config file over the built-in default.
pub fn load_core_config(
    api_base_flag: Option<&str>,
    config_path: Option<&Path>,
) -> Result<CoreConfig> {
    let file = CliConfig::load_or_default(config_path)?;
    Ok(config::resolve_core_config(api_base_flag, &file))
}
