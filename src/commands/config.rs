//! Configuration commands for managing groupdeck settings.
//!
//! - `config get`: Print a configuration value
//! - `config set`: Set a configuration value
//! - `config path`: Print the config file location

use crate::config::Config;
use crate::error::{GroupdeckError, Result};
use crate::types::PAGE_SIZE_CHOICES;

const VALID_KEYS: &str = "server_url, page_size, timeout_seconds";

/// Print a configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;

    match key {
        "server_url" => println!("{}", config.server_url()),
        "page_size" => println!("{}", config.page_size()),
        "timeout_seconds" => println!("{}", config.timeout_seconds),
        _ => {
            return Err(GroupdeckError::Config(format!(
                "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
            )));
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "server_url" => {
            config.set_server_url(value.to_string());
        }
        "page_size" => {
            let size = value.parse::<usize>().map_err(|_| {
                GroupdeckError::Config(format!("invalid page size '{value}'. Expected a number"))
            })?;
            if !PAGE_SIZE_CHOICES.contains(&size) {
                return Err(GroupdeckError::Config(format!(
                    "invalid page size {size}. Valid sizes: {}",
                    PAGE_SIZE_CHOICES
                        .iter()
                        .map(|choice| choice.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
            config.set_page_size(size);
        }
        "timeout_seconds" => {
            let seconds = value.parse::<u64>().map_err(|_| {
                GroupdeckError::Config(format!(
                    "invalid timeout '{value}'. Expected a number of seconds"
                ))
            })?;
            config.set_timeout_seconds(seconds);
        }
        _ => {
            return Err(GroupdeckError::Config(format!(
                "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
            )));
        }
    }

    config.save()?;
    println!("Set {} to {}", key, value);
    Ok(())
}

/// Print the path of the config file
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
