use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Demo-facing settings. Every value has a default so the crate runs with
/// no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub marketplace_name: String,
    pub freelancer_name: String,
    pub institution_name: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            marketplace_name: get_env_or("MARKETPLACE_NAME", "LinkWork"),
            freelancer_name: get_env_or("FREELANCER_DISPLAY_NAME", "John Doe"),
            institution_name: get_env_or("INSTITUTION_DISPLAY_NAME", "TechCorp Inc."),
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
