use std::{
    env,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use toml::{map::Map, Value};

pub const CONFIG_NAME: &str = "Config.toml";
pub const SECRETS_NAME: &str = "Secrets.toml";
/// `DATABASE_URL` value that selects the in-memory store.
pub const MEMORY_URL: &str = "memory";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    pub database: Database,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Server {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Database {
    pub name: String,
}

/// Directory holding `Config.toml` and `Secrets.toml`: `APP_CONFIG_DIR`,
/// else the working directory.
pub fn config_dir() -> PathBuf {
    env::var_os("APP_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `Config.toml` from `dir`, with environment overrides applied.
pub fn load_config(dir: &Path) -> anyhow::Result<Config> {
    override_from(read_config(dir)?, |key| env::var(key).ok())
}

fn read_config(dir: &Path) -> anyhow::Result<Config> {
    let path = dir.join(CONFIG_NAME);
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Config>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// `DATABASE_NAME` and `PORT` win over the file.
fn override_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    if let Some(name) = lookup("DATABASE_NAME") {
        config.database.name = name;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port =
            port.parse().context("PORT is not a valid port number")?;
    }

    Ok(config)
}

/// Secrets file contents; a missing file is an empty table.
pub fn load_env(dir: &Path) -> anyhow::Result<Map<String, Value>> {
    let path = dir.join(SECRETS_NAME);
    if !path.exists() {
        return Ok(Map::new());
    }

    let secrets = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {SECRETS_NAME}"))?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .with_context(|| format!("failed to parse {SECRETS_NAME}"))
}

pub fn database_url(secrets: &Map<String, Value>) -> anyhow::Result<String> {
    database_url_from(secrets, |key| env::var(key).ok())
}

fn database_url_from(
    secrets: &Map<String, Value>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<String> {
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    secrets
        .get("DATABASE_URL")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("DATABASE_URL was not found"))
}
