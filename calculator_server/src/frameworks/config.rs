use serde::Deserialize;
use std::{
    fs,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

// Runtime/server settings (not projection math).

pub const CONFIG_PATH_VAR: &str = "CALCULATOR_CONFIG";
pub const HOST_VAR: &str = "CALCULATOR_HOST";
pub const PORT_VAR: &str = "CALCULATOR_PORT";
pub const MAX_HORIZON_VAR: &str = "CALCULATOR_MAX_HORIZON_YEARS";

const DEFAULT_PORT: u16 = 3536;
const DEFAULT_MAX_HORIZON_YEARS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    // Projection cost grows with years x periods; this caps a single request.
    pub max_horizon_years: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_horizon_years: DEFAULT_MAX_HORIZON_YEARS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("max_horizon_years must be at least 1")]
    ZeroHorizon,
}

impl ServerConfig {
    // Defaults, then the optional TOML file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        base.with_overrides(&lookup).validated()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn with_overrides(mut self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = parse_override(lookup, HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = parse_override(lookup, PORT_VAR) {
            self.port = port;
        }
        if let Some(max) = parse_override(lookup, MAX_HORIZON_VAR) {
            self.max_horizon_years = max;
        }
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.max_horizon_years == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        Ok(self)
    }
}

// Unparseable overrides are ignored so a typo cannot take the service down.
fn parse_override<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable config override");
            None
        }
    }
}
