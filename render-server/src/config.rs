// Render server configuration (read from the environment)

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_JAR_PATH: &str = "plantuml.jar";
pub const DEFAULT_JAVA_BIN: &str = "java";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid RENDER_SERVER_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `RENDER_SERVER_ADDR`
    pub bind_addr: SocketAddr,

    /// `PLANTUML_JAVA`
    pub java_bin: PathBuf,

    /// `PLANTUML_JAR`
    pub jar_path: PathBuf,

    /// `RENDER_SERVER_LOG_DIR`; daily rolling log files are written here when set
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let addr = get("RENDER_SERVER_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            java_bin: get("PLANTUML_JAVA")
                .unwrap_or_else(|| DEFAULT_JAVA_BIN.to_string())
                .into(),
            jar_path: get("PLANTUML_JAR")
                .unwrap_or_else(|| DEFAULT_JAR_PATH.to_string())
                .into(),
            log_dir: get("RENDER_SERVER_LOG_DIR").map(PathBuf::from),
        })
    }
}
