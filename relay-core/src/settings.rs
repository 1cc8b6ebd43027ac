use crate::errors::RelayError;
use crate::models::{ProxyRequest, DEFAULT_ENDPOINT, DEFAULT_QUERY_URL};
use config::{Config, ConfigError, File};
use log::LevelFilter;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub const CONFIG_ENV: &str = "RELAY_PROBE_CONFIG";

#[derive(Clone, Debug, Deserialize)]
#[allow(unused)]
pub struct Settings {
    pub endpoint: String,
    pub query_url: String,
    pub proxy: Option<String>, // 出站代理，只作用于 https
    pub log_level: Option<String>,
}

/// Where the settings come from. A path named through `RELAY_PROBE_CONFIG`
/// must exist; the default `conf/Settings` may be absent.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSource {
    pub path: String,
    pub required: bool,
}

impl ConfigSource {
    pub fn locate() -> Result<ConfigSource, RelayError> {
        match env::var(CONFIG_ENV) {
            Ok(path) => Ok(ConfigSource { path, required: true }),
            Err(_) => {
                let mut current_dir = env::current_dir()
                    .map_err(|e| RelayError::new(format!("can't resolve working directory: {}", e)))?;
                current_dir.push("conf/Settings");
                Ok(ConfigSource {
                    path: current_dir.to_string_lossy().into_owned(),
                    required: false,
                })
            }
        }
    }
}

impl Settings {
    /// 文件可选时，不存在就直接用内置的两个地址
    pub fn new(path: &str, required: bool) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("query_url", DEFAULT_QUERY_URL)?
            .add_source(File::with_name(path).required(required))
            .build()?;

        s.try_deserialize()
    }

    pub fn load(source: &ConfigSource) -> Result<Self, RelayError> {
        Ok(Settings::new(&source.path, source.required)?)
    }

    pub fn request(&self) -> ProxyRequest {
        ProxyRequest::new(&self.endpoint, &self.query_url)
    }

    /// Unknown level names fall back to the logger default.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level).ok())
    }
}
