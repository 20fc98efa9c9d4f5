use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT: u64 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// a non-success status ends the submission before the body is treated as a result
    #[default]
    Strict,
    /// the body is always parsed as a result and its `error` field decides the outcome
    Lenient,
}

impl ResponseMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidUrl(String),
    InvalidMode(String),
    InvalidTimeout(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(value) => write!(f, "LOGO_GENERATOR_URL is not a valid URL: {value:?}"),
            Self::InvalidMode(value) => {
                write!(f, "LOGO_GENERATOR_MODE must be \"strict\" or \"lenient\", got {value:?}")
            }
            Self::InvalidTimeout(value) => {
                write!(f, "LOGO_GENERATOR_TIMEOUT must be a number of seconds, got {value:?}")
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub mode: ResponseMode,
    pub download_dir: PathBuf,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("LOGO_GENERATOR_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or(ConfigError::InvalidUrl(base_url))?;

        let mode = match lookup("LOGO_GENERATOR_MODE") {
            Some(mode) => ResponseMode::parse(&mode).ok_or(ConfigError::InvalidMode(mode))?,
            None => ResponseMode::default(),
        };

        let timeout = match lookup("LOGO_GENERATOR_TIMEOUT") {
            Some(timeout) => timeout
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(timeout))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT),
        };

        let download_dir =
            lookup("LOGO_GENERATOR_DOWNLOAD_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);

        log::debug!("backend {base_url} in {mode} mode, timeout {}s", timeout.as_secs());

        Ok(Self {
            base_url,
            mode,
            download_dir,
            timeout,
            user_agent: lookup("USER_AGENT").filter(|user_agent| !user_agent.is_empty()),
        })
    }

    /// the `/generate` endpoint, resolved against the base URL path
    pub fn generate_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/generate", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }
}
