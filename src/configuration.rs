use config::{Config, ConfigError, Environment, Map};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const PHOENIX_API_KEY: &str = "PHOENIX_API_KEY";
pub const OPENAI_API_URL: &str = "OPENAI_API_URL";
pub const PHOENIX_API_URL: &str = "PHOENIX_API_URL";

const UPSTREAM_VARIABLES: [&str; 4] =
    [OPENAI_API_KEY, PHOENIX_API_KEY, OPENAI_API_URL, PHOENIX_API_URL];

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 14200;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{0} is not set")]
    MissingVariable(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Credentials and endpoints of the completion backends.
///
/// They are required at startup but no handler consumes them yet.
#[derive(Clone, Debug)]
pub struct UpstreamSettings {
    pub openai_api_key: Secret<String>,
    pub openai_api_url: String,
    pub phoenix_api_key: Secret<String>,
    pub phoenix_api_url: String,
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    Settings::from_environment(None)
}

impl Settings {
    /// Reads settings from `source`, or from the process environment when `None`.
    ///
    /// Bind address overrides use the `APP_` prefix with `__` as nesting
    /// separator, e.g. `APP_APPLICATION__PORT=8001`.
    pub fn from_environment(
        source: Option<Map<String, String>>,
    ) -> Result<Self, ConfigurationError> {
        let raw = Config::builder()
            .set_default("application.host", DEFAULT_HOST)?
            .set_default("application.port", i64::from(DEFAULT_PORT))?
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source.clone()),
            )
            .add_source(Environment::default().source(Some(upstream_variables(source))))
            .build()?;

        let application = raw.get::<ApplicationSettings>("application")?;
        let upstream = UpstreamSettings {
            openai_api_key: Secret::new(required(&raw, OPENAI_API_KEY)?),
            phoenix_api_key: Secret::new(required(&raw, PHOENIX_API_KEY)?),
            openai_api_url: required(&raw, OPENAI_API_URL)?,
            phoenix_api_url: required(&raw, PHOENIX_API_URL)?,
        };

        Ok(Self {
            application,
            upstream,
        })
    }
}

// Only the exact, case-sensitive upstream names may reach the config tree,
// which lowercases every key it is given.
fn upstream_variables(source: Option<Map<String, String>>) -> Map<String, String> {
    match source {
        Some(source) => source
            .into_iter()
            .filter(|(key, _)| UPSTREAM_VARIABLES.contains(&key.as_str()))
            .collect(),
        None => UPSTREAM_VARIABLES
            .iter()
            .filter_map(|name| Some((name.to_string(), std::env::var(name).ok()?)))
            .collect(),
    }
}

// Environment keys are stored lowercased by the `config` crate.
fn required(raw: &Config, name: &'static str) -> Result<String, ConfigurationError> {
    match raw.get_string(&name.to_lowercase()) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(ConfigError::NotFound(_)) => Err(ConfigurationError::MissingVariable(name)),
        Err(e) => Err(e.into()),
    }
}
