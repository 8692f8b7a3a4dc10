use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::formspark_client::FormsparkClient;
use crate::turnstile_client::TurnstileClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub turnstile: TurnstileSettings,
    pub formspark: FormsparkSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct TurnstileSettings {
    pub base_url: String,
    pub site_key: String,
    pub secret_key: SecretString,
}

impl TurnstileSettings {
    pub fn client(self) -> Result<TurnstileClient, anyhow::Error> {
        TurnstileClient::new(self.base_url, self.secret_key)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct FormsparkSettings {
    pub base_url: String,
    #[serde(default)]
    pub form_id: Option<SecretString>,
    pub source: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

impl FormsparkSettings {
    pub fn client(self) -> Result<FormsparkClient, anyhow::Error> {
        let timeout = self.timeout();
        let form_id = self.form_id();
        FormsparkClient::new(self.base_url, form_id, self.source, timeout)
    }

    /// The form id with empty values treated as missing.
    pub fn form_id(&self) -> Option<SecretString> {
        self.form_id
            .as_ref()
            .filter(|id| !id.expose_secret().trim().is_empty())
            .cloned()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine current directory: {e}"))
    })?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base")).required(true))
        .add_source(config::File::from(conf_dir.join(env.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
