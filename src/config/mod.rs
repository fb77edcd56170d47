use crate::contact::{phone_digits, ContactLinks, ContactProfile, MessageTemplates};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

const APP_DIR: &str = "smarthome-landing";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Business contact details used for the outbound links
    #[serde(default)]
    pub contact: ContactProfile,

    /// Pre-filled WhatsApp and email text
    #[serde(default)]
    pub messages: MessageTemplates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_addr")]
    pub addr: String,

    /// SQLite database file, or `:memory:`
    pub database: Option<PathBuf>,
}

fn default_addr() -> String {
    crate::constants::server::DEFAULT_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            database: None,
        }
    }
}

/// Problems with configured contact details
///
/// These never stop the page from rendering; they are reported so an operator
/// can fix the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    PhoneHasNoDigits(String),
    InvalidEmail(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::PhoneHasNoDigits(phone) => {
                write!(f, "contact phone {:?} contains no digits; WhatsApp link will be broken", phone)
            }
            ConfigWarning::InvalidEmail(email) => {
                write!(f, "contact email {:?} does not look like an email address", email)
            }
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the user config directory if present
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join(APP_DIR).join("config.toml");
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if phone_digits(&self.contact.phone).is_empty() {
            warnings.push(ConfigWarning::PhoneHasNoDigits(self.contact.phone.clone()));
        }
        if !crate::validation::validate_email(&self.contact.email) {
            warnings.push(ConfigWarning::InvalidEmail(self.contact.email.clone()));
        }
        warnings
    }

    pub fn contact_links(&self) -> ContactLinks {
        ContactLinks::new(&self.contact, &self.messages)
    }

    /// Database location: CLI override, then config, then the user data directory
    pub fn database_path(&self, override_path: Option<&Path>) -> Option<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.server.database.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join("landing.sqlite")))
    }
}
