use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Attributed exposes the named attributes a repository can filter on
pub trait Attributed {
    fn attribute(&self, name: &str) -> Option<&str>;
}

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

// ServeMode selects how the router is exposed to clients
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum ServeMode {
    Local,
    Lambda,
}

impl From<String> for ServeMode {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "lambda" => ServeMode::Lambda,
            _ => ServeMode::Local,
        }
    }
}

impl Display for ServeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServeMode::Local => write!(f, "local"),
            ServeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the bookstore service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub serve_mode: ServeMode,
    pub bind_addr: String,
    pub seed_path: Option<String>,
    pub log_level: String,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            serve_mode: ServeMode::Local,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed_path: None,
            log_level: "info".to_string(),
            store: RepositoryStore::InMemory,
        }
    }

    /// Builds the configuration from `BOOKSTORE_*` environment variables,
    /// falling back to the defaults of [`Configuration::new`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let branch = lookup("BOOKSTORE_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(mode) = lookup("BOOKSTORE_SERVE_MODE") {
            config.serve_mode = ServeMode::from(mode);
        }
        if let Some(addr) = lookup("BOOKSTORE_BIND_ADDR") {
            config.bind_addr = addr;
        }
        config.seed_path = lookup("BOOKSTORE_SEED_PATH").filter(|p| !p.is_empty());
        if let Some(level) = lookup("BOOKSTORE_LOG_LEVEL") {
            config.log_level = level;
        }
        config
    }
}
